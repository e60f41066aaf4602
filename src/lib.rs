pub mod error;
pub mod island;
pub mod loader;
pub mod math;
pub mod render;
pub mod runway;

pub use error::{AirstripError, Result};
pub use island::Island;
pub use math::segment_2d::Segment;
