pub mod intersect_2d;
pub mod segment_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons
/// (degenerate denominators, bounding-box inclusion, duplicate points).
pub const TOLERANCE: f64 = 1e-10;

/// Absolute tolerance for the summed-distance point-on-segment test.
pub const ON_SEGMENT_EPSILON: f64 = 1e-11;

/// Distance below which an extension hit is treated as a degenerate
/// self-detection of the endpoint being extended, and suppressed.
pub const NEAR_COINCIDENT_EPSILON: f64 = 1e-7;
