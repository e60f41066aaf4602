use std::path::Path;

use crate::error::{LoaderError, Result};
use crate::island::Island;
use crate::math::Point2;

/// Loads an island from a text file.
///
/// The format is a leading vertex count followed by whitespace-separated
/// integer x/y coordinate pairs.
///
/// # Errors
///
/// Returns a [`LoaderError`] for I/O failures or malformed input, and an
/// island construction error for fewer than 3 vertices.
pub fn load_island(path: &Path) -> Result<Island> {
    let text = std::fs::read_to_string(path).map_err(LoaderError::Io)?;
    parse_island(&text)
}

/// Parses an island from the text format accepted by [`load_island`].
///
/// # Errors
///
/// Returns a [`LoaderError`] for malformed input.
pub fn parse_island(text: &str) -> Result<Island> {
    let mut tokens = text.split_whitespace();

    let expected: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(LoaderError::InvalidVertexCount)?;

    let mut coords = Vec::new();
    for token in tokens {
        let value: i32 = token
            .parse()
            .map_err(|_| LoaderError::InvalidCoordinate(token.to_string()))?;
        coords.push(f64::from(value));
    }

    if coords.len() != expected * 2 {
        return Err(LoaderError::VertexCountMismatch {
            expected,
            found: coords.len() / 2,
        }
        .into());
    }

    let vertices = coords
        .chunks_exact(2)
        .map(|pair| Point2::new(pair[0], pair[1]))
        .collect();
    Island::new(vertices)
}
