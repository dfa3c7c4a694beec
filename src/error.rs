use thiserror::Error;

/// Failures raised by the simulation core.
///
/// Collisions and eaten food are ordinary game events and never show up here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnakeError {
    #[error("snake body was queried before it had a head segment")]
    EmptyBody,
    #[error("no free cell left for food on a {grid_size}x{grid_size} grid ({occupied} cells occupied)")]
    FoodPlacementExhausted { grid_size: i64, occupied: usize },
    #[error("grid size {size} is out of range, must be between {min} and {max}")]
    InvalidGridSize { size: i64, min: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, SnakeError>;
