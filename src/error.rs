//! Error types for board and region operations.
//!
//! Both kinds are caller contract violations. They are returned before any
//! cell is written, so a failed call leaves the board untouched.

/// Errors raised by region validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Region data is not a rectangular 0/1 grid, or does not fit the board.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Coordinates are out of range or inconsistently ordered.
    #[error("invalid coordinates: {0}")]
    InvalidCoord(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
