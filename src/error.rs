//! Error types for docpane.
//!
//! The rendering core itself has no failure surface: absent rows are `None`
//! and degenerate geometry is guarded. The only fallible operation is view
//! configuration.

use std::fmt;

/// Result type alias for docpane operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for docpane operations.
#[derive(Debug)]
pub enum Error {
    /// Tab size must be at least one character.
    InvalidTabSize(u8),
    /// Horizontal scroll granularity must be a positive finite number.
    InvalidGranularity(f32),
    /// Caret stroke width must be a positive finite number.
    InvalidCaretWidth(f32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTabSize(n) => write!(f, "invalid tab size: {n}"),
            Self::InvalidGranularity(g) => {
                write!(f, "invalid horizontal scroll granularity: {g}")
            }
            Self::InvalidCaretWidth(w) => write!(f, "invalid caret stroke width: {w}"),
        }
    }
}

impl std::error::Error for Error {}
