//! Error types for chromahist-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromahist_core::Error),

    /// Raster has the wrong number of samples per pixel for this conversion
    #[error("unsupported channel count: expected {expected}, got {actual}")]
    UnsupportedChannels { expected: &'static str, actual: u32 },

    /// Unknown color mode name
    #[error("unknown color mode: {0}")]
    UnknownColorMode(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
