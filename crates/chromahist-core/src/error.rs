//! Error types for chromahist-core
//!
//! Provides a unified error type for raster construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// chromahist-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Samples per pixel outside the supported set (1 or 3)
    #[error("invalid samples per pixel: {0} (expected 1 or 3)")]
    InvalidSpp(u32),

    /// Sample buffer does not match width * height * spp
    #[error("buffer size mismatch: expected {expected} samples, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Channel index not present in the raster
    #[error("channel {channel} out of range for raster with {spp} samples per pixel")]
    ChannelOutOfRange { channel: usize, spp: u32 },

    /// Pixel coordinate outside the raster
    #[error("pixel ({x}, {y}) outside {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for chromahist-core operations
pub type Result<T> = std::result::Result<T, Error>;
