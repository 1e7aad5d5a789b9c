//! Error types for chromahist-hist

use thiserror::Error;

/// Errors that can occur while building or comparing histograms
#[derive(Debug, Error)]
pub enum HistError {
    /// Core library error (e.g. channel out of range)
    #[error("core error: {0}")]
    Core(#[from] chromahist_core::Error),

    /// Channel, bin and range lists have different lengths
    #[error("histogram shape mismatch: {channels} channels, {bins} bin sizes, {ranges} ranges")]
    ShapeMismatch {
        channels: usize,
        bins: usize,
        ranges: usize,
    },

    /// No channels selected
    #[error("histogram needs at least one channel")]
    NoChannels,

    /// A channel was given zero bins
    #[error("channel {channel} has zero bins")]
    ZeroBins { channel: usize },

    /// A value range is empty or not finite
    #[error("invalid value range for channel {channel}: [{min}, {max})")]
    InvalidRange { channel: usize, min: f32, max: f32 },

    /// Product of bin sizes overflows
    #[error("too many bins: product of bin sizes overflows")]
    TooManyBins,

    /// Histograms of different lengths cannot be compared
    #[error("histogram length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Result type for histogram operations
pub type HistResult<T> = Result<T, HistError>;
