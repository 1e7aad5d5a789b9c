//! Error types for chromahist-classify

use chromahist_color::ColorError;
use chromahist_hist::HistError;
use thiserror::Error;

/// Errors that can occur while configuring or querying a classifier
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Comparison method name not recognized
    #[error("comparison method '{0}' is not supported (expected \"intersection\" or \"correlation\")")]
    UnsupportedMethod(String),

    /// Query that needs at least one registered model
    #[error("no model histograms registered")]
    EmptyModelStore,

    /// Arrays that must have equal lengths do not
    #[error("{what} length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No score is positive, so no distribution exists
    #[error("no positive comparison score; cannot build a distribution")]
    ZeroScoreSum,

    /// Configuration values are unusable
    #[error("invalid classifier configuration: {0}")]
    InvalidConfig(String),

    /// Color conversion failed
    #[error("color error: {0}")]
    Color(#[from] ColorError),

    /// Histogram extraction failed
    #[error("histogram error: {0}")]
    Hist(#[from] HistError),

    /// Configuration could not be parsed or written
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for classifier operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;
