//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic raster
    #[error("failed to build synthetic raster '{name}': {source}")]
    Raster {
        name: &'static str,
        #[source]
        source: chromahist_core::Error,
    },

    /// Generator parameters are unusable
    #[error("invalid generator parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
