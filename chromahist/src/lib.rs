//! Chromahist - Histogram-based color classification
//!
//! Register reference images as color-histogram models, then score new
//! images against them with histogram intersection or correlation.
//!
//! # Overview
//!
//! - Raster container with `image` crate interop ([`Raster`])
//! - Color space conversion: raw, HSV, grayscale ([`color`])
//! - Joint color histograms, normalization, metrics ([`hist`])
//! - The model store and its queries ([`HistogramColorClassifier`])
//!
//! # Example
//!
//! ```
//! use chromahist::{ClassifierConfig, CompareMethod, HistogramColorClassifier, Raster};
//!
//! let mut classifier = HistogramColorClassifier::new(ClassifierConfig::rgb(10)).unwrap();
//! classifier.add_model_histogram(&Raster::filled_rgb(16, 16, 255, 0, 0).unwrap()).unwrap();
//! classifier.add_model_histogram(&Raster::filled_rgb(16, 16, 0, 0, 255).unwrap()).unwrap();
//!
//! let red = Raster::filled_rgb(4, 4, 255, 0, 0).unwrap();
//! assert_eq!(classifier.best_match_index(&red, CompareMethod::Intersection).unwrap(), 0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use chromahist_core::*;

// Re-export the classifier API at the top level
pub use chromahist_classify::{
    ClassifierConfig, ClassifyError, ClassifyResult, CompareMethod, HistogramColorClassifier,
};

// Re-export domain crates as modules to avoid name conflicts
pub use chromahist_classify as classify;
pub use chromahist_color as color;
pub use chromahist_hist as hist;
