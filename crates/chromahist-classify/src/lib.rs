//! Chromahist Classify - Histogram-based color classification
//!
//! Register reference images as models and score new images against
//! them by comparing color histograms:
//!
//! - [`HistogramColorClassifier`]: the model store and its queries
//! - [`ClassifierConfig`]: color mode, channels, bins, ranges, norm (JSON loadable)
//! - [`CompareMethod`]: intersection or correlation
//!
//! ```
//! use chromahist_classify::{ClassifierConfig, CompareMethod, HistogramColorClassifier};
//! use chromahist_core::Raster;
//!
//! let mut classifier = HistogramColorClassifier::new(ClassifierConfig::hsv(18, 4))?;
//! classifier.add_model_histogram(&Raster::filled_rgb(8, 8, 250, 10, 10)?)?;
//! classifier.add_model_histogram(&Raster::filled_rgb(8, 8, 10, 250, 10)?)?;
//!
//! let query = Raster::filled_rgb(8, 8, 200, 30, 20)?;
//! let dist = classifier.compare_to_models_as_distribution(&query, CompareMethod::Intersection)?;
//! assert!(dist[0] > dist[1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod method;

// Re-export lower crates
pub use chromahist_color;
pub use chromahist_core;
pub use chromahist_hist;

pub use classifier::HistogramColorClassifier;
pub use config::ClassifierConfig;
pub use error::{ClassifyError, ClassifyResult};
pub use method::CompareMethod;

// Re-export the types that appear in the classifier's API
pub use chromahist_color::ColorMode;
pub use chromahist_hist::{Histogram, Normalization};
