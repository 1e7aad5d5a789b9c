//! Chromahist Hist - Color histograms and histogram similarity
//!
//! This crate provides the histogram primitives the classifier is built on:
//!
//! - **Extraction** ([`histogram`]): joint histograms over selected raster
//!   channels with uniform bins
//! - **Normalization** ([`normalize`]): L1, L2 and max-norm scaling
//! - **Comparison** ([`compare`]): intersection and correlation

pub mod compare;
pub mod error;
pub mod histogram;
pub mod normalize;

// Re-export core types
pub use chromahist_core;

pub use compare::{Metric, compare, compare_slices};
pub use error::{HistError, HistResult};
pub use histogram::{Histogram, HistogramSpec, compute_histogram};
pub use normalize::{Normalization, normalize, normalize_in_place};
