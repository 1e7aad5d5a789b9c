//! Chromahist Color - Color space conversion ahead of histogram extraction
//!
//! This crate provides the conversions a classifier applies to a raster
//! before binning it:
//!
//! - **Color modes** ([`ColorMode`]): raw, HSV, grayscale
//! - **Pixel-level conversion**: [`rgb_to_hsv`], [`hsv_to_rgb`], [`rgb_to_gray`]
//! - **Raster-level conversion**: [`convert_color_space`] and friends

pub mod colorspace;
pub mod error;

// Re-export core types
pub use chromahist_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    ColorMode,
    HUE_MAX,
    Hsv,
    // Raster-level conversions
    convert_color_space,
    // Pixel-level conversions
    hsv_to_rgb,
    raster_hsv_to_rgb,
    raster_rgb_to_hsv,
    raster_to_gray,
    rgb_to_gray,
    rgb_to_hsv,
};
