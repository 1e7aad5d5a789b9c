//! Chromahist Core - The raster type shared by the classifier crates
//!
//! This crate provides the fundamental data structures used throughout
//! the chromahist workspace:
//!
//! - [`Raster`] / [`RasterMut`] - The in-memory image container (immutable / mutable)
//! - [`Error`] / [`Result`] - Errors raised while building or reading rasters
//!
//! Rasters can be built directly from sample buffers or converted from
//! `image` crate buffers (`RgbImage`, `GrayImage`, `DynamicImage`).

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, RasterMut};

/// Channel indices for 3-sample RGB rasters.
pub mod channel {
    /// Red channel
    pub const RED: usize = 0;
    /// Green channel
    pub const GREEN: usize = 1;
    /// Blue channel
    pub const BLUE: usize = 2;

    /// Hue channel of an HSV raster
    pub const HUE: usize = 0;
    /// Saturation channel of an HSV raster
    pub const SATURATION: usize = 1;
    /// Value channel of an HSV raster
    pub const VALUE: usize = 2;

    /// The only channel of a grayscale raster
    pub const GRAY: usize = 0;
}
