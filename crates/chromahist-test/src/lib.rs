//! chromahist-test - Regression test framework for chromahist
//!
//! This crate provides numbered regression checks and the synthetic
//! rasters the regression tests run on:
//!
//! - [`RegParams`]: counts checks, records failures, reports at cleanup
//! - Raster generators: [`solid_rgb`], [`solid_gray`], [`horizontal_gradient`],
//!   [`checkerboard`], [`two_tone`]
//!
//! # Usage
//!
//! ```ignore
//! use chromahist_test::{RegParams, solid_rgb};
//!
//! let mut rp = RegParams::new("classifier");
//! let red = solid_rgb(16, 16, 255, 0, 0).unwrap();
//! rp.compare_values(1.0, score, 1e-6);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every check

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use chromahist_core::Raster;

/// Build a raster of a single RGB color
pub fn solid_rgb(width: u32, height: u32, r: u8, g: u8, b: u8) -> TestResult<Raster> {
    Raster::filled_rgb(width, height, r, g, b).map_err(|source| TestError::Raster {
        name: "solid_rgb",
        source,
    })
}

/// Build a grayscale raster of a single value
pub fn solid_gray(width: u32, height: u32, value: u8) -> TestResult<Raster> {
    Raster::filled_gray(width, height, value).map_err(|source| TestError::Raster {
        name: "solid_gray",
        source,
    })
}

/// Build an RGB raster ramping from `from` at the left edge to `to` at
/// the right edge
pub fn horizontal_gradient(
    width: u32,
    height: u32,
    from: (u8, u8, u8),
    to: (u8, u8, u8),
) -> TestResult<Raster> {
    let lerp = |a: u8, b: u8, t: f32| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for _ in 0..height {
        for x in 0..width {
            let t = if width > 1 {
                x as f32 / (width - 1) as f32
            } else {
                0.0
            };
            data.extend_from_slice(&[
                lerp(from.0, to.0, t),
                lerp(from.1, to.1, t),
                lerp(from.2, to.2, t),
            ]);
        }
    }
    Raster::from_vec(width, height, 3, data).map_err(|source| TestError::Raster {
        name: "horizontal_gradient",
        source,
    })
}

/// Build an RGB checkerboard alternating `a` and `b` in square cells
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    a: (u8, u8, u8),
    b: (u8, u8, u8),
) -> TestResult<Raster> {
    if cell == 0 {
        return Err(TestError::InvalidParameters(
            "checkerboard cell size must be > 0".to_string(),
        ));
    }
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let (r, g, bl) = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
            data.extend_from_slice(&[r, g, bl]);
        }
    }
    Raster::from_vec(width, height, 3, data).map_err(|source| TestError::Raster {
        name: "checkerboard",
        source,
    })
}

/// Build an RGB raster whose left `fraction` of columns is `left` and the
/// rest `right`
pub fn two_tone(
    width: u32,
    height: u32,
    fraction: f32,
    left: (u8, u8, u8),
    right: (u8, u8, u8),
) -> TestResult<Raster> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(TestError::InvalidParameters(format!(
            "fraction {fraction} outside [0, 1]"
        )));
    }
    let split = (width as f32 * fraction).round() as u32;
    let base = solid_rgb(width, height, right.0, right.1, right.2)?;
    let mut rm = base.to_mut();
    rm.fill_rect(0, 0, split, height, &[left.0, left.1, left.2])
        .map_err(|source| TestError::Raster {
            name: "two_tone",
            source,
        })?;
    Ok(rm.into())
}
