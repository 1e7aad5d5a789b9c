//! Color space conversion
//!
//! Provides the conversions applied to a raster before its histogram is
//! taken:
//! - RGB -> HSV (8-bit: hue in [0, 180), saturation and value in [0, 255])
//! - RGB -> Grayscale (ITU-R BT.601 luma)
//!
//! Hue is stored as degrees / 2 so that a full turn fits in a byte.
//! Histograms over HSV rasters therefore use `(0, 180)` as the hue range.

use crate::{ColorError, ColorResult};
use chromahist_core::Raster;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exclusive upper bound of the 8-bit hue channel.
pub const HUE_MAX: u8 = 180;

/// Pre-histogram color space conversion
///
/// 3-sample rasters are always read as R, G, B; buffers in another channel
/// order must be reordered before conversion. Configuration files accept
/// the same names as [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorMode {
    /// Histogram the raster as given
    #[default]
    Raw,
    /// Convert RGB to 8-bit HSV first
    Hsv,
    /// Convert RGB to single-channel luma first
    Grayscale,
}

impl ColorMode {
    /// Number of samples per pixel the converted raster has, given the
    /// input's.
    pub fn output_spp(self, input_spp: u32) -> u32 {
        match self {
            ColorMode::Raw => input_spp,
            ColorMode::Hsv => 3,
            ColorMode::Grayscale => 1,
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Raw => "raw",
            ColorMode::Hsv => "hsv",
            ColorMode::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ColorError;

    /// Accepts the lowercase names plus the aliases `rgb` and `gray`,
    /// case-insensitively.
    fn from_str(s: &str) -> ColorResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "rgb" => Ok(ColorMode::Raw),
            "hsv" => Ok(ColorMode::Hsv),
            "gray" | "grey" | "grayscale" | "greyscale" => Ok(ColorMode::Grayscale),
            _ => Err(ColorError::UnknownColorMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for ColorMode {
    type Error = ColorError;

    fn try_from(s: String) -> ColorResult<Self> {
        s.parse()
    }
}

impl From<ColorMode> for String {
    fn from(mode: ColorMode) -> Self {
        mode.as_str().to_string()
    }
}

/// 8-bit HSV color
///
/// - `h`: hue in [0, 180), degrees / 2 (0 red, 60 green, 120 blue)
/// - `s`: saturation in [0, 255]
/// - `v`: value in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Convert RGB to grayscale using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    luma.round().min(255.0) as u8
}

/// Convert RGB values to 8-bit HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f32;
    let gf = g as f32;
    let bf = b as f32;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max as u8;
    if delta == 0.0 {
        return Hsv { h: 0, s: 0, v };
    }

    let s = (255.0 * delta / max).round() as u8;
    let degrees = if rf == max {
        60.0 * (gf - bf) / delta
    } else if gf == max {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    let degrees = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };

    let mut h = (degrees / 2.0).round() as u32;
    if h >= HUE_MAX as u32 {
        h -= HUE_MAX as u32;
    }

    Hsv { h: h as u8, s, v }
}

/// Convert 8-bit HSV back to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv { h, s, v } = hsv;
    if s == 0 {
        return (v, v, v);
    }

    let h = if h >= HUE_MAX { 0 } else { h };
    let sector_pos = (h as f32 * 2.0) / 60.0;
    let sector = sector_pos as i32;
    let f = sector_pos - sector as f32;
    let sf = s as f32 / 255.0;
    let vf = v as f32;
    let p = (vf * (1.0 - sf)).round() as u8;
    let q = (vf * (1.0 - sf * f)).round() as u8;
    let t = (vf * (1.0 - sf * (1.0 - f))).round() as u8;

    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert a raster to the color space selected by `mode`.
///
/// - [`ColorMode::Raw`] returns a shared clone of the input.
/// - [`ColorMode::Hsv`] requires an RGB raster.
/// - [`ColorMode::Grayscale`] converts RGB to luma; grayscale input is
///   returned unchanged.
///
/// # Errors
///
/// Returns [`ColorError::UnsupportedChannels`] for HSV conversion of a
/// single-channel raster.
pub fn convert_color_space(raster: &Raster, mode: ColorMode) -> ColorResult<Raster> {
    tracing::trace!(
        mode = %mode,
        width = raster.width(),
        height = raster.height(),
        spp = raster.spp(),
        "converting color space"
    );
    match mode {
        ColorMode::Raw => Ok(raster.clone()),
        ColorMode::Hsv => raster_rgb_to_hsv(raster),
        ColorMode::Grayscale => raster_to_gray(raster),
    }
}

/// Convert an RGB raster to HSV representation
///
/// The resulting raster stores H, S, V in channels 0, 1, 2.
pub fn raster_rgb_to_hsv(raster: &Raster) -> ColorResult<Raster> {
    if !raster.is_rgb() {
        return Err(ColorError::UnsupportedChannels {
            expected: "3 (RGB)",
            actual: raster.spp(),
        });
    }
    Ok(raster.map_pixels(3, |src, dst| {
        let hsv = rgb_to_hsv(src[0], src[1], src[2]);
        dst.copy_from_slice(&[hsv.h, hsv.s, hsv.v]);
    })?)
}

/// Convert an HSV raster back to RGB
pub fn raster_hsv_to_rgb(raster: &Raster) -> ColorResult<Raster> {
    if !raster.is_rgb() {
        return Err(ColorError::UnsupportedChannels {
            expected: "3 (HSV)",
            actual: raster.spp(),
        });
    }
    Ok(raster.map_pixels(3, |src, dst| {
        let (r, g, b) = hsv_to_rgb(Hsv::new(src[0], src[1], src[2]));
        dst.copy_from_slice(&[r, g, b]);
    })?)
}

/// Convert a raster to 8-bit grayscale
pub fn raster_to_gray(raster: &Raster) -> ColorResult<Raster> {
    if !raster.is_rgb() {
        return Ok(raster.clone());
    }
    Ok(raster.map_pixels(1, |src, dst| {
        dst[0] = rgb_to_gray(src[0], src[1], src[2]);
    })?)
}
