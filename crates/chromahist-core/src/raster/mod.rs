//! Raster - The in-memory image container
//!
//! The `Raster` structure holds the pixels that every other crate in the
//! workspace consumes: color conversion reads it, histogram extraction
//! bins it.
//!
//! # Pixel layout
//!
//! - Samples are stored as interleaved `u8` values, row-major
//! - 1 sample per pixel for grayscale, 3 for color
//! - For 3-sample rasters the channel order is RGB (red is channel 0)
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

mod interop;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, PartialEq, Eq)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel (1 for grayscale, 3 for RGB)
    spp: u32,
    /// Interleaved sample data, `width * height * spp` bytes
    data: Vec<u8>,
}

impl RasterData {
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.spp as usize
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Raster - Main image container
///
/// # Examples
///
/// ```
/// use chromahist_core::Raster;
///
/// let raster = Raster::filled_rgb(4, 2, 255, 0, 0).unwrap();
/// assert_eq!(raster.width(), 4);
/// assert_eq!(raster.pixel(3, 1), &[255, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a zero-filled raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::InvalidSpp`] if `spp` is not 1 or 3.
    pub fn new(width: u32, height: u32, spp: u32) -> Result<Self> {
        Self::validate_shape(width, height, spp)?;
        let len = width as usize * height as usize * spp as usize;
        Ok(Self::from_data(RasterData {
            width,
            height,
            spp,
            data: vec![0u8; len],
        }))
    }

    /// Create a raster from an interleaved sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * spp`.
    pub fn from_vec(width: u32, height: u32, spp: u32, data: Vec<u8>) -> Result<Self> {
        Self::validate_shape(width, height, spp)?;
        let expected = width as usize * height as usize * spp as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_data(RasterData {
            width,
            height,
            spp,
            data,
        }))
    }

    /// Create a 3-sample raster where every pixel is `(r, g, b)`.
    pub fn filled_rgb(width: u32, height: u32, r: u8, g: u8, b: u8) -> Result<Self> {
        Self::validate_shape(width, height, 3)?;
        let data = [r, g, b].repeat(width as usize * height as usize);
        Self::from_vec(width, height, 3, data)
    }

    /// Create a 1-sample raster where every pixel is `value`.
    pub fn filled_gray(width: u32, height: u32, value: u8) -> Result<Self> {
        Self::validate_shape(width, height, 1)?;
        Self::from_vec(
            width,
            height,
            1,
            vec![value; width as usize * height as usize],
        )
    }

    fn validate_shape(width: u32, height: u32, spp: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if spp != 1 && spp != 3 {
            return Err(Error::InvalidSpp(spp));
        }
        Ok(())
    }

    fn from_data(data: RasterData) -> Self {
        Raster {
            inner: Arc::new(data),
        }
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.width as usize * self.inner.height as usize
    }

    /// Whether this raster holds RGB color samples.
    #[inline]
    pub fn is_rgb(&self) -> bool {
        self.inner.spp == 3
    }

    /// Get raw access to the interleaved sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({x}, {y}) outside {}x{} raster",
            self.width(),
            self.height()
        );
        let start = self.inner.offset(x, y);
        &self.inner.data[start..start + self.spp() as usize]
    }

    /// Get a single sample, checking bounds and channel.
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> Result<u8> {
        self.inner.check_bounds(x, y)?;
        self.check_channel(channel)?;
        Ok(self.inner.data[self.inner.offset(x, y) + channel])
    }

    /// Check that `channel` is a valid sample index for this raster.
    pub fn check_channel(&self, channel: usize) -> Result<()> {
        if channel >= self.spp() as usize {
            return Err(Error::ChannelOutOfRange {
                channel,
                spp: self.spp(),
            });
        }
        Ok(())
    }

    /// Iterate over pixels in row-major order, each as a slice of `spp`
    /// samples.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.inner.data.chunks_exact(self.spp() as usize)
    }

    /// Map every pixel through `f`, producing a raster with `out_spp`
    /// samples per pixel.
    ///
    /// `f` receives the input samples and writes exactly `out_spp`
    /// samples into the output slice.
    pub fn map_pixels<F>(&self, out_spp: u32, mut f: F) -> Result<Raster>
    where
        F: FnMut(&[u8], &mut [u8]),
    {
        let mut out = Raster::new(self.width(), self.height(), out_spp)?
            .try_into_mut()
            .unwrap_or_else(|raster| raster.to_mut());
        for (src, dst) in self
            .pixels()
            .zip(out.inner.data.chunks_exact_mut(out_spp as usize))
        {
            f(src, dst);
        }
        Ok(out.into())
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether two rasters share the same underlying buffer.
    #[inline]
    pub fn shares_data_with(&self, other: &Raster) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Try to get a mutable version of this raster.
    ///
    /// Succeeds only if this is the sole reference; otherwise hands the
    /// raster back unchanged.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                spp: self.inner.spp,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of sample data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Get mutable access to the interleaved sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set a single sample.
    pub fn set_sample(&mut self, x: u32, y: u32, channel: usize, value: u8) -> Result<()> {
        self.inner.check_bounds(x, y)?;
        if channel >= self.inner.spp as usize {
            return Err(Error::ChannelOutOfRange {
                channel,
                spp: self.inner.spp,
            });
        }
        let offset = self.inner.offset(x, y) + channel;
        self.inner.data[offset] = value;
        Ok(())
    }

    /// Set all three samples of an RGB pixel.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.inner.check_bounds(x, y)?;
        if self.inner.spp != 3 {
            return Err(Error::InvalidParameter(format!(
                "set_rgb requires 3 samples per pixel, raster has {}",
                self.inner.spp
            )));
        }
        let offset = self.inner.offset(x, y);
        self.inner.data[offset..offset + 3].copy_from_slice(&[r, g, b]);
        Ok(())
    }

    /// Set every pixel inside the rectangle `[x0, x1) x [y0, y1)` to the
    /// given samples. The rectangle is clipped to the raster.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, samples: &[u8]) -> Result<()> {
        if samples.len() != self.inner.spp as usize {
            return Err(Error::BufferSizeMismatch {
                expected: self.inner.spp as usize,
                actual: samples.len(),
            });
        }
        let x1 = x1.min(self.inner.width);
        let y1 = y1.min(self.inner.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let offset = self.inner.offset(x, y);
                self.inner.data[offset..offset + samples.len()].copy_from_slice(samples);
            }
        }
        Ok(())
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster::from_data(raster_mut.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Raster::new(0, 4, 3),
            Err(Error::InvalidDimension {
                width: 0,
                height: 4
            })
        ));
    }

    #[test]
    fn test_new_rejects_bad_spp() {
        assert!(matches!(Raster::new(2, 2, 4), Err(Error::InvalidSpp(4))));
    }

    #[test]
    fn test_from_vec_checks_length() {
        let err = Raster::from_vec(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_filled_rgb() {
        let raster = Raster::filled_rgb(3, 2, 10, 20, 30).unwrap();
        assert_eq!(raster.pixel_count(), 6);
        assert!(raster.is_rgb());
        assert!(raster.pixels().all(|p| p == [10, 20, 30]));
    }

    #[test]
    fn test_sample_bounds() {
        let raster = Raster::filled_gray(2, 2, 7).unwrap();
        assert_eq!(raster.sample(1, 1, 0).unwrap(), 7);
        assert!(matches!(
            raster.sample(1, 1, 1),
            Err(Error::ChannelOutOfRange { channel: 1, spp: 1 })
        ));
        assert!(matches!(
            raster.sample(2, 0, 0),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_try_into_mut_shared() {
        let raster = Raster::filled_gray(2, 2, 0).unwrap();
        let shared = raster.clone();
        assert_eq!(raster.ref_count(), 2);
        let back = raster.try_into_mut().unwrap_err();
        assert!(back.shares_data_with(&shared));
    }

    #[test]
    fn test_mutation_roundtrip() {
        let raster = Raster::new(2, 2, 3).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_rgb(1, 0, 1, 2, 3).unwrap();
        rm.set_sample(0, 1, 2, 9).unwrap();
        let raster: Raster = rm.into();
        assert_eq!(raster.pixel(1, 0), &[1, 2, 3]);
        assert_eq!(raster.pixel(0, 1), &[0, 0, 9]);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut rm = Raster::new(4, 4, 1).unwrap().to_mut();
        rm.fill_rect(2, 2, 10, 10, &[5]).unwrap();
        let raster: Raster = rm.into();
        assert_eq!(raster.data().iter().filter(|&&v| v == 5).count(), 4);
    }

    #[test]
    fn test_map_pixels() {
        let raster = Raster::filled_rgb(2, 1, 1, 2, 3).unwrap();
        let summed = raster
            .map_pixels(1, |src, dst| dst[0] = src.iter().sum())
            .unwrap();
        assert_eq!(summed.spp(), 1);
        assert_eq!(summed.data(), &[6, 6]);
    }
}
