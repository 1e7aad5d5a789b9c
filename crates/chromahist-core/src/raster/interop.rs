//! Conversions between [`Raster`] and `image` crate buffers
//!
//! Only in-memory buffers are converted. Decoding files is left to the
//! caller (for example `image::open`).

use super::Raster;
use crate::error::{Error, Result};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

impl TryFrom<&RgbImage> for Raster {
    type Error = Error;

    fn try_from(img: &RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Raster::from_vec(width, height, 3, img.as_raw().clone())
    }
}

impl TryFrom<&GrayImage> for Raster {
    type Error = Error;

    fn try_from(img: &GrayImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Raster::from_vec(width, height, 1, img.as_raw().clone())
    }
}

impl TryFrom<&DynamicImage> for Raster {
    type Error = Error;

    /// Single-channel images (with or without alpha) become 1-sample
    /// rasters; everything else is converted to 8-bit RGB. Alpha is
    /// discarded.
    fn try_from(img: &DynamicImage) -> Result<Self> {
        if img.color().has_color() {
            Raster::try_from(&img.to_rgb8())
        } else {
            Raster::try_from(&img.to_luma8())
        }
    }
}

impl Raster {
    /// Copy this raster into an `image` crate buffer.
    pub fn to_dynamic_image(&self) -> DynamicImage {
        match self.spp() {
            1 => DynamicImage::ImageLuma8(GrayImage::from_fn(self.width(), self.height(), |x, y| {
                Luma([self.pixel(x, y)[0]])
            })),
            _ => DynamicImage::ImageRgb8(RgbImage::from_fn(self.width(), self.height(), |x, y| {
                let p = self.pixel(x, y);
                Rgb([p[0], p[1], p[2]])
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_image() {
        let img = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        let raster = Raster::try_from(&img).unwrap();
        assert_eq!(raster.spp(), 3);
        assert_eq!(raster.pixel(2, 1), &[1, 2, 3]);
    }

    #[test]
    fn test_from_dynamic_gray() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([42])));
        let raster = Raster::try_from(&img).unwrap();
        assert_eq!(raster.spp(), 1);
        assert_eq!(raster.data(), &[42, 42, 42, 42]);
    }

    #[test]
    fn test_from_empty_image_fails() {
        let img = RgbImage::new(0, 0);
        assert!(matches!(
            Raster::try_from(&img),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_to_dynamic_image_roundtrip() {
        let raster = Raster::filled_rgb(2, 2, 9, 8, 7).unwrap();
        let back = Raster::try_from(&raster.to_dynamic_image()).unwrap();
        assert_eq!(back, raster);
    }
}
