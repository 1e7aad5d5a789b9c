//! Histogram generation for rasters
//!
//! Computes a joint histogram over a selection of raster channels with
//! uniform bins per channel. The result is stored flat, row-major over the
//! selected channel order (the last channel varies fastest).

use crate::error::{HistError, HistResult};
use chromahist_core::Raster;

/// Channel selection, bin counts and value ranges for one histogram
///
/// Bin `k` of a channel with range `[min, max)` and `n` bins covers
/// `[min + k * (max - min) / n, min + (k + 1) * (max - min) / n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    channels: Vec<usize>,
    bin_sizes: Vec<usize>,
    ranges: Vec<(f32, f32)>,
    total_bins: usize,
}

impl HistogramSpec {
    /// Create a validated histogram spec
    ///
    /// # Errors
    ///
    /// - [`HistError::ShapeMismatch`] if the three lists differ in length
    /// - [`HistError::NoChannels`] if no channel is selected
    /// - [`HistError::ZeroBins`] / [`HistError::InvalidRange`] for a bad
    ///   per-channel setting
    /// - [`HistError::TooManyBins`] if the bin product overflows
    pub fn new(
        channels: Vec<usize>,
        bin_sizes: Vec<usize>,
        ranges: Vec<(f32, f32)>,
    ) -> HistResult<Self> {
        if channels.len() != bin_sizes.len() || channels.len() != ranges.len() {
            return Err(HistError::ShapeMismatch {
                channels: channels.len(),
                bins: bin_sizes.len(),
                ranges: ranges.len(),
            });
        }
        if channels.is_empty() {
            return Err(HistError::NoChannels);
        }

        let mut total_bins = 1usize;
        for (i, (&bins, &(min, max))) in bin_sizes.iter().zip(&ranges).enumerate() {
            let channel = channels[i];
            if bins == 0 {
                return Err(HistError::ZeroBins { channel });
            }
            if !(min.is_finite() && max.is_finite() && min < max) {
                return Err(HistError::InvalidRange { channel, min, max });
            }
            total_bins = total_bins
                .checked_mul(bins)
                .ok_or(HistError::TooManyBins)?;
        }

        Ok(Self {
            channels,
            bin_sizes,
            ranges,
            total_bins,
        })
    }

    /// Selected channel indices, in histogram axis order
    pub fn channels(&self) -> &[usize] {
        &self.channels
    }

    /// Bin count per axis
    pub fn bin_sizes(&self) -> &[usize] {
        &self.bin_sizes
    }

    /// Value range per axis
    pub fn ranges(&self) -> &[(f32, f32)] {
        &self.ranges
    }

    /// Length of the flattened histogram
    pub fn total_bins(&self) -> usize {
        self.total_bins
    }

    /// Flat index of the bin holding `pixel`, or `None` if any selected
    /// sample falls outside its range.
    #[inline]
    fn bin_index(&self, pixel: &[u8]) -> Option<usize> {
        let mut index = 0usize;
        for ((&channel, &bins), &(min, max)) in
            self.channels.iter().zip(&self.bin_sizes).zip(&self.ranges)
        {
            let v = pixel[channel] as f32;
            if v < min || v >= max {
                return None;
            }
            let bin = (((v - min) * bins as f32 / (max - min)) as usize).min(bins - 1);
            index = index * bins + bin;
        }
        Some(index)
    }
}

/// Flattened multi-dimensional histogram
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    values: Vec<f32>,
    shape: Vec<usize>,
}

impl Histogram {
    /// Create an all-zero histogram with the given per-axis bin counts
    pub fn zeros(shape: Vec<usize>) -> Self {
        let len = shape.iter().product();
        Self {
            values: vec![0.0; len],
            shape,
        }
    }

    /// Create a one-dimensional histogram from values
    pub fn from_vec(values: Vec<f32>) -> Self {
        let shape = vec![values.len()];
        Self { values, shape }
    }

    /// Create a histogram from a shape and matching flat values
    ///
    /// # Errors
    ///
    /// Returns [`HistError::LengthMismatch`] if `values.len()` is not the
    /// product of `shape`.
    pub fn from_parts(shape: Vec<usize>, values: Vec<f32>) -> HistResult<Self> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(HistError::LengthMismatch {
                left: expected,
                right: values.len(),
            });
        }
        Ok(Self { values, shape })
    }

    /// Number of bins
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the histogram has no bins
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Per-axis bin counts
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Flat bin values
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Consume the histogram, returning the flat bin values
    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }

    /// Value of the bin at a multi-dimensional index
    pub fn bin(&self, index: &[usize]) -> Option<f32> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0usize;
        for (&i, &n) in index.iter().zip(&self.shape) {
            if i >= n {
                return None;
            }
            flat = flat * n + i;
        }
        self.values.get(flat).copied()
    }

    /// Sum of all bins
    pub fn sum(&self) -> f64 {
        self.values.iter().map(|&v| v as f64).sum()
    }

    /// Largest bin value (0 for an empty histogram)
    pub fn max(&self) -> f32 {
        self.values.iter().copied().fold(0.0, f32::max)
    }

    /// Flat index of the fullest bin (lowest index on ties)
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &v) in self.values.iter().enumerate() {
            if best.is_none_or(|(_, b)| v > b) {
                best = Some((i, v));
            }
        }
        best.map(|(i, _)| i)
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }
}

/// Compute a raw-count histogram of `raster` over the channels in `spec`.
///
/// A pixel is counted only if every selected sample lies inside its
/// channel's range.
///
/// # Errors
///
/// Returns [`HistError::Core`] with a channel-out-of-range error if the
/// spec selects a channel the raster does not have.
///
/// # Example
///
/// ```
/// use chromahist_core::Raster;
/// use chromahist_hist::{HistogramSpec, compute_histogram};
///
/// let raster = Raster::filled_gray(4, 4, 200).unwrap();
/// let spec = HistogramSpec::new(vec![0], vec![4], vec![(0.0, 256.0)]).unwrap();
/// let hist = compute_histogram(&raster, &spec).unwrap();
/// assert_eq!(hist.as_slice(), &[0.0, 0.0, 0.0, 16.0]);
/// ```
pub fn compute_histogram(raster: &Raster, spec: &HistogramSpec) -> HistResult<Histogram> {
    for &channel in spec.channels() {
        raster.check_channel(channel)?;
    }

    let mut hist = Histogram::zeros(spec.bin_sizes().to_vec());
    let counts = hist.values_mut();
    let mut skipped = 0usize;
    for pixel in raster.pixels() {
        match spec.bin_index(pixel) {
            Some(index) => counts[index] += 1.0,
            None => skipped += 1,
        }
    }

    tracing::trace!(
        bins = spec.total_bins(),
        pixels = raster.pixel_count(),
        skipped,
        "computed histogram"
    );
    Ok(hist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_spec(bins: usize) -> HistogramSpec {
        HistogramSpec::new(
            vec![0, 1, 2],
            vec![bins; 3],
            vec![(0.0, 256.0); 3],
        )
        .unwrap()
    }

    #[test]
    fn test_spec_shape_mismatch() {
        let err = HistogramSpec::new(vec![0, 1], vec![8], vec![(0.0, 256.0); 2]).unwrap_err();
        assert!(matches!(
            err,
            HistError::ShapeMismatch {
                channels: 2,
                bins: 1,
                ranges: 2
            }
        ));
    }

    #[test]
    fn test_spec_rejects_bad_values() {
        assert!(matches!(
            HistogramSpec::new(vec![], vec![], vec![]),
            Err(HistError::NoChannels)
        ));
        assert!(matches!(
            HistogramSpec::new(vec![0], vec![0], vec![(0.0, 256.0)]),
            Err(HistError::ZeroBins { channel: 0 })
        ));
        assert!(matches!(
            HistogramSpec::new(vec![1], vec![4], vec![(10.0, 10.0)]),
            Err(HistError::InvalidRange { channel: 1, .. })
        ));
    }

    #[test]
    fn test_pure_red_lands_in_one_bin() {
        let raster = Raster::filled_rgb(8, 8, 255, 0, 0).unwrap();
        let hist = compute_histogram(&raster, &rgb_spec(10)).unwrap();
        assert_eq!(hist.len(), 1000);
        assert_eq!(hist.bin(&[9, 0, 0]), Some(64.0));
        assert_eq!(hist.argmax(), Some(900));
        assert_eq!(hist.sum(), 64.0);
    }

    #[test]
    fn test_last_channel_varies_fastest() {
        let raster = Raster::filled_rgb(1, 1, 0, 0, 255).unwrap();
        let hist = compute_histogram(&raster, &rgb_spec(10)).unwrap();
        assert_eq!(hist.argmax(), Some(9));
    }

    #[test]
    fn test_out_of_range_pixels_skipped() {
        let raster = Raster::filled_gray(2, 2, 200).unwrap();
        let spec = HistogramSpec::new(vec![0], vec![2], vec![(0.0, 100.0)]).unwrap();
        let hist = compute_histogram(&raster, &spec).unwrap();
        assert_eq!(hist.sum(), 0.0);
    }

    #[test]
    fn test_channel_out_of_range() {
        let raster = Raster::filled_gray(2, 2, 0).unwrap();
        assert!(matches!(
            compute_histogram(&raster, &rgb_spec(4)),
            Err(HistError::Core(chromahist_core::Error::ChannelOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_subset_of_channels() {
        let raster = Raster::filled_rgb(2, 2, 0, 128, 255).unwrap();
        let spec = HistogramSpec::new(vec![2, 1], vec![2, 4], vec![(0.0, 256.0); 2]).unwrap();
        let hist = compute_histogram(&raster, &spec).unwrap();
        assert_eq!(hist.shape(), &[2, 4]);
        assert_eq!(hist.bin(&[1, 2]), Some(4.0));
    }

    #[test]
    fn test_from_parts_length() {
        assert!(Histogram::from_parts(vec![2, 2], vec![0.0; 4]).is_ok());
        assert!(matches!(
            Histogram::from_parts(vec![2, 2], vec![0.0; 3]),
            Err(HistError::LengthMismatch { left: 4, right: 3 })
        ));
    }
}
