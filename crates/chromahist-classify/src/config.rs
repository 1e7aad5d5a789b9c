//! Classifier configuration
//!
//! A [`ClassifierConfig`] fixes how every image is turned into a histogram:
//! which color space, which channels, how many bins, over which ranges and
//! under which norm. All histograms a classifier holds share one config,
//! which is what makes them comparable.
//!
//! Configurations can be built programmatically or loaded from JSON:
//!
//! ```no_run
//! use chromahist_classify::ClassifierConfig;
//! use std::path::Path;
//!
//! let config = ClassifierConfig::from_json_file(Path::new("classifier.json"))?;
//! let hsv = ClassifierConfig::hsv(18, 8);
//! # Ok::<(), chromahist_classify::ClassifyError>(())
//! ```
//!
//! The JSON layout mirrors the struct; omitted fields take their defaults:
//!
//! ```json
//! {
//!   "channels": [0, 1, 2],
//!   "bin_sizes": [10, 10, 10],
//!   "value_ranges": [[0, 256], [0, 256], [0, 256]],
//!   "color_mode": "raw",
//!   "normalization": "l1"
//! }
//! ```

use crate::{ClassifyError, ClassifyResult};
use chromahist_color::{ColorMode, HUE_MAX};
use chromahist_hist::{HistogramSpec, Normalization};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Full 8-bit sample range
const FULL_RANGE: (f32, f32) = (0.0, 256.0);

/// Histogram configuration of a classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Channel indices to histogram, in axis order
    pub channels: Vec<usize>,
    /// Bin count per channel
    pub bin_sizes: Vec<usize>,
    /// `[min, max)` value range per channel
    pub value_ranges: Vec<(f32, f32)>,
    /// Color space conversion applied before binning
    pub color_mode: ColorMode,
    /// Norm the histograms are scaled to
    pub normalization: Normalization,
}

impl Default for ClassifierConfig {
    /// Three-channel RGB histogram with 10 bins per channel
    fn default() -> Self {
        Self::rgb(10)
    }
}

impl ClassifierConfig {
    /// Joint RGB histogram with `bins` bins per channel
    pub fn rgb(bins: usize) -> Self {
        Self {
            channels: vec![0, 1, 2],
            bin_sizes: vec![bins; 3],
            value_ranges: vec![FULL_RANGE; 3],
            color_mode: ColorMode::Raw,
            normalization: Normalization::L1,
        }
    }

    /// Hue-saturation histogram; value is ignored, which makes matching
    /// less sensitive to lighting
    pub fn hsv(hue_bins: usize, saturation_bins: usize) -> Self {
        Self {
            channels: vec![0, 1],
            bin_sizes: vec![hue_bins, saturation_bins],
            value_ranges: vec![(0.0, HUE_MAX as f32), FULL_RANGE],
            color_mode: ColorMode::Hsv,
            normalization: Normalization::L1,
        }
    }

    /// Luma histogram
    pub fn grayscale(bins: usize) -> Self {
        Self {
            channels: vec![0],
            bin_sizes: vec![bins],
            value_ranges: vec![FULL_RANGE],
            color_mode: ColorMode::Grayscale,
            normalization: Normalization::L1,
        }
    }

    /// Replace the normalization
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Length of every histogram built under this config
    pub fn histogram_len(&self) -> usize {
        self.bin_sizes.iter().product()
    }

    /// Check the config and build the histogram spec it describes.
    ///
    /// # Errors
    ///
    /// - [`ClassifyError::DimensionMismatch`] if `bin_sizes` or
    ///   `value_ranges` differ in length from `channels`
    /// - [`ClassifyError::InvalidConfig`] for empty channels, zero bins,
    ///   empty ranges, or channels the color mode cannot produce
    pub fn validate(&self) -> ClassifyResult<HistogramSpec> {
        if self.bin_sizes.len() != self.channels.len() {
            return Err(ClassifyError::DimensionMismatch {
                what: "bin_sizes",
                expected: self.channels.len(),
                actual: self.bin_sizes.len(),
            });
        }
        if self.value_ranges.len() != self.channels.len() {
            return Err(ClassifyError::DimensionMismatch {
                what: "value_ranges",
                expected: self.channels.len(),
                actual: self.value_ranges.len(),
            });
        }

        let max_channels = match self.color_mode {
            ColorMode::Raw => None,
            ColorMode::Hsv => Some(3),
            ColorMode::Grayscale => Some(1),
        };
        if let Some(limit) = max_channels
            && let Some(&bad) = self.channels.iter().find(|&&c| c >= limit)
        {
            return Err(ClassifyError::InvalidConfig(format!(
                "channel {bad} not available in {} mode ({limit} channels)",
                self.color_mode
            )));
        }

        HistogramSpec::new(
            self.channels.clone(),
            self.bin_sizes.clone(),
            self.value_ranges.clone(),
        )
        .map_err(|e| ClassifyError::InvalidConfig(e.to_string()))
    }

    /// Parse a config from a JSON string
    pub fn from_json_str(json: &str) -> ClassifyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn from_json_file(path: &Path) -> ClassifyResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the config as pretty-printed JSON
    pub fn to_json_string(&self) -> ClassifyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        let spec = ClassifierConfig::default().validate().unwrap();
        assert_eq!(spec.total_bins(), 1000);
    }

    #[test]
    fn test_length_mismatch() {
        let mut config = ClassifierConfig::rgb(8);
        config.bin_sizes.pop();
        assert!(matches!(
            config.validate(),
            Err(ClassifyError::DimensionMismatch {
                what: "bin_sizes",
                expected: 3,
                actual: 2
            })
        ));

        let mut config = ClassifierConfig::rgb(8);
        config.value_ranges.push((0.0, 1.0));
        assert!(matches!(
            config.validate(),
            Err(ClassifyError::DimensionMismatch {
                what: "value_ranges",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_bins_invalid() {
        let config = ClassifierConfig::grayscale(0);
        assert!(matches!(
            config.validate(),
            Err(ClassifyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_grayscale_rejects_color_channels() {
        let mut config = ClassifierConfig::grayscale(16);
        config.channels = vec![1];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("channel 1"));
    }

    #[test]
    fn test_json_roundtrip_and_defaults() {
        let config = ClassifierConfig::hsv(18, 4);
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"hsv\""));
        assert_eq!(ClassifierConfig::from_json_str(&json).unwrap(), config);

        let partial = ClassifierConfig::from_json_str(r#"{"color_mode": "grayscale"}"#).unwrap();
        assert_eq!(partial.color_mode, ColorMode::Grayscale);
        assert_eq!(partial.channels, vec![0, 1, 2]);
    }

    #[test]
    fn test_json_color_mode_alias() {
        let config = ClassifierConfig::from_json_str(
            r#"{"channels": [0], "bin_sizes": [8], "value_ranges": [[0, 256]], "color_mode": "GRAY"}"#,
        )
        .unwrap();
        assert_eq!(config.color_mode, ColorMode::Grayscale);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_bad_input() {
        assert!(matches!(
            ClassifierConfig::from_json_str("{\"color_mode\": \"lab\"}"),
            Err(ClassifyError::Config(_))
        ));
    }
}
