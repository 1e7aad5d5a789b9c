//! Histogram color classifier
//!
//! Models are reference images reduced to normalized color histograms.
//! A query image goes through the same reduction and is scored against
//! every model; the classifier reports the raw scores, the scores as a
//! distribution, or the index of the best model.
//!
//! Histogram intersection follows Swain & Ballard, "Color Indexing"
//! (IJCV 1991).

use crate::config::ClassifierConfig;
use crate::method::CompareMethod;
use crate::{ClassifyError, ClassifyResult};
use chromahist_color::convert_color_space;
use chromahist_core::Raster;
use chromahist_hist::{Histogram, HistogramSpec, compare, compute_histogram, normalize_in_place};

/// Classifier comparing images to stored model histograms
///
/// Models are append-only; a model's index is its registration order.
///
/// # Example
///
/// ```
/// use chromahist_classify::{ClassifierConfig, CompareMethod, HistogramColorClassifier};
/// use chromahist_core::Raster;
///
/// let mut classifier = HistogramColorClassifier::new(ClassifierConfig::rgb(10)).unwrap();
/// classifier.add_model_histogram(&Raster::filled_rgb(8, 8, 255, 0, 0).unwrap()).unwrap();
/// classifier.add_model_histogram(&Raster::filled_rgb(8, 8, 0, 0, 255).unwrap()).unwrap();
///
/// let query = Raster::filled_rgb(4, 4, 0, 0, 255).unwrap();
/// assert_eq!(classifier.best_match_index(&query, CompareMethod::Intersection).unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct HistogramColorClassifier {
    config: ClassifierConfig,
    spec: HistogramSpec,
    models: Vec<Histogram>,
}

impl HistogramColorClassifier {
    /// Create a classifier with an empty model store.
    ///
    /// # Errors
    ///
    /// Returns the error of [`ClassifierConfig::validate`].
    pub fn new(config: ClassifierConfig) -> ClassifyResult<Self> {
        let spec = config.validate()?;
        tracing::debug!(
            color_mode = %config.color_mode,
            channels = ?config.channels,
            bins = spec.total_bins(),
            "created histogram color classifier"
        );
        Ok(Self {
            config,
            spec,
            models: Vec::new(),
        })
    }

    /// The configuration every histogram is built with
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Number of registered models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Whether no model is registered
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered model histograms, in registration order
    pub fn models(&self) -> &[Histogram] {
        &self.models
    }

    /// Model histogram at `index`
    pub fn model(&self, index: usize) -> Option<&Histogram> {
        self.models.get(index)
    }

    /// Reduce an image to the normalized histogram this classifier stores
    /// and compares.
    pub fn histogram_of(&self, image: &Raster) -> ClassifyResult<Histogram> {
        let converted = convert_color_space(image, self.config.color_mode)?;
        let mut hist = compute_histogram(&converted, &self.spec)?;
        normalize_in_place(&mut hist, self.config.normalization);
        Ok(hist)
    }

    /// Register `image` as a new model.
    ///
    /// Returns the index of the new model.
    pub fn add_model_histogram(&mut self, image: &Raster) -> ClassifyResult<usize> {
        let hist = self.histogram_of(image)?;
        let index = self.models.len();
        tracing::debug!(index, bins = hist.len(), "registered model histogram");
        self.models.push(hist);
        Ok(index)
    }

    /// Score two histograms against each other.
    ///
    /// Both methods are symmetric. Intersection of an L1-normalized
    /// histogram with itself is 1.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::DimensionMismatch`] if the histograms have
    /// different lengths or shapes.
    pub fn compare_histograms(
        hist1: &Histogram,
        hist2: &Histogram,
        method: CompareMethod,
    ) -> ClassifyResult<f64> {
        if hist1.len() != hist2.len() {
            return Err(ClassifyError::DimensionMismatch {
                what: "histogram",
                expected: hist1.len(),
                actual: hist2.len(),
            });
        }
        let (shape1, shape2) = (hist1.shape(), hist2.shape());
        if shape1.len() != shape2.len() {
            return Err(ClassifyError::DimensionMismatch {
                what: "histogram axes",
                expected: shape1.len(),
                actual: shape2.len(),
            });
        }
        if let Some((&expected, &actual)) = shape1.iter().zip(shape2).find(|(a, b)| a != b) {
            return Err(ClassifyError::DimensionMismatch {
                what: "histogram axis bins",
                expected,
                actual,
            });
        }
        Ok(compare(hist1, hist2, method.into())?)
    }

    /// Score `image` against every model.
    ///
    /// The scores are in registration order, one per model; higher is a
    /// better match. With no models the result is empty.
    pub fn compare_to_models(
        &self,
        image: &Raster,
        method: CompareMethod,
    ) -> ClassifyResult<Vec<f64>> {
        let hist = self.histogram_of(image)?;
        tracing::debug!(models = self.models.len(), %method, "comparing image to models");

        self.models
            .iter()
            .enumerate()
            .map(|(index, model)| {
                let score = Self::compare_histograms(&hist, model, method)?;
                tracing::trace!(index, score, "model score");
                Ok(score)
            })
            .collect()
    }

    /// Score `image` against every model and scale the scores to sum to 1.
    ///
    /// Negative scores (anti-correlated models) count as zero, so every
    /// entry is in [0, 1] and the largest entry is the best match.
    ///
    /// # Errors
    ///
    /// - [`ClassifyError::EmptyModelStore`] if no model is registered
    /// - [`ClassifyError::ZeroScoreSum`] if no model has a positive score
    pub fn compare_to_models_as_distribution(
        &self,
        image: &Raster,
        method: CompareMethod,
    ) -> ClassifyResult<Vec<f64>> {
        if self.models.is_empty() {
            tracing::warn!("distribution requested with no registered models");
            return Err(ClassifyError::EmptyModelStore);
        }

        let scores: Vec<f64> = self
            .compare_to_models(image, method)?
            .into_iter()
            .map(|s| s.max(0.0))
            .collect();
        let total: f64 = scores.iter().sum();
        if total <= f64::EPSILON {
            tracing::warn!(models = scores.len(), total, "no positive comparison score");
            return Err(ClassifyError::ZeroScoreSum);
        }
        Ok(scores.into_iter().map(|s| s / total).collect())
    }

    /// Index of the model that best matches `image`.
    ///
    /// Ties resolve to the lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::EmptyModelStore`] if no model is registered.
    pub fn best_match_index(&self, image: &Raster, method: CompareMethod) -> ClassifyResult<usize> {
        let scores = self.compare_to_models(image, method)?;
        let best = argmax(&scores).ok_or_else(|| {
            tracing::warn!("best match requested with no registered models");
            ClassifyError::EmptyModelStore
        })?;
        tracing::debug!(index = best, score = scores[best], "best match");
        Ok(best)
    }
}

/// First index of the maximum value
fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        if best.is_none_or(|b| v > values[b]) {
            best = Some(i);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromahist_hist::Normalization;

    fn red() -> Raster {
        Raster::filled_rgb(8, 8, 255, 0, 0).unwrap()
    }

    fn blue() -> Raster {
        Raster::filled_rgb(8, 8, 0, 0, 255).unwrap()
    }

    #[test]
    fn test_argmax_ties_pick_first() {
        assert_eq!(argmax(&[0.2, 0.7, 0.7, 0.1]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_add_returns_index() {
        let mut classifier = HistogramColorClassifier::new(ClassifierConfig::default()).unwrap();
        assert!(classifier.is_empty());
        assert_eq!(classifier.add_model_histogram(&red()).unwrap(), 0);
        assert_eq!(classifier.add_model_histogram(&blue()).unwrap(), 1);
        assert_eq!(classifier.model_count(), 2);
        assert_eq!(classifier.model(1).unwrap().len(), 1000);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = ClassifierConfig::rgb(4);
        config.channels.push(0);
        assert!(matches!(
            HistogramColorClassifier::new(config),
            Err(ClassifyError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_histogram_is_l1_normalized() {
        let classifier = HistogramColorClassifier::new(ClassifierConfig::default()).unwrap();
        let hist = classifier.histogram_of(&red()).unwrap();
        assert!((hist.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_l2_normalization_is_used() {
        let config = ClassifierConfig::rgb(2).with_normalization(Normalization::L2);
        let classifier = HistogramColorClassifier::new(config).unwrap();
        let image = chromahist_test::two_tone(4, 1, 0.5, (255, 0, 0), (0, 0, 255)).unwrap();
        let hist = classifier.histogram_of(&image).unwrap();
        let norm: f64 = hist
            .as_slice()
            .iter()
            .map(|&v| (v as f64) * (v as f64))
            .sum();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_compare_histograms_length_mismatch() {
        let a = Histogram::from_vec(vec![1.0]);
        let b = Histogram::from_vec(vec![0.5, 0.5]);
        assert!(matches!(
            HistogramColorClassifier::compare_histograms(&a, &b, CompareMethod::Intersection),
            Err(ClassifyError::DimensionMismatch {
                what: "histogram",
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_compare_histograms_shape_mismatch() {
        let flat = Histogram::from_vec(vec![0.1; 10]);
        let joint = Histogram::from_parts(vec![2, 5], vec![0.1; 10]).unwrap();
        assert!(matches!(
            HistogramColorClassifier::compare_histograms(&joint, &flat, CompareMethod::Intersection),
            Err(ClassifyError::DimensionMismatch {
                what: "histogram axes",
                expected: 2,
                actual: 1
            })
        ));

        let swapped = Histogram::from_parts(vec![5, 2], vec![0.1; 10]).unwrap();
        assert!(matches!(
            HistogramColorClassifier::compare_histograms(&joint, &swapped, CompareMethod::Correlation),
            Err(ClassifyError::DimensionMismatch {
                what: "histogram axis bins",
                expected: 2,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_empty_store() {
        let classifier = HistogramColorClassifier::new(ClassifierConfig::default()).unwrap();
        assert!(
            classifier
                .compare_to_models(&red(), CompareMethod::Intersection)
                .unwrap()
                .is_empty()
        );
        assert!(matches!(
            classifier.best_match_index(&red(), CompareMethod::Intersection),
            Err(ClassifyError::EmptyModelStore)
        ));
        assert!(matches!(
            classifier.compare_to_models_as_distribution(&red(), CompareMethod::Intersection),
            Err(ClassifyError::EmptyModelStore)
        ));
    }

    #[test]
    fn test_zero_score_sum() {
        let mut classifier = HistogramColorClassifier::new(ClassifierConfig::default()).unwrap();
        classifier.add_model_histogram(&red()).unwrap();
        assert!(matches!(
            classifier.compare_to_models_as_distribution(&blue(), CompareMethod::Intersection),
            Err(ClassifyError::ZeroScoreSum)
        ));
    }

    #[test]
    fn test_hsv_mode_needs_rgb_input() {
        let mut classifier = HistogramColorClassifier::new(ClassifierConfig::hsv(18, 4)).unwrap();
        let gray = Raster::filled_gray(4, 4, 10).unwrap();
        assert!(matches!(
            classifier.add_model_histogram(&gray),
            Err(ClassifyError::Color(_))
        ));
        assert!(classifier.is_empty());
    }

    #[test]
    fn test_raw_mode_channel_missing() {
        let mut classifier = HistogramColorClassifier::new(ClassifierConfig::default()).unwrap();
        let gray = Raster::filled_gray(4, 4, 10).unwrap();
        assert!(matches!(
            classifier.add_model_histogram(&gray),
            Err(ClassifyError::Hist(_))
        ));
    }
}
