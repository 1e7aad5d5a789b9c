//! Histogram comparison metrics
//!
//! Both metrics are similarities: higher means a closer match.
//!
//! - [`Metric::Intersection`]: sum of elementwise minima (Swain & Ballard)
//! - [`Metric::Correlation`]: Pearson correlation of the bin values

use crate::error::{HistError, HistResult};
use crate::histogram::Histogram;
use serde::{Deserialize, Serialize};

/// Pairwise histogram similarity metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Sum over bins of `min(h1[i], h2[i])`
    #[default]
    Intersection,
    /// Pearson correlation coefficient in [-1, 1]
    Correlation,
}

/// Compare two histograms.
///
/// # Errors
///
/// Returns [`HistError::LengthMismatch`] if the histograms have different
/// numbers of bins.
pub fn compare(h1: &Histogram, h2: &Histogram, metric: Metric) -> HistResult<f64> {
    compare_slices(h1.as_slice(), h2.as_slice(), metric)
}

/// Compare two flat histograms given as slices.
pub fn compare_slices(h1: &[f32], h2: &[f32], metric: Metric) -> HistResult<f64> {
    if h1.len() != h2.len() {
        return Err(HistError::LengthMismatch {
            left: h1.len(),
            right: h2.len(),
        });
    }
    Ok(match metric {
        Metric::Intersection => intersection(h1, h2),
        Metric::Correlation => correlation(h1, h2),
    })
}

fn intersection(h1: &[f32], h2: &[f32]) -> f64 {
    h1.iter()
        .zip(h2)
        .map(|(&a, &b)| a.min(b) as f64)
        .sum()
}

/// A constant histogram has no variance; such pairs score 1.
fn correlation(h1: &[f32], h2: &[f32]) -> f64 {
    let n = h1.len() as f64;
    if h1.is_empty() {
        return 1.0;
    }
    let mean1 = h1.iter().map(|&v| v as f64).sum::<f64>() / n;
    let mean2 = h2.iter().map(|&v| v as f64).sum::<f64>() / n;

    let mut num = 0.0;
    let mut var1 = 0.0;
    let mut var2 = 0.0;
    for (&a, &b) in h1.iter().zip(h2) {
        let da = a as f64 - mean1;
        let db = b as f64 - mean2;
        num += da * db;
        var1 += da * da;
        var2 += db * db;
    }

    let denom = (var1 * var2).sqrt();
    if denom.abs() > f64::EPSILON {
        num / denom
    } else {
        1.0
    }
}
