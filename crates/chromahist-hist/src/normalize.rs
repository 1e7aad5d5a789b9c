//! Histogram normalization

use crate::histogram::Histogram;
use serde::{Deserialize, Serialize};

/// Norm a histogram is scaled to unit length in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Bins sum to 1; self-intersection is exactly 1
    #[default]
    L1,
    /// Euclidean norm is 1
    L2,
    /// Largest bin is 1
    Inf,
}

impl Normalization {
    /// Norm of `values` under this normalization
    pub fn norm(self, values: &[f32]) -> f64 {
        match self {
            Normalization::L1 => values.iter().map(|&v| (v as f64).abs()).sum(),
            Normalization::L2 => values
                .iter()
                .map(|&v| (v as f64) * (v as f64))
                .sum::<f64>()
                .sqrt(),
            Normalization::Inf => values
                .iter()
                .map(|&v| (v as f64).abs())
                .fold(0.0, f64::max),
        }
    }
}

/// Scale `hist` so that its norm is 1.
///
/// An all-zero histogram is returned unchanged.
pub fn normalize(hist: &Histogram, normalization: Normalization) -> Histogram {
    let mut out = hist.clone();
    normalize_in_place(&mut out, normalization);
    out
}

/// Scale `hist` in place so that its norm is 1.
pub fn normalize_in_place(hist: &mut Histogram, normalization: Normalization) {
    let norm = normalization.norm(hist.as_slice());
    if norm == 0.0 {
        return;
    }
    let scale = 1.0 / norm;
    for v in hist.values_mut() {
        *v = (*v as f64 * scale) as f32;
    }
}
