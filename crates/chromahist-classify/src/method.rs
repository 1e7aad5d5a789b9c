//! Comparison method selection

use crate::{ClassifyError, ClassifyResult};
use chromahist_hist::Metric;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a query histogram is scored against a model histogram
///
/// Higher scores mean better matches for both methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareMethod {
    /// Histogram intersection; 1.0 for identical L1-normalized histograms
    #[default]
    Intersection,
    /// Pearson correlation of the bin values
    Correlation,
}

impl CompareMethod {
    /// Name accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            CompareMethod::Intersection => "intersection",
            CompareMethod::Correlation => "correlation",
        }
    }
}

impl From<CompareMethod> for Metric {
    fn from(method: CompareMethod) -> Self {
        match method {
            CompareMethod::Intersection => Metric::Intersection,
            CompareMethod::Correlation => Metric::Correlation,
        }
    }
}

impl fmt::Display for CompareMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompareMethod {
    type Err = ClassifyError;

    fn from_str(s: &str) -> ClassifyResult<Self> {
        match s {
            "intersection" => Ok(CompareMethod::Intersection),
            "correlation" => Ok(CompareMethod::Correlation),
            _ => Err(ClassifyError::UnsupportedMethod(s.to_string())),
        }
    }
}
