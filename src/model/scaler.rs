use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::features::FeatureVector;

// ---------------------------------------------------------------------------
// StandardScaler – pre-fitted standardization transform
// ---------------------------------------------------------------------------

/// A fitted mean/variance standardization transform, deserialized from the
/// scaler artifact. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Ordered feature names the transform was fitted on.
    feature_names: Vec<String>,
    /// Per-feature mean subtracted before scaling.
    mean: Vec<f64>,
    /// Per-feature scale (standard deviation) divided after centering.
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(feature_names: Vec<String>, mean: Vec<f64>, scale: Vec<f64>) -> Self {
        StandardScaler {
            feature_names,
            mean,
            scale,
        }
    }

    /// The ordered feature-name sequence this scaler was fitted on.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Check internal consistency after deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            bail!("scaler artifact has no features");
        }
        if self.mean.len() != self.feature_names.len() {
            bail!(
                "scaler artifact: {} feature names but {} means",
                self.feature_names.len(),
                self.mean.len()
            );
        }
        if self.scale.len() != self.feature_names.len() {
            bail!(
                "scaler artifact: {} feature names but {} scales",
                self.feature_names.len(),
                self.scale.len()
            );
        }
        for (i, (&m, &s)) in self.mean.iter().zip(&self.scale).enumerate() {
            if !m.is_finite() || !s.is_finite() {
                bail!("scaler artifact: non-finite statistics for '{}'", self.feature_names[i]);
            }
            if s == 0.0 {
                bail!("scaler artifact: zero scale for '{}'", self.feature_names[i]);
            }
        }
        Ok(())
    }

    /// Standardize a feature vector: `(x - mean) / scale` per feature.
    ///
    /// The caller is responsible for schema alignment; the predictor checks
    /// name-sequence equality before calling this.
    pub fn transform(&self, features: &FeatureVector) -> Vec<f64> {
        features
            .values()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (&m, &s))| (x - m) / s)
            .collect()
    }
}
