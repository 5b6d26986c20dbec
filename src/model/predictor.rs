use std::fmt;

use thiserror::Error;

use super::features::FeatureVector;
use super::network::NeuralNet;
use super::scaler::StandardScaler;

// ---------------------------------------------------------------------------
// Prediction – the ephemeral result of one inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Benign,
    Malignant,
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnosis::Benign => write!(f, "Benign"),
            Diagnosis::Malignant => write!(f, "Malignant"),
        }
    }
}

/// One classification outcome: the raw classifier score and its thresholded
/// label. Recomputed on every user action, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Raw classifier output in [0, 1].
    pub score: f64,
    /// `score > 0.5` → Malignant, otherwise Benign.
    pub diagnosis: Diagnosis,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PredictError {
    /// The input's name sequence differs from the scaler's fitted sequence.
    #[error("feature mismatch between input and fitted scaler: {0}")]
    FeatureMismatch(String),
}

// ---------------------------------------------------------------------------
// predict – schema check → scale → forward pass → threshold
// ---------------------------------------------------------------------------

/// Classify one tumor sample.
///
/// Refuses inference unless the input's ordered feature names exactly equal
/// the scaler's fitted sequence (same names, same order); the classifier is
/// never invoked on a mismatched input. A score of exactly 0.5 is Benign —
/// the threshold is a strict greater-than.
pub fn predict(
    features: &FeatureVector,
    scaler: &StandardScaler,
    classifier: &NeuralNet,
) -> Result<Prediction, PredictError> {
    check_schema(features, scaler)?;

    let normalized = scaler.transform(features);
    let score = classifier.predict(&normalized);

    let diagnosis = if score > 0.5 {
        Diagnosis::Malignant
    } else {
        Diagnosis::Benign
    };

    Ok(Prediction { score, diagnosis })
}

/// Compare the input's name sequence with the fitted sequence, reporting the
/// first divergence.
fn check_schema(features: &FeatureVector, scaler: &StandardScaler) -> Result<(), PredictError> {
    let fitted = scaler.feature_names();

    for (position, (got, expected)) in features.names().zip(fitted.iter()).enumerate() {
        if got != expected.as_str() {
            return Err(PredictError::FeatureMismatch(format!(
                "expected '{expected}' at position {position}, found '{got}'"
            )));
        }
    }

    if features.len() < fitted.len() {
        return Err(PredictError::FeatureMismatch(format!(
            "input has {} features, scaler was fitted on {} (missing '{}')",
            features.len(),
            fitted.len(),
            fitted[features.len()]
        )));
    }
    if features.len() > fitted.len() {
        let extra = features.names().nth(fitted.len()).unwrap_or("?");
        return Err(PredictError::FeatureMismatch(format!(
            "input has {} features, scaler was fitted on {} (unexpected '{extra}')",
            features.len(),
            fitted.len()
        )));
    }

    Ok(())
}
