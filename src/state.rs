use crate::model::artifacts::Artifacts;
use crate::model::features::{FeatureVector, CANONICAL_FEATURES};
use crate::model::predictor::{self, Prediction};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The loaded (scaler, classifier) pair, read-only for the process life.
    pub artifacts: &'static Artifacts,

    /// Current widget values, parallel to
    /// [`CANONICAL_FEATURES`](crate::model::features::CANONICAL_FEATURES).
    pub inputs: Vec<f64>,

    /// Result of the last prediction (None until the user predicts).
    pub prediction: Option<Prediction>,

    /// Normalized feature vector behind the last prediction, for the chart.
    pub scaled: Option<Vec<f64>>,

    /// Error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(artifacts: &'static Artifacts) -> Self {
        Self {
            artifacts,
            inputs: CANONICAL_FEATURES.iter().map(|&(_, default)| default).collect(),
            prediction: None,
            scaled: None,
            status_message: None,
        }
    }

    /// Materialize the current widget values as an ordered FeatureVector.
    /// Rebuilt on every interaction; never cached.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector::from_canonical_values(&self.inputs)
    }

    /// Restore all thirty inputs to their documented defaults.
    pub fn reset_defaults(&mut self) {
        for (value, &(_, default)) in self.inputs.iter_mut().zip(&CANONICAL_FEATURES) {
            *value = default;
        }
        self.prediction = None;
        self.scaled = None;
        self.status_message = None;
    }

    /// Run one classification over the current inputs.
    pub fn run_prediction(&mut self) {
        let features = self.feature_vector();

        match predictor::predict(&features, &self.artifacts.scaler, &self.artifacts.classifier) {
            Ok(prediction) => {
                log::info!(
                    "prediction: {} (score {:.4})",
                    prediction.diagnosis,
                    prediction.score
                );
                // Schema equality just verified by predict, so the transform
                // here sees the same alignment.
                self.scaled = Some(self.artifacts.scaler.transform(&features));
                self.prediction = Some(prediction);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("prediction failed: {e}");
                self.prediction = None;
                self.scaled = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
