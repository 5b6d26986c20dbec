use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};

use super::network::NeuralNet;
use super::scaler::StandardScaler;

// ---------------------------------------------------------------------------
// Fixed artifact locations
// ---------------------------------------------------------------------------

pub const SCALER_PATH: &str = "bc_scaler.json";
pub const MODEL_PATH: &str = "bc_model.json";

// ---------------------------------------------------------------------------
// Artifacts – the process-wide (scaler, classifier) pair
// ---------------------------------------------------------------------------

/// The pre-fitted scaler and pre-trained classifier, loaded once per process
/// and shared read-only thereafter.
#[derive(Debug)]
pub struct Artifacts {
    pub scaler: StandardScaler,
    pub classifier: NeuralNet,
}

impl Artifacts {
    /// Deserialize and validate both artifacts from the given paths.
    pub fn load_from(scaler_path: &Path, model_path: &Path) -> Result<Self> {
        let scaler: StandardScaler = read_json(scaler_path)
            .with_context(|| format!("loading scaler artifact {}", scaler_path.display()))?;
        scaler
            .validate()
            .with_context(|| format!("validating scaler artifact {}", scaler_path.display()))?;

        let classifier: NeuralNet = read_json(model_path)
            .with_context(|| format!("loading model artifact {}", model_path.display()))?;
        classifier
            .validate(scaler.n_features())
            .with_context(|| format!("validating model artifact {}", model_path.display()))?;

        Ok(Artifacts { scaler, classifier })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).context("reading file")?;
    serde_json::from_str(&text).context("parsing JSON")
}

// ---------------------------------------------------------------------------
// One-shot process-wide initialization
// ---------------------------------------------------------------------------

static ARTIFACTS: OnceLock<Artifacts> = OnceLock::new();

/// Load both artifacts from their fixed paths and install them as the
/// process-wide singleton. Repeated calls return the cached pair; a failed
/// load installs nothing, and the process cannot serve any prediction.
pub fn load() -> Result<&'static Artifacts> {
    if let Some(artifacts) = ARTIFACTS.get() {
        return Ok(artifacts);
    }
    let loaded = Artifacts::load_from(Path::new(SCALER_PATH), Path::new(MODEL_PATH))?;
    Ok(ARTIFACTS.get_or_init(|| loaded))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALER_JSON: &str = r#"{
        "feature_names": ["a", "b"],
        "mean": [1.0, 2.0],
        "scale": [1.0, 2.0]
    }"#;

    const MODEL_JSON: &str = r#"{
        "layers": [
            { "weights": [[1.0, 1.0]], "biases": [0.0], "activation": "sigmoid" }
        ]
    }"#;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("onco-lens-test-{name}"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_consistent_artifact_pair() {
        let scaler = write_temp("pair-scaler.json", SCALER_JSON);
        let model = write_temp("pair-model.json", MODEL_JSON);

        let artifacts = Artifacts::load_from(&scaler, &model).unwrap();
        assert_eq!(artifacts.scaler.n_features(), 2);
        assert_eq!(artifacts.classifier.n_inputs(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let scaler = write_temp("missing-scaler.json", SCALER_JSON);
        let model = Path::new("definitely/not/here/bc_model.json");

        assert!(Artifacts::load_from(&scaler, model).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let scaler = write_temp("bad-scaler.json", "{ not json ]");
        let model = write_temp("bad-json-model.json", MODEL_JSON);

        assert!(Artifacts::load_from(&scaler, &model).is_err());
    }

    #[test]
    fn model_mismatching_scaler_width_is_an_error() {
        // Scaler fits 2 features, model expects 3 inputs.
        let scaler = write_temp("width-scaler.json", SCALER_JSON);
        let model = write_temp(
            "width-model.json",
            r#"{
                "layers": [
                    { "weights": [[1.0, 1.0, 1.0]], "biases": [0.0], "activation": "sigmoid" }
                ]
            }"#,
        );

        assert!(Artifacts::load_from(&scaler, &model).is_err());
    }
}
