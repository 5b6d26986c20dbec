/// Model layer: input schema, artifacts, and inference.
///
/// Architecture:
/// ```text
///  bc_scaler.json / bc_model.json
///        │
///        ▼
///   ┌───────────┐
///   │ artifacts  │  deserialize once → process-wide (scaler, classifier)
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ predictor  │  schema check → scale → forward pass → threshold
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ Prediction │  score in [0,1] + Benign/Malignant
///   └───────────┘
/// ```

pub mod artifacts;
pub mod features;
pub mod network;
pub mod predictor;
pub mod scaler;
