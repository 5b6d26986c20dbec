use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Activation functions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Identity,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Identity => x,
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }
}

// ---------------------------------------------------------------------------
// DenseLayer – one fully-connected layer
// ---------------------------------------------------------------------------

/// One dense layer: `weights` is row-major, one row per output unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
    pub activation: Activation,
}

impl DenseLayer {
    fn out_dim(&self) -> usize {
        self.weights.len()
    }

    fn in_dim(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, &bias)| {
                let pre: f64 = row.iter().zip(input).map(|(&w, &x)| w * x).sum::<f64>() + bias;
                self.activation.apply(pre)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// NeuralNet – the pre-trained binary classifier
// ---------------------------------------------------------------------------

/// A feed-forward binary classifier, deserialized from the model artifact.
/// Immutable after load; the final layer is a single sigmoid unit, so
/// [`NeuralNet::predict`] always lands in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuralNet {
    layers: Vec<DenseLayer>,
}

impl NeuralNet {
    pub fn new(layers: Vec<DenseLayer>) -> Self {
        NeuralNet { layers }
    }

    /// Check the layer dimension chain after deserialization.
    ///
    /// `n_inputs` is the scaler's output dimensionality; the chain must run
    /// from there down to a single sigmoid output.
    pub fn validate(&self, n_inputs: usize) -> Result<()> {
        if self.layers.is_empty() {
            bail!("model artifact has no layers");
        }

        let mut dim = n_inputs;
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.out_dim() == 0 {
                bail!("model artifact: layer {i} has no units");
            }
            if layer.biases.len() != layer.out_dim() {
                bail!(
                    "model artifact: layer {i} has {} units but {} biases",
                    layer.out_dim(),
                    layer.biases.len()
                );
            }
            for (u, row) in layer.weights.iter().enumerate() {
                if row.len() != dim {
                    bail!(
                        "model artifact: layer {i} unit {u} expects {dim} inputs, has {} weights",
                        row.len()
                    );
                }
                if row.iter().any(|w| !w.is_finite()) {
                    bail!("model artifact: non-finite weight in layer {i} unit {u}");
                }
            }
            if layer.biases.iter().any(|b| !b.is_finite()) {
                bail!("model artifact: non-finite bias in layer {i}");
            }
            dim = layer.out_dim();
        }

        let last = &self.layers[self.layers.len() - 1];
        if last.out_dim() != 1 {
            bail!(
                "model artifact: final layer has {} outputs, expected a single score",
                last.out_dim()
            );
        }
        if last.activation != Activation::Sigmoid {
            bail!("model artifact: final layer must be sigmoid to produce a score in [0, 1]");
        }
        Ok(())
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, DenseLayer::in_dim)
    }

    /// Layer widths as "30 → 16 → 1", for the status bar.
    pub fn shape(&self) -> String {
        let mut shape = self.n_inputs().to_string();
        for layer in &self.layers {
            shape.push_str(" → ");
            shape.push_str(&layer.out_dim().to_string());
        }
        shape
    }

    /// Forward pass over a normalized input vector, returning the single
    /// output scalar. Dimensions are guaranteed by [`NeuralNet::validate`].
    pub fn predict(&self, input: &[f64]) -> f64 {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current);
        }
        current[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_sigmoid(weights: Vec<f64>, bias: f64) -> NeuralNet {
        NeuralNet::new(vec![DenseLayer {
            weights: vec![weights],
            biases: vec![bias],
            activation: Activation::Sigmoid,
        }])
    }

    #[test]
    fn zero_weights_score_exactly_half() {
        let net = single_sigmoid(vec![0.0, 0.0], 0.0);
        assert!(net.validate(2).is_ok());
        assert_eq!(net.predict(&[3.0, -7.0]), 0.5);
    }

    #[test]
    fn sigmoid_output_stays_in_unit_interval() {
        let net = single_sigmoid(vec![100.0], 50.0);
        let hi = net.predict(&[100.0]);
        let lo = net.predict(&[-100.0]);
        assert!((0.0..=1.0).contains(&hi));
        assert!((0.0..=1.0).contains(&lo));
        assert!(hi > 0.5 && lo < 0.5);
    }

    #[test]
    fn hidden_relu_layer_forwards_correctly() {
        // 2 → 2 relu → 1 sigmoid, weights chosen so the pre-activation of the
        // output unit is 0 and the score is exactly 0.5.
        let net = NeuralNet::new(vec![
            DenseLayer {
                weights: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
                biases: vec![0.0, 0.0],
                activation: Activation::Relu,
            },
            DenseLayer {
                weights: vec![vec![1.0, -1.0]],
                biases: vec![0.0],
                activation: Activation::Sigmoid,
            },
        ]);
        assert!(net.validate(2).is_ok());
        // relu([2, 2]) = [2, 2]; 2 - 2 = 0; sigmoid(0) = 0.5
        assert_eq!(net.predict(&[2.0, 2.0]), 0.5);
        // relu([-1, 1]) = [0, 1]; 0 - 1 = -1; sigmoid(-1) < 0.5
        assert!(net.predict(&[-1.0, 1.0]) < 0.5);
    }

    #[test]
    fn validate_rejects_broken_dimension_chain() {
        let net = NeuralNet::new(vec![
            DenseLayer {
                weights: vec![vec![1.0, 0.0]],
                biases: vec![0.0],
                activation: Activation::Relu,
            },
            DenseLayer {
                // expects 1 input after the previous layer, declares 3
                weights: vec![vec![1.0, 1.0, 1.0]],
                biases: vec![0.0],
                activation: Activation::Sigmoid,
            },
        ]);
        assert!(net.validate(2).is_err());
    }

    #[test]
    fn validate_rejects_non_sigmoid_output() {
        let net = NeuralNet::new(vec![DenseLayer {
            weights: vec![vec![1.0]],
            biases: vec![0.0],
            activation: Activation::Identity,
        }]);
        assert!(net.validate(1).is_err());
    }

    #[test]
    fn validate_rejects_multi_output_final_layer() {
        let net = NeuralNet::new(vec![DenseLayer {
            weights: vec![vec![1.0], vec![2.0]],
            biases: vec![0.0, 0.0],
            activation: Activation::Sigmoid,
        }]);
        assert!(net.validate(1).is_err());
    }

    #[test]
    fn deserializes_from_artifact_json() {
        let json = r#"{
            "layers": [
                {
                    "weights": [[0.5, -0.5]],
                    "biases": [0.1],
                    "activation": "sigmoid"
                }
            ]
        }"#;
        let net: NeuralNet = serde_json::from_str(json).unwrap();
        assert!(net.validate(2).is_ok());
        assert_eq!(net.shape(), "2 → 1");
    }
}
