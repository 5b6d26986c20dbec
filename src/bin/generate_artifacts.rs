use serde_json::json;

/// Fitted standardization statistics per feature: (name, mean, std), in the
/// canonical order the application collects inputs. The values follow the
/// Wisconsin diagnostic dataset the classifier was trained against.
const FITTED_STATS: [(&str, f64, f64); 30] = [
    ("radius_mean", 14.127, 3.524),
    ("texture_mean", 19.290, 4.301),
    ("perimeter_mean", 91.969, 24.299),
    ("area_mean", 654.889, 351.914),
    ("smoothness_mean", 0.0964, 0.0141),
    ("compactness_mean", 0.1043, 0.0528),
    ("concavity_mean", 0.0888, 0.0797),
    ("concave points_mean", 0.0489, 0.0388),
    ("symmetry_mean", 0.1812, 0.0274),
    ("fractal_dimension_mean", 0.0628, 0.0071),
    ("radius_se", 0.4052, 0.2773),
    ("texture_se", 1.2169, 0.5516),
    ("perimeter_se", 2.8661, 2.0219),
    ("area_se", 40.337, 45.491),
    ("smoothness_se", 0.0070, 0.0030),
    ("compactness_se", 0.0255, 0.0179),
    ("concavity_se", 0.0319, 0.0302),
    ("concave points_se", 0.0118, 0.0062),
    ("symmetry_se", 0.0205, 0.0083),
    ("fractal_dimension_se", 0.0038, 0.0026),
    ("radius_worst", 16.269, 4.833),
    ("texture_worst", 25.677, 6.146),
    ("perimeter_worst", 107.261, 33.603),
    ("area_worst", 880.583, 569.357),
    ("smoothness_worst", 0.1324, 0.0228),
    ("compactness_worst", 0.2543, 0.1573),
    ("concavity_worst", 0.2722, 0.2086),
    ("concave points_worst", 0.1146, 0.0657),
    ("symmetry_worst", 0.2901, 0.0619),
    ("fractal_dimension_worst", 0.0839, 0.0181),
];

const HIDDEN_UNITS: usize = 16;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn gauss_matrix(rng: &mut SimpleRng, rows: usize, cols: usize, std_dev: f64) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gauss(0.0, std_dev)).collect())
        .collect()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // ---- Scaler artifact ----
    let feature_names: Vec<&str> = FITTED_STATS.iter().map(|&(name, _, _)| name).collect();
    let mean: Vec<f64> = FITTED_STATS.iter().map(|&(_, m, _)| m).collect();
    let scale: Vec<f64> = FITTED_STATS.iter().map(|&(_, _, s)| s).collect();

    let scaler = json!({
        "feature_names": feature_names,
        "mean": mean,
        "scale": scale,
    });

    // ---- Model artifact: 30 → 16 relu → 1 sigmoid ----
    let n_features = FITTED_STATS.len();
    let hidden_std = (2.0 / n_features as f64).sqrt();
    let output_std = 1.0 / (HIDDEN_UNITS as f64).sqrt();

    let model = json!({
        "layers": [
            {
                "weights": gauss_matrix(&mut rng, HIDDEN_UNITS, n_features, hidden_std),
                "biases": vec![0.0; HIDDEN_UNITS],
                "activation": "relu",
            },
            {
                "weights": gauss_matrix(&mut rng, 1, HIDDEN_UNITS, output_std),
                "biases": [-0.1],
                "activation": "sigmoid",
            },
        ],
    });

    let scaler_text = serde_json::to_string_pretty(&scaler).expect("serializing scaler");
    std::fs::write("bc_scaler.json", scaler_text).expect("writing bc_scaler.json");

    let model_text = serde_json::to_string_pretty(&model).expect("serializing model");
    std::fs::write("bc_model.json", model_text).expect("writing bc_model.json");

    println!(
        "Wrote bc_scaler.json ({n_features} features) and bc_model.json ({n_features} → {HIDDEN_UNITS} → 1)"
    );
}
