// ---------------------------------------------------------------------------
// Canonical input schema
// ---------------------------------------------------------------------------

/// The thirty tumor features in canonical order, each with the default value
/// shown in the input widgets.
///
/// The names are data, not identifiers: they must match the scaler artifact
/// byte for byte, including the space in the `concave points_*` columns.
pub const CANONICAL_FEATURES: [(&str, f64); 30] = [
    ("radius_mean", 14.0),
    ("texture_mean", 20.0),
    ("perimeter_mean", 90.0),
    ("area_mean", 600.0),
    ("smoothness_mean", 0.1),
    ("compactness_mean", 0.15),
    ("concavity_mean", 0.2),
    ("concave points_mean", 0.1),
    ("symmetry_mean", 0.2),
    ("fractal_dimension_mean", 0.06),
    ("radius_se", 0.2),
    ("texture_se", 1.0),
    ("perimeter_se", 1.5),
    ("area_se", 20.0),
    ("smoothness_se", 0.005),
    ("compactness_se", 0.02),
    ("concavity_se", 0.03),
    ("concave points_se", 0.01),
    ("symmetry_se", 0.03),
    ("fractal_dimension_se", 0.004),
    ("radius_worst", 16.0),
    ("texture_worst", 25.0),
    ("perimeter_worst", 105.0),
    ("area_worst", 800.0),
    ("smoothness_worst", 0.12),
    ("compactness_worst", 0.2),
    ("concavity_worst", 0.3),
    ("concave points_worst", 0.15),
    ("symmetry_worst", 0.25),
    ("fractal_dimension_worst", 0.08),
];

// ---------------------------------------------------------------------------
// FeatureVector – one tumor sample as an ordered name → value mapping
// ---------------------------------------------------------------------------

/// An ordered mapping from feature name to value. Order is significant: the
/// predictor refuses inference unless the name sequence equals the scaler's
/// fitted sequence exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    entries: Vec<(String, f64)>,
}

impl FeatureVector {
    /// Build from explicit (name, value) pairs, preserving their order.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        FeatureVector {
            entries: entries
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// Pair the canonical names with the given values, in canonical order.
    ///
    /// `values` must hold one value per canonical feature; the UI state keeps
    /// its widget values parallel to [`CANONICAL_FEATURES`].
    pub fn from_canonical_values(values: &[f64]) -> Self {
        FeatureVector {
            entries: CANONICAL_FEATURES
                .iter()
                .zip(values)
                .map(|(&(name, _), &value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// All thirty features at their documented defaults.
    pub fn defaults() -> Self {
        FeatureVector {
            entries: CANONICAL_FEATURES
                .iter()
                .map(|&(name, default)| (name.to_string(), default))
                .collect(),
        }
    }

    /// Feature names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Feature values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_schema_has_thirty_features() {
        assert_eq!(CANONICAL_FEATURES.len(), 30);

        let defaults = FeatureVector::defaults();
        assert_eq!(defaults.len(), 30);
        assert_eq!(defaults.names().next(), Some("radius_mean"));
        assert_eq!(defaults.names().last(), Some("fractal_dimension_worst"));
    }

    #[test]
    fn canonical_names_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for (name, _) in CANONICAL_FEATURES {
            assert!(seen.insert(name), "duplicate feature name: {name}");
        }
    }

    #[test]
    fn from_canonical_values_preserves_order() {
        let values: Vec<f64> = (0..30).map(f64::from).collect();
        let fv = FeatureVector::from_canonical_values(&values);

        assert_eq!(fv.len(), 30);
        assert_eq!(fv.values().collect::<Vec<_>>(), values);
        assert!(fv.names().eq(CANONICAL_FEATURES.iter().map(|&(n, _)| n)));
    }
}
