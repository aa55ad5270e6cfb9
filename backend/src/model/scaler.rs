use serde::{Deserialize, Serialize};

use super::ModelError;
use super::features::{NUMERIC_COLUMNS, NumericFeatures};

/// Maps raw numeric features onto the range the model was trained on.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &NumericFeatures) -> Result<NumericFeatures, ModelError>;
}

/// Per-feature standardisation, `(x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Checks the parameter vectors line up and cover every numeric feature.
    pub fn validate(&self) -> Result<(), ModelError> {
        let n = self.feature_names.len();
        if self.mean.len() != n || self.scale.len() != n {
            return Err(ModelError::MisalignedScaler {
                names: n,
                means: self.mean.len(),
                scales: self.scale.len(),
            });
        }
        match NUMERIC_COLUMNS
            .iter()
            .find(|col| !self.feature_names.iter().any(|name| name == *col))
        {
            Some(missing) => Err(ModelError::UnknownFeature(missing.to_string())),
            None => Ok(()),
        }
    }

    fn params(&self, name: &str) -> Option<(f64, f64)> {
        let idx = self.feature_names.iter().position(|n| n == name)?;
        let mean = *self.mean.get(idx)?;
        let scale = *self.scale.get(idx)?;
        // Constant features are left unscaled.
        let scale = if scale == 0.0 { 1.0 } else { scale };
        Some((mean, scale))
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &NumericFeatures) -> Result<NumericFeatures, ModelError> {
        let mut scaled = [0.0; 5];
        for (slot, (name, value)) in scaled.iter_mut().zip(features.named()) {
            let (mean, scale) = self
                .params(name)
                .ok_or_else(|| ModelError::UnknownFeature(name.to_string()))?;
            *slot = (value - mean) / scale;
        }
        Ok(NumericFeatures::from_values(scaled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            feature_names: vec![
                "MET".into(),
                "Duration_min".into(),
                "HeartRate_bpm".into(),
                "Weight_kg".into(),
                "Height_cm".into(),
            ],
            mean: vec![5.0, 60.0, 120.0, 70.0, 170.0],
            scale: vec![2.0, 30.0, 0.0, 10.0, 10.0],
        }
    }

    #[test]
    fn standardises_by_feature_name() {
        let raw = NumericFeatures::from_values([90.0, 130.0, 80.0, 150.0, 9.0]);
        let scaled = scaler().transform(&raw).unwrap();
        assert_eq!(scaled.duration_min, 1.0);
        assert_eq!(scaled.heart_rate_bpm, 10.0);
        assert_eq!(scaled.weight_kg, 1.0);
        assert_eq!(scaled.height_cm, -2.0);
        assert_eq!(scaled.met, 2.0);
    }

    #[test]
    fn validate_rejects_misaligned_parameters() {
        let mut bad = scaler();
        bad.scale.pop();
        assert!(matches!(
            bad.validate(),
            Err(ModelError::MisalignedScaler { names: 5, means: 5, scales: 4 })
        ));

        let mut partial = scaler();
        partial.feature_names[0] = "Age".into();
        assert!(matches!(
            partial.validate(),
            Err(ModelError::UnknownFeature(name)) if name == "MET"
        ));
        assert!(matches!(
            partial.transform(&NumericFeatures::from_values([0.0; 5])),
            Err(ModelError::UnknownFeature(name)) if name == "MET"
        ));
    }
}
