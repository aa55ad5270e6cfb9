use std::sync::Arc;

use log::{debug, warn};
use shared::UserInput;
use uuid::Uuid;

use super::ModelError;
use super::artifacts::ModelArtifacts;
use super::features::{ActivityEncoding, FeatureRow, NumericFeatures};

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Feature scaling failed: {0}")]
    Scaling(#[source] ModelError),
    #[error("Model prediction failed: {0}")]
    Model(#[source] ModelError),
    #[error("Model returned no output")]
    EmptyOutput,
    #[error("Model returned a non-finite estimate: {0}")]
    NonFinite(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieEstimate {
    pub calories: f64,
    pub activity: ActivityEncoding,
}

/// Turns one dashboard input into a calorie estimate using the loaded model.
#[derive(Clone)]
pub struct CaloriePredictor {
    artifacts: Arc<ModelArtifacts>,
}

impl CaloriePredictor {
    pub fn new(artifacts: Arc<ModelArtifacts>) -> Self {
        Self { artifacts }
    }

    pub fn assemble_features(&self, input: &UserInput) -> Result<FeatureRow<'_>, PredictionError> {
        let raw = NumericFeatures::from(input);
        let scaled = self
            .artifacts
            .scaler()
            .transform(&raw)
            .map_err(PredictionError::Scaling)?;

        Ok(self
            .artifacts
            .layout()
            .assemble(self.artifacts.columns(), &scaled, input.activity))
    }

    pub fn predict(&self, request_id: Uuid, input: &UserInput) -> Result<CalorieEstimate, PredictionError> {
        let row = self.assemble_features(input)?;
        debug!(
            "Prediction {}: feature row over {} columns: {:?}",
            request_id,
            row.columns().len(),
            row.values()
        );
        if row.activity() == ActivityEncoding::Unmapped {
            warn!(
                "Prediction {}: model has no {} column; activity ignored",
                request_id,
                input.activity.column_name()
            );
        }

        let output = self
            .artifacts
            .predictor()
            .predict(row.as_matrix())
            .map_err(PredictionError::Model)?;
        let calories = output.get(0).copied().ok_or(PredictionError::EmptyOutput)?;
        if !calories.is_finite() {
            return Err(PredictionError::NonFinite(calories));
        }

        Ok(CalorieEstimate {
            calories,
            activity: row.activity(),
        })
    }
}
