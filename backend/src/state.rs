use std::sync::Arc;

use shared::StatusResponse;

use crate::model::artifacts::{ArtifactPaths, ModelArtifacts};
use crate::model::predictor::CaloriePredictor;

/// Application context shared by every worker. Built once at startup.
pub struct AppState {
    predictor: Option<CaloriePredictor>,
    setup_error: String,
}

impl AppState {
    pub fn new(artifacts: Option<ModelArtifacts>, paths: &ArtifactPaths) -> Self {
        Self {
            predictor: artifacts.map(|a| CaloriePredictor::new(Arc::new(a))),
            setup_error: format!(
                "Model files not found! Run the training pipeline first to produce {}, {} and {}.",
                paths.predictor.display(),
                paths.scaler.display(),
                paths.columns.display()
            ),
        }
    }

    pub fn predictor(&self) -> Option<&CaloriePredictor> {
        self.predictor.as_ref()
    }

    pub fn setup_error(&self) -> &str {
        &self.setup_error
    }

    pub fn status(&self) -> StatusResponse {
        match self.predictor {
            Some(_) => StatusResponse {
                ready: true,
                message: None,
            },
            None => StatusResponse {
                ready: false,
                message: Some(self.setup_error.clone()),
            },
        }
    }
}
