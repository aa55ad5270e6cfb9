pub mod artifacts;
pub mod features;
pub mod predictor;
pub mod regressor;
pub mod scaler;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Feature count mismatch: model expects {expected}, row has {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("No scaling parameters for feature {0}")]
    UnknownFeature(String),
    #[error("Scaler has {names} feature names but {means} means and {scales} scales")]
    MisalignedScaler {
        names: usize,
        means: usize,
        scales: usize,
    },
}

#[cfg(test)]
pub mod fixtures {
    use super::artifacts::ModelArtifacts;
    use super::features::NUMERIC_COLUMNS;
    use super::regressor::LinearRegressor;
    use super::scaler::StandardScaler;
    use shared::Activity;
    use strum::IntoEnumIterator;

    pub fn full_columns() -> Vec<String> {
        NUMERIC_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(Activity::iter().map(|a| a.column_name()))
            .collect()
    }

    pub fn identity_scaler() -> StandardScaler {
        StandardScaler {
            feature_names: NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
            mean: vec![0.0; NUMERIC_COLUMNS.len()],
            scale: vec![1.0; NUMERIC_COLUMNS.len()],
        }
    }

    /// Five kcal per minute, plus ten when running.
    pub fn duration_model() -> ModelArtifacts {
        let columns = full_columns();
        let mut coefficients = vec![0.0; columns.len()];
        coefficients[0] = 5.0;
        coefficients[6] = 10.0;
        ModelArtifacts::new(
            Box::new(LinearRegressor {
                intercept: 0.0,
                coefficients,
            }),
            Box::new(identity_scaler()),
            columns,
        )
        .expect("fixture columns are complete")
    }
}
