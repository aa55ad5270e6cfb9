use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::de::DeserializeOwned;

use super::ModelError;
use super::features::FeatureLayout;
use super::regressor::{LinearRegressor, Regressor};
use super::scaler::{FeatureScaler, StandardScaler};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Column list has no {0} column")]
    MissingColumn(String),
    #[error("Invalid scaler: {0}")]
    InvalidScaler(#[source] ModelError),
}

/// Locations of the three files a trained model ships as.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub predictor: PathBuf,
    pub scaler: PathBuf,
    pub columns: PathBuf,
}

/// Everything a prediction needs, loaded once and never mutated.
pub struct ModelArtifacts {
    predictor: Box<dyn Regressor>,
    scaler: Box<dyn FeatureScaler>,
    columns: Vec<String>,
    layout: FeatureLayout,
}

impl ModelArtifacts {
    pub fn new(
        predictor: Box<dyn Regressor>,
        scaler: Box<dyn FeatureScaler>,
        columns: Vec<String>,
    ) -> Result<Self, ArtifactError> {
        let layout = FeatureLayout::from_columns(&columns)?;
        Ok(Self {
            predictor,
            scaler,
            columns,
            layout,
        })
    }

    /// Loads the model files. Returns `Ok(None)` when any of them is missing,
    /// so the caller can run without prediction instead of failing. Nothing
    /// is parsed until all three are known to exist.
    pub fn load(paths: &ArtifactPaths) -> Result<Option<Self>, ArtifactError> {
        let predictor = read_raw(&paths.predictor)?;
        let scaler = read_raw(&paths.scaler)?;
        let columns = read_raw(&paths.columns)?;

        let (Some(predictor), Some(scaler), Some(columns)) = (predictor, scaler, columns) else {
            return Ok(None);
        };

        let predictor = parse_json::<LinearRegressor>(&paths.predictor, &predictor)?;
        let scaler = parse_json::<StandardScaler>(&paths.scaler, &scaler)?;
        let columns = parse_json::<Vec<String>>(&paths.columns, &columns)?;

        scaler.validate().map_err(ArtifactError::InvalidScaler)?;

        let artifacts = Self::new(Box::new(predictor), Box::new(scaler), columns)?;
        info!(
            "Loaded model artifacts: {} feature columns",
            artifacts.columns.len()
        );
        for activity in artifacts.layout.unmapped_activities() {
            warn!(
                "Model has no {} column; {} sessions will be predicted without an activity signal",
                activity.column_name(),
                activity
            );
        }
        Ok(Some(artifacts))
    }

    pub fn predictor(&self) -> &dyn Regressor {
        self.predictor.as_ref()
    }

    pub fn scaler(&self) -> &dyn FeatureScaler {
        self.scaler.as_ref()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }
}

fn read_raw(path: &Path) -> Result<Option<String>, ArtifactError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Model artifact not found: {}", path.display());
            Ok(None)
        }
        Err(source) => Err(ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_json<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, ArtifactError> {
    serde_json::from_str(raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{full_columns, identity_scaler};
    use shared::Activity;
    use tempfile::TempDir;

    fn write_artifacts(dir: &TempDir, columns: &[String]) -> ArtifactPaths {
        let paths = ArtifactPaths {
            predictor: dir.path().join("final_model.json"),
            scaler: dir.path().join("final_scaler.json"),
            columns: dir.path().join("final_columns.json"),
        };
        let model = LinearRegressor {
            intercept: 1.0,
            coefficients: vec![0.5; columns.len()],
        };
        fs::write(&paths.predictor, serde_json::to_string(&model).unwrap()).unwrap();
        fs::write(&paths.scaler, serde_json::to_string(&identity_scaler()).unwrap()).unwrap();
        fs::write(&paths.columns, serde_json::to_string(columns).unwrap()).unwrap();
        paths
    }

    #[test]
    fn loads_complete_artifact_set() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(&dir, &full_columns());

        let artifacts = ModelArtifacts::load(&paths).unwrap().expect("all files present");
        assert_eq!(artifacts.columns(), full_columns().as_slice());
        assert!(artifacts.layout().activity(Activity::Walking).is_encoded());
    }

    #[test]
    fn any_missing_file_disables_the_model() {
        for remove in 0..3 {
            let dir = tempfile::tempdir().unwrap();
            let paths = write_artifacts(&dir, &full_columns());
            let victim = [&paths.predictor, &paths.scaler, &paths.columns][remove];
            fs::remove_file(victim).unwrap();

            assert!(ModelArtifacts::load(&paths).unwrap().is_none());
        }
    }

    #[test]
    fn missing_file_wins_over_a_corrupt_one() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(&dir, &full_columns());
        fs::remove_file(&paths.predictor).unwrap();
        fs::write(&paths.columns, "{not json").unwrap();

        assert!(matches!(ModelArtifacts::load(&paths), Ok(None)));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(&dir, &full_columns());
        fs::write(&paths.columns, "{not json").unwrap();

        assert!(matches!(
            ModelArtifacts::load(&paths),
            Err(ArtifactError::Parse { path, .. }) if path == paths.columns
        ));
    }

    #[test]
    fn column_list_without_numeric_feature_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let columns: Vec<String> = full_columns()
            .into_iter()
            .filter(|c| c != "Weight_kg")
            .collect();
        let paths = write_artifacts(&dir, &columns);

        assert!(matches!(
            ModelArtifacts::load(&paths),
            Err(ArtifactError::MissingColumn(name)) if name == "Weight_kg"
        ));
    }

    #[test]
    fn misaligned_scaler_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(&dir, &full_columns());
        let mut scaler = identity_scaler();
        scaler.mean.truncate(2);
        fs::write(&paths.scaler, serde_json::to_string(&scaler).unwrap()).unwrap();

        assert!(matches!(
            ModelArtifacts::load(&paths),
            Err(ArtifactError::InvalidScaler(ModelError::MisalignedScaler { names: 5, means: 2, scales: 5 }))
        ));
    }
}
