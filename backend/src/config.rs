use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::artifacts::ArtifactPaths;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidOverride { key: &'static str, value: String },
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerConfig,
    pub artifacts: ArtifactConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub dir: PathBuf,
    pub predictor: String,
    pub scaler: String,
    pub columns: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrontendConfig {
    pub dist_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            predictor: "final_model.json".to_string(),
            scaler: "final_scaler.json".to_string(),
            columns: "final_columns.json".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reads `config/dashboard.yaml` (or `DASHBOARD_CONFIG`), then applies
    /// environment overrides. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("DASHBOARD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());

        let mut config = if path.exists() {
            log::info!("Loading config from {}", path.display());
            Self::from_path(&path)?
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidOverride { key: "PORT", value: port })?;
        }
        if let Some(dir) = lookup("ARTIFACT_DIR") {
            self.artifacts.dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        let dir = &self.artifacts.dir;
        ArtifactPaths {
            predictor: dir.join(&self.artifacts.predictor),
            scaler: dir.join(&self.artifacts.scaler),
            columns: dir.join(&self.artifacts.columns),
        }
    }

    pub fn frontend_dir(&self) -> PathBuf {
        if let Some(dir) = &self.frontend.dist_dir {
            return dir.clone();
        }
        match std::env::var("CARGO_MANIFEST_DIR") {
            Ok(manifest_dir) => PathBuf::from(format!("{}/../frontend/dist", manifest_dir)),
            Err(_) => PathBuf::from("/usr/src/app/frontend/dist"),
        }
    }
}

fn default_config_path() -> PathBuf {
    match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(manifest_dir) => PathBuf::from(format!("{}/../config/dashboard.yaml", manifest_dir)),
        Err(_) => PathBuf::from("config/dashboard.yaml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: DashboardConfig = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.artifact_paths().scaler,
            PathBuf::from("./final_scaler.json")
        );
    }

    #[test]
    fn env_overrides_win() {
        let mut config = DashboardConfig::default();
        config
            .apply_overrides(|key| match key {
                "PORT" => Some("7000".to_string()),
                "ARTIFACT_DIR" => Some("/srv/model".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:7000");
        assert_eq!(
            config.artifact_paths().predictor,
            PathBuf::from("/srv/model/final_model.json")
        );
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = DashboardConfig::default();
        let err = config
            .apply_overrides(|key| (key == "PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverride { key: "PORT", .. }));
    }

    #[test]
    fn shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/dashboard.yaml");
        let config = DashboardConfig::from_path(&path).unwrap();
        assert_eq!(config.artifacts.columns, "final_columns.json");
    }
}
