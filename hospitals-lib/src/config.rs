use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result, fs::config_dir};

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "hospitals.toml";

/// Core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "current_version")]
    pub version: u16,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Where and how to reach the hospital resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection URL of the resource.
    pub endpoint: String,
    /// Per-request timeout. Requests wait indefinitely when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn current_version() -> u16 {
    CURRENT_CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            api: ApiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/api/hospitales".into(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(FILE_NAME))
    }

    /// Load the configuration from its default location, falling back to the defaults if it
    /// can't be read.
    pub fn load() -> Self {
        match Self::path().and_then(|path| Self::load_from(&path)) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("Using default configuration: {err}");
                Self::default()
            }
        }
    }

    /// Load the configuration at `path`. A missing file is created with the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let cfg = Self::default();
            cfg.save_to(path)?;
            return Ok(cfg);
        }

        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        if cfg.version > CURRENT_CONFIG_VERSION {
            warn!(
                "Configuration version {} is newer than this build understands ({})",
                cfg.version, CURRENT_CONFIG_VERSION
            );
        }
        debug!("Loaded configuration from {}", path.display());

        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, contents).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::tempdir;

    use super::{ApiConfig, Config};
    use crate::Error;

    #[test]
    fn test_missing_file_is_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("hospitals.toml");

        let cfg = Config::load_from(&path).unwrap();

        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn test_load_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hospitals.toml");
        fs::write(
            &path,
            r#"
version = 1

[api]
endpoint = "https://hospitals.example.org/v2/hospitales"
timeout_secs = 30
"#,
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();

        assert_eq!(
            cfg.api,
            ApiConfig {
                endpoint: "https://hospitals.example.org/v2/hospitales".into(),
                timeout_secs: Some(30),
            }
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hospitals.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hospitals.toml");
        fs::write(&path, "[api\nendpoint = ").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_round_trip_without_timeout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hospitals.toml");

        Config::default().save_to(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();

        assert!(!contents.contains("timeout_secs"));
        assert!(contents.contains("endpoint = \"http://localhost:8080/api/hospitales\""));
    }
}
