use std::{fs, path::PathBuf};

use hospitals_lib::fs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

/// The GUI's own configuration, serialized to TOML next to the core configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiConfig {
    #[serde(default)]
    pub theme: Theme,
}

impl GuiConfig {
    /// Load from disk, writing the defaults out on first run. Any problem is logged and the
    /// defaults are used.
    pub fn load() -> Self {
        let path = match config_dir() {
            Ok(dir) => dir.join(FILE_NAME),
            Err(err) => {
                warn!("Using default GUI configuration: {err}");
                return Self::default();
            }
        };

        if path.exists() {
            match fs::read_to_string(&path).map(|contents| toml::from_str::<Self>(&contents)) {
                Ok(Ok(cfg)) => cfg,
                Ok(Err(err)) => {
                    warn!("Malformed {}: {err}", path.display());
                    Self::default()
                }
                Err(err) => {
                    warn!("Could not read {}: {err}", path.display());
                    Self::default()
                }
            }
        } else {
            let cfg = Self::default();
            cfg.save(path);
            cfg
        }
    }

    pub fn save(&self, path: PathBuf) {
        let result = toml::to_string_pretty(self)
            .map_err(|e| e.to_string())
            .and_then(|contents| fs::write(&path, contents).map_err(|e| e.to_string()));

        if let Err(err) = result {
            warn!("Could not save {}: {err}", path.display());
        }
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

#[cfg(test)]
mod test {
    use super::{GuiConfig, theme::Theme};

    #[test]
    fn test_parse() {
        let cfg: GuiConfig = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(cfg.theme, Theme::Light);

        let cfg: GuiConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, GuiConfig::default());
    }
}
