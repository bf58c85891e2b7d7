use crate::error::{Result, TandemError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for tandem, stored as JSON in the user config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TandemConfig {
    /// Default display label for the left column (e.g. "English")
    #[serde(default)]
    pub left_language: Option<String>,

    /// Default display label for the right column
    #[serde(default)]
    pub right_language: Option<String>,

    /// Whether CLI searches wrap around by default
    #[serde(default = "default_search_wrap")]
    pub search_wrap: bool,
}

fn default_search_wrap() -> bool {
    true
}

impl Default for TandemConfig {
    fn default() -> Self {
        Self {
            left_language: None,
            right_language: None,
            search_wrap: default_search_wrap(),
        }
    }
}

impl TandemConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TandemError::Io)?;
        let config: TandemConfig =
            serde_json::from_str(&content).map_err(TandemError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TandemError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TandemError::Serialization)?;
        fs::write(config_path, content).map_err(TandemError::Io)?;
        Ok(())
    }
}
