//! Configuration for sow

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "sow";
/// Config file looked up in the working directory when no other is found.
pub const LOCAL_CONFIG_FILE: &str = "sow.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file to load instead of the built-in one
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Hardiness zone used by `calendar` when none is given
    #[serde(default = "default_zone")]
    pub default_zone: String,

    #[serde(default = "default_dimension")]
    pub default_width: u32,

    #[serde(default = "default_dimension")]
    pub default_height: u32,

    /// Plants used by `plan` and `visualize` when none are given
    #[serde(default = "default_plants")]
    pub default_plants: Vec<String>,

    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_zone() -> String {
    "6a".to_string()
}

fn default_dimension() -> u32 {
    10
}

fn default_plants() -> Vec<String> {
    vec!["tomato".into(), "basil".into(), "lettuce".into()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            default_zone: default_zone(),
            default_width: default_dimension(),
            default_height: default_dimension(),
            default_plants: default_plants(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::read(config_path);
        }

        let default_paths = [
            dirs::config_dir().map(|p| p.join(APP_NAME).join("config.ron")),
            Some(PathBuf::from(LOCAL_CONFIG_FILE)),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::read(path);
            }
        }

        Ok(Config::default())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    /// Default plot size as `(width, height)`.
    pub fn default_size(&self) -> (u32, u32) {
        (self.default_width, self.default_height)
    }
}
