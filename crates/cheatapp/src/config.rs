use crate::error::{CheatError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_CATALOG_DIRNAME: &str = "catalogs";

/// Configuration for cheat, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CheatConfig {
    /// Directory holding catalog files. `None` means `<data dir>/catalogs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,

    /// Print code blocks when rendering examples
    #[serde(default = "default_show_code")]
    pub show_code: bool,
}

fn default_show_code() -> bool {
    true
}

impl Default for CheatConfig {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            show_code: default_show_code(),
        }
    }
}

impl CheatConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CheatError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| CheatError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CheatError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CheatError::Serialization)?;
        fs::write(config_path, content).map_err(CheatError::Io)?;
        Ok(())
    }

    /// The catalog directory, resolved against the data directory.
    pub fn catalog_dir(&self, data_dir: &Path) -> PathBuf {
        match &self.catalog_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => data_dir.join(dir),
            None => data_dir.join(DEFAULT_CATALOG_DIRNAME),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog-dir" => Some(
                self.catalog_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "show-code" => Some(self.show_code.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "catalog-dir" => {
                let value = value.trim();
                self.catalog_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "show-code" => {
                self.show_code = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for show-code: {}", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
