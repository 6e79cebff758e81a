//! Configuration management
//!
//! Settings live in `~/.quotebook/config.yaml`. The base directory can be
//! moved with the `QUOTEBOOK_HOME` environment variable, which also relocates
//! the default database.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the Quotebook base directory.
pub const HOME_ENV: &str = "QUOTEBOOK_HOME";

/// File name used by `export` when no output path is given.
pub const DEFAULT_EXPORT_FILE: &str = "quotes.json";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["database_path", "export_file", "color"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database location; defaults to `<home>/quotebook.db`
    pub database_path: Option<PathBuf>,

    /// Default target for `quotebook export`
    pub export_file: String,

    /// Colored terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            color: true,
        }
    }
}

/// Returns the Quotebook base directory.
pub fn quotebook_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }

    Ok(dirs::home_dir()
        .context("Could not find home directory")?
        .join(".quotebook"))
}

impl Config {
    /// Loads the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Like [`load`](Self::load), but an unreadable file is logged and
    /// replaced by the defaults. `quotebook config` still reports the error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config: {e:#}");
            Self::default()
        })
    }

    /// Writes the config file, creating the base directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_yaml()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(quotebook_home()?.join("config.yaml"))
    }

    fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(content).map_err(|e| anyhow::anyhow!("{e}"))
    }

    fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| anyhow::anyhow!("{e}"))
    }

    /// Returns the value of a config key as display text.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "database_path" => Ok(self
                .database_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "export_file" => Ok(self.export_file.clone()),
            "color" => Ok(self.color.to_string()),
            _ => bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
    }

    /// Sets a config key from its text form. An empty `database_path`
    /// restores the default location.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "database_path" => {
                self.database_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "export_file" => {
                if value.is_empty() {
                    bail!("export_file must not be empty");
                }
                self.export_file = value.to_string();
            }
            "color" => {
                self.color = match value {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => bail!("Invalid value '{}' for color, expected true or false", value),
                };
            }
            _ => bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database_path, None);
        assert_eq!(config.export_file, "quotes.json");
        assert!(config.color);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = Config::from_yaml("color: false\n").unwrap();
        assert!(!config.color);
        assert_eq!(config.export_file, "quotes.json");
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.set("database_path", "/tmp/q.db").unwrap();
        config.set("export_file", "backup.json").unwrap();
        config.set("color", "off").unwrap();

        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();
        assert_eq!(config.get("database_path").unwrap(), "");

        config.set("database_path", "/data/quotes.db").unwrap();
        assert_eq!(config.get("database_path").unwrap(), "/data/quotes.db");

        config.set("database_path", "").unwrap();
        assert_eq!(config.database_path, None);

        config.set("color", "false").unwrap();
        assert_eq!(config.get("color").unwrap(), "false");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("export_file", "").is_err());
        assert!(config.set("nope", "1").is_err());
        assert!(config.get("nope").is_err());
    }
}
