use crate::error::{Result, TagverError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for tagver.
///
/// Every field has a default so a missing or partial file is fine; CLI flags
/// override whatever was loaded.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Tag prefix stripped when parsing and re-attached when formatting
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Remote that created tags are pushed to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Abort on the first malformed tag instead of skipping it
    #[serde(default)]
    pub strict: bool,

    /// Push the created tag without requiring the --push flag
    #[serde(default)]
    pub push: bool,
}

fn default_prefix() -> String {
    "v".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: default_prefix(),
            remote: default_remote(),
            strict: false,
            push: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagver.toml` in current directory
/// 3. `.tagver.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./tagver.toml").exists() {
        fs::read_to_string("./tagver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| TagverError::config(e.to_string()))
}
