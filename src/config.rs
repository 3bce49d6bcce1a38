//! Configuration loading
//!
//! Reads `~/.config/linkwise/config.toml` (or an explicit path) and applies
//! environment overrides for the API key. A broken file never stops the
//! program: defaults are used and the problem is reported as a warning.

mod types;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use types::{
    AiConfig, ClipboardBackend, ClipboardConfig, Config, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

const CONFIG_DIR: &str = "linkwise";
const CONFIG_FILE: &str = "config.toml";

/// Environment variables checked for the API key, in priority order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loaded configuration plus an optional warning for the user
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default config location: `~/.config/linkwise/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Read and parse a config file
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_config_file(path: &Path) -> Result<Option<Config>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Load configuration from `path` (or the default location) and the environment
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = path.map(Path::to_path_buf).or_else(default_config_path);

    let (mut config, warning) = match path {
        None => (Config::default(), None),
        Some(path) => match read_config_file(&path) {
            Ok(Some(config)) => {
                log::debug!("Loaded config from {}", path.display());
                (config, None)
            }
            Ok(None) => (Config::default(), None),
            Err(e) => {
                log::warn!("{e}; using defaults");
                (Config::default(), Some(e.to_string()))
            }
        },
    };

    apply_env_overrides(&mut config.ai, |name| std::env::var(name).ok());

    ConfigResult { config, warning }
}

/// Replace the configured API key with the first non-blank environment value
pub fn apply_env_overrides<F>(ai: &mut AiConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let from_env = API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty());

    if let Some(key) = from_env {
        ai.api_key = Some(key);
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
