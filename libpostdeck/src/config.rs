//! Configuration management for Postdeck

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the posts API, without a trailing slash
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Author id used by the CLI tools when none is given
    pub user: String,
}

impl Config {
    /// Load configuration from the default location
    ///
    /// Falls back to [`Config::default_config`] if no config file exists.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            return Ok(Self::default_config());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: std::env::var("POSTDECK_API_URL")
                    .unwrap_or_else(|_| "http://localhost:3000/fakeApi".to_string()),
            },
            defaults: DefaultsConfig {
                user: "anonymous".to_string(),
            },
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("POSTDECK_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("postdeck").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://posts.example.com/api\"\n\n[defaults]\nuser = \"user-1\"\n"
        )
        .unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.api.base_url, "https://posts.example.com/api");
        assert_eq!(config.defaults.user, "user-1");
    }

    #[test]
    fn test_load_from_path_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();

        let result = Config::load_from_path(&file.path().to_path_buf());
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_has_author() {
        let config = Config::default_config();
        assert_eq!(config.defaults.user, "anonymous");
        assert!(!config.api.base_url.is_empty());
    }

    #[test]
    #[serial_test::serial]
    fn test_env_var_overrides_config_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://env.example.com/api\"\n\n[defaults]\nuser = \"env-user\"\n"
        )
        .unwrap();

        std::env::set_var("POSTDECK_CONFIG", file.path());

        let resolved = resolve_config_path().unwrap();
        assert_eq!(resolved, file.path().to_path_buf());

        let config = Config::load().unwrap();
        assert_eq!(config.api.base_url, "https://env.example.com/api");
        assert_eq!(config.defaults.user, "env-user");

        std::env::remove_var("POSTDECK_CONFIG");
    }
}
