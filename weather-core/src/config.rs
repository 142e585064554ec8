use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Settings owned by a single [`crate::WeatherClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// endpoint = "https://api.openweathermap.org/data/2.5/forecast"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Overrides the forecast endpoint, e.g. to point at a local stub.
    pub endpoint: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = self.to_toml()?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-compare", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Picks the API key: explicit override, then environment, then the stored one.
    /// A blank source is skipped rather than shadowing the next one.
    pub fn resolve_api_key(&self, explicit: Option<&str>, env: Option<&str>) -> Result<String> {
        let nonblank = |key: &&str| !key.trim().is_empty();

        explicit
            .filter(nonblank)
            .or(env.filter(nonblank))
            .or(self.api_key.as_deref().filter(nonblank))
            .map(str::to_owned)
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: run `weather configure`, pass --api-key, or set {API_KEY_ENV}."
                )
            })
    }

    /// Builds the client settings for a resolved key.
    pub fn client_config(&self, explicit: Option<&str>, env: Option<&str>) -> Result<ClientConfig> {
        self.resolve_api_key(explicit, env).map(ClientConfig::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.resolve_api_key(None, None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `weather configure`"));
    }

    #[test]
    fn resolve_api_key_prefers_explicit_then_env_then_file() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.resolve_api_key(Some("CLI_KEY"), Some("ENV_KEY")).unwrap(), "CLI_KEY");
        assert_eq!(cfg.resolve_api_key(None, Some("ENV_KEY")).unwrap(), "ENV_KEY");
        assert_eq!(cfg.resolve_api_key(None, None).unwrap(), "FILE_KEY");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let cfg = Config { api_key: Some("   ".into()), ..Config::default() };
        assert!(cfg.resolve_api_key(None, None).is_err());
    }

    #[test]
    fn blank_env_key_falls_through_to_file() {
        let cfg = Config { api_key: Some("FILE_KEY".into()), ..Config::default() };

        assert_eq!(cfg.resolve_api_key(None, Some("")).unwrap(), "FILE_KEY");
        assert_eq!(cfg.resolve_api_key(Some("  "), Some("ENV_KEY")).unwrap(), "ENV_KEY");
    }

    #[test]
    fn client_config_carries_resolved_key() {
        let cfg = Config { api_key: Some("KEY".into()), ..Config::default() };
        assert_eq!(cfg.client_config(None, None).unwrap(), ClientConfig::new("KEY"));
    }

    #[test]
    fn toml_roundtrip_keeps_endpoint_override() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            endpoint: Some("http://localhost:9000/forecast".into()),
        };

        let text = cfg.to_toml().unwrap();
        assert!(text.contains("api_key = \"KEY\""));
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }
}
