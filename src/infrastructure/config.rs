// src/infrastructure/config.rs
use crate::constants::{API_BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::domain::DomainError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// `<config dir>/prompt-admin/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the explicit file, or the default file if there is one.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(?path, "Using provided config file");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Using default config file");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Pick the API base URL: CLI flag, then environment, then this file.
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> Result<String, DomainError> {
        let from_env = std::env::var(API_BASE_URL_ENV).ok();
        resolve_base_url(cli_override, from_env.as_deref(), self.api_base_url.as_deref())
    }
}

/// First non-blank value wins.
pub fn resolve_base_url(
    cli_override: Option<&str>,
    from_env: Option<&str>,
    from_file: Option<&str>,
) -> Result<String, DomainError> {
    [
        ("command line", cli_override),
        ("environment", from_env),
        ("config file", from_file),
    ]
    .into_iter()
    .find_map(|(source, value)| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                debug!(source, base_url = v, "Resolved API base URL");
                v.to_string()
            })
    })
    .ok_or_else(|| {
        DomainError::Config(format!(
            "No API base URL configured. Pass --api-url, set {} or add api_base_url to the config file",
            API_BASE_URL_ENV
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_all_sources_when_resolving_then_cli_wins() {
        let url = resolve_base_url(
            Some("http://cli"),
            Some("http://env"),
            Some("http://file"),
        )
        .unwrap();

        assert_eq!(url, "http://cli");
    }

    #[test]
    fn given_blank_cli_and_env_when_resolving_then_falls_back_to_file() {
        let url = resolve_base_url(Some("  "), Some(""), Some("http://file")).unwrap();

        assert_eq!(url, "http://file");
    }

    #[test]
    fn given_env_only_when_resolving_then_uses_env() {
        let url = resolve_base_url(None, Some(" http://env "), None).unwrap();

        assert_eq!(url, "http://env");
    }

    #[test]
    fn given_no_source_when_resolving_then_returns_config_error() {
        let result = resolve_base_url(None, None, None);

        assert!(matches!(result, Err(DomainError::Config(_))));
    }

    #[test]
    fn given_config_when_saving_and_loading_then_keeps_base_url() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config = Config {
            api_base_url: Some("http://localhost:3000".to_string()),
        };

        config.save(&config_path).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert!(content.contains(r#"api_base_url = "http://localhost:3000""#));
        assert_eq!(loaded, config);
    }

    #[test]
    fn given_empty_file_when_loading_then_base_url_is_unset() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded.api_base_url, None);
    }

    #[test]
    fn given_missing_explicit_file_when_discovering_then_fails() {
        let temp_dir = TempDir::new().unwrap();

        let result = Config::discover(Some(&temp_dir.path().join("absent.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn given_invalid_toml_when_loading_then_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "api_base_url = [").unwrap();

        assert!(Config::load(&config_path).is_err());
    }
}
