//! Global configuration management
//!
//! Provides Git-like global configuration stored in `~/.jot/config.toml`.
//! Recognized keys are `user.name` and `user.email`; unset values fall back
//! to the `JOT_AUTHOR_NAME` / `JOT_AUTHOR_EMAIL` environment variables and
//! finally to the built-in defaults.

use crate::core::error::{JotError, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default author name when nothing is configured
pub const DEFAULT_AUTHOR_NAME: &str = "Jot User";

/// Default author email when nothing is configured
pub const DEFAULT_AUTHOR_EMAIL: &str = "jot@localhost";

/// Global configuration for Jot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// User configuration
    #[serde(default)]
    pub user: UserConfig,
}

/// User-specific configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// User's name for commits
    pub name: Option<String>,
    /// User's email for commits
    pub email: Option<String>,
}

/// Recognized configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    UserName,
    UserEmail,
}

impl ConfigKey {
    pub fn parse(key: &str) -> Result<Self> {
        match key {
            "user.name" => Ok(ConfigKey::UserName),
            "user.email" => Ok(ConfigKey::UserEmail),
            _ => Err(JotError::UnknownConfigKey {
                key: key.to_string(),
            }),
        }
    }
}

impl GlobalConfig {
    /// Path of the global config file
    pub fn config_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new().ok_or(JotError::HomeDirectoryNotFound)?;
        Ok(user_dirs.home_dir().join(".jot").join("config.toml"))
    }

    /// Load the global config, returning defaults if the file is absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load a config from an explicit path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| JotError::configuration_error(format!("invalid config file: {e}")))
    }

    /// Save the global config, creating its directory if needed
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save a config to an explicit path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| JotError::configuration_error(format!("serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Read a configuration value
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::UserName => self.user.name.as_deref(),
            ConfigKey::UserEmail => self.user.email.as_deref(),
        }
    }

    /// Set a configuration value
    pub fn set(&mut self, key: ConfigKey, value: String) {
        match key {
            ConfigKey::UserName => self.user.name = Some(value),
            ConfigKey::UserEmail => self.user.email = Some(value),
        }
    }
}

/// Resolved author identity for a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorIdentity {
    pub name: String,
    pub email: String,
}

impl AuthorIdentity {
    /// Resolve the identity from config and environment overrides. The
    /// environment values are passed in by the frontend rather than read
    /// here, so resolution is testable without mutating the process
    /// environment.
    pub fn resolve(
        config: &GlobalConfig,
        env_name: Option<String>,
        env_email: Option<String>,
    ) -> Self {
        let name = env_name
            .or_else(|| config.user.name.clone())
            .unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string());
        let email = env_email
            .or_else(|| config.user.email.clone())
            .unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string());
        Self { name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let config = GlobalConfig::load_from(&temp.path().join("config.toml")).unwrap();
        assert!(config.user.name.is_none());
        assert!(config.user.email.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = GlobalConfig::default();
        config.set(ConfigKey::UserName, "Alice".into());
        config.set(ConfigKey::UserEmail, "alice@example.com".into());
        config.save_to(&path).unwrap();

        let reloaded = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.get(ConfigKey::UserName), Some("Alice"));
        assert_eq!(reloaded.get(ConfigKey::UserEmail), Some("alice@example.com"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(
            ConfigKey::parse("core.editor"),
            Err(JotError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn test_identity_resolution_order() {
        let mut config = GlobalConfig::default();
        config.set(ConfigKey::UserName, "Config Name".into());

        // Environment beats config
        let identity = AuthorIdentity::resolve(&config, Some("Env Name".into()), None);
        assert_eq!(identity.name, "Env Name");
        // Config beats defaults
        let identity = AuthorIdentity::resolve(&config, None, None);
        assert_eq!(identity.name, "Config Name");
        // Defaults fill the rest
        assert_eq!(identity.email, DEFAULT_AUTHOR_EMAIL);
    }
}
