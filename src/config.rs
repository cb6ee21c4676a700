//! Top-level application configuration.
//!
//! Configuration is stored in `.ideahub/config.yaml` and includes:
//! - The platform API base URL
//! - The bearer token used to authenticate as the current member
//! - The timeout applied to every remote call

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IdeaHubError, Result};
use crate::paths::config_path;

/// Default API endpoint of the platform backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Keys accepted by `ideahub config get/set`
pub const CONFIG_KEYS: &[&str] = &["api.base_url", "auth.token", "remote_timeout"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Platform API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Authentication tokens
    #[serde(default)]
    pub auth: AuthConfig,

    /// Remote operation timeout in seconds (default: 30)
    #[serde(default = "default_remote_timeout")]
    pub remote_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
            remote_timeout: default_remote_timeout(),
        }
    }
}

fn default_remote_timeout() -> u64 {
    30
}

/// Platform API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Authentication configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            IdeaHubError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                IdeaHubError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            IdeaHubError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Owner read/write only, the file may hold a token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(path, permissions).map_err(|e| {
                IdeaHubError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set permissions on config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        Ok(())
    }

    /// Get the API base URL from environment variable or config, without a trailing slash
    pub fn base_url(&self) -> String {
        if let Ok(url) = env::var("IDEAHUB_API_URL")
            && !url.is_empty()
        {
            return url.trim_end_matches('/').to_string();
        }

        self.api.base_url.trim_end_matches('/').to_string()
    }

    /// Get the bearer token from environment variable or config
    pub fn token(&self) -> Option<String> {
        if let Ok(token) = env::var("IDEAHUB_TOKEN")
            && !token.is_empty()
        {
            return Some(token);
        }

        self.auth.token.clone()
    }

    /// Get the remote operation timeout duration
    pub fn remote_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.remote_timeout)
    }

    /// Read a single key as it is stored in the file (tokens are masked)
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api.base_url" => Ok(Some(self.api.base_url.clone())),
            "auth.token" => Ok(self.auth.token.as_ref().map(|t| mask_token(t))),
            "remote_timeout" => Ok(Some(self.remote_timeout.to_string())),
            _ => Err(IdeaHubError::InvalidConfigKey(key.to_string())),
        }
    }

    /// Set a single key from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(IdeaHubError::Config(format!(
                        "api.base_url must start with http:// or https://, got '{value}'"
                    )));
                }
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "auth.token" => {
                self.auth.token = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "remote_timeout" => {
                let seconds: u64 = value.parse().map_err(|_| {
                    IdeaHubError::Config(format!(
                        "remote_timeout must be a whole number of seconds, got '{value}'"
                    ))
                })?;
                if seconds == 0 {
                    return Err(IdeaHubError::Config(
                        "remote_timeout must be greater than zero".to_string(),
                    ));
                }
                self.remote_timeout = seconds;
            }
            _ => return Err(IdeaHubError::InvalidConfigKey(key.to_string())),
        }
        Ok(())
    }
}

/// Show only the last four characters of a secret
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("****{tail}")
}
