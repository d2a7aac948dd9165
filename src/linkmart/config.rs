use crate::error::{LinkmartError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

const CONFIG_FILENAME: &str = "config.json";

/// Fallback base for generated links when the configured one is unusable.
pub const DEFAULT_LINK: &str = "http://example.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const MIN_PASSWORD_LEN: usize = 4;

/// Configuration for linkmart, stored in the data dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkmartConfig {
    /// Base URL that generated links are built on
    #[serde(default = "default_link")]
    pub default_link: String,

    /// Password required for destructive admin actions (page deletion)
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

fn default_link() -> String {
    DEFAULT_LINK.to_string()
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

impl Default for LinkmartConfig {
    fn default() -> Self {
        Self {
            default_link: default_link(),
            admin_password: default_admin_password(),
        }
    }
}

impl LinkmartConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LinkmartError::Io)?;
        let config: LinkmartConfig =
            serde_json::from_str(&content).map_err(LinkmartError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LinkmartError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LinkmartError::Serialization)?;
        fs::write(config_path, content).map_err(LinkmartError::Io)?;
        Ok(())
    }

    /// Set the base URL for generated links. Must be a full URL including
    /// the scheme.
    pub fn set_default_link(&mut self, link: &str) -> Result<()> {
        Url::parse(link).map_err(|_| {
            LinkmartError::InvalidUrl(format!(
                "{} (expected a full URL including http:// or https://)",
                link
            ))
        })?;
        self.default_link = link.to_string();
        Ok(())
    }

    /// Change the admin password. The current password must match and the
    /// new one must be at least four characters.
    pub fn set_admin_password(&mut self, current: &str, new: &str) -> Result<()> {
        if current != self.admin_password {
            return Err(LinkmartError::Unauthorized(
                "current admin password is incorrect".to_string(),
            ));
        }
        if new.len() < MIN_PASSWORD_LEN {
            return Err(LinkmartError::Api(format!(
                "admin password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }
        self.admin_password = new.to_string();
        Ok(())
    }
}
