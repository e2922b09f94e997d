use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Environment variable that overrides the configured port
pub const PORT_ENV_VAR: &str = "PAGE_AUDIT_PORT";

/// Configuration for fetching pages and serving the audit API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Request timeout for fetching a page, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent when fetching pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl AuditConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            AuditError::config(format!("cannot open {}: {}", path.display(), e))
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var(PORT_ENV_VAR) {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => ::log::warn!("Ignoring invalid {}: {}", PORT_ENV_VAR, port),
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(AuditError::config("timeout_secs must be greater than zero"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AuditError::config("user_agent must not be empty"));
        }
        Ok(())
    }

    /// `address:port` string for binding the server
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    10
}

/// Default value for user_agent, a desktop browser so pages serve their normal markup
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

/// Default value for bind_address
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Default value for port
fn default_port() -> u16 {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AuditConfig = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.bind_address, "127.0.0.1");
    }

    #[test]
    fn test_validate() {
        let config = AuditConfig {
            timeout_secs: 0,
            ..AuditConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AuditConfig {
            user_agent: "  ".to_string(),
            ..AuditConfig::default()
        };
        assert!(config.validate().is_err());

        assert!(AuditConfig::default().validate().is_ok());
    }
}
