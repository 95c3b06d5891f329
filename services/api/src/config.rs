//! HTTP server configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ALLOWED_ORIGINS: &str = "https://hollywoodchase.github.io,http://localhost:3000";
/// JSON bodies and uploads are accepted up to 50 MiB
const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Server settings
///
/// # Environment Variables
/// - `BIND_HOST`: Interface to listen on (default: "0.0.0.0")
/// - `PORT`: Port to listen on (default: 5000)
/// - `ALLOWED_ORIGINS`: Comma separated CORS origins
/// - `MAX_BODY_BYTES`: Request body limit in bytes (default: 50 MiB)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
    pub allowed_origins: String,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Load the configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_host", DEFAULT_BIND_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("allowed_origins", DEFAULT_ALLOWED_ORIGINS)?
            .set_default("max_body_bytes", DEFAULT_MAX_BODY_BYTES as i64)?
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// CORS origins, trimmed, empty entries dropped
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = ["BIND_HOST", "PORT", "ALLOWED_ORIGINS", "MAX_BODY_BYTES"];

    fn clear() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(
            config.origins(),
            vec!["https://hollywoodchase.github.io", "http://localhost:3000"]
        );
    }

    #[test]
    #[serial]
    fn test_environment_overrides_defaults() {
        clear();
        unsafe {
            std::env::set_var("PORT", "8080");
            std::env::set_var("ALLOWED_ORIGINS", " https://parks.example , ,http://localhost:5173");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.origins(),
            vec!["https://parks.example", "http://localhost:5173"]
        );

        clear();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear();
        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }

        assert!(ServerConfig::from_env().is_err());

        clear();
    }
}
