//! Configuration management for the RAX web server
//!
//! All values are loaded once at startup and never change while the server
//! runs. Each connection worker receives the same immutable `ServerConfig`
//! through an `Arc`.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration file name (`config.toml`, extension resolved by the loader)
pub const DEFAULT_CONFIG_NAME: &str = "config";

/// Environment variable prefix, e.g. `RAX_WEB_HTTP_PORT` or `RAX_WEB_FTP__HOST`
const ENV_PREFIX: &str = "RAX_WEB";

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address the HTTP listener binds to
    pub bind_address: String,

    /// Port for the HTTP listener
    pub http_port: u16,

    /// Directory every served file is read from and every fallback download is written to
    pub document_root: String,

    /// Chunk size used when streaming files to clients and from the FTP data channel
    pub buffer_size: usize,

    /// Remote store used when a plain-text file is missing locally
    pub ftp: FtpConfig,
}

/// Credentials and address of the remote FTP store
#[derive(Debug, Deserialize, Clone)]
pub struct FtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            http_port: 6789,
            document_root: "../Public/".to_string(),
            buffer_size: 4096,
            ftp: FtpConfig::default(),
        }
    }
}

impl Default for FtpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 21,
            username: "testuser".to_string(),
            password: "testpass".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` (optional) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_NAME)
    }

    /// Load configuration from the named file (optional) with environment overrides.
    ///
    /// Keys missing from both the file and the environment fall back to the
    /// values of `ServerConfig::default()`.
    pub fn load_from(config_name: &str) -> Result<Self, config::ConfigError> {
        let defaults = ServerConfig::default();

        let settings = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("http_port", i64::from(defaults.http_port))?
            .set_default("document_root", defaults.document_root)?
            .set_default("buffer_size", defaults.buffer_size as i64)?
            .set_default("ftp.host", defaults.ftp.host)?
            .set_default("ftp.port", i64::from(defaults.ftp.port))?
            .set_default("ftp.username", defaults.ftp.username)?
            .set_default("ftp.password", defaults.ftp.password)?
            .add_source(File::with_name(config_name).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.http_port == 0 {
            return Err(config::ConfigError::Message("http_port cannot be 0".into()));
        }

        if self.document_root.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "document_root cannot be empty".into(),
            ));
        }

        if self.buffer_size == 0 {
            return Err(config::ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            ));
        }

        if self.ftp.host.trim().is_empty() {
            return Err(config::ConfigError::Message("ftp.host cannot be empty".into()));
        }

        if self.ftp.port == 0 {
            return Err(config::ConfigError::Message("ftp.port cannot be 0".into()));
        }

        Ok(())
    }

    /// Get bind address and HTTP port as socket address
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.http_port)
    }

    /// Get the document root as PathBuf
    pub fn document_root_path(&self) -> PathBuf {
        PathBuf::from(&self.document_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.listen_socket(), "0.0.0.0:6789");
        assert_eq!(config.document_root_path(), PathBuf::from("../Public/"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ServerConfig::load_from("definitely-not-a-config-file").unwrap();
        assert_eq!(config.ftp.port, 21);
        assert_eq!(config.ftp.username, "testuser");
        assert_eq!(config.buffer_size, 4096);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ServerConfig::default();
        config.document_root = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.ftp.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.buffer_size = 0;
        assert!(config.validate().is_err());
    }
}
