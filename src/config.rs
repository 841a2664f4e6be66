//! Configuration management for the inkpad CMS server
//!
//! All values are fixed at startup: loaded from an optional config.toml,
//! overridden by INKPAD_-prefixed environment variables, validated once
//! before the server binds.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Complete server configuration, loaded once during startup
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Directory holding the documents
    pub contents_dir: String,

    /// Directory used instead of `contents_dir` when INKPAD_ENV=test
    pub test_contents_dir: String,

    /// Name of the session cookie handed to clients
    pub session_cookie: String,

    /// The single accepted credential pair
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            contents_dir: "contents".to_string(),
            test_contents_dir: "test/contents".to_string(),
            session_cookie: "inkpad_session".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "secret".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from config.toml (if present) with environment
    /// overrides, falling back to built-in defaults for anything unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = ServerConfig::default();

        let settings = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("port", defaults.port as i64)?
            .set_default("contents_dir", defaults.contents_dir)?
            .set_default("test_contents_dir", defaults.test_contents_dir)?
            .set_default("session_cookie", defaults.session_cookie)?
            .set_default("admin_username", defaults.admin_username)?
            .set_default("admin_password", defaults.admin_password)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("INKPAD"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Root directory the document store operates over. Switches to the
    /// test directory when INKPAD_ENV=test, so test runs never touch the
    /// real contents.
    pub fn contents_path(&self) -> PathBuf {
        if std::env::var("INKPAD_ENV").as_deref() == Ok("test") {
            PathBuf::from(&self.test_contents_dir)
        } else {
            PathBuf::from(&self.contents_dir)
        }
    }

    /// Socket address string for the HTTP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message(
                "port must be non-zero".to_string(),
            ));
        }

        if self.contents_dir.trim().is_empty() || self.test_contents_dir.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "contents directories must not be empty".to_string(),
            ));
        }

        if self.session_cookie.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "session_cookie must not be empty".to_string(),
            ));
        }

        if self.admin_username.trim().is_empty() || self.admin_password.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "admin credentials must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
