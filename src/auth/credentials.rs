//! Credential checking
//!
//! The sign-in handlers depend on this trait, not on a literal credential
//! pair, so the placeholder policy can grow into a real user store later.

use crate::config::ServerConfig;

/// Decides whether a username/password pair is accepted.
pub trait CredentialChecker {
    fn check(&self, username: &str, password: &str) -> bool;
}

/// The single accepted credential pair, injected from configuration.
/// Plaintext comparison - a placeholder auth policy, not a security
/// contract.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(&config.admin_username, &config.admin_password)
    }
}

impl CredentialChecker for StaticCredentials {
    fn check(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
