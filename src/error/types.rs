//! Error types
//!
//! Defines domain-specific error types for each module of the CMS server.

use std::fmt;
use std::io;

/// Document store errors
#[derive(Debug)]
pub enum StoreError {
    NotFound(String),
    InvalidName(String),
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(name) => write!(f, "Document not found: {}", name),
            StoreError::InvalidName(name) => write!(f, "Invalid document name: {}", name),
            StoreError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl StoreError {
    /// Maps an IO error on a named document, turning `NotFound` into the
    /// store-level variant so callers can recover it as a user-facing miss.
    pub fn from_io(name: &str, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(name.to_string())
        } else {
            StoreError::Io(error)
        }
    }
}

/// General CMS server error that encompasses all error types
#[derive(Debug)]
pub enum CmsError {
    Store(StoreError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for CmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CmsError::Store(e) => write!(f, "Store error: {}", e),
            CmsError::Config(e) => write!(f, "Configuration error: {}", e),
            CmsError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CmsError {}

impl From<StoreError> for CmsError {
    fn from(error: StoreError) -> Self {
        CmsError::Store(error)
    }
}

impl From<config::ConfigError> for CmsError {
    fn from(error: config::ConfigError) -> Self {
        CmsError::Config(error)
    }
}

impl From<io::Error> for CmsError {
    fn from(error: io::Error) -> Self {
        CmsError::Io(error)
    }
}
