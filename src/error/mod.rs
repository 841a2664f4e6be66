//! Error handling
//!
//! Defines error types for the CMS server modules.

pub mod types;

pub use types::{CmsError, StoreError};
