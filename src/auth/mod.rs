//! Authentication
//!
//! Credential checking behind a trait so the policy can be replaced
//! without touching handler logic.

pub mod credentials;

pub use credentials::{CredentialChecker, StaticCredentials};
