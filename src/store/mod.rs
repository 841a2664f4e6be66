//! Document storage
//!
//! Handles file operations and name validation for the document store.

pub mod operations;
pub mod validation;

pub use operations::{DirectorySnapshot, DocumentStore};
pub use validation::{safe_filename, valid_filename};
