//! Filename validation
//!
//! Checks document names before they reach the filesystem.

/// A name is acceptable for a new document when it is non-empty after
/// trimming. Mirrors the create form's only hard requirement.
pub fn valid_filename(candidate: &str) -> bool {
    !candidate.trim().is_empty()
}

/// Rejects names that could escape the store root: path separators and
/// `..` components never name a document.
pub fn safe_filename(candidate: &str) -> bool {
    !candidate.contains(['/', '\\']) && candidate != ".." && candidate != "."
}

/// Entries worth listing contain at least one word character. Filters out
/// `.`, `..` and pure-punctuation names from directory listings.
pub fn listable_filename(name: &str) -> bool {
    name.chars().any(|c| c.is_alphanumeric() || c == '_')
}
