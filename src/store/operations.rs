//! Store operations
//!
//! Handles filesystem operations for documents: listing, reading, writing,
//! creating, and deleting files inside the store root.

use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::validation::{listable_filename, safe_filename, valid_filename};

/// A flat-directory document store. The directory is the sole source of
/// truth; nothing is cached across requests.
pub struct DocumentStore {
    root: PathBuf,
}

/// Directory listing taken at the start of a request. Existence checks for
/// the rest of that request run against this snapshot, not the live
/// directory.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    entries: Vec<String>,
}

impl DirectorySnapshot {
    pub fn contains(&self, filename: &str) -> bool {
        self.entries.iter().any(|entry| entry == filename)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists the documents in the store root, excluding entries without a
    /// word character. Sorted so listing order is stable across platforms.
    pub fn snapshot(&self) -> Result<DirectorySnapshot, StoreError> {
        let mut entries = vec![];

        for entry in fs::read_dir(&self.root).map_err(|e| {
            error!("Failed to list store root {}: {}", self.root.display(), e);
            StoreError::Io(e)
        })? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if listable_filename(&name) {
                entries.push(name);
            }
        }

        entries.sort();
        Ok(DirectorySnapshot { entries })
    }

    /// Reads a document's raw bytes. A file deleted between snapshot and
    /// read surfaces as `NotFound`.
    pub fn read(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        fs::read(self.root.join(filename)).map_err(|e| {
            StoreError::from_io(filename, e)
        })
    }

    /// Fully overwrites a document's content, creating the file if absent.
    /// No partial-write recovery: a write that fails midway may leave
    /// truncated content.
    pub fn write(&self, filename: &str, content: &str) -> Result<(), StoreError> {
        fs::write(self.root.join(filename), content)
            .map_err(|e| StoreError::from_io(filename, e))?;
        info!("Updated document {}", filename);
        Ok(())
    }

    /// Creates an empty document. Truncates an existing file of the same
    /// name. Handlers validate names before calling; this re-check is the
    /// backstop that keeps a bad name from ever reaching the filesystem.
    pub fn create(&self, filename: &str) -> Result<(), StoreError> {
        if !valid_filename(filename) || !safe_filename(filename) {
            warn!("Refused to create document with name {:?}", filename);
            return Err(StoreError::InvalidName(filename.to_string()));
        }

        fs::File::create(self.root.join(filename))
            .map_err(|e| StoreError::from_io(filename, e))?;
        info!("Created document {}", filename);
        Ok(())
    }

    /// Removes a document. `NotFound` if it is already gone.
    pub fn delete(&self, filename: &str) -> Result<(), StoreError> {
        fs::remove_file(self.root.join(filename))
            .map_err(|e| StoreError::from_io(filename, e))?;
        info!("Deleted document {}", filename);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_snapshot_lists_created_documents() {
        let (_dir, store) = scratch_store();
        store.create("about.md").unwrap();
        store.create("changes.txt").unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.entries(), ["about.md", "changes.txt"]);
        assert!(snapshot.contains("about.md"));
        assert!(!snapshot.contains("missing.txt"));
    }

    #[test]
    fn test_snapshot_filters_punctuation_names() {
        let (_dir, store) = scratch_store();
        store.create("notes.txt").unwrap();
        store.create("---").unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.entries(), ["notes.txt"]);
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let (_dir, store) = scratch_store();
        store.create("zebra.txt").unwrap();
        store.create("apple.txt").unwrap();
        store.create("mango.md").unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.entries(), ["apple.txt", "mango.md", "zebra.txt"]);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_dir, store) = scratch_store();
        store.write("history.txt", "Ruby 0.95 released").unwrap();

        let content = store.read("history.txt").unwrap();
        assert_eq!(content, b"Ruby 0.95 released");
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let (_dir, store) = scratch_store();
        store.write("draft.txt", "first").unwrap();
        store.write("draft.txt", "second").unwrap();

        assert_eq!(store.read("draft.txt").unwrap(), b"second");
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let (_dir, store) = scratch_store();
        match store.read("missing.txt") {
            Err(StoreError::NotFound(name)) => assert_eq!(name, "missing.txt"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_delete_removes_document() {
        let (_dir, store) = scratch_store();
        store.create("gone.txt").unwrap();
        store.delete("gone.txt").unwrap();

        assert!(!store.snapshot().unwrap().contains("gone.txt"));
        assert!(matches!(
            store.delete("gone.txt"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_create_refuses_unsafe_names() {
        let (_dir, store) = scratch_store();

        assert!(matches!(
            store.create("../escape.txt"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(store.create("  "), Err(StoreError::InvalidName(_))));
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let (_dir, store) = scratch_store();
        store.write("notes.txt", "old content").unwrap();
        store.create("notes.txt").unwrap();

        assert_eq!(store.read("notes.txt").unwrap(), b"");
    }
}
