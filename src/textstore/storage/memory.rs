use super::ByteStorage;
use crate::error::{Result, TextStoreError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
///
/// Uses `RefCell` for interior mutability since a store is single-threaded.
/// Content is kept as raw bytes so tests can plant text that is not valid
/// UTF-8.
#[derive(Default)]
pub struct MemStorage {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    fail_reads: RefCell<bool>,
    fail_writes: RefCell<bool>,
    fail_appends: RefCell<bool>,
    pending_external_write: RefCell<Option<String>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail with a simulated I/O error.
    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.borrow_mut() = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }

    pub fn set_fail_appends(&self, fail: bool) {
        *self.fail_appends.borrow_mut() = fail;
    }

    /// Simulate another writer: `text` is appended to whatever file is read
    /// next, right after that read returns.
    pub fn queue_external_write(&self, text: impl Into<String>) {
        *self.pending_external_write.borrow_mut() = Some(text.into());
    }

    /// Replace a file's content with arbitrary bytes.
    pub fn insert_raw_bytes(&self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.files.borrow_mut().insert(path.into(), bytes);
    }

    /// Remove a file, as if deleted behind the store's back.
    pub fn remove(&self, path: &Path) {
        self.files.borrow_mut().remove(path);
    }

    /// Test helper to peek at content without going through `read_all`.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn simulated(op: &str) -> TextStoreError {
        TextStoreError::StorageFailure(io::Error::other(format!("Simulated {} error", op)))
    }

    fn not_found(path: &Path) -> TextStoreError {
        TextStoreError::StorageFailure(io::Error::new(
            io::ErrorKind::NotFound,
            format!("No such file: {}", path.display()),
        ))
    }
}

impl ByteStorage for MemStorage {
    fn ensure(&self, path: &Path) -> Result<()> {
        self.files.borrow_mut().entry(path.to_path_buf()).or_default();
        Ok(())
    }

    fn read_all(&self, path: &Path) -> Result<String> {
        if *self.fail_reads.borrow() {
            return Err(Self::simulated("read"));
        }

        let bytes = self
            .files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))?;
        let text = String::from_utf8(bytes).map_err(|e| {
            TextStoreError::StorageFailure(io::Error::new(io::ErrorKind::InvalidData, e))
        })?;

        if let Some(external) = self.pending_external_write.borrow_mut().take() {
            if let Some(bytes) = self.files.borrow_mut().get_mut(path) {
                bytes.extend_from_slice(external.as_bytes());
            }
        }

        Ok(text)
    }

    fn write_all(&self, path: &Path, text: &str) -> Result<()> {
        if *self.fail_writes.borrow() {
            return Err(Self::simulated("write"));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.as_bytes().to_vec());
        Ok(())
    }

    fn append_all(&self, path: &Path, text: &str) -> Result<()> {
        if *self.fail_appends.borrow() {
            return Err(Self::simulated("append"));
        }
        let mut files = self.files.borrow_mut();
        let bytes = files.get_mut(path).ok_or_else(|| Self::not_found(path))?;
        bytes.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn ensure_is_idempotent() {
        let storage = MemStorage::new();
        let path = Path::new("notes.txt");

        storage.ensure(path).unwrap();
        storage.append_all(path, "hello").unwrap();
        storage.ensure(path).unwrap();

        assert_eq!(storage.read_all(path).unwrap(), "hello");
    }

    #[test]
    fn simulated_failures_are_storage_failures() {
        let storage = MemStorage::new();
        let path = Path::new("notes.txt");
        storage.ensure(path).unwrap();

        storage.set_fail_appends(true);
        let err = storage.append_all(path, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageFailure);

        storage.set_fail_appends(false);
        storage.append_all(path, "x").unwrap();
        assert_eq!(storage.contents(path).unwrap(), "x");
    }

    #[test]
    fn external_write_lands_after_next_read() {
        let storage = MemStorage::new();
        let path = Path::new("notes.txt");
        storage.ensure(path).unwrap();
        storage.queue_external_write("other");

        assert_eq!(storage.read_all(path).unwrap(), "");
        assert_eq!(storage.read_all(path).unwrap(), "other");
    }
}
