use super::ByteStorage;
use crate::error::{Result, TextStoreError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Filesystem storage. Each call opens the file, acts on it and closes it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl FsStorage {
    pub fn new() -> Self {
        Self
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TextStoreError::StorageFailure)?;
        }
        Ok(())
    }
}

impl ByteStorage for FsStorage {
    fn ensure(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            // "file.txt" has an empty parent, which means the current directory
            if !parent.as_os_str().is_empty() {
                self.ensure_dir(parent)?;
            }
        }

        // create(true) without truncate never clobbers an existing file
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(TextStoreError::StorageFailure)?;
        Ok(())
    }

    fn read_all(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).map_err(TextStoreError::StorageFailure)?;
        Ok(content)
    }

    fn write_all(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(TextStoreError::StorageFailure)?;
        Ok(())
    }

    fn append_all(&self, path: &Path, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(TextStoreError::StorageFailure)?;
        file.write_all(text.as_bytes())
            .map_err(TextStoreError::StorageFailure)?;
        Ok(())
    }
}
