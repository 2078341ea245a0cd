//! # TextStore
//!
//! A [`TextStore`] wraps one plain-text resource and layers three rules on top
//! of raw storage:
//!
//! 1. **Error translation**: raw storage failures surface as
//!    `CorruptedResource` with a message naming the failed step.
//! 2. **Logged calls**: every public operation runs inside
//!    [`logged`](crate::logging::logged), so a failure is logged once where it
//!    is detected and then returned unchanged.
//! 3. **Duplicate detection**: [`TextStore::append_unique`] refuses content
//!    whose trimmed form already occurs anywhere in the resource.
//!
//! ## Logging Destinations
//!
//! | Operation | Logged kind | Destination |
//! |-----------|-------------|-------------|
//! | `read` | `CorruptedResource` | console |
//! | `write`, `append` | `CorruptedResource` | persistent |
//! | `append_unique` | `DuplicateContent` | console |
//! | `read_and_save` | `CorruptedResource` | persistent |
//!
//! `append_unique` only logs its own `DuplicateContent`; failures from the
//! inner `read`/`append` were already logged by those calls.
//!
//! ## No Atomicity
//!
//! Each call opens and releases the resource on its own. `append_unique` reads
//! and then appends as two separate calls, so a writer outside this store can
//! slip in between.

use crate::error::{ErrorKind, Result, TextStoreError};
use crate::logging::{logged, LogDestination, Logger, TracingLogger};
use crate::storage::fs::FsStorage;
use crate::storage::ByteStorage;
use std::io;
use std::path::{Path, PathBuf};

/// Line inserted between the original content and its copy by
/// [`TextStore::read_and_save`].
pub const SAVE_SEPARATOR: &str = "\nlol\n";

const READ_FAILURE: &str = "read failure";
const WRITE_FAILURE: &str = "write failure";
const APPEND_FAILURE: &str = "append failure";
const DUPLICATE_TEXT: &str = "text already exists";

pub struct TextStore<S: ByteStorage, L: Logger> {
    path: PathBuf,
    storage: S,
    logger: L,
}

impl TextStore<FsStorage, TracingLogger> {
    /// Open a file-backed store that logs through `tracing`.
    pub fn open_fs(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path, FsStorage::new(), TracingLogger)
    }
}

impl<S: ByteStorage, L: Logger> TextStore<S, L> {
    /// Open the resource at `path`, creating it (and its directory) empty if
    /// missing. Failures here are returned without logging.
    pub fn open(path: impl Into<PathBuf>, storage: S, logger: L) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(TextStoreError::StorageFailure(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Resource path must not be empty",
            )));
        }

        storage.ensure(&path)?;

        Ok(Self {
            path,
            storage,
            logger,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn read(&self) -> Result<String> {
        logged(
            &self.logger,
            ErrorKind::CorruptedResource,
            LogDestination::Console,
            || self.read_raw(),
        )
    }

    /// Replace the whole resource with `content`.
    pub fn write(&self, content: &str) -> Result<()> {
        logged(
            &self.logger,
            ErrorKind::CorruptedResource,
            LogDestination::Persistent,
            || self.write_raw(content),
        )
    }

    pub fn append(&self, content: &str) -> Result<()> {
        logged(
            &self.logger,
            ErrorKind::CorruptedResource,
            LogDestination::Persistent,
            || self.append_raw(content),
        )
    }

    /// Append `content` unless its trimmed form already occurs in the
    /// resource.
    ///
    /// The stored text is searched as is, only the candidate is trimmed. An
    /// empty or whitespace-only candidate therefore always counts as a
    /// duplicate. When appended, `content` is written untrimmed.
    pub fn append_unique(&self, content: &str) -> Result<()> {
        logged(
            &self.logger,
            ErrorKind::DuplicateContent,
            LogDestination::Console,
            || {
                let current = self.read()?;
                if current.contains(content.trim()) {
                    return Err(TextStoreError::DuplicateContent(DUPLICATE_TEXT.to_string()));
                }
                self.append(content)
            },
        )
    }

    /// Append the separator and a copy of the current content, returning the
    /// content as it was before the call.
    ///
    /// `"ABC"` becomes `"ABC\nlol\nABC"` and `"ABC"` is returned.
    pub fn read_and_save(&self) -> Result<String> {
        logged(
            &self.logger,
            ErrorKind::CorruptedResource,
            LogDestination::Persistent,
            || {
                let content = self.read_raw()?;
                self.append_raw(SAVE_SEPARATOR)?;
                self.append_raw(&content)?;
                Ok(content)
            },
        )
    }

    fn read_raw(&self) -> Result<String> {
        self.storage
            .read_all(&self.path)
            .map_err(|e| e.into_corrupted(READ_FAILURE))
    }

    fn write_raw(&self, content: &str) -> Result<()> {
        self.storage
            .write_all(&self.path, content)
            .map_err(|e| e.into_corrupted(WRITE_FAILURE))
    }

    fn append_raw(&self, content: &str) -> Result<()> {
        self.storage
            .append_all(&self.path, content)
            .map_err(|e| e.into_corrupted(APPEND_FAILURE))
    }
}
