//! # Storage Layer
//!
//! [`ByteStorage`] is the raw I/O capability underneath a
//! [`TextStore`](crate::store::TextStore). It knows how to move text in and
//! out of a path and nothing else: no logging, no duplicate rules, no error
//! translation beyond reporting the underlying failure.
//!
//! ## Implementations
//!
//! - [`fs::FsStorage`]: Production storage on the local filesystem.
//! - [`memory::MemStorage`]: In-memory storage for testing, with switches to
//!   simulate read/write/append failures and concurrent external writers.
//!
//! ## Error Contract
//!
//! Every method fails with [`TextStoreError::StorageFailure`] carrying the
//! `io::Error` that caused it. Text that is not valid UTF-8 is reported as an
//! `io::ErrorKind::InvalidData` failure on read.
//!
//! [`TextStoreError::StorageFailure`]: crate::error::TextStoreError::StorageFailure

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for raw text I/O at a path.
///
/// All methods take `&self`; implementations that need mutation use
/// interior mutability.
pub trait ByteStorage {
    /// Create the parent directories and an empty resource if absent.
    /// Existing content is left untouched.
    fn ensure(&self, path: &Path) -> Result<()>;

    /// Read the whole resource as UTF-8 text.
    fn read_all(&self, path: &Path) -> Result<String>;

    /// Replace the whole resource with `text`.
    fn write_all(&self, path: &Path, text: &str) -> Result<()>;

    /// Add `text` at the end of the resource.
    fn append_all(&self, path: &Path, text: &str) -> Result<()>;
}
