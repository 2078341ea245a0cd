//! # Error Logging
//!
//! Store operations report failures through the [`Logger`] capability before
//! handing the error back to the caller. Logging never changes control flow:
//! an error is logged once, where it is detected, and then returned unchanged.
//!
//! ## Destinations
//!
//! Each event goes to one of two sinks:
//! - [`LogDestination::Console`]: ephemeral output on stderr.
//! - [`LogDestination::Persistent`]: appended to the log file.
//!
//! ## Implementations
//!
//! - [`TracingLogger`]: emits `tracing` events on the `textstore::console` and
//!   `textstore::persistent` targets. The sinks themselves are installed once
//!   per process by [`init_logging`].
//! - [`MemoryLogger`]: records events for assertions in tests.

use crate::error::{ErrorKind, Result, TextStoreError};
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const CONSOLE_TARGET: &str = "textstore::console";
pub const PERSISTENT_TARGET: &str = "textstore::persistent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    Console,
    Persistent,
}

/// Abstract interface for recording an error event.
pub trait Logger {
    fn log_error(&self, kind: ErrorKind, message: &str, destination: LogDestination);
}

/// Runs `op` and, if it fails with an error of `kind`, logs it to
/// `destination` before returning it. Errors of other kinds pass through
/// without being logged.
pub fn logged<T, L, F>(logger: &L, kind: ErrorKind, destination: LogDestination, op: F) -> Result<T>
where
    L: Logger + ?Sized,
    F: FnOnce() -> Result<T>,
{
    op().inspect_err(|err| {
        if err.kind() == kind {
            logger.log_error(kind, &err.to_string(), destination);
        }
    })
}

/// Production logger backed by `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log_error(&self, kind: ErrorKind, message: &str, destination: LogDestination) {
        match destination {
            LogDestination::Console => {
                tracing::error!(target: CONSOLE_TARGET, category = %kind, "{}: {}", kind, message)
            }
            LogDestination::Persistent => {
                tracing::error!(target: PERSISTENT_TARGET, category = %kind, "{}: {}", kind, message)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub kind: ErrorKind,
    pub message: String,
    pub destination: LogDestination,
}

/// Logger that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl Logger for MemoryLogger {
    fn log_error(&self, kind: ErrorKind, message: &str, destination: LogDestination) {
        self.records.borrow_mut().push(LogRecord {
            kind,
            message: message.to_string(),
            destination,
        });
    }
}

/// Where the process-wide sinks write and how much they let through.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub log_file: PathBuf,
    /// Fallback filter when `RUST_LOG` is unset (e.g. "info", "error").
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("log.txt"),
            level: "info".to_string(),
        }
    }
}

/// Install the global subscriber: stderr for console events, the log file
/// for persistent ones. Later calls are no-ops.
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    if let Some(parent) = settings.log_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                TextStoreError::Config(format!("Cannot create {}: {}", parent.display(), e))
            })?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
        .map_err(|e| {
            TextStoreError::Config(format!(
                "Cannot open log file {}: {}",
                settings.log_file.display(),
                e
            ))
        })?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter_fn(|meta| meta.target() != PERSISTENT_TARGET));

    let persistent = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter_fn(|meta| meta.target() == PERSISTENT_TARGET));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(persistent)
        .try_init();
    Ok(())
}
