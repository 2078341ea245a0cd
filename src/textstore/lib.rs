//! # Textstore Architecture
//!
//! Textstore wraps a single plain UTF-8 text file and offers read, write,
//! append, duplicate-aware append and a read-then-duplicate operation. The
//! library does the work; the binary is a thin CLI over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, loads config, installs logging         │
//! │  - The ONLY place that prints or sets exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TextStore (store.rs)                                       │
//! │  - Error translation, duplicate detection, read_and_save    │
//! │  - Each operation runs inside a logged call                 │
//! └─────────────────────────────────────────────────────────────┘
//!              │                                 │
//!              ▼                                 ▼
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │  Storage (storage/)       │   │  Logging (logging.rs)     │
//! │  - ByteStorage trait      │   │  - Logger trait           │
//! │  - FsStorage, MemStorage  │   │  - TracingLogger, Memory  │
//! └───────────────────────────┘   └───────────────────────────┘
//! ```
//!
//! Both collaborators are injected, so every store rule can be tested with
//! [`storage::memory::MemStorage`] and [`logging::MemoryLogger`] without
//! touching the disk or a global subscriber.
//!
//! ## Module Overview
//!
//! - [`store`]: The [`TextStore`](store::TextStore) itself
//! - [`storage`]: Raw text I/O abstraction and implementations
//! - [`logging`]: Logger capability, logged-call wrapper, subscriber setup
//! - [`config`]: Configuration for the binary
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod store;
