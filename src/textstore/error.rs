use std::fmt;
use std::io;
use thiserror::Error;

/// Category of a [`TextStoreError`], used for logging and for matching
/// without caring about the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    StorageFailure,
    CorruptedResource,
    DuplicateContent,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::StorageFailure => "StorageFailure",
            ErrorKind::CorruptedResource => "CorruptedResource",
            ErrorKind::DuplicateContent => "DuplicateContent",
            ErrorKind::Config => "Config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum TextStoreError {
    #[error("Storage failure: {0}")]
    StorageFailure(#[from] io::Error),

    #[error("{message}")]
    CorruptedResource {
        message: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("{0}")]
    DuplicateContent(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl TextStoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TextStoreError::StorageFailure(_) => ErrorKind::StorageFailure,
            TextStoreError::CorruptedResource { .. } => ErrorKind::CorruptedResource,
            TextStoreError::DuplicateContent(_) => ErrorKind::DuplicateContent,
            TextStoreError::Config(_) => ErrorKind::Config,
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        TextStoreError::CorruptedResource {
            message: message.into(),
            source: None,
        }
    }

    /// Rewraps a raw storage failure as a corrupted resource, keeping the
    /// I/O error as the source. Errors of any other kind are returned as is.
    pub fn into_corrupted(self, message: impl Into<String>) -> Self {
        match self {
            TextStoreError::StorageFailure(source) => TextStoreError::CorruptedResource {
                message: message.into(),
                source: Some(source),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextStoreError>;
