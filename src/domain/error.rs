use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Library-wide error type for blob-templates operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying console I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Connection string or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Storage endpoint unreachable or credentials rejected.
    #[error("Storage connection failed: {message}")]
    Connection { message: String, status: Option<u16> },

    /// Requested object does not exist in the container.
    #[error("Object '{0}' not found")]
    NotFound(String),

    /// Upload without overwrite hit an existing object.
    #[error("Object '{0}' already exists")]
    AlreadyExists(String),

    /// Storage service answered with a non-success status.
    #[error("Storage request failed: {message}")]
    Storage { message: String, status: Option<u16> },

    /// Stored bytes are not valid UTF-8.
    #[error("Object '{name}' is not valid UTF-8: {source}")]
    Decode {
        name: String,
        #[source]
        source: FromUtf8Error,
    },

    /// Stored manifest is not a JSON object.
    #[error("Failed to parse {name}: {details}")]
    Parse { name: String, details: String },

    /// Manifest field is present but is not a string.
    #[error("Manifest '{name}' has a non-string '{field}' field")]
    InvalidManifestField { name: String, field: String },

    /// Interactive input ended before a selection was made.
    #[error("Input closed before a template was selected")]
    InputClosed,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::Connection { .. } => io::ErrorKind::ConnectionRefused,
            AppError::NotFound(_) => io::ErrorKind::NotFound,
            AppError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Decode { .. }
            | AppError::Parse { .. }
            | AppError::InvalidManifestField { .. } => io::ErrorKind::InvalidData,
            AppError::InputClosed => io::ErrorKind::UnexpectedEof,
            AppError::Storage { .. } => io::ErrorKind::Other,
        }
    }

    /// Whether a storage client may reasonably repeat the request.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Connection { status, .. } => !matches!(status, Some(401 | 403)),
            AppError::Storage { status, .. } => {
                status.is_some_and(|code| code == 408 || code == 429 || code >= 500)
            }
            _ => false,
        }
    }
}
