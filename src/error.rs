//! Crate-level error type.
//!
//! Each variant maps to one failure kind so callers can branch on it.

use crate::auth::AuthError;
use crate::executor::TransportError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the reader and writer operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Reading or writing a group file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input document is not a usable variable group.
    #[error("Invalid variable group{}: {message}", origin_suffix(.origin))]
    InvalidGroup {
        origin: Option<String>,
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_group(origin: Option<&str>, message: impl Into<String>) -> Self {
        Error::InvalidGroup {
            origin: origin.map(str::to_string),
            message: message.into(),
        }
    }
}

fn origin_suffix(origin: &Option<String>) -> String {
    origin
        .as_ref()
        .map(|o| format!(" in {}", o))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, Error>;
