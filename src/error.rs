// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating parameters or writing a font bundle.
#[derive(Debug, Error)]
pub enum FontInitError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed preset {}: {source}", .path.display())]
    Preset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FontInitError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        FontInitError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FontInitError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FontInitError>;
