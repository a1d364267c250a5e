// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TidyError {
    #[error("malformed report: {0}")]
    MalformedInput(#[from] quick_xml::DeError),

    #[error("{0}")]
    InvalidState(String),

    #[error("no suites found, no report printed")]
    EmptyInput,

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("XML encoding error: {0}")]
    Serialize(#[from] quick_xml::SeError),
}

pub type Result<T> = std::result::Result<T, TidyError>;

// Allow `?` on std::io::Error by converting to TidyError::Io with unknown path.
impl From<std::io::Error> for TidyError {
    fn from(source: std::io::Error) -> Self {
        TidyError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for TidyError {
    fn from(e: walkdir::Error) -> Self {
        match e.path().map(std::path::Path::to_path_buf) {
            Some(path) => TidyError::Io {
                source: e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "walk error")
                }),
                path,
            },
            None => TidyError::InvalidState(e.to_string()),
        }
    }
}

impl TidyError {
    /// Annotates an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        TidyError::Io {
            source,
            path: path.into(),
        }
    }
}
