//! Error types for fixgen

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating test fixtures
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller supplied an invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Compiled class file missing from the class output directory
    #[error("Compiled class not found: {0}")]
    ClassNotFound(PathBuf),

    /// Jar/zip construction error
    #[error("Zip error: {0}")]
    Zip(String),

    /// Settings-related error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
