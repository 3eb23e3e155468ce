// Mon Aug 24 2026

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed image: {0}")]
    Malformed(String),
    #[error("Unsupported image: {0}")]
    Unsupported(String),
    #[error("No symbol information in image")]
    NoSymbols,
}
