use thiserror::Error;

use crate::parsers::dimacs::DimacsParseError;

pub(crate) type DpllResult<T> = Result<T, DpllError>;

#[derive(Error, Debug)]
pub(crate) enum DpllError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to read file {1}, more details: {0}")]
    FileReadingError(std::io::Error, String),
    #[error("The dimacs file was invalid, more details: {0}")]
    InvalidDimacs(#[from] DimacsParseError),
}
