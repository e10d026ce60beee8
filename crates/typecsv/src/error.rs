use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid delimiter {0:?}: expected '\"' or '\\''")]
    InvalidDelimiter(char),

    #[error("invalid separator {0:?}: expected one of ',', ';', ':', TAB or SPACE")]
    InvalidSeparator(char),
}

pub type Result<T> = core::result::Result<T, Error>;
