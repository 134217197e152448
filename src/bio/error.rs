use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Unexpected end of input")]
    Eof,
    #[error("Input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("Failed to parse '{token}' as {target}: {reason}")]
    Parse {
        token: String,
        target: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
