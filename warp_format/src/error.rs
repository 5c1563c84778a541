use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Serialization Error: {0}")]
    SerializationError(#[from] Box<bincode::ErrorKind>),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
    #[error("Buffer of {actual} bytes is not a whole number of {record_size} byte records")]
    TrailingBytes { record_size: usize, actual: usize },
}
