use thiserror::Error;

pub type BufferResult<T> = Result<T, BufferError>;

#[derive(Debug, Clone, Error, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BufferError {
    #[error("Buffer underflow: needed {requested} bytes but only {available} are readable.")]
    Underflow { requested: usize, available: usize },
    #[error("String of {0} bytes does not fit a 16-bit length prefix.")]
    StringTooLong(usize),
    #[error("Found negative string length {0} while reading.")]
    NegativeLength(i16),
    #[error("String content is not valid UTF-8.")]
    InvalidUtf8,
}
