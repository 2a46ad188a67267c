use thiserror::Error;

/// Errors raised by the vector kernel.
///
/// Only normalization can fail; every other operation is total over finite input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("cannot normalize a vector of non-finite length {length}")]
    NonFinite { length: f64 },
}

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, MathError>;
