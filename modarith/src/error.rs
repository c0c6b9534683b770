//! Error types.

use thiserror::Error;

/// Modular arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The modulus was zero or negative.
    #[error("modulus must be positive")]
    InvalidModulus,

    /// The value shares a factor with the modulus, so no inverse exists.
    #[error("value has no inverse modulo the given modulus")]
    NoModularInverse,
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
