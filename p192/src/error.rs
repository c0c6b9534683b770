//! Error types.

use thiserror::Error;

/// Signature engine errors.
///
/// An invalid signature is not an error: see [`Verdict`](crate::Verdict).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Scalar arithmetic modulo `n` failed. Fatal: implies corrupted curve
    /// parameters.
    #[error("scalar arithmetic failure: {0}")]
    Arithmetic(#[from] modarith::Error),

    /// Point arithmetic or point decoding failed.
    #[error(transparent)]
    Curve(#[from] weierstrass::Error),

    /// Private key scalar is not in `[1, n)`.
    #[error("private key out of range")]
    InvalidPrivateKey,

    /// Public key is the point at infinity or is not a valid curve point.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// Signature bytes have the wrong length.
    #[error("invalid signature encoding")]
    InvalidSignatureEncoding,
}

/// Result type with the `p192-ecdsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
