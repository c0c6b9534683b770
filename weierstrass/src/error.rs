//! Error types.

use thiserror::Error;

/// Curve and point errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A modular inversion failed inside the group law.
    ///
    /// This only happens when the curve parameters are corrupted (e.g. `p` is
    /// not prime) and is never an expected outcome.
    #[error("modular arithmetic failure: {0}")]
    Arithmetic(#[from] modarith::Error),

    /// The field modulus must be an odd integer greater than 3.
    #[error("invalid field modulus")]
    InvalidCurveModulus,

    /// A coefficient or coordinate is not reduced modulo `p`.
    #[error("coordinate out of range")]
    CoordinateOutOfRange,

    /// `4a³ + 27b² ≡ 0 (mod p)`.
    #[error("singular curve")]
    SingularCurve,

    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// `n·G` is not the point at infinity.
    #[error("generator order mismatch")]
    InvalidGeneratorOrder,

    /// Malformed SEC1 point encoding.
    #[error("invalid SEC1 encoding")]
    InvalidEncoding,
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
