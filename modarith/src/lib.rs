#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! Modular arithmetic over arbitrary-precision integers.
//!
//! This crate provides the handful of number-theoretic operations needed by
//! textbook elliptic curve arithmetic:
//!
//! - [`gcd`]: greatest common divisor by iterative Euclidean reduction
//! - [`reduce`]: normalization of a signed value into `[0, m)`
//! - [`mod_inverse`]: modular inversion by the extended Euclidean algorithm
//!
//! All operations are variable-time.
//!
//! # Usage
//!
//! ```
//! use modarith::{mod_inverse, num_bigint::BigInt};
//!
//! let inverse = mod_inverse(&BigInt::from(3), &BigInt::from(11))?;
//! assert_eq!(inverse, BigInt::from(4));
//! # Ok::<(), modarith::Error>(())
//! ```

mod error;
mod euclid;

pub use crate::{
    error::{Error, Result},
    euclid::{gcd, mod_inverse, mod_inverse_unsigned, reduce},
};
pub use num_bigint;
