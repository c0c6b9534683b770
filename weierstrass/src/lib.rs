#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! Textbook arithmetic on short Weierstrass curves of prime order.
//!
//! Curves have the form `y² = x³ + ax + b (mod p)` and are described at
//! runtime by validated [`CurveParams`]. A curve is named at the type level by
//! a marker type implementing [`WeierstrassCurve`], which ties each
//! [`AffinePoint`] to the parameters it was computed under.
//!
//! Points are kept in affine coordinates and combined with the classic
//! chord-and-tangent formulas; every addition performs one modular inversion.
//! None of the operations in this crate run in constant time.

mod affine;
mod curve;
mod error;
mod point_arithmetic;
mod sec1;

pub use crate::{
    affine::AffinePoint,
    curve::{CurveParams, WeierstrassCurve},
    error::{Error, Result},
};
pub use modarith;
pub use num_bigint;
