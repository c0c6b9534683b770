//! Affine group law.
//!
//! The point at infinity is represented as `None` throughout this module so
//! the same routines serve both curve validation and [`AffinePoint`].
//!
//! [`AffinePoint`]: crate::AffinePoint

use crate::{CurveParams, Result};
use modarith::{mod_inverse, reduce};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

/// Affine coordinates of a finite point, both reduced modulo `p`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Coordinates {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
}

impl Coordinates {
    pub(crate) fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }
}

/// Returns `lhs + rhs`.
pub(crate) fn add(
    curve: &CurveParams,
    lhs: Option<&Coordinates>,
    rhs: Option<&Coordinates>,
) -> Result<Option<Coordinates>> {
    let (lhs, rhs) = match (lhs, rhs) {
        (None, rhs) => return Ok(rhs.cloned()),
        (lhs, None) => return Ok(lhs.cloned()),
        (Some(lhs), Some(rhs)) => (lhs, rhs),
    };

    // P + (-P) = O, and a point with y = 0 is its own inverse.
    if lhs.x == rhs.x && (lhs.y != rhs.y || lhs.y.is_zero()) {
        return Ok(None);
    }

    let p = signed(curve.p());
    let (x1, y1) = (signed(&lhs.x), signed(&lhs.y));
    let (x2, y2) = (signed(&rhs.x), signed(&rhs.y));

    let slope = if x1 == x2 {
        // tangent: (3x² + a) / 2y
        let numerator = BigInt::from(3u8) * &x1 * &x1 + signed(curve.a());
        let denominator = BigInt::from(2u8) * &y1;
        numerator * mod_inverse(&denominator, &p)?
    } else {
        // chord: (y₂ - y₁) / (x₂ - x₁)
        (&y2 - &y1) * mod_inverse(&(&x2 - &x1), &p)?
    };
    let slope = reduce(&slope, &p)?;

    let x3 = reduce(&(&slope * &slope - &x1 - &x2), &p)?;
    let y3 = reduce(&(&slope * (&x1 - &x3) - &y1), &p)?;

    Ok(Some(Coordinates::new(unsigned(x3), unsigned(y3))))
}

/// Returns `point + point`.
pub(crate) fn double(curve: &CurveParams, point: Option<&Coordinates>) -> Result<Option<Coordinates>> {
    add(curve, point, point)
}

/// Returns `-point`.
pub(crate) fn neg(curve: &CurveParams, point: Option<&Coordinates>) -> Option<Coordinates> {
    point.map(|point| {
        let y = if point.y.is_zero() {
            BigUint::zero()
        } else {
            curve.p() - &point.y
        };
        Coordinates::new(point.x.clone(), y)
    })
}

/// Returns `k·point` using double-and-add over the bits of `k`, least
/// significant bit first.
pub(crate) fn mul(
    curve: &CurveParams,
    point: Option<&Coordinates>,
    k: &BigUint,
) -> Result<Option<Coordinates>> {
    let mut result = None;
    let mut base = point.cloned();
    let mut k = k.clone();

    while !k.is_zero() {
        if k.is_odd() {
            result = add(curve, result.as_ref(), base.as_ref())?;
        }

        base = double(curve, base.as_ref())?;
        k >>= 1;
    }

    Ok(result)
}

fn signed(value: &BigUint) -> BigInt {
    BigInt::from(value.clone())
}

/// Drop the sign of a value already normalized into `[0, m)`.
fn unsigned(value: BigInt) -> BigUint {
    let (_, magnitude) = value.into_parts();
    magnitude
}
