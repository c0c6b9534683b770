//! Affine curve points.

use crate::{
    Error, Result, WeierstrassCurve,
    point_arithmetic::{self, Coordinates},
};
use core::{fmt, marker::PhantomData, ops::Neg};
use num_bigint::BigUint;

/// Point on a Weierstrass curve in affine coordinates.
///
/// Either the point at infinity (the group identity) or a pair `(x, y)` with
/// both coordinates reduced modulo `p` and satisfying the curve equation.
/// Points are immutable values: every operation returns a new point.
pub struct AffinePoint<C: WeierstrassCurve> {
    /// `None` is the point at infinity.
    pub(crate) coordinates: Option<Coordinates>,

    curve: PhantomData<C>,
}

impl<C> AffinePoint<C>
where
    C: WeierstrassCurve,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self::from_coordinates(None)
    }

    /// Base point of the curve.
    pub fn generator() -> Self {
        let (x, y) = C::params().generator();
        Self::from_coordinates(Some(Coordinates::new(x.clone(), y.clone())))
    }

    /// Create a finite point, checking that it lies on the curve.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self> {
        let curve = C::params();

        if &x >= curve.p() || &y >= curve.p() {
            return Err(Error::CoordinateOutOfRange);
        }

        if !curve.contains(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Self::from_coordinates(Some(Coordinates::new(x, y))))
    }

    pub(crate) fn from_coordinates(coordinates: Option<Coordinates>) -> Self {
        Self {
            coordinates,
            curve: PhantomData,
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.coordinates.is_none()
    }

    /// Affine x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates.as_ref().map(|c| &c.x)
    }

    /// Affine y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates.as_ref().map(|c| &c.y)
    }

    /// Affine coordinates `(x, y)`, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        self.coordinates.as_ref().map(|c| (&c.x, &c.y))
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// [`Error::Arithmetic`] if a slope denominator is not invertible, which
    /// implies the curve parameters are corrupted.
    pub fn add(&self, other: &Self) -> Result<Self> {
        point_arithmetic::add(
            C::params(),
            self.coordinates.as_ref(),
            other.coordinates.as_ref(),
        )
        .map(Self::from_coordinates)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        point_arithmetic::double(C::params(), self.coordinates.as_ref()).map(Self::from_coordinates)
    }

    /// Returns `k·self` (double-and-add). `0·P` is the point at infinity.
    pub fn mul(&self, k: &BigUint) -> Result<Self> {
        point_arithmetic::mul(C::params(), self.coordinates.as_ref(), k)
            .map(Self::from_coordinates)
    }
}

impl<C> Clone for AffinePoint<C>
where
    C: WeierstrassCurve,
{
    fn clone(&self) -> Self {
        Self::from_coordinates(self.coordinates.clone())
    }
}

impl<C> fmt::Debug for AffinePoint<C>
where
    C: WeierstrassCurve,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            None => f.write_str("AffinePoint::IDENTITY"),
            Some(c) => f
                .debug_struct("AffinePoint")
                .field("x", &format_args!("{:#x}", c.x))
                .field("y", &format_args!("{:#x}", c.y))
                .finish(),
        }
    }
}

impl<C> Default for AffinePoint<C>
where
    C: WeierstrassCurve,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<C> PartialEq for AffinePoint<C>
where
    C: WeierstrassCurve,
{
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl<C> Eq for AffinePoint<C> where C: WeierstrassCurve {}

impl<C> Neg for AffinePoint<C>
where
    C: WeierstrassCurve,
{
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<C> Neg for &AffinePoint<C>
where
    C: WeierstrassCurve,
{
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        AffinePoint::from_coordinates(point_arithmetic::neg(
            C::params(),
            self.coordinates.as_ref(),
        ))
    }
}
