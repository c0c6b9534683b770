//! Curve parameters.

use crate::{
    Error, Result,
    point_arithmetic::{self, Coordinates},
};
use core::fmt::Debug;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b (mod p)`
/// together with a generator `G` of prime order `n`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    generator: (BigUint, BigUint),
    n: BigUint,
}

impl CurveParams {
    /// Validate and build curve parameters.
    ///
    /// Checks that `p` is odd and greater than 3, that every coefficient and
    /// generator coordinate is reduced modulo `p`, that the curve is
    /// non-singular, that `G` lies on the curve and that `n·G` is the point at
    /// infinity. Primality of `p` and `n` is not checked.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        n: BigUint,
    ) -> Result<Self> {
        if p <= BigUint::from(3u8) || p.is_even() {
            return Err(Error::InvalidCurveModulus);
        }

        if a >= p || b >= p || generator.0 >= p || generator.1 >= p {
            return Err(Error::CoordinateOutOfRange);
        }

        let three = BigUint::from(3u8);
        let two = BigUint::from(2u8);
        let discriminant = (a.modpow(&three, &p) * 4u32 + b.modpow(&two, &p) * 27u32) % &p;

        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }

        let params = Self::new_unchecked(p, a, b, generator, n);

        if !params.contains(&params.generator.0, &params.generator.1) {
            return Err(Error::PointNotOnCurve);
        }

        if params.n <= BigUint::one() {
            return Err(Error::InvalidGeneratorOrder);
        }

        let g = Coordinates::new(params.generator.0.clone(), params.generator.1.clone());

        if point_arithmetic::mul(&params, Some(&g), &params.n)?.is_some() {
            return Err(Error::InvalidGeneratorOrder);
        }

        Ok(params)
    }

    /// Build curve parameters without validating them.
    ///
    /// Intended for well-known curves whose constants are checked by tests.
    /// Arithmetic on invalid parameters returns errors or wrong answers.
    pub fn new_unchecked(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        n: BigUint,
    ) -> Self {
        Self {
            p,
            a,
            b,
            generator,
            n,
        }
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` of the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Affine coordinates of the generator `G`.
    pub fn generator(&self) -> (&BigUint, &BigUint) {
        (&self.generator.0, &self.generator.1)
    }

    /// Order `n` of the generator.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Size of a serialized base field element in bytes.
    pub fn field_bytes(&self) -> usize {
        byte_len(&self.p)
    }

    /// Size of a serialized scalar in bytes.
    pub fn scalar_bytes(&self) -> usize {
        byte_len(&self.n)
    }

    /// Does `(x, y)` satisfy the curve equation?
    ///
    /// Coordinates are expected to be reduced modulo `p`.
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        let lhs = (y * y) % &self.p;
        let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
        lhs == rhs
    }
}

/// A short Weierstrass curve named at the type level.
pub trait WeierstrassCurve: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// Domain parameters of this curve.
    fn params() -> &'static CurveParams;
}

fn byte_len(value: &BigUint) -> usize {
    value.bits().div_ceil(8) as usize
}
