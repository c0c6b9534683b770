//! Euclidean algorithms.

use crate::{Error, Result};
use core::mem;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Greatest common divisor of `a` and `b`.
///
/// The result is always non-negative, and `gcd(a, 0) == |a|`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();

    while !b.is_zero() {
        let rem = &a % &b;
        a = mem::replace(&mut b, rem);
    }

    a
}

/// Normalize `x` into the range `[0, m)`.
///
/// The `%` operator on [`BigInt`] takes the sign of the dividend, so a
/// negative remainder is shifted up by `m` explicitly.
pub fn reduce(x: &BigInt, m: &BigInt) -> Result<BigInt> {
    if !m.is_positive() {
        return Err(Error::InvalidModulus);
    }

    let rem = x % m;

    if rem.is_negative() {
        Ok(rem + m)
    } else {
        Ok(rem)
    }
}

/// Compute the inverse of `k` modulo `m`.
///
/// `k` may be any integer, including negative values and values larger than
/// `m`; it is normalized into `[0, m)` first. The returned inverse is always
/// in `[0, m)` and satisfies `(k * inverse) mod m == 1` (for `m > 1`).
///
/// # Errors
///
/// - [`Error::InvalidModulus`] if `m <= 0`
/// - [`Error::NoModularInverse`] if `gcd(k, m) != 1`
pub fn mod_inverse(k: &BigInt, m: &BigInt) -> Result<BigInt> {
    if !m.is_positive() {
        return Err(Error::InvalidModulus);
    }

    let k = reduce(k, m)?;

    if !gcd(&k, m).is_one() {
        return Err(Error::NoModularInverse);
    }

    // Invariant: t * k ≡ r (mod m) and new_t * k ≡ new_r (mod m)
    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();
    let mut r = m.clone();
    let mut new_r = k;

    while !new_r.is_zero() {
        let quotient = &r / &new_r;

        let next_t = &t - &quotient * &new_t;
        t = mem::replace(&mut new_t, next_t);

        let next_r = &r - &quotient * &new_r;
        r = mem::replace(&mut new_r, next_r);
    }

    // Unreachable after the gcd check above.
    if !r.is_one() {
        return Err(Error::NoModularInverse);
    }

    reduce(&t, m)
}

/// Compute the inverse of `k` modulo `m` for unsigned operands.
///
/// See [`mod_inverse`] for details. `m == 0` yields
/// [`Error::InvalidModulus`].
pub fn mod_inverse_unsigned(k: &BigUint, m: &BigUint) -> Result<BigUint> {
    let k = BigInt::from(k.clone());
    let m = BigInt::from(m.clone());

    // The result is normalized into `[0, m)`, so the sign can be dropped.
    let (_, magnitude) = mod_inverse(&k, &m)?.into_parts();
    Ok(magnitude)
}
