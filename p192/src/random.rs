//! Random scalar sampling.
//!
//! The engine never owns process-wide random state: every operation that
//! needs randomness borrows a [`RandomSource`] from its caller. Sources are
//! mutable and are not synchronized; sharing one between threads is up to
//! the caller.

use num_bigint::{BigUint, RandBigInt};
use rand_core::{CryptoRng, RngCore};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw an integer uniformly at random from `[0, bound)`.
    ///
    /// `bound` is always at least 2 when called by this crate.
    fn draw_uniform(&mut self, bound: &BigUint) -> BigUint;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn draw_uniform(&mut self, bound: &BigUint) -> BigUint {
        (**self).draw_uniform(bound)
    }
}

/// [`RandomSource`] backed by a cryptographically secure RNG.
///
/// Samples by rejection, so the output is exactly uniform over `[0, bound)`.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R> RngSource<R>
where
    R: CryptoRng + RngCore,
{
    /// Wrap the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the inner RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R> From<R> for RngSource<R>
where
    R: CryptoRng + RngCore,
{
    fn from(rng: R) -> Self {
        Self::new(rng)
    }
}

impl<R> RandomSource for RngSource<R>
where
    R: CryptoRng + RngCore,
{
    /// # Panics
    ///
    /// If `bound` is zero.
    fn draw_uniform(&mut self, bound: &BigUint) -> BigUint {
        self.rng.gen_biguint_below(bound)
    }
}
