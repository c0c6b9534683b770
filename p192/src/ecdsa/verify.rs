//! ECDSA verification.

use super::{Signature, Verdict};
use crate::{Event, HashToScalar, NoopObserver, Observer, PublicKey, Result, Sha256Hasher};
use modarith::mod_inverse_unsigned;
use num_bigint::BigUint;
use num_traits::Zero;
use weierstrass::{AffinePoint, WeierstrassCurve};

/// ECDSA verifier bound to a public key.
#[derive(Clone, Debug)]
pub struct Verifier<'k, C: WeierstrassCurve, H = Sha256Hasher, O = NoopObserver> {
    key: &'k PublicKey<C>,
    hasher: H,
    observer: O,
}

impl<'k, C> Verifier<'k, C>
where
    C: WeierstrassCurve,
{
    /// Create a verifier using SHA-256 and no tracing.
    pub fn new(key: &'k PublicKey<C>) -> Self {
        Self {
            key,
            hasher: Sha256Hasher::new(),
            observer: NoopObserver,
        }
    }
}

impl<'k, C, H, O> Verifier<'k, C, H, O>
where
    C: WeierstrassCurve,
    H: HashToScalar,
    O: Observer,
{
    /// Replace the message hash function.
    pub fn with_hasher<H2: HashToScalar>(self, hasher: H2) -> Verifier<'k, C, H2, O> {
        Verifier {
            key: self.key,
            hasher,
            observer: self.observer,
        }
    }

    /// Report verification steps to `observer`.
    pub fn with_observer<O2: Observer>(self, observer: O2) -> Verifier<'k, C, H, O2> {
        Verifier {
            key: self.key,
            hasher: self.hasher,
            observer,
        }
    }

    /// Verify `signature` over `message`.
    pub fn verify(&self, message: &[u8], signature: &Signature<C>) -> Result<Verdict> {
        let z = self.hasher.hash_to_scalar(message, C::params().n());
        self.verify_prehashed(&z, signature)
    }

    /// Verify `signature` over a message digest which has already been
    /// mapped to an integer.
    ///
    /// A signature with `r` or `s` outside `[1, n)` is [`Verdict::Invalid`];
    /// errors are reserved for corrupted curve parameters.
    pub fn verify_prehashed(&self, z: &BigUint, signature: &Signature<C>) -> Result<Verdict> {
        let n = C::params().n();
        let (r, s) = (signature.r(), signature.s());

        if !in_range(r, n) || !in_range(s, n) {
            return Ok(Verdict::Invalid);
        }

        let z = z % n;
        let w = mod_inverse_unsigned(s, n)?;
        let u1 = (&z * &w) % n;
        let u2 = (r * &w) % n;

        let r_point = AffinePoint::<C>::generator()
            .mul(&u1)?
            .add(&self.key.as_affine().mul(&u2)?)?;

        self.observer.observe(&Event::VerifyStep {
            z: &z,
            w: &w,
            u1: &u1,
            u2: &u2,
            r_point: r_point.coordinates(),
        });

        let valid = r_point.x().is_some_and(|x| &(x % n) == r);
        Ok(Verdict::from(valid))
    }
}

/// `1 ≤ value < n`
fn in_range(value: &BigUint, n: &BigUint) -> bool {
    !value.is_zero() && value < n
}
