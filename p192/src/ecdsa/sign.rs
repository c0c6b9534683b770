//! ECDSA signing.

use super::Signature;
use crate::{
    Event, HashToScalar, NoopObserver, Observer, PrivateKey, RandomSource, Result, Sha256Hasher,
};
use modarith::mod_inverse_unsigned;
use num_bigint::BigUint;
use num_traits::Zero;
use weierstrass::{AffinePoint, WeierstrassCurve};

/// ECDSA signer bound to a private key.
///
/// Messages are hashed with `H` (SHA-256 unless replaced with
/// [`Signer::with_hasher`]) and every pass of the signing loop is reported to
/// `O`.
#[derive(Clone, Debug)]
pub struct Signer<'k, C: WeierstrassCurve, H = Sha256Hasher, O = NoopObserver> {
    key: &'k PrivateKey<C>,
    hasher: H,
    observer: O,
}

impl<'k, C> Signer<'k, C>
where
    C: WeierstrassCurve,
{
    /// Create a signer using SHA-256 and no tracing.
    pub fn new(key: &'k PrivateKey<C>) -> Self {
        Self {
            key,
            hasher: Sha256Hasher::new(),
            observer: NoopObserver,
        }
    }
}

impl<'k, C, H, O> Signer<'k, C, H, O>
where
    C: WeierstrassCurve,
    H: HashToScalar,
    O: Observer,
{
    /// Replace the message hash function.
    pub fn with_hasher<H2: HashToScalar>(self, hasher: H2) -> Signer<'k, C, H2, O> {
        Signer {
            key: self.key,
            hasher,
            observer: self.observer,
        }
    }

    /// Report signing attempts to `observer`.
    pub fn with_observer<O2: Observer>(self, observer: O2) -> Signer<'k, C, H, O2> {
        Signer {
            key: self.key,
            hasher: self.hasher,
            observer,
        }
    }

    /// Sign `message`.
    pub fn sign<R>(&self, rng: &mut R, message: &[u8]) -> Result<Signature<C>>
    where
        R: RandomSource + ?Sized,
    {
        let z = self.hasher.hash_to_scalar(message, C::params().n());
        self.sign_prehashed(rng, &z)
    }

    /// Sign a message digest which has already been mapped to an integer.
    ///
    /// `z` is reduced modulo `n` first.
    ///
    /// Ephemeral scalars `k` are drawn from `rng` until both `r = (k·G).x mod n`
    /// and `s = k⁻¹·(z + r·d) mod n` are non-zero. A zero draw for `k` yields
    /// the point at infinity and is rejected like `r = 0`. The loop has no
    /// retry cap: for a curve with a large prime order a retry is
    /// astronomically unlikely.
    pub fn sign_prehashed<R>(&self, rng: &mut R, z: &BigUint) -> Result<Signature<C>>
    where
        R: RandomSource + ?Sized,
    {
        let n = C::params().n();
        let z = z % n;
        let d = self.key.as_scalar();
        let generator = AffinePoint::<C>::generator();

        loop {
            let k = rng.draw_uniform(n);
            let r_point = generator.mul(&k)?;
            let r = r_point.x().map(|x| x % n).unwrap_or_default();

            if r.is_zero() {
                self.observer.observe(&Event::SignAttempt {
                    k: &k,
                    r_point: r_point.coordinates(),
                    r: &r,
                    s: None,
                });
                continue;
            }

            let s = (mod_inverse_unsigned(&k, n)? * (&z + &r * d)) % n;

            self.observer.observe(&Event::SignAttempt {
                k: &k,
                r_point: r_point.coordinates(),
                r: &r,
                s: Some(&s),
            });

            if !s.is_zero() {
                return Ok(Signature::new(r, s));
            }
        }
    }
}
