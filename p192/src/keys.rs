//! Private keys, public keys and key generation.

use crate::{Error, Event, NoopObserver, Observer, RandomSource, Result};
use core::{fmt, marker::PhantomData};
use num_bigint::BigUint;
use num_traits::Zero;
use weierstrass::{AffinePoint, WeierstrassCurve};

/// Private scalar `d` with `1 ≤ d < n`.
pub struct PrivateKey<C: WeierstrassCurve> {
    d: BigUint,
    curve: PhantomData<C>,
}

impl<C> PrivateKey<C>
where
    C: WeierstrassCurve,
{
    /// Create a private key from a scalar, checking `1 ≤ d < n`.
    pub fn from_scalar(d: BigUint) -> Result<Self> {
        if d.is_zero() || &d >= C::params().n() {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self {
            d,
            curve: PhantomData,
        })
    }

    /// Parse a big endian encoded scalar.
    ///
    /// The input must be exactly as long as the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != C::params().scalar_bytes() {
            return Err(Error::InvalidPrivateKey);
        }

        Self::from_scalar(BigUint::from_bytes_be(bytes))
    }

    /// Serialize as a big endian scalar, left-padded to the size of `n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        pad(&self.d, C::params().scalar_bytes())
    }

    /// Borrow the private scalar.
    pub fn as_scalar(&self) -> &BigUint {
        &self.d
    }

    /// Compute the public key `Q = d·G`.
    pub fn public_key(&self) -> Result<PublicKey<C>> {
        let q = AffinePoint::<C>::generator().mul(&self.d)?;
        PublicKey::from_affine(q)
    }
}

impl<C> Clone for PrivateKey<C>
where
    C: WeierstrassCurve,
{
    fn clone(&self) -> Self {
        Self {
            d: self.d.clone(),
            curve: PhantomData,
        }
    }
}

impl<C> fmt::Debug for PrivateKey<C>
where
    C: WeierstrassCurve,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

impl<C> PartialEq for PrivateKey<C>
where
    C: WeierstrassCurve,
{
    fn eq(&self, other: &Self) -> bool {
        self.d == other.d
    }
}

impl<C> Eq for PrivateKey<C> where C: WeierstrassCurve {}

/// Public point `Q = d·G`.
///
/// Never the point at infinity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey<C: WeierstrassCurve> {
    point: AffinePoint<C>,
}

impl<C> PublicKey<C>
where
    C: WeierstrassCurve,
{
    /// Create a public key from a curve point.
    ///
    /// Points are validated on construction, so only the identity needs to
    /// be rejected here.
    pub fn from_affine(point: AffinePoint<C>) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { point })
    }

    /// Parse a SEC1 uncompressed encoding.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let point = AffinePoint::from_sec1_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
        Self::from_affine(point)
    }

    /// Serialize using the SEC1 uncompressed encoding.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.point.to_sec1_bytes()
    }

    /// Borrow the public point.
    pub fn as_affine(&self) -> &AffinePoint<C> {
        &self.point
    }
}

/// A private key together with its public key.
#[derive(Clone, Debug)]
pub struct KeyPair<C: WeierstrassCurve> {
    private_key: PrivateKey<C>,
    public_key: PublicKey<C>,
}

impl<C> KeyPair<C>
where
    C: WeierstrassCurve,
{
    /// Derive the public key of `private_key` and pair them.
    pub fn from_private_key(private_key: PrivateKey<C>) -> Result<Self> {
        let public_key = private_key.public_key()?;

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Borrow the private key.
    pub fn private_key(&self) -> &PrivateKey<C> {
        &self.private_key
    }

    /// Borrow the public key.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }
}

/// Generator of random key pairs.
#[derive(Clone, Debug)]
pub struct KeyPairGenerator<C: WeierstrassCurve, O = NoopObserver> {
    observer: O,
    curve: PhantomData<C>,
}

impl<C> KeyPairGenerator<C>
where
    C: WeierstrassCurve,
{
    /// Create a key pair generator without tracing.
    pub fn new() -> Self {
        Self {
            observer: NoopObserver,
            curve: PhantomData,
        }
    }
}

impl<C> Default for KeyPairGenerator<C>
where
    C: WeierstrassCurve,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, O> KeyPairGenerator<C, O>
where
    C: WeierstrassCurve,
    O: Observer,
{
    /// Report generated keys to `observer`.
    pub fn with_observer<O2: Observer>(self, observer: O2) -> KeyPairGenerator<C, O2> {
        KeyPairGenerator {
            observer,
            curve: PhantomData,
        }
    }

    /// Generate a key pair.
    ///
    /// The private scalar is drawn uniformly from `[0, n)`; a zero draw is
    /// discarded and drawn again, so `1 ≤ d < n` always holds.
    pub fn generate<R>(&self, rng: &mut R) -> Result<KeyPair<C>>
    where
        R: RandomSource + ?Sized,
    {
        let n = C::params().n();

        let d = loop {
            let d = rng.draw_uniform(n);

            if !d.is_zero() {
                break d;
            }
        };

        let key_pair = KeyPair::from_private_key(PrivateKey::from_scalar(d)?)?;

        if let Some(q) = key_pair.public_key.point.coordinates() {
            self.observer.observe(&Event::KeyGenerated {
                d: key_pair.private_key.as_scalar(),
                q,
            });
        }

        Ok(key_pair)
    }
}

/// Big endian encoding of `value` left-padded with zeroes to `len` bytes.
pub(crate) fn pad(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; len.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}
