//! Hashing messages to scalars.

use core::{fmt, marker::PhantomData};
use digest::Digest;
use num_bigint::BigUint;
use sha2::Sha256;

/// Map a message to an integer in `[0, n)`.
pub trait HashToScalar {
    /// Hash `message` and reduce the result modulo `n`.
    fn hash_to_scalar(&self, message: &[u8], n: &BigUint) -> BigUint;
}

impl<T: HashToScalar + ?Sized> HashToScalar for &T {
    fn hash_to_scalar(&self, message: &[u8], n: &BigUint) -> BigUint {
        (**self).hash_to_scalar(message, n)
    }
}

/// Hash-to-scalar using a [`Digest`].
///
/// The digest is interpreted as a big endian integer and truncated to the
/// bit length of `n` (`bits2int` in RFC 6979 § 2.3.2) before being reduced
/// modulo `n`, as ECDSA prescribes.
pub struct DigestHasher<D> {
    digest: PhantomData<fn() -> D>,
}

/// SHA-256 hash-to-scalar, the default for [`Signer`] and [`Verifier`].
///
/// [`Signer`]: crate::Signer
/// [`Verifier`]: crate::Verifier
pub type Sha256Hasher = DigestHasher<Sha256>;

impl<D> DigestHasher<D> {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self {
            digest: PhantomData,
        }
    }
}

impl<D> Clone for DigestHasher<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestHasher<D> {}

impl<D> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestHasher").finish_non_exhaustive()
    }
}

impl<D> HashToScalar for DigestHasher<D>
where
    D: Digest,
{
    fn hash_to_scalar(&self, message: &[u8], n: &BigUint) -> BigUint {
        bits2int(&D::digest(message), n) % n
    }
}

/// Interpret `bytes` as a big endian integer keeping only its leftmost
/// `bits(n)` bits.
fn bits2int(bytes: &[u8], n: &BigUint) -> BigUint {
    let z = BigUint::from_bytes_be(bytes);
    let len = bytes.len() as u64 * 8;
    let qlen = n.bits();

    if len > qlen { z >> (len - qlen) } else { z }
}

/// Polynomial rolling hash `h = (31·h + byte) mod n`.
///
/// **This is not a cryptographic hash function.** Collisions and preimages
/// are trivial to compute, so signatures made with it can be forged. It is
/// provided for demonstrations and reproducible traces only.
#[derive(Copy, Clone, Debug, Default)]
pub struct PolynomialHash;

impl HashToScalar for PolynomialHash {
    fn hash_to_scalar(&self, message: &[u8], n: &BigUint) -> BigUint {
        message
            .iter()
            .fold(BigUint::default(), |h, &byte| (h * 31u8 + byte) % n)
    }
}
