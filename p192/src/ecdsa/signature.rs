//! Signature values.

use crate::{Error, Result, keys::pad};
use core::{fmt, marker::PhantomData};
use num_bigint::BigUint;
use weierstrass::WeierstrassCurve;

/// ECDSA signature `(r, s)`.
///
/// Signatures produced by [`Signer`](crate::Signer) always satisfy
/// `1 ≤ r, s < n`. Values built with [`Signature::new`] or parsed from bytes
/// are not range checked: [`Verifier`](crate::Verifier) rejects
/// out-of-range values as invalid.
pub struct Signature<C: WeierstrassCurve> {
    r: BigUint,
    s: BigUint,
    curve: PhantomData<C>,
}

impl<C> Signature<C>
where
    C: WeierstrassCurve,
{
    /// Create a signature from its two scalars.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self {
            r,
            s,
            curve: PhantomData,
        }
    }

    /// Parse the fixed-size `r || s` encoding, each half a big endian integer
    /// as long as the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let len = C::params().scalar_bytes();

        if bytes.len() != 2 * len {
            return Err(Error::InvalidSignatureEncoding);
        }

        let (r, s) = bytes.split_at(len);
        Ok(Self::new(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s)))
    }

    /// Serialize as the fixed-size `r || s` encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = C::params().scalar_bytes();
        let mut bytes = pad(&self.r, len);
        bytes.extend(pad(&self.s, len));
        bytes
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

impl<C> Clone for Signature<C>
where
    C: WeierstrassCurve,
{
    fn clone(&self) -> Self {
        Self::new(self.r.clone(), self.s.clone())
    }
}

impl<C> fmt::Debug for Signature<C>
where
    C: WeierstrassCurve,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &format_args!("{:#x}", self.r))
            .field("s", &format_args!("{:#x}", self.s))
            .finish()
    }
}

impl<C> PartialEq for Signature<C>
where
    C: WeierstrassCurve,
{
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.s == other.s
    }
}

impl<C> Eq for Signature<C> where C: WeierstrassCurve {}
