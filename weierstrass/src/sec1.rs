//! SEC1 point encoding.
//!
//! Only the uncompressed form (`0x04 || x || y`) and the identity encoding
//! (a single `0x00` byte) are supported.

use crate::{AffinePoint, Error, Result, WeierstrassCurve};
use num_bigint::BigUint;

/// Tag byte of the identity encoding.
const TAG_IDENTITY: u8 = 0x00;

/// Tag byte of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

impl<C> AffinePoint<C>
where
    C: WeierstrassCurve,
{
    /// Serialize this point using the SEC1 uncompressed encoding.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        let Some(coordinates) = &self.coordinates else {
            return vec![TAG_IDENTITY];
        };

        let len = C::params().field_bytes();
        let mut bytes = Vec::with_capacity(1 + 2 * len);
        bytes.push(TAG_UNCOMPRESSED);
        write_padded(&mut bytes, &coordinates.x, len);
        write_padded(&mut bytes, &coordinates.y, len);
        bytes
    }

    /// Parse a SEC1 uncompressed (or identity) encoding.
    ///
    /// The decoded coordinates are validated against the curve equation.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let len = C::params().field_bytes();

        match bytes.split_first() {
            Some((&TAG_IDENTITY, [])) => Ok(Self::identity()),
            Some((&TAG_UNCOMPRESSED, coordinates)) if coordinates.len() == 2 * len => {
                let (x, y) = coordinates.split_at(len);
                Self::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
            }
            _ => Err(Error::InvalidEncoding),
        }
    }
}

/// Append `value` as a big endian integer left-padded with zeroes to `len`
/// bytes. `value` must fit in `len` bytes.
fn write_padded(out: &mut Vec<u8>, value: &BigUint, len: usize) {
    let bytes = value.to_bytes_be();
    out.resize(out.len() + len.saturating_sub(bytes.len()), 0);
    out.extend_from_slice(&bytes);
}
