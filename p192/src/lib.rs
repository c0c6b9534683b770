#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! Textbook ECDSA over the NIST P-192 elliptic curve.
//!
//! Points are kept in affine coordinates on arbitrary-precision integers and
//! every operation is variable-time: this crate reproduces the schoolbook
//! algorithm and makes no attempt to resist side-channel attacks.
//!
//! The engine is generic over any [`WeierstrassCurve`]; [`NistP192`] is the
//! curve provided out of the box. Its collaborators are injected:
//!
//! - a [`RandomSource`] for private keys and ephemeral scalars,
//! - a [`HashToScalar`] function for messages (SHA-256 by default),
//! - an optional [`Observer`] receiving a trace of intermediate values.
//!
//! # Usage
//!
//! ```
//! # #[cfg(feature = "getrandom")] {
//! use p192_ecdsa::{KeyPairGenerator, NistP192, RngSource, Signer, Verdict, Verifier};
//! let mut rng = RngSource::new(rand_core::OsRng);
//! let key_pair = KeyPairGenerator::<NistP192>::new().generate(&mut rng)?;
//!
//! let message = b"Hello, world!";
//! let signature = Signer::new(key_pair.private_key()).sign(&mut rng, message)?;
//! let verdict = Verifier::new(key_pair.public_key()).verify(message, &signature)?;
//! assert_eq!(verdict, Verdict::Valid);
//! # }
//! # Ok::<(), p192_ecdsa::Error>(())
//! ```

pub mod ecdsa;
pub mod hash;
pub mod random;
pub mod trace;

mod error;
mod keys;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    ecdsa::{Signature, Signer, Verdict, Verifier},
    error::{Error, Result},
    hash::{DigestHasher, HashToScalar, PolynomialHash, Sha256Hasher},
    keys::{KeyPair, KeyPairGenerator, PrivateKey, PublicKey},
    random::{RandomSource, RngSource},
    trace::{Event, NoopObserver, Observer},
};
pub use num_bigint;
pub use weierstrass::{self, CurveParams, WeierstrassCurve};

use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Elliptic curve point on NIST P-192 in affine coordinates.
pub type AffinePoint = weierstrass::AffinePoint<NistP192>;

/// NIST P-192 elliptic curve.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP192;

/// p = 2¹⁹² − 2⁶⁴ − 1
const MODULUS: [u8; 24] = hex!("fffffffffffffffffffffffffffffffeffffffffffffffff");

/// a = -3 (mod p)
const EQUATION_A: [u8; 24] = hex!("fffffffffffffffffffffffffffffffefffffffffffffffc");

/// b = 0x64210519 e59c80e7 0fa7e9ab 72243049 feb8deec c146b9b1
const EQUATION_B: [u8; 24] = hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1");

/// Base point of P-192.
///
/// ```text
/// Gₓ = 0x188da80e b03090f6 7cbf20eb 43a18800 f4ff0afd 82ff1012
/// Gᵧ = 0x07192b95 ffc8da78 631011ed 6b24cdd5 73f977a1 1e794811
/// ```
const GENERATOR: ([u8; 24], [u8; 24]) = (
    hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
    hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
);

/// Order of NIST P-192's elliptic curve group (i.e. scalar modulus).
const ORDER: [u8; 24] = hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831");

/// Adapted from [FIPS 186-4] § D.1.2.1: Curve P-192.
///
/// [FIPS 186-4]: https://csrc.nist.gov/publications/detail/fips/186/4/final
static PARAMS: Lazy<CurveParams> = Lazy::new(|| {
    CurveParams::new_unchecked(
        BigUint::from_bytes_be(&MODULUS),
        BigUint::from_bytes_be(&EQUATION_A),
        BigUint::from_bytes_be(&EQUATION_B),
        (
            BigUint::from_bytes_be(&GENERATOR.0),
            BigUint::from_bytes_be(&GENERATOR.1),
        ),
        BigUint::from_bytes_be(&ORDER),
    )
});

impl WeierstrassCurve for NistP192 {
    fn params() -> &'static CurveParams {
        &PARAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_pass_validation() {
        let validated = CurveParams::new(
            PARAMS.p().clone(),
            PARAMS.a().clone(),
            PARAMS.b().clone(),
            (PARAMS.generator().0.clone(), PARAMS.generator().1.clone()),
            PARAMS.n().clone(),
        )
        .unwrap();

        assert_eq!(&validated, NistP192::params());
        assert_eq!(validated.field_bytes(), 24);
        assert_eq!(validated.scalar_bytes(), 24);
    }

    #[test]
    fn equation_a_is_minus_three() {
        assert_eq!(PARAMS.a() + 3u8, *PARAMS.p());
    }
}
