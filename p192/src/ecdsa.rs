//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing follows the textbook algorithm:
//!
//! 1. `z = H(m) mod n`
//! 2. draw `k` uniformly from `[0, n)`
//! 3. `R = k·G`, `r = R.x mod n`; start over if `r = 0`
//! 4. `s = k⁻¹·(z + r·d) mod n`; start over if `s = 0`
//!
//! Verification recomputes `R = (z·s⁻¹)·G + (r·s⁻¹)·Q` and accepts iff `R` is
//! finite and `R.x mod n = r`.

mod sign;
mod signature;
mod verify;

pub use self::{sign::Signer, signature::Signature, verify::Verifier};

/// Outcome of verifying a signature.
///
/// Rejecting a tampered, mismatched or malformed signature is a normal
/// outcome, not an error.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// The signature is valid for the message and public key.
    Valid,

    /// The signature is not valid.
    Invalid,
}

impl Verdict {
    /// Is this [`Verdict::Valid`]?
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid { Verdict::Valid } else { Verdict::Invalid }
    }
}
