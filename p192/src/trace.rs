//! Tracing hook for intermediate values.
//!
//! The engine performs no I/O. Callers who want to see what happens inside
//! key generation, signing and verification install an [`Observer`]; the
//! default [`NoopObserver`] discards everything.
//!
//! Events expose secret material (private keys and ephemeral scalars). Never
//! install an observer that persists them outside of debugging sessions.

use num_bigint::BigUint;

/// Affine coordinates of a point, or `None` for the point at infinity.
pub type Coordinates<'a> = Option<(&'a BigUint, &'a BigUint)>;

/// Intermediate values reported to an [`Observer`].
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Event<'a> {
    /// A key pair was generated.
    KeyGenerated {
        /// Private scalar.
        d: &'a BigUint,

        /// Public point `Q = d·G`.
        q: (&'a BigUint, &'a BigUint),
    },

    /// One pass of the signing loop.
    SignAttempt {
        /// Ephemeral scalar.
        k: &'a BigUint,

        /// `R = k·G`.
        r_point: Coordinates<'a>,

        /// `R.x mod n`; zero means the attempt was rejected.
        r: &'a BigUint,

        /// `k⁻¹·(z + r·d) mod n`, or `None` if the attempt was rejected
        /// before it was computed.
        s: Option<&'a BigUint>,
    },

    /// Values computed while verifying a signature in range.
    VerifyStep {
        /// Message hash reduced modulo `n`.
        z: &'a BigUint,

        /// `s⁻¹ mod n`.
        w: &'a BigUint,

        /// `z·w mod n`.
        u1: &'a BigUint,

        /// `r·w mod n`.
        u2: &'a BigUint,

        /// `u1·G + u2·Q`.
        r_point: Coordinates<'a>,
    },
}

/// Receiver of [`Event`]s.
pub trait Observer {
    /// Called synchronously for every event.
    fn observe(&self, event: &Event<'_>);
}

impl<F> Observer for F
where
    F: Fn(&Event<'_>),
{
    fn observe(&self, event: &Event<'_>) {
        self(event)
    }
}

/// Observer which ignores every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn observe(&self, _event: &Event<'_>) {}
}
