//! Test vectors and deterministic randomness for tests.

pub mod ecdsa;

use crate::RandomSource;
use num_bigint::BigUint;
use std::collections::VecDeque;

/// ECDSA known-answer test vector.
#[derive(Debug)]
pub struct TestVector {
    /// Message digest, already truncated to the size of the curve order.
    pub m: &'static [u8],

    /// Private scalar.
    pub d: &'static [u8],

    /// Public key x-coordinate.
    pub q_x: &'static [u8],

    /// Public key y-coordinate.
    pub q_y: &'static [u8],

    /// Ephemeral scalar.
    pub k: &'static [u8],

    /// Signature `r` component.
    pub r: &'static [u8],

    /// Signature `s` component.
    pub s: &'static [u8],
}

/// [`RandomSource`] replaying a fixed sequence of values.
///
/// Each draw returns the next scripted value reduced modulo the requested
/// bound.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<BigUint>,
}

impl ScriptedSource {
    /// Replay `values` in order.
    pub fn new(values: impl IntoIterator<Item = BigUint>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    /// Number of values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSource {
    /// # Panics
    ///
    /// If the script is exhausted.
    fn draw_uniform(&mut self, bound: &BigUint) -> BigUint {
        match self.script.pop_front() {
            Some(value) => value % bound,
            None => panic!("scripted random source exhausted"),
        }
    }
}
