//! Conversions between `U512` and 64-bit word representations
//!
//! This module defines explicit conversions between the fixed-size
//! `U512` type and arrays of 64-bit words, the form in which the hash
//! state is produced and reported.
//!
//! Both directions preserve big-endian semantics: the first word is the
//! most significant.

use crate::primitives::U512;

/// Converts a `U512` into eight 64-bit words.
///
/// The resulting array is ordered from most significant to least
/// significant word, using big-endian interpretation.
impl From<U512> for [u64; 8] {
    fn from(value: U512) -> Self {
        let mut out = [0u64; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            *o = u64::from_be_bytes(chunk.try_into().unwrap());
        }

        out
    }
}

/// Converts eight 64-bit words into a `U512`.
///
/// The input array must be ordered from most significant to least
/// significant word.
impl From<[u64; 8]> for U512 {
    fn from(value: [u64; 8]) -> Self {
        let mut out = [0u8; 64];

        for (chunk, v) in out.chunks_exact_mut(8).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U512(out)
    }
}
