//! Conversions between `U512` and byte representations
//!
//! This module defines explicit conversions between the fixed-size
//! `U512` type and raw byte representations.
//!
//! These conversions are fundamental for:
//! - serialization and comparison against external digests
//! - interoperability with low-level APIs
//!
//! All conversions preserve the internal big-endian representation of
//! `U512` and avoid implicit truncation.

use crate::primitives::U512;

/// Converts a `U512` into a 64-byte array.
///
/// The returned array represents the value in big-endian order.
impl From<U512> for [u8; 64] {
    fn from(value: U512) -> Self {
        value.0
    }
}

/// Converts a 64-byte array into a `U512`.
///
/// The input is interpreted as a big-endian 512-bit value.
impl From<[u8; 64]> for U512 {
    fn from(value: [u8; 64]) -> Self {
        U512(value)
    }
}

/// Borrows the underlying 64-byte array of a `U512`.
///
/// This is useful for read-only access in comparison or serialization
/// routines.
impl AsRef<[u8; 64]> for U512 {
    fn as_ref(&self) -> &[u8; 64] {
        &self.0
    }
}
