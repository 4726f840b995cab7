//! 512-bit value primitive
//!
//! This module defines the `U512` type, a fixed-size 512-bit value used
//! to carry SHA-512 digests.
//!
//! `U512` is designed as a low-level, dependency-free primitive rather
//! than a big-integer abstraction. It provides only the minimal set of
//! functionality required by the crate, with explicit semantics and
//! predictable behavior:
//! - conversions to and from words and bytes
//! - bitwise XOR and bit counting, for measuring digest distance
//! - a hexadecimal rendering in state-word order
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 512-bit value.
///
/// This type is re-exported as the primary 512-bit primitive.
pub use self::core::U512;
