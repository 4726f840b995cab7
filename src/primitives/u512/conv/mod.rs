//! Conversions between `U512` and other representations
//!
//! This module defines the explicit conversions supported by the
//! fixed-size `U512` type:
//! - 64-bit word arrays, matching the hash state layout
//! - raw 64-byte arrays, for serialization and comparison
//!
//! All conversions preserve the internal big-endian representation and
//! avoid implicit truncation.

mod u8;
mod u64;
