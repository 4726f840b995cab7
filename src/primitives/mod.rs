//! Primitive types
//!
//! This module defines the low-level primitive types used by the digest
//! API.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks
//! with well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full standard
//! library abstractions or big-integer libraries.
//!
//! Current primitives:
//! - `U512`: a fixed-size 512-bit unsigned value carrying a digest

mod u512;

/// Fixed-size 512-bit value.
///
/// This type is re-exported as the primary digest carrier used across
/// the crate.
pub use u512::U512;
