//! SHA-512 message digests for in-memory data and length-known byte streams.
//!
//! This crate provides a from-scratch, pure-Rust implementation of the
//! SHA-512 hash function, together with the small amount of plumbing
//! needed to hash files and other byte sources whose total length is
//! known before hashing begins.
//!
//! The focus is on **clarity, predictability, and auditability**: every
//! byte-order conversion is explicit, all state lives in fixed-size
//! arrays, and no heap allocation happens inside the hashing core.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-512 hash function itself: the compression function
//!   operating on 1024-bit blocks, and the padding logic that turns an
//!   arbitrary-length message into a sequence of such blocks.
//!
//! - `primitives`
//!   Fixed-size value types. `U512` carries a 512-bit digest with
//!   explicit conversions to words and bytes and a hexadecimal
//!   rendering suitable for display.
//!
//! - `stream`
//!   Environment-facing helpers for hashing byte sources that are read
//!   sequentially: files and `Read` implementors with a declared total
//!   length. All I/O errors are detected and reported here; the hashing
//!   core itself cannot fail.
//!
//! # Design goals
//!
//! - No heap allocations in the hashing core
//! - Minimal and explicit APIs
//! - Portable: no byte reinterpretation, no platform intrinsics
//! - Clear separation between cryptographic code and I/O plumbing

pub mod hash;
pub mod primitives;
pub mod stream;
