//! 512-bit value primitive
//!
//! This module defines a fixed-size 512-bit value type (`U512`) used to
//! carry SHA-512 digests.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases are:
//! - cryptographic hash outputs
//! - digest comparison and bit-level distance measurements
//! - human-readable hexadecimal formatting
//!
//! The internal representation is big-endian, which aligns naturally
//! with cryptographic conventions and hexadecimal display.

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 512-bit value.
///
/// The value is stored as 64 bytes in **big-endian** order.
///
/// This type intentionally exposes only the minimal functionality the
/// crate requires, favoring clarity and correctness over completeness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct U512(pub(crate) [u8; 64]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 64]);

    /// Counts the number of one bits in the value.
    ///
    /// # Returns
    /// The number of set bits in the range `0..=512`.
    ///
    /// # Notes
    /// Combined with XOR this yields the Hamming distance between two
    /// digests, which is how avalanche behavior is measured.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|byte| byte.count_ones()).sum()
    }
}

impl Display for U512 {
    /// Formats the value as eight space-separated 64-bit words.
    ///
    /// Each word is printed as 16 uppercase hexadecimal digits, most
    /// significant word first.
    ///
    /// Example:
    /// `CF83E1357EEFB8BD F1542850D66D8007 ...`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, chunk) in self.0.chunks_exact(8).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{:016X}", u64::from_be_bytes(chunk.try_into().unwrap()))?;
        }

        Ok(())
    }
}

/// Provides a manual `Default` implementation for `U512`.
///
/// `#[derive(Default)]` cannot be used directly because, on some Rust
/// versions, the `Default` trait is not implemented for arrays larger
/// than 32 elements.
///
/// The default value represents zero, with all 512 bits cleared,
/// consistent with `U512::ZERO`.
impl Default for U512 {
    fn default() -> Self {
        U512([0u8; 64])
    }
}
