//! Bitwise operations for `U512`
//!
//! This module implements the small set of operator traits the crate
//! needs on the `U512` type.
//!
//! The goal is **not** to provide big-integer arithmetic, but only the
//! operations required by digest handling: XOR, which together with
//! `count_ones` measures the bit-level distance between two digests.
//!
//! All operations are implemented explicitly on fixed-size arrays, with
//! no heap allocation and predictable behavior. The internal
//! representation is big-endian.

use crate::primitives::u512::U512;
use std::ops::BitXor;

/// Bitwise XOR between two 512-bit values.
impl BitXor<U512> for U512 {
    type Output = U512;

    fn bitxor(self, rhs: U512) -> Self::Output {
        let mut out = [0u8; 64];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U512(out)
    }
}
