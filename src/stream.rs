//! Length-known byte sources
//!
//! This module hashes byte sources that are read sequentially: files
//! and arbitrary `Read` implementors whose total length is declared up
//! front.
//!
//! The padding scheme needs the exact message length before the final
//! block can be built, so this layer requires the length to be known
//! before hashing begins; it reads the source in 128-byte chunks and
//! never buffers more than one block. There is no incremental API that
//! can be paused and resumed.
//!
//! All failure detection lives here. The hashing core itself cannot
//! fail: given a source that actually delivers the declared number of
//! bytes, digest computation always succeeds and is deterministic, and
//! no partial digest is ever returned.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::core::{Trailer, block_words, compress};
use crate::primitives::U512;

/// Errors reported while feeding a byte source to the hash.
///
/// These cover everything that can go wrong around the hashing core;
/// the core itself has no error paths.
#[derive(Debug)]
pub enum DigestError {
    /// The source could not be opened or read.
    Source(io::Error),
    /// The source ended before the declared total length was consumed.
    ///
    /// The padding algorithm requires an accurate total length known in
    /// advance, so a short source makes the digest undefined and the
    /// computation is abandoned.
    LengthMismatch { expected: u64, got: u64 },
}

impl From<io::Error> for DigestError {
    fn from(error: io::Error) -> Self {
        DigestError::Source(error)
    }
}

impl Display for DigestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestError::Source(err) => write!(f, "source unavailable: {err}"),
            DigestError::LengthMismatch { expected, got } => {
                write!(f, "source ended after {got} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for DigestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigestError::Source(err) => Some(err),
            DigestError::LengthMismatch { .. } => None,
        }
    }
}

/// Computes the SHA-512 hash of `total_len` bytes read from `source`.
///
/// The source is consumed in 128-byte chunks while at least a full
/// block remains, then the final partial chunk is padded and closed
/// with the bit-length field. Exactly `total_len` bytes are read;
/// anything the source holds beyond that is left untouched.
///
/// # Errors
/// - [`DigestError::Source`] if a read fails
/// - [`DigestError::LengthMismatch`] if the source runs dry before
///   `total_len` bytes were delivered
pub fn digest_reader<R: Read>(source: &mut R, total_len: u64) -> Result<U512, DigestError> {
    let mut state = H512_INIT;
    let mut buf = [0u8; 128];
    let mut remaining = total_len;

    while remaining >= 128 {
        read_chunk(source, &mut buf, total_len, remaining)?;
        compress(&block_words(&buf), &mut state);
        remaining -= 128;
    }

    let tail = &mut buf[..remaining as usize];
    read_chunk(source, tail, total_len, remaining)?;

    for block in Trailer::new(tail, total_len).blocks() {
        compress(block, &mut state);
    }

    Ok(U512::from(state))
}

/// Computes the SHA-512 hash of a file.
///
/// The total length is taken from file metadata before any byte is
/// read, and the file is streamed through a buffered reader.
///
/// # Errors
/// - [`DigestError::Source`] if the file cannot be opened or read
/// - [`DigestError::LengthMismatch`] if the file shrinks below its
///   reported metadata length while being hashed
pub fn digest_file<P: AsRef<Path>>(path: P) -> Result<U512, DigestError> {
    let file = File::open(path)?;
    let total_len = file.metadata()?.len();

    digest_reader(&mut BufReader::new(file), total_len)
}

/// Fills `buf` from the source, translating early end-of-stream into
/// [`DigestError::LengthMismatch`] with the byte counts seen so far.
fn read_chunk<R: Read>(
    source: &mut R,
    buf: &mut [u8],
    expected: u64,
    remaining: u64,
) -> Result<(), DigestError> {
    source.read_exact(buf).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => DigestError::LengthMismatch {
            expected,
            got: expected - remaining,
        },
        _ => DigestError::Source(err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha512;
    use std::io::Cursor;

    #[test]
    fn reader_matches_in_memory_digest() {
        for len in [0usize, 1, 127, 128, 129, 500] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();

            let from_reader = digest_reader(&mut Cursor::new(&data), len as u64)
                .expect("in-memory reads cannot fail");

            assert_eq!(from_reader, sha512(&data), "length {len}");
        }
    }

    #[test]
    fn reader_consumes_exactly_the_declared_length() {
        let data = vec![0x42u8; 300];
        let mut cursor = Cursor::new(&data);

        let prefix = digest_reader(&mut cursor, 200).expect("source holds enough bytes");

        assert_eq!(prefix, sha512(&data[..200]));
        assert_eq!(cursor.position(), 200);
    }

    #[test]
    fn short_source_is_a_length_mismatch() {
        let data = vec![0u8; 100];

        let err = digest_reader(&mut Cursor::new(&data), 350).unwrap_err();

        match err {
            DigestError::LengthMismatch { expected: 350, got } => assert!(got < 350),
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }
}
