//! SHA-256 content hashing.
//!
//! The file hasher reads in fixed-size chunks so memory use is independent
//! of file size. Digests are returned as lowercase hex strings, which is
//! the format recorded in receipts and compared during verification.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Chunk size for streaming file reads.
const CHUNK_SIZE: usize = 8192;

/// Compute the SHA-256 digest of a file as a lowercase hex string.
///
/// Reads the file in [`CHUNK_SIZE`] chunks. Read failures propagate to the
/// caller; there is no retry or recovery.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the SHA-256 digest of an in-memory byte slice as lowercase hex.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
