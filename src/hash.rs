// Licensed under the MIT license.

//! Seeded hashing on top of SHA-256.
//!
//! A single digest primitive is turned into a family of hash functions by
//! prefixing the input with the seed, encoded as four big-endian bytes:
//!
//! h<sub>s</sub>(x) = fold(SHA-256(be32(s) || x))
//!
//! The 32-byte digest is folded into a `u64` by XOR-ing its four 8-byte
//! big-endian words together. The result does not depend on the platform's
//! byte order or pointer width, and every digest bit contributes to it.
use sha2::{Digest, Sha256};

/// Length of the underlying digest, in bytes.
pub const DIGEST_LEN: usize = 32;

/// Compute the SHA-256 digest of `bytes`, prefixed with the big-endian `seed`.
pub fn digest(bytes: &[u8], seed: u32) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_be_bytes());
    hasher.update(bytes);

    hasher.finalize().into()
}

/// Hash `bytes` with the given seed.
pub fn seeded(bytes: &[u8], seed: u32) -> u64 {
    fold(&digest(bytes, seed))
}

/// XOR-fold a digest into a single word.
fn fold(digest: &[u8; DIGEST_LEN]) -> u64 {
    digest.chunks_exact(8).fold(0, |acc, chunk| {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);

        acc ^ u64::from_be_bytes(word)
    })
}
