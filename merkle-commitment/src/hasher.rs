use core::fmt::Debug;

use sha2::{Digest, Sha256};

/// A cryptographic hash function with a fixed output length.
///
/// Trees are generic over this trait so the digest can be swapped without
/// touching tree logic. Implementations hash the concatenation of `parts`;
/// splitting the input into parts only avoids building a temporary buffer.
pub trait MerkleHasher {
    /// The digest produced by this hasher. It is a plain value type, so every
    /// digest handed out by a tree is an independent copy.
    type Hash: Copy + Eq + Debug + AsRef<[u8]> + Send + Sync + 'static;

    /// Digest length in bytes.
    const OUTPUT_LEN: usize;

    /// Short human-readable name, used in log output.
    fn name() -> &'static str;

    /// Hash the concatenation of `parts`.
    fn hash_parts(parts: &[&[u8]]) -> Self::Hash;

    /// Hash a single byte slice.
    fn hash(data: &[u8]) -> Self::Hash {
        Self::hash_parts(&[data])
    }
}

/// SHA-256, the default digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    type Hash = [u8; 32];

    const OUTPUT_LEN: usize = 32;

    fn name() -> &'static str {
        "sha256"
    }

    fn hash_parts(parts: &[&[u8]]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().into()
    }
}

/// Blake3 with its default 32-byte output.
#[cfg(feature = "blake3")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

#[cfg(feature = "blake3")]
impl MerkleHasher for Blake3Hasher {
    type Hash = [u8; 32];

    const OUTPUT_LEN: usize = 32;

    fn name() -> &'static str {
        "blake3"
    }

    fn hash_parts(parts: &[&[u8]]) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        *hasher.finalize().as_bytes()
    }
}
