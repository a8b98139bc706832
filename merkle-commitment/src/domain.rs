//! Hash domain separation.
//!
//! - Leaf nodes:     `H(0x00 || value)`
//! - Internal nodes: `H(0x01 || left_hash || right_hash)`
//!
//! The 0x00/0x01 domain tags prevent second-preimage attacks where a crafted
//! value could produce the same hash as an internal merge, or where the bytes
//! of an internal node are presented as if they were a leaf.

use crate::MerkleHasher;

/// Domain tag prepended to leaf hash inputs.
pub const LEAF_TAG: u8 = 0x00;
/// Domain tag prepended to internal merge inputs.
pub const INTERNAL_TAG: u8 = 0x01;

/// Compute the domain-separated leaf hash: `H(0x00 || value)`.
pub fn leaf_hash<H: MerkleHasher>(value: &[u8]) -> H::Hash {
    H::hash_parts(&[&[LEAF_TAG][..], value])
}

/// Merge two children with domain separation: `H(0x01 || left || right)`.
pub fn internal_hash<H: MerkleHasher>(left: &H::Hash, right: &H::Hash) -> H::Hash {
    H::hash_parts(&[&[INTERNAL_TAG][..], left.as_ref(), right.as_ref()])
}

/// Merge two children without a domain tag: `H(left || right)`.
///
/// Inputs are byte slices because the caller may feed content-defined leaf
/// digests of any length.
pub fn plain_merge<H: MerkleHasher>(left: &[u8], right: &[u8]) -> H::Hash {
    H::hash_parts(&[left, right])
}
