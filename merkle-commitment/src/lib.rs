//! Digest functions and hashing schemes shared by the Merkle commitment trees.
//!
//! This crate provides the pluggable hashing primitive that the tree crates
//! are generic over, plus the two hashing schemes built on top of it.
//!
//! # Core types
//!
//! - [`MerkleHasher`] — a fixed-output cryptographic digest.
//! - [`Sha256Hasher`] — the default 256-bit digest.
//! - [`Blake3Hasher`] — 256-bit Blake3 (requires the `blake3` feature).
//! - [`CommitmentTree`] — the capability every tree shares: build once and
//!   expose a root.
//!
//! # Hashing schemes
//!
//! - Domain separated: [`leaf_hash`] is `H(0x00 || value)` and
//!   [`internal_hash`] is `H(0x01 || left || right)`.
//! - Plain: [`plain_merge`] is `H(left || right)` with no tag. Only the
//!   node-graph tree uses it; a leaf digest and an internal digest share one
//!   domain under this scheme.

#![warn(missing_docs)]

mod commitment;
mod domain;
mod hasher;
#[cfg(test)]
mod tests;

pub use commitment::{CommitmentTree, to_prefixed_hex};
pub use domain::{INTERNAL_TAG, LEAF_TAG, internal_hash, leaf_hash, plain_merge};
#[cfg(feature = "blake3")]
pub use hasher::Blake3Hasher;
pub use hasher::{MerkleHasher, Sha256Hasher};
