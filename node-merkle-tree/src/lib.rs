//! Build-once Merkle tree of linked nodes over caller-defined content.
//!
//! Each leaf digest is whatever [`Storable::calculate_hash`] returns for its
//! content. Parents are `H(left || right)` with no domain tag, so a leaf
//! digest and an internal digest live in the same domain. This is a weaker
//! property than the tagged scheme of the flat tree and is kept as is: the
//! roots this tree produces depend on it.
//!
//! The tree offers its root and a full recompute-and-compare check
//! ([`NodeMerkleTree::verify_tree`]). It cannot produce inclusion proofs.

#![warn(missing_docs)]

mod error;
mod node;
mod storable;
mod tree;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use merkle_commitment::{CommitmentTree, MerkleHasher, Sha256Hasher};
#[cfg(feature = "blake3")]
pub use merkle_commitment::Blake3Hasher;
pub use node::Node;
pub use storable::Storable;
pub use tree::NodeMerkleTree;
