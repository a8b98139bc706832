//! Flat-array Merkle tree with a build/finalize lifecycle.
//!
//! Blocks are appended while the tree is being built. A single call to
//! [`FlatMerkleTree::finalize`] pads an odd block count by duplicating the
//! last block, hashes every leaf and internal node into one flat array, and
//! freezes the tree. After that the root can be read and inclusion proofs can
//! be generated and verified any number of times.
//!
//! The array holds a complete binary tree in level order: root at 0, the
//! children of `i` at `2i + 1` and `2i + 2`, the parent of `i` at
//! `(i - 1) / 2`. With `n` leaves the array has `2n - 1` slots and the leaves
//! occupy the last `n` of them.
//!
//! Hashing is domain separated:
//!
//! - Leaf nodes:     `H(0x00 || block)`
//! - Internal nodes: `H(0x01 || left || right)`
//!
//! # Thread safety
//!
//! The tree has no internal locking. Building requires `&mut self`, so the
//! borrow checker gives the builder exclusive access. Once finalized every
//! query takes `&self` and performs no mutation, so a finalized tree can be
//! shared read-only between threads (for example behind an `Arc`).

#![warn(missing_docs)]

mod block;
mod error;
mod index;
mod proof;
mod tree;
mod verify;


pub use block::Block;
pub use error::{Error, Result};
pub use merkle_commitment::{CommitmentTree, MerkleHasher, Sha256Hasher};
#[cfg(feature = "blake3")]
pub use merkle_commitment::Blake3Hasher;
pub use tree::FlatMerkleTree;
