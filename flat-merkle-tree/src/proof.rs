//! Inclusion proof generation.
//!
//! A proof is the list of sibling digests on the path from a block's leaf up
//! to, but not including, the root. Leaves on the shallower level of an
//! unbalanced tree have one ancestor fewer, so their proofs are one entry
//! shorter than [`max_proof_len`].

use merkle_commitment::MerkleHasher;
use tracing::trace;

use crate::{
    FlatMerkleTree, Result,
    index::{max_proof_len, parent_index, sibling_index},
};

impl<H: MerkleHasher> FlatMerkleTree<H> {
    /// Generate an inclusion proof for `block`.
    ///
    /// Entries are ordered from the leaf's level upward. Each entry is a copy
    /// of the stored sibling digest.
    ///
    /// If several supplied blocks have identical bytes the proof is for the
    /// earliest one.
    pub fn proof(&self, block: impl AsRef<[u8]>) -> Result<Vec<H::Hash>> {
        let mut index = self.leaf_index(block)?;
        let mut proof = Vec::with_capacity(max_proof_len(self.nodes.len()));

        while index > 0 {
            let sibling = sibling_index(index);
            trace!(node = index, sibling, "proof step");
            proof.push(self.nodes[sibling]);
            index = parent_index(index);
        }

        Ok(proof)
    }
}
