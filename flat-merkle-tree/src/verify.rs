//! Inclusion proof verification.
//!
//! [`FlatMerkleTree::verify`] rebuilds the path from a block to the root and
//! checks every rebuilt digest against the tree's own node array. It is a
//! consistency check against this instance only: it never looks at a root
//! obtained from anywhere else. A caller holding a root from a third party
//! must compare it separately, which is what
//! [`FlatMerkleTree::verify_against_root`] does.

use merkle_commitment::{MerkleHasher, internal_hash, leaf_hash};
use tracing::{debug, trace};

use crate::{
    Error, FlatMerkleTree, Result,
    index::{is_left_child, parent_index},
};

impl<H: MerkleHasher> FlatMerkleTree<H> {
    /// Verify that `proof` links `block` to the nodes stored in this tree.
    ///
    /// The walk starts from `H(0x00 || block)`. At each step the current
    /// digest is merged with the proof entry, on the left if the current node
    /// is a left child and on the right otherwise, and the result must equal
    /// the stored parent byte for byte. The first disagreement fails with
    /// [`Error::VerificationMismatch`] naming the step.
    ///
    /// A proof shorter than the leaf's depth is accepted as long as every
    /// entry it does contain matches. Trust in the result is only as good
    /// as trust in this tree instance; see
    /// [`verify_against_root`](Self::verify_against_root) for checking a
    /// block against a root received from elsewhere.
    pub fn verify(&self, block: impl AsRef<[u8]>, proof: &[H::Hash]) -> Result<()> {
        self.walk_proof(block.as_ref(), proof).map(|_| ())
    }

    /// Verify `proof` for `block` and check that the path ends at
    /// `trusted_root`.
    ///
    /// Unlike [`verify`](Self::verify) the proof must reach the root, and
    /// the root it reaches must equal the supplied one.
    pub fn verify_against_root(
        &self,
        block: impl AsRef<[u8]>,
        proof: &[H::Hash],
        trusted_root: &H::Hash,
    ) -> Result<()> {
        let (rebuilt, reached) = self.walk_proof(block.as_ref(), proof)?;
        if reached != 0 {
            return Err(Error::IncompleteProof { reached });
        }
        if &rebuilt != trusted_root {
            return Err(Error::RootMismatch {
                computed: rebuilt.as_ref().to_vec(),
                expected: trusted_root.as_ref().to_vec(),
            });
        }
        Ok(())
    }

    /// Walk `proof` upward from the leaf of `block`, returning the last
    /// digest reached and its array index.
    fn walk_proof(&self, block: &[u8], proof: &[H::Hash]) -> Result<(H::Hash, usize)> {
        self.ensure_finalized()?;
        let mut index = self.leaf_index(block)?;
        let mut current = leaf_hash::<H>(block);

        for (step, sibling) in proof.iter().enumerate() {
            if index == 0 {
                return Err(Error::ProofTooLong {
                    step,
                    len: proof.len(),
                });
            }

            let parent = parent_index(index);
            let rebuilt = if is_left_child(index) {
                internal_hash::<H>(&current, sibling)
            } else {
                internal_hash::<H>(sibling, &current)
            };
            let stored = self.nodes[parent];

            if rebuilt != stored {
                debug!(step, node = index, parent, "proof does not match stored node");
                return Err(Error::VerificationMismatch {
                    step,
                    computed: rebuilt.as_ref().to_vec(),
                    expected: stored.as_ref().to_vec(),
                });
            }

            trace!(step, node = index, parent, "proof step verified");
            current = stored;
            index = parent;
        }

        Ok((current, index))
    }
}
