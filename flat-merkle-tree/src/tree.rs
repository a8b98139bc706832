use core::fmt;

use merkle_commitment::{
    CommitmentTree, MerkleHasher, Sha256Hasher, internal_hash, leaf_hash, to_prefixed_hex,
};
use tracing::debug;

use crate::{
    Block, Error, Result,
    index::{
        first_leaf_index, has_child, left_child_index, node_count_for_leaves, right_child_index,
    },
};

/// A Merkle tree over an ordered list of blocks, stored as a flat array.
///
/// The tree starts in the building phase, where blocks may be appended with
/// [`insert`](Self::insert). [`finalize`](Self::finalize) hashes the tree and
/// moves it permanently into the query phase, where [`root_hash`],
/// [`proof`] and [`verify`] become available and nothing can be changed.
///
/// `H` selects the digest. It defaults to SHA-256.
///
/// [`root_hash`]: Self::root_hash
/// [`proof`]: Self::proof
/// [`verify`]: Self::verify
#[derive(Debug, Clone)]
pub struct FlatMerkleTree<H: MerkleHasher = Sha256Hasher> {
    /// Blocks in insertion order. After finalization an odd count has been
    /// padded with a copy of the last block.
    pub(crate) blocks: Vec<Block>,
    /// Whether finalization appended a padding copy to `blocks`.
    pub(crate) padded: bool,
    /// Level-order node array. Empty until finalized.
    pub(crate) nodes: Vec<H::Hash>,
    /// Copy of `nodes[0]`. Set exactly once, by `finalize`; its presence is
    /// the finalization gate.
    pub(crate) root: Option<H::Hash>,
}

impl FlatMerkleTree {
    /// Create an empty SHA-256 tree in the building phase.
    pub fn new() -> Self {
        Self::with_hasher()
    }

    /// Create a SHA-256 tree pre-seeded with `blocks`.
    pub fn from_blocks<I, B>(blocks: I) -> Result<Self>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        Self::from_blocks_with_hasher(blocks)
    }
}

impl Default for FlatMerkleTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: MerkleHasher> FlatMerkleTree<H> {
    /// Create an empty tree using the digest `H`.
    pub fn with_hasher() -> Self {
        FlatMerkleTree {
            blocks: Vec::new(),
            padded: false,
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Create a tree using the digest `H`, pre-seeded with `blocks`.
    ///
    /// Fails with [`Error::NilBlock`] if any block is empty.
    pub fn from_blocks_with_hasher<I, B>(blocks: I) -> Result<Self>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let blocks = blocks
            .into_iter()
            .map(|block| Block::new(block.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(FlatMerkleTree {
            blocks,
            ..Self::with_hasher()
        })
    }

    /// `true` once [`finalize`](Self::finalize) has succeeded.
    pub fn is_finalized(&self) -> bool {
        self.root.is_some()
    }

    /// Number of blocks the caller supplied, not counting padding.
    pub fn len(&self) -> usize {
        self.blocks.len() - usize::from(self.padded)
    }

    /// `true` if no block has been supplied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The blocks the caller supplied, in order, without padding.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks[..self.len()]
    }

    /// Number of slots in the node array. Zero until finalized.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a block.
    ///
    /// Only allowed while the tree is being built.
    pub fn insert(&mut self, block: impl AsRef<[u8]>) -> Result<()> {
        let block = Block::new(block.as_ref())?;
        if self.is_finalized() {
            return Err(Error::AlreadyFinalized);
        }
        self.blocks.push(block);
        Ok(())
    }

    /// Hash the tree and freeze it.
    ///
    /// An odd block count is first padded by appending a copy of the last
    /// block, so the copy acts as a genuine second leaf. Leaf digests
    /// `H(0x00 || block)` fill the last `n` slots of a `2n - 1` slot array and
    /// internal digests `H(0x01 || left || right)` are computed bottom-up.
    ///
    /// This is a one-way transition. On error the tree is left exactly as it
    /// was before the call.
    pub fn finalize(&mut self) -> Result<()> {
        if self.is_finalized() {
            return Err(Error::AlreadyFinalized);
        }
        if self.blocks.is_empty() {
            return Err(Error::EmptyTree);
        }

        let pad = self.blocks.len() % 2 == 1;
        let leaf_count = self.blocks.len() + usize::from(pad);
        let node_count = node_count_for_leaves(leaf_count);

        // Leaves fill the tail of the array. Every slot before them is
        // internal and is overwritten by the post-order pass, so the first
        // leaf digest only serves as a placeholder.
        let first_leaf = first_leaf_index(node_count, leaf_count);
        let leaf_digests: Vec<H::Hash> = self
            .blocks
            .iter()
            .chain(if pad { self.blocks.last() } else { None })
            .map(|block| leaf_hash::<H>(block.as_bytes()))
            .collect();
        let mut nodes = vec![leaf_digests[0]; first_leaf];
        nodes.extend(leaf_digests);
        let root = hash_subtree::<H>(&mut nodes, 0);

        // Commit the new state.
        if pad {
            if let Some(last) = self.blocks.last().cloned() {
                self.blocks.push(last);
            }
        }
        self.padded = pad;
        self.nodes = nodes;
        self.root = Some(root);

        debug!(
            hasher = H::name(),
            blocks = self.len(),
            padded = pad,
            nodes = node_count,
            root = %to_prefixed_hex(root),
            "finalized flat merkle tree"
        );
        Ok(())
    }

    /// The root digest.
    ///
    /// The returned value is a copy; the tree's own state cannot be changed
    /// through it.
    pub fn root_hash(&self) -> Result<H::Hash> {
        self.root.ok_or(Error::NotFinalized)
    }

    pub(crate) fn ensure_finalized(&self) -> Result<()> {
        if self.is_finalized() {
            Ok(())
        } else {
            Err(Error::NotFinalized)
        }
    }

    /// Array index of the leaf for `block`.
    ///
    /// Matches by bytes against the blocks the caller supplied. If several
    /// blocks share the same bytes the earliest one wins, so a proof for a
    /// repeated block always refers to its first occurrence.
    pub fn leaf_index(&self, block: impl AsRef<[u8]>) -> Result<usize> {
        let block = block.as_ref();
        if block.is_empty() {
            return Err(Error::NilBlock);
        }
        self.ensure_finalized()?;
        let position = self
            .blocks()
            .iter()
            .position(|candidate| candidate.as_bytes() == block)
            .ok_or_else(|| Error::BlockNotFound(hex::encode(block)))?;
        Ok(first_leaf_index(self.nodes.len(), self.blocks.len()) + position)
    }
}

/// Post-order pass: hash both children of `index`, then `index` itself.
/// Leaves must already be present in `nodes`.
fn hash_subtree<H: MerkleHasher>(nodes: &mut [H::Hash], index: usize) -> H::Hash {
    if !has_child(index, nodes.len()) {
        return nodes[index];
    }
    let left = hash_subtree::<H>(nodes, left_child_index(index));
    let right = hash_subtree::<H>(nodes, right_child_index(index));
    let hash = internal_hash::<H>(&left, &right);
    nodes[index] = hash;
    hash
}

impl<H: MerkleHasher> CommitmentTree for FlatMerkleTree<H> {
    type Hash = H::Hash;

    fn root(&self) -> Option<H::Hash> {
        self.root
    }

    fn leaf_count(&self) -> usize {
        self.len()
    }
}

/// `0x`-prefixed hex of the root, or nothing before finalization.
impl<H: MerkleHasher> fmt::Display for FlatMerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => f.write_str(&to_prefixed_hex(root)),
            None => Ok(()),
        }
    }
}
