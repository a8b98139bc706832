use core::marker::PhantomData;
use std::sync::Arc;

use merkle_commitment::{CommitmentTree, MerkleHasher, Sha256Hasher, to_prefixed_hex};
use tracing::debug;

use crate::{Error, Node, Result, Storable};

/// A Merkle tree of linked nodes, built once from a fixed list of content.
///
/// Leaves hash with [`Storable::calculate_hash`]; parents hash as
/// `H(left || right)` with the digest `H`, which defaults to SHA-256.
#[derive(Debug)]
pub struct NodeMerkleTree<C, H: MerkleHasher = Sha256Hasher> {
    root: Arc<Node<C>>,
    merkle_root: Vec<u8>,
    leaves: Vec<Arc<Node<C>>>,
    _hasher: PhantomData<fn() -> H>,
}

impl<C: Storable> NodeMerkleTree<C> {
    /// Build a SHA-256 tree over `contents`.
    pub fn new(contents: Vec<C>) -> Result<Self> {
        Self::with_hasher(contents)
    }
}

impl<C: Storable, H: MerkleHasher> NodeMerkleTree<C, H> {
    /// Build a tree over `contents`, merging with the digest `H`.
    ///
    /// An odd number of items is padded with a duplicate of the last leaf,
    /// flagged as such. Fails with [`Error::EmptyContents`] when `contents`
    /// is empty, and propagates any digest failure from the content.
    pub fn with_hasher(contents: Vec<C>) -> Result<Self> {
        if contents.is_empty() {
            return Err(Error::EmptyContents);
        }

        let mut leaves = contents
            .into_iter()
            .map(|content| {
                let hash = content.calculate_hash()?;
                Ok(Arc::new(Node::leaf(hash, Arc::new(content), false)))
            })
            .collect::<Result<Vec<_>>>()?;

        let padded = leaves.len() % 2 == 1;
        if padded {
            let duplicate = leaves.last().and_then(|last| {
                last.shared_content()
                    .map(|content| Node::leaf(last.hash().to_vec(), content, true))
            });
            leaves.extend(duplicate.map(Arc::new));
        }

        let root = build_levels::<C, H>(leaves.clone())?;
        let merkle_root = root.hash().to_vec();

        debug!(
            hasher = H::name(),
            leaves = leaves.len(),
            padded,
            root = %to_prefixed_hex(&merkle_root),
            "built node merkle tree"
        );

        Ok(NodeMerkleTree {
            root,
            merkle_root,
            leaves,
            _hasher: PhantomData,
        })
    }

    /// Recompute every node from the leaf contents and compare the result
    /// with the root recorded at build time.
    pub fn verify_tree(&self) -> Result<bool> {
        let recomputed = self.root.recompute::<H>()?;
        Ok(recomputed == self.merkle_root)
    }

    /// `true` if `content` equals one of the leaves and the whole tree still
    /// recomputes to its recorded root.
    pub fn verify_content(&self, content: &C) -> Result<bool> {
        for leaf in &self.leaves {
            if let Some(candidate) = leaf.content() {
                if candidate.equals(content)? {
                    return self.verify_tree();
                }
            }
        }
        Ok(false)
    }
}

impl<C, H: MerkleHasher> NodeMerkleTree<C, H> {
    /// The root digest recorded when the tree was built. It is not checked
    /// against the current content; see
    /// [`verify_tree`](NodeMerkleTree::verify_tree).
    pub fn merkle_root(&self) -> &[u8] {
        &self.merkle_root
    }

    /// The root node.
    pub fn root_node(&self) -> &Node<C> {
        &self.root
    }

    /// Leaf nodes in order, including the padding duplicate if any.
    pub fn leaves(&self) -> impl Iterator<Item = &Node<C>> {
        self.leaves.iter().map(Arc::as_ref)
    }
}

/// Pair nodes level by level until one remains. A trailing unpaired node is
/// merged with itself.
fn build_levels<C, H: MerkleHasher>(mut level: Vec<Arc<Node<C>>>) -> Result<Arc<Node<C>>> {
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = Arc::clone(&pair[0]);
                let right = Arc::clone(pair.get(1).unwrap_or(&pair[0]));
                Arc::new(Node::internal::<H>(left, right))
            })
            .collect();
    }
    level.pop().ok_or(Error::EmptyContents)
}

impl<C, H: MerkleHasher> CommitmentTree for NodeMerkleTree<C, H> {
    type Hash = Vec<u8>;

    fn root(&self) -> Option<Vec<u8>> {
        Some(self.merkle_root.clone())
    }

    fn leaf_count(&self) -> usize {
        self.leaves.iter().filter(|leaf| !leaf.is_duplicate()).count()
    }
}
