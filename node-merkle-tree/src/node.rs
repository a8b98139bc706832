use core::fmt;
use std::sync::Arc;

use merkle_commitment::{MerkleHasher, plain_merge};

use crate::{Result, Storable};

/// A node of a [`NodeMerkleTree`](crate::NodeMerkleTree).
///
/// Children are shared handles: when a level has an odd number of nodes the
/// last one is paired with itself, so one subtree may hang under both sides
/// of its parent.
#[derive(Debug)]
pub struct Node<C> {
    hash: Vec<u8>,
    kind: NodeKind<C>,
}

#[derive(Debug)]
enum NodeKind<C> {
    Leaf {
        content: Arc<C>,
        duplicate: bool,
    },
    Internal {
        left: Arc<Node<C>>,
        right: Arc<Node<C>>,
    },
}

impl<C> Node<C> {
    pub(crate) fn leaf(hash: Vec<u8>, content: Arc<C>, duplicate: bool) -> Self {
        Node {
            hash,
            kind: NodeKind::Leaf { content, duplicate },
        }
    }

    pub(crate) fn internal<H: MerkleHasher>(left: Arc<Node<C>>, right: Arc<Node<C>>) -> Self {
        let hash = plain_merge::<H>(&left.hash, &right.hash).as_ref().to_vec();
        Node {
            hash,
            kind: NodeKind::Internal { left, right },
        }
    }

    pub(crate) fn shared_content(&self) -> Option<Arc<C>> {
        match &self.kind {
            NodeKind::Leaf { content, .. } => Some(Arc::clone(content)),
            NodeKind::Internal { .. } => None,
        }
    }

    /// The digest stored in this node when the tree was built.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// `true` for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// `true` for the padding leaf that copies the last real leaf.
    pub fn is_duplicate(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { duplicate: true, .. })
    }

    /// The content of a leaf; `None` for internal nodes.
    pub fn content(&self) -> Option<&C> {
        match &self.kind {
            NodeKind::Leaf { content, .. } => Some(&**content),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Left child; `None` for leaves.
    pub fn left(&self) -> Option<&Node<C>> {
        match &self.kind {
            NodeKind::Internal { left, .. } => Some(&**left),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Right child; `None` for leaves.
    pub fn right(&self) -> Option<&Node<C>> {
        match &self.kind {
            NodeKind::Internal { right, .. } => Some(&**right),
            NodeKind::Leaf { .. } => None,
        }
    }
}

impl<C: Storable> Node<C> {
    /// Recompute this subtree's digest from the leaf contents up, ignoring
    /// every stored hash.
    pub fn recompute<H: MerkleHasher>(&self) -> Result<Vec<u8>> {
        match &self.kind {
            NodeKind::Leaf { content, .. } => content.calculate_hash(),
            NodeKind::Internal { left, right } => {
                let left = left.recompute::<H>()?;
                let right = right.recompute::<H>()?;
                Ok(plain_merge::<H>(&left, &right).as_ref().to_vec())
            }
        }
    }
}

/// `"{is_leaf} {is_duplicate} 0x{hash}"`, followed by the content for leaves.
impl<C: fmt::Debug> fmt::Display for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} 0x{}",
            self.is_leaf(),
            self.is_duplicate(),
            hex::encode(&self.hash)
        )?;
        if let Some(content) = self.content() {
            write!(f, " {:?}", content)?;
        }
        Ok(())
    }
}
