//! Index arithmetic for a complete binary tree stored in level order.
//!
//! ```text
//!             0
//!          /     \
//!         1       2
//!       /   \    / \
//!      3     4  5   6
//!     / \
//!    7   8
//! ```
//!
//! Left children sit at odd indices and right children at even indices.

/// Index of the left child of `index`.
pub fn left_child_index(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`.
pub fn right_child_index(index: usize) -> usize {
    2 * index + 2
}

/// Index of the parent of `index`. Must not be called on the root.
pub fn parent_index(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

/// `true` if `index` is a left child.
pub fn is_left_child(index: usize) -> bool {
    index % 2 == 1
}

/// Index of the sibling of `index`. Must not be called on the root.
pub fn sibling_index(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no sibling");
    if is_left_child(index) {
        index + 1
    } else {
        index - 1
    }
}

/// `true` if the node at `index` has children in a tree of `node_count` nodes.
///
/// Every internal node of a full binary tree has both children, so checking
/// the left child is enough.
pub fn has_child(index: usize, node_count: usize) -> bool {
    left_child_index(index) < node_count
}

/// Number of slots in a full binary tree with `leaf_count` leaves. Zero for
/// no leaves.
pub fn node_count_for_leaves(leaf_count: usize) -> usize {
    (2 * leaf_count).saturating_sub(1)
}

/// Array index of the first leaf in a tree of `node_count` nodes holding
/// `leaf_count` leaves.
pub fn first_leaf_index(node_count: usize, leaf_count: usize) -> usize {
    node_count.saturating_sub(leaf_count)
}

/// Upper bound on the number of siblings on any leaf-to-root path:
/// `floor(log2(node_count))`.
pub fn max_proof_len(node_count: usize) -> usize {
    if node_count == 0 {
        return 0;
    }
    node_count.ilog2() as usize
}
