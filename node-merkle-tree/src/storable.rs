use crate::Result;

/// Content that can be committed into a [`NodeMerkleTree`].
///
/// [`NodeMerkleTree`]: crate::NodeMerkleTree
pub trait Storable {
    /// Digest of this item, used as its leaf hash.
    ///
    /// Failures should be reported as [`Error::HashComputationFailure`].
    ///
    /// [`Error::HashComputationFailure`]: crate::Error::HashComputationFailure
    fn calculate_hash(&self) -> Result<Vec<u8>>;

    /// Whether `self` and `other` represent the same item.
    fn equals(&self, other: &Self) -> Result<bool>;
}
