/// The capability shared by every commitment tree: it is built from an
/// ordered sequence of leaves and exposes a single root digest.
///
/// Proof generation and verification are deliberately not part of this
/// trait. Only trees that can actually produce inclusion proofs offer them,
/// as inherent methods.
pub trait CommitmentTree {
    /// Digest type of the root.
    type Hash;

    /// The root digest, or `None` while the tree has not been built yet.
    fn root(&self) -> Option<Self::Hash>;

    /// Number of leaves committed to, excluding any padding duplicate.
    fn leaf_count(&self) -> usize;
}

/// Render bytes as `0x`-prefixed lowercase hex.
pub fn to_prefixed_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}
