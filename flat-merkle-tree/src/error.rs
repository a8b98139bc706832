use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from flat Merkle tree operations.
///
/// Every error is a local state or validation failure reported straight to
/// the caller. None of them are transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An empty block was passed where a block is required.
    #[error("block cannot be empty")]
    NilBlock,
    /// `finalize` was called before any block was inserted.
    #[error("merkle tree cannot be empty; insert some blocks")]
    EmptyTree,
    /// A mutation was attempted after the tree was finalized.
    #[error("merkle tree already finalized")]
    AlreadyFinalized,
    /// A query was attempted before the tree was finalized.
    #[error("merkle tree not finalized")]
    NotFinalized,
    /// The block is not among the blocks the tree was built from. Carries the
    /// hex encoding of the block.
    #[error("block does not exist: {0}")]
    BlockNotFound(String),
    /// The digest rebuilt at `step` disagrees with the stored node.
    #[error(
        "invalid proof at step {step}; got: {}, want: {}",
        hex::encode(.computed),
        hex::encode(.expected)
    )]
    VerificationMismatch {
        /// Index of the proof entry that produced the mismatch.
        step: usize,
        /// Digest rebuilt from the block and the proof.
        computed: Vec<u8>,
        /// Digest stored in the tree at that position.
        expected: Vec<u8>,
    },
    /// The proof has more entries than the leaf has ancestors.
    #[error("proof entry {step} lies above the root (proof has {len} entries)")]
    ProofTooLong {
        /// Index of the first entry past the root.
        step: usize,
        /// Total number of entries in the proof.
        len: usize,
    },
    /// The proof stopped before reaching the root, so it cannot be compared
    /// with a root.
    #[error("proof ends at node {reached} below the root")]
    IncompleteProof {
        /// Array index the walk ended on.
        reached: usize,
    },
    /// The root rebuilt from a proof disagrees with the trusted root.
    #[error(
        "root mismatch; got: {}, want: {}",
        hex::encode(.computed),
        hex::encode(.expected)
    )]
    RootMismatch {
        /// Root rebuilt from the block and the proof.
        computed: Vec<u8>,
        /// Root supplied by the caller.
        expected: Vec<u8>,
    },
    /// A node digest could not be produced.
    ///
    /// [`MerkleHasher`](merkle_commitment::MerkleHasher) digests are
    /// infallible, so the flat tree never returns this variant.
    #[error("hash computation failed: {0}")]
    HashComputationFailure(String),
}
