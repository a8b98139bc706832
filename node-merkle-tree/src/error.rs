use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from node tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The tree was asked to build over no content.
    #[error("cannot make a merkle tree without any contents")]
    EmptyContents,
    /// A content item could not produce its digest.
    #[error("hash computation failed: {0}")]
    HashComputationFailure(String),
    /// Two content items could not be compared.
    #[error("content comparison failed: {0}")]
    ContentComparison(String),
}
