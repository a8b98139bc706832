use crate::{Error, Result};

/// An opaque, immutable block of data committed into the tree.
///
/// Blocks compare by their bytes. The empty byte string stands in for an
/// absent block and is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block(Vec<u8>);

impl Block {
    /// Wrap `bytes` as a block, rejecting empty input.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::NilBlock);
        }
        Ok(Block(bytes))
    }

    /// The raw block bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the block and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Block {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Block::new(bytes)
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Block::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block_rejected() {
        assert_eq!(Block::new(Vec::new()), Err(Error::NilBlock));
        assert_eq!(Block::try_from(&b""[..]), Err(Error::NilBlock));
    }

    #[test]
    fn test_blocks_compare_by_bytes() {
        let a = Block::new(b"same".to_vec()).expect("non-empty");
        let b = Block::try_from(&b"same"[..]).expect("non-empty");
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), b"same");
        assert_eq!(b.into_bytes(), b"same".to_vec());
    }
}
