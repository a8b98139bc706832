use proptest::prelude::*;

use crate::{MerkleHasher, Sha256Hasher, leaf_hash, to_prefixed_hex};

#[test]
fn test_sha256_empty_input() {
    assert_eq!(
        hex::encode(Sha256Hasher::hash(b"")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(Sha256Hasher::OUTPUT_LEN, 32);
    assert_eq!(Sha256Hasher::name(), "sha256");
}

#[test]
fn test_sha256_leaf_hash_known_vector() {
    // sha256(0x00 || "Hello")
    assert_eq!(
        hex::encode(leaf_hash::<Sha256Hasher>(b"Hello")),
        "90b626dbb1e994c962942db2b3b16d97c63f679912a176bb96f4e308c213005b"
    );
}

#[cfg(feature = "blake3")]
#[test]
fn test_blake3_matches_reference_hash() {
    use crate::Blake3Hasher;

    let digest = Blake3Hasher::hash_parts(&[&b"hello "[..], &b"world"[..]]);
    assert_eq!(digest, *blake3::hash(b"hello world").as_bytes());
    assert_ne!(digest, Sha256Hasher::hash(b"hello world"));
}

#[test]
fn test_prefixed_hex() {
    assert_eq!(to_prefixed_hex([0xde, 0xad, 0xbe, 0xef]), "0xdeadbeef");
    assert_eq!(to_prefixed_hex([0u8; 0]), "0x");
}

proptest! {
    #[test]
    fn test_split_input_hashes_like_concatenation(data in proptest::collection::vec(any::<u8>(), 0..256), split in 0usize..256) {
        let split = split.min(data.len());
        let (head, tail) = data.split_at(split);
        prop_assert_eq!(Sha256Hasher::hash_parts(&[head, tail]), Sha256Hasher::hash(&data));
    }
}
