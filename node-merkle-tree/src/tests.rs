use std::cell::RefCell;

use assert_matches::assert_matches;
use merkle_commitment::{MerkleHasher, plain_merge};

use super::*;

/// Content hashed with plain SHA-256 of its text.
#[derive(Debug, Clone)]
struct TestSha256Content {
    x: RefCell<String>,
}

impl TestSha256Content {
    fn new(x: &str) -> Self {
        TestSha256Content {
            x: RefCell::new(x.to_string()),
        }
    }
}

impl Storable for TestSha256Content {
    fn calculate_hash(&self) -> Result<Vec<u8>> {
        Ok(Sha256Hasher::hash(self.x.borrow().as_bytes()).to_vec())
    }

    fn equals(&self, other: &Self) -> Result<bool> {
        Ok(*self.x.borrow() == *other.x.borrow())
    }
}

/// Content whose digest can never be computed.
#[derive(Debug)]
struct Unhashable;

impl Storable for Unhashable {
    fn calculate_hash(&self) -> Result<Vec<u8>> {
        Err(Error::HashComputationFailure("writer closed".to_string()))
    }

    fn equals(&self, _other: &Self) -> Result<bool> {
        Ok(true)
    }
}

fn contents(items: &[&str]) -> Vec<TestSha256Content> {
    items.iter().map(|x| TestSha256Content::new(x)).collect()
}

#[test]
fn test_new_tree_golden_roots() {
    let table: [(&[&str], [u8; 32]); 3] = [
        (
            &["Hello", "Hi", "Hey", "Hola"],
            [
                95, 48, 204, 128, 19, 59, 147, 148, 21, 110, 36, 178, 51, 240, 196, 190, 50, 178,
                78, 68, 187, 51, 129, 240, 44, 123, 165, 38, 25, 208, 254, 188,
            ],
        ),
        (
            &["Hello", "Hi", "Hey"],
            [
                189, 214, 55, 197, 35, 237, 92, 14, 171, 121, 43, 152, 109, 177, 136, 80, 194, 57,
                162, 226, 56, 2, 179, 106, 255, 38, 187, 104, 251, 63, 224, 8,
            ],
        ),
        (
            &["Hello", "Hi", "Hey", "Greetings", "Hola"],
            [
                46, 216, 115, 174, 13, 210, 55, 39, 119, 197, 122, 104, 93, 144, 112, 131, 202,
                151, 41, 14, 80, 143, 21, 71, 140, 169, 139, 173, 50, 37, 235, 188,
            ],
        ),
    ];

    for (case, (items, expected)) in table.iter().enumerate() {
        let tree = NodeMerkleTree::new(contents(items)).expect("build tree");
        assert_eq!(tree.merkle_root(), expected, "case {}", case);
        assert!(tree.verify_tree().expect("verify"), "case {}", case);
    }
}

#[test]
fn test_empty_contents() {
    assert_matches!(
        NodeMerkleTree::new(Vec::<TestSha256Content>::new()),
        Err(Error::EmptyContents)
    );
}

#[test]
fn test_hash_failure_propagates() {
    assert_matches!(
        NodeMerkleTree::new(vec![Unhashable]),
        Err(Error::HashComputationFailure(msg)) if msg == "writer closed"
    );
}

#[test]
fn test_odd_count_pads_with_flagged_duplicate() {
    let tree = NodeMerkleTree::new(contents(&["Hello", "Hi", "Hey"])).expect("build tree");
    let leaves: Vec<&Node<TestSha256Content>> = tree.leaves().collect();
    assert_eq!(leaves.len(), 4);
    assert!(leaves.iter().all(|leaf| leaf.is_leaf()));
    assert_eq!(
        leaves.iter().map(|leaf| leaf.is_duplicate()).collect::<Vec<_>>(),
        vec![false, false, false, true]
    );
    assert_eq!(leaves[3].hash(), leaves[2].hash());
    assert_eq!(tree.leaf_count(), 3);
}

#[test]
fn test_parents_are_untagged() {
    let tree = NodeMerkleTree::new(contents(&["a", "b"])).expect("build tree");
    let left = Sha256Hasher::hash(b"a");
    let right = Sha256Hasher::hash(b"b");
    assert_eq!(
        tree.merkle_root(),
        plain_merge::<Sha256Hasher>(&left, &right).as_slice()
    );

    let root = tree.root_node();
    assert!(!root.is_leaf());
    assert_eq!(root.left().expect("left").hash(), left.as_slice());
    assert_eq!(root.right().expect("right").hash(), right.as_slice());
    assert!(root.content().is_none());
}

#[test]
fn test_verify_tree_detects_changed_content() {
    let tree = NodeMerkleTree::new(contents(&["Hello", "Hi", "Hey", "Hola"])).expect("build");
    assert!(tree.verify_tree().expect("verify"));

    let leaf = tree.leaves().nth(1).expect("second leaf");
    *leaf.content().expect("leaf content").x.borrow_mut() = "Howdy".to_string();

    assert!(!tree.verify_tree().expect("verify"));
}

#[test]
fn test_verify_content() {
    let tree = NodeMerkleTree::new(contents(&["Hello", "Hi", "Hey", "Hola"])).expect("build");
    assert!(tree.verify_content(&TestSha256Content::new("Hey")).expect("verify"));
    assert!(
        !tree
            .verify_content(&TestSha256Content::new("NotInTestTable"))
            .expect("verify")
    );
}

#[test]
fn test_node_display() {
    let tree = NodeMerkleTree::new(contents(&["a", "b"])).expect("build tree");
    let leaf = tree.leaves().next().expect("first leaf");
    let rendered = leaf.to_string();
    assert!(rendered.starts_with("true false 0x"));
    assert!(rendered.contains(&hex::encode(Sha256Hasher::hash(b"a"))));
    assert!(tree.root_node().to_string().starts_with("false false 0x"));
}

#[cfg(feature = "blake3")]
#[test]
fn test_blake3_merges() {
    let sha = NodeMerkleTree::new(contents(&["a", "b", "c"])).expect("build tree");
    let blake = NodeMerkleTree::<_, Blake3Hasher>::with_hasher(contents(&["a", "b", "c"]))
        .expect("build tree");
    assert_ne!(sha.merkle_root(), blake.merkle_root());
    assert!(blake.verify_tree().expect("verify"));
}

#[test]
fn test_commitment_tree_root() {
    let tree = NodeMerkleTree::new(contents(&["a", "b", "c"])).expect("build tree");
    assert_eq!(tree.root(), Some(tree.merkle_root().to_vec()));
}
