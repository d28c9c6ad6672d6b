#![cfg(feature = "serde")]

//! Integration tests for serde support of RedBlackTree.
//!
//! Serde works at the content level: trees serialize as their ascending
//! values and deserialize by inserting them, so shape is not preserved.

use persistent_rbtree::persistent::RedBlackTree;
use rstest::rstest;

#[rstest]
fn test_tree_serializes_as_sorted_sequence() {
    let tree: RedBlackTree<i32> = [5, 2, 8, 2].into_iter().collect();
    assert_eq!(serde_json::to_string(&tree).unwrap(), "[2,2,5,8]");
}

#[rstest]
fn test_tree_json_roundtrip() {
    let tree: RedBlackTree<i32> = (0..20).rev().collect();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: RedBlackTree<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tree);
    assert!(restored.check_invariants().is_ok());
}

#[rstest]
fn test_tree_deserializes_unsorted_input() {
    let restored: RedBlackTree<String> =
        serde_json::from_str(r#"["pear", "apple", "fig"]"#).unwrap();
    assert_eq!(
        restored.iter_sorted().cloned().collect::<Vec<_>>(),
        vec!["apple", "fig", "pear"]
    );
}

#[rstest]
fn test_empty_tree_roundtrip() {
    let tree: RedBlackTree<u8> = RedBlackTree::new();
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, "[]");
    let restored: RedBlackTree<u8> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_tree_rejects_non_sequence() {
    let result: Result<RedBlackTree<i32>, _> = serde_json::from_str("{\"a\": 1}");
    assert!(result.is_err());
}
