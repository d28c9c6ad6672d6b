#![cfg(feature = "persistent")]
//! Unit tests for RedBlackTree.
//!
//! Covers construction, shape-ordered traversal, lookup, contents equality
//! and the capability traits, through the public API only.

use persistent_rbtree::persistent::{Branch, Color, RedBlackTree, TreeWalk};
use persistent_rbtree::typeclass::{Collection, Lookup, Sequence};
use rstest::rstest;
use std::collections::HashSet;

// =============================================================================
// Traversal Order
// =============================================================================

#[rstest]
fn test_traversal_follows_shape_not_value_order() {
    let tree = RedBlackTree::new().insert(5).insert(2);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 2]);
    assert_eq!(tree.iter_sorted().copied().collect::<Vec<_>>(), vec![2, 5]);
}

#[rstest]
fn test_traversal_is_pre_order_after_rotation() {
    let tree: RedBlackTree<i32> = (0..3).collect();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 0, 2]);
}

#[rstest]
fn test_traversal_is_restartable() {
    let tree: RedBlackTree<i32> = (0..50).collect();
    let first: Vec<i32> = tree.iter().copied().collect();
    let second: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(first, second);
}

#[rstest]
fn test_traversal_reports_exact_length() {
    let tree: RedBlackTree<i32> = (0..20).collect();
    let mut walk = tree.iter();
    assert_eq!(walk.len(), 20);
    walk.next();
    assert_eq!(walk.len(), 19);
    assert_eq!(walk.count(), 19);
}

#[rstest]
fn test_for_loop_over_reference() {
    let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    let mut seen = Vec::new();
    for value in &tree {
        seen.push(*value);
    }
    assert_eq!(seen, vec![2, 1, 3]);
}

// =============================================================================
// Insert and Lookup
// =============================================================================

#[rstest]
fn test_sequential_inserts_hold_every_value() {
    let tree: RedBlackTree<i32> = (0..10).collect();
    let contents: HashSet<i32> = tree.iter().copied().collect();
    assert_eq!(contents, (0..10).collect());
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.lookup(&9), Some(&9));
    assert_eq!(tree.lookup(&15), None);
}

#[rstest]
fn test_insert_keeps_root_black() {
    let mut tree = RedBlackTree::new();
    for value in 0..100 {
        tree = tree.insert(value);
        assert_eq!(tree.root_color(), Some(Color::Black));
    }
    assert!(tree.check_invariants().is_ok());
}

#[rstest]
fn test_height_stays_logarithmic() {
    let tree: RedBlackTree<i32> = (0..1024).collect();
    // 2^(bh) - 1 <= n, so bh <= log2(n + 1)
    assert!(tree.black_height() <= 11);
    assert_eq!(tree.check_invariants(), Ok(tree.black_height()));
}

#[rstest]
fn test_older_versions_are_untouched() {
    let base: RedBlackTree<i32> = (0..5).collect();
    let before: Vec<i32> = base.iter().copied().collect();
    let _newer = base.insert(100).insert(-100);
    assert_eq!(base.iter().copied().collect::<Vec<_>>(), before);
    assert!(!base.contains(&100));
}

#[rstest]
#[case(vec![], None, None)]
#[case(vec![3], Some(3), Some(3))]
#[case(vec![5, -2, 9, 0], Some(-2), Some(9))]
fn test_min_and_max(
    #[case] values: Vec<i32>,
    #[case] minimum: Option<i32>,
    #[case] maximum: Option<i32>,
) {
    let tree: RedBlackTree<i32> = values.into_iter().collect();
    assert_eq!(RedBlackTree::min(&tree).copied(), minimum);
    assert_eq!(RedBlackTree::max(&tree).copied(), maximum);
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_equality_ignores_insertion_order() {
    let first = RedBlackTree::new().insert_all([1, 4, 2]);
    let second = RedBlackTree::new().insert_all([4, 2, 1]);
    assert!(first.is_equal(&second));
    assert_eq!(first, second);
}

#[rstest]
fn test_equality_despite_different_shapes() {
    let ascending: RedBlackTree<i32> = (0..8).collect();
    let descending: RedBlackTree<i32> = (0..8).rev().collect();
    assert_ne!(
        ascending.iter().collect::<Vec<_>>(),
        descending.iter().collect::<Vec<_>>()
    );
    assert_eq!(ascending, descending);
}

#[rstest]
fn test_equal_trees_hash_equally() {
    let first: RedBlackTree<i32> = (0..8).collect();
    let second: RedBlackTree<i32> = (0..8).rev().collect();
    let set: HashSet<RedBlackTree<i32>> = [first, second].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_empty_trees_are_equal() {
    assert_eq!(RedBlackTree::<i32>::new(), RedBlackTree::default());
}

// =============================================================================
// Capability Traits
// =============================================================================

fn total_through_capabilities<C>(collection: &C) -> i64
where
    C: Sequence<Element = i64>,
{
    collection.fold_sequence(0, |sum, value| sum + value)
}

fn add_twice<C: Collection>(collection: &C, value: C::Element) -> C
where
    C::Element: Clone,
{
    collection.insert_into(value.clone()).insert_into(value)
}

#[rstest]
fn test_collection_capability() {
    let tree: RedBlackTree<i64> = RedBlackTree::new();
    let twice = add_twice(&tree, 7);
    assert_eq!(twice.count(), 2);
    assert!(tree.empty_of().is_equal(&tree));
}

#[rstest]
fn test_sequence_capability() {
    let tree: RedBlackTree<i64> = (1..=4).collect();
    assert_eq!(total_through_capabilities(&tree), 10);

    let (head, tail) = Sequence::decompose(&tree).unwrap();
    assert_eq!(Some(head), Sequence::first(&tree));
    assert_eq!(tail.count(), 3);
    assert!(Sequence::to_sequence(&RedBlackTree::<i64>::new()).is_none());
}

#[rstest]
fn test_lookup_capability() {
    let tree: RedBlackTree<i64> = (0..10).collect();
    assert_eq!(Lookup::lookup(&tree, &4), Some(&4));
    assert!(!Lookup::contains(&tree, &40));
}

// =============================================================================
// Generic Walk
// =============================================================================

struct Expression {
    symbol: &'static str,
    operands: Vec<Expression>,
}

impl Branch for Expression {
    fn children(&self) -> impl Iterator<Item = &Self> {
        self.operands.iter()
    }
}

fn leaf(symbol: &'static str) -> Expression {
    Expression {
        symbol,
        operands: Vec::new(),
    }
}

#[rstest]
fn test_tree_walk_over_any_branch_shape() {
    let expression = Expression {
        symbol: "+",
        operands: vec![
            Expression {
                symbol: "*",
                operands: vec![leaf("a"), leaf("b"), leaf("c")],
            },
            leaf("d"),
        ],
    };
    let symbols: Vec<&str> = TreeWalk::new(Some(&expression))
        .map(|node| node.symbol)
        .collect();
    assert_eq!(symbols, vec!["+", "*", "a", "b", "c", "d"]);
    assert!(expression.is_branch());
    assert!(!leaf("x").is_branch());
}

#[rstest]
fn test_tree_walk_over_empty_shape() {
    let walk: TreeWalk<'_, Expression> = TreeWalk::new(None);
    assert_eq!(walk.count(), 0);
}
