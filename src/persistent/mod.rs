//! Persistent (immutable) red-black tree.
//!
//! This module provides [`RedBlackTree`], an ordered tree that never
//! mutates a node after it has been built:
//!
//! - `node`: the immutable color/left/value/right unit
//! - `engine`: insertion with rebalancing, and lookup
//! - [`TreeWalk`] / [`Traversal`]: lazy depth-first walks over the shape
//! - [`RedBlackTree`]: the public value type
//!
//! # Structural Sharing
//!
//! Inserting a value rebuilds only the nodes on the path from the root to
//! the new leaf. Every other subtree is shared, by reference count, between
//! the old and the new version.
//!
//! # Examples
//!
//! ```rust
//! use persistent_rbtree::persistent::RedBlackTree;
//!
//! let tree = RedBlackTree::new().insert(3).insert(1).insert(2);
//! assert!(tree.contains(&1));
//!
//! // Structural sharing: the original tree is preserved
//! let extended = tree.insert(0);
//! assert_eq!(tree.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New version
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod engine;
mod invariant;
pub(crate) mod node;
mod traversal;
mod tree;

pub use engine::TreeError;
pub use invariant::InvariantViolation;
pub use node::Color;
pub use traversal::{Branch, SortedIterator, Traversal, TreeWalk};
pub use tree::RedBlackTree;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(RedBlackTree<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let shared: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&shared), 1);
        let second_owner = shared.clone();
        assert_eq!(ReferenceCounter::strong_count(&shared), 2);
        drop(second_owner);
        assert_eq!(ReferenceCounter::strong_count(&shared), 1);
    }
}
