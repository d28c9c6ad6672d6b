//! Capability traits shared by the persistent collections.
//!
//! Rather than open-ended dispatch, clients program against a small, fixed
//! set of capabilities:
//!
//! - [`Collection`]: construction by insertion, the canonical empty value,
//!   counting, and contents equality
//! - [`Sequence`]: first/rest decomposition over a lazy cursor
//! - [`Lookup`]: membership by value
//!
//! Any balanced-tree variant implementing these can stand in for
//! [`RedBlackTree`](crate::persistent::RedBlackTree) without touching
//! traversal, equality or the codec.
//!
//! # Examples
//!
//! ```rust
//! use persistent_rbtree::persistent::RedBlackTree;
//! use persistent_rbtree::typeclass::{Collection, Lookup, Sequence};
//!
//! fn describe<C>(collection: &C) -> String
//! where
//!     C: Collection<Element = i32> + Lookup<Element = i32> + Sequence<Element = i32>,
//! {
//!     format!(
//!         "{} values, first {:?}, has 7: {}",
//!         collection.count(),
//!         collection.first(),
//!         collection.contains(&7)
//!     )
//! }
//!
//! let tree = RedBlackTree::new().insert_all([5, 2, 7]);
//! assert_eq!(describe(&tree), "3 values, first Some(5), has 7: true");
//! ```

mod collection;
mod lookup;
mod sequence;

pub use collection::Collection;
pub use lookup::Lookup;
pub use sequence::Sequence;
