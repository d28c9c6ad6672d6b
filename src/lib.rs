//! # persistent-rbtree
//!
//! A persistent (immutable, structurally shared) red-black tree exposed
//! through a small set of uniform collection capabilities.
//!
//! ## Overview
//!
//! - **Capabilities**: [`Collection`](typeclass::Collection),
//!   [`Sequence`](typeclass::Sequence) and [`Lookup`](typeclass::Lookup)
//!   traits describing what any client of the structure may rely on
//! - **Persistent tree**: [`RedBlackTree`](persistent::RedBlackTree), an
//!   ordered tree whose `insert` returns a new version sharing every
//!   untouched subtree with the old one
//! - **Traversal**: a generic, lazy depth-first walk over any branching
//!   shape ([`TreeWalk`](persistent::TreeWalk))
//! - **Codec**: a tagged textual form that reproduces the exact tree
//!   shape, with a registry of decoders keyed by tag
//!
//! ## Feature Flags
//!
//! - `typeclass`: Capability traits
//! - `persistent`: The red-black tree engine and façade
//! - `codec`: Tagged text encoding and the decoder registry
//! - `arc`: Share nodes through `Arc` so trees are `Send + Sync`
//! - `serde`: Content-level serde support
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use persistent_rbtree::prelude::*;
//!
//! let tree: RedBlackTree<i32> = [5, 2].into_iter().collect();
//!
//! // Traversal follows the tree shape, not the value order
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 2]);
//! assert!(tree.contains(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use persistent_rbtree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "codec")]
    pub use crate::codec::{CodecError, Decoders, Encoded, Form, Literal, Tagged, decode, encode};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "codec")]
pub mod codec;
