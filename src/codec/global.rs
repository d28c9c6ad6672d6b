//! The process-wide decoder registry.
//!
//! Registration takes a write lock; decoding only takes a read lock, so
//! any number of threads may decode at once. The lock is released before a
//! constructor runs, so constructors may themselves register or decode.
//!
//! Nothing is registered implicitly. Call [`register`] for each tree type
//! the program decodes, or [`register_defaults`] once at startup.
//!
//! # Examples
//!
//! ```rust
//! use persistent_rbtree::codec::{self, global};
//! use persistent_rbtree::persistent::RedBlackTree;
//!
//! global::register::<RedBlackTree<u32>>();
//!
//! let tree: RedBlackTree<u32> = [3, 1].into_iter().collect();
//! let decoded: RedBlackTree<u32> = codec::decode(&codec::encode(&tree)).unwrap();
//! assert_eq!(decoded, tree);
//! ```

use std::sync::LazyLock;

use parking_lot::RwLock;

use super::Tagged;
use super::error::CodecError;
use super::form::Form;
use super::reader::read;
use super::registry::{Constructor, Decoders, split_tagged};
use crate::persistent::RedBlackTree;

static GLOBAL: LazyLock<RwLock<Decoders>> = LazyLock::new(|| RwLock::new(Decoders::new()));

/// Registers `T` under its own tag in the global registry.
pub fn register<T: Tagged + 'static>() {
    GLOBAL.write().register::<T>();
}

/// Registers an arbitrary constructor in the global registry.
pub fn register_with<T: 'static>(tag: &str, constructor: Constructor<T>) {
    GLOBAL.write().register_with(tag, constructor);
}

/// Registers trees of every integer type, `bool`, `char` and `String`.
pub fn register_defaults() {
    let mut decoders = GLOBAL.write();
    decoders.register::<RedBlackTree<i8>>();
    decoders.register::<RedBlackTree<i16>>();
    decoders.register::<RedBlackTree<i32>>();
    decoders.register::<RedBlackTree<i64>>();
    decoders.register::<RedBlackTree<i128>>();
    decoders.register::<RedBlackTree<isize>>();
    decoders.register::<RedBlackTree<u8>>();
    decoders.register::<RedBlackTree<u16>>();
    decoders.register::<RedBlackTree<u32>>();
    decoders.register::<RedBlackTree<u64>>();
    decoders.register::<RedBlackTree<usize>>();
    decoders.register::<RedBlackTree<bool>>();
    decoders.register::<RedBlackTree<char>>();
    decoders.register::<RedBlackTree<String>>();
}

/// Returns `true` if the global registry knows `tag`.
#[must_use]
pub fn is_registered(tag: &str) -> bool {
    GLOBAL.read().is_registered(tag)
}

/// Decodes `text` with the global registry.
///
/// # Errors
///
/// See [`Decoders::decode`].
pub fn decode<T: 'static>(text: &str) -> Result<T, CodecError> {
    decode_form(&read(text)?)
}

/// Decodes an already read form with the global registry.
///
/// # Errors
///
/// See [`Decoders::decode_form`].
pub fn decode_form<T: 'static>(form: &Form) -> Result<T, CodecError> {
    let (tag, body) = split_tagged(form)?;
    let constructor = GLOBAL.read().constructor::<T>(tag)?;
    constructor(body)
}
