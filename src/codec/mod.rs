//! Tagged textual encoding.
//!
//! A value is written as `#tag body`, where the tag names the kind of
//! value and the body is ordinary literal text:
//!
//! ```text
//! #persistent/RedBlackTree [black, [black, absent, 0, absent], 1, [black, absent, 2, absent]]
//! ```
//!
//! Decoding reads the text into a [`Form`], looks the tag up in a
//! [`Decoders`] registry and runs the constructor registered for the tag
//! and the requested type. Nothing is decoded by guesswork: an unknown tag
//! is an error.
//!
//! - [`Form`] / [`read`]: the generic syntax tree and its reader
//! - [`Literal`]: literal forms of value types
//! - [`Tagged`]: types with a tagged form of their own
//! - [`Decoders`]: a local registry
//! - [`global`]: the process-wide registry used by [`decode`]
//!
//! # Examples
//!
//! ```rust
//! use persistent_rbtree::codec::{Decoders, encode};
//! use persistent_rbtree::persistent::RedBlackTree;
//!
//! let tree: RedBlackTree<i64> = (0..3).collect();
//! let text = encode(&tree);
//! assert_eq!(
//!     text,
//!     "#persistent/RedBlackTree [black, [black, absent, 0, absent], 1, [black, absent, 2, absent]]"
//! );
//!
//! let decoders = Decoders::new().with::<RedBlackTree<i64>>();
//! let decoded: RedBlackTree<i64> = decoders.decode(&text).unwrap();
//! assert_eq!(decoded.iter().collect::<Vec<_>>(), tree.iter().collect::<Vec<_>>());
//! ```

use std::fmt;

mod error;
mod form;
pub mod global;
mod literal;
mod reader;
mod registry;
mod tree;

pub use error::CodecError;
pub use form::Form;
pub use literal::Literal;
pub use reader::read;
pub use registry::{Constructor, Decoders};

/// A type with a tagged textual form.
pub trait Tagged: Sized {
    /// The tag written after `#`, such as `persistent/RedBlackTree`.
    const TAG: &'static str;

    /// Appends the body, without the tag, to `out`.
    fn write_body(&self, out: &mut String);

    /// Rebuilds a value from the body of a tagged form.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when the body does not describe a valid
    /// value.
    fn read_body(body: &Form) -> Result<Self, CodecError>;
}

/// Encodes `value` as `#tag body`.
#[must_use]
pub fn encode<T: Tagged>(value: &T) -> String {
    let mut out = String::new();
    out.push('#');
    out.push_str(T::TAG);
    out.push(' ');
    value.write_body(&mut out);
    out
}

/// Decodes `text` with the [`global`] registry.
///
/// # Errors
///
/// Returns [`CodecError::UnrecognizedTag`] unless the tag was registered
/// beforehand, and any other [`CodecError`] the text warrants.
pub fn decode<T: 'static>(text: &str) -> Result<T, CodecError> {
    global::decode(text)
}

/// Displays a value in its tagged form.
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::codec::Encoded;
/// use persistent_rbtree::persistent::RedBlackTree;
///
/// let tree = RedBlackTree::singleton(1_u8);
/// assert_eq!(
///     format!("{}", Encoded(&tree)),
///     "#persistent/RedBlackTree [black, absent, 1, absent]"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Encoded<'a, T>(pub &'a T);

impl<T: Tagged> fmt::Display for Encoded<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::RedBlackTree;
    use rstest::rstest;

    #[rstest]
    fn test_encoded_matches_encode() {
        let tree: RedBlackTree<char> = ['b', 'a', 'c'].into_iter().collect();
        assert_eq!(Encoded(&tree).to_string(), encode(&tree));
    }

    #[rstest]
    fn test_encoded_text_reads_back_as_tagged_form() {
        let tree: RedBlackTree<i64> = (0..5).collect();
        let form = read(&encode(&tree)).unwrap();
        assert!(matches!(form, Form::Tagged { ref tag, .. } if tag == "persistent/RedBlackTree"));
        assert_eq!(form.to_string(), encode(&tree));
    }
}
