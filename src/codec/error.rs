//! Errors raised while reading or decoding tagged text.

use crate::persistent::InvariantViolation;

/// Represents errors that can occur while decoding tagged text.
///
/// Every failure is terminal: the codec never retries and never hands back
/// a partially reconstructed value.
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::codec::{CodecError, Decoders};
/// use persistent_rbtree::persistent::RedBlackTree;
///
/// let decoders = Decoders::new();
/// let error = decoders
///     .decode::<RedBlackTree<i64>>("#unknown/Thing nil")
///     .unwrap_err();
/// assert_eq!(error, CodecError::UnrecognizedTag { tag: "unknown/Thing".to_string() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The text is tagged, but nothing is registered for the tag.
    #[error("no decoder registered for tag #{tag}")]
    UnrecognizedTag {
        /// The tag found in the text.
        tag: String,
    },

    /// The tag is registered, but not for the requested type.
    #[error("the decoders registered for tag #{tag} do not produce {type_name}")]
    UnsupportedType {
        /// The tag found in the text.
        tag: String,
        /// The requested type.
        type_name: &'static str,
    },

    /// The top-level form carries no tag at all.
    #[error("expected a tagged literal, found {found}")]
    Untagged {
        /// The kind of form that was found instead.
        found: &'static str,
    },

    /// The tagged body does not follow the expected shape grammar.
    #[error("malformed shape: {reason}")]
    MalformedShape {
        /// What was wrong with the shape.
        reason: String,
    },

    /// The text could not be read as forms.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax {
        /// Byte offset into the input where reading failed.
        offset: usize,
        /// What the reader expected.
        message: &'static str,
    },

    /// A value literal had the wrong kind or was out of range.
    #[error("invalid literal {found}: expected {expected}")]
    InvalidLiteral {
        /// The kind of literal the value type accepts.
        expected: &'static str,
        /// The offending form, printed.
        found: String,
    },

    /// The decoded shape is well formed but not a valid red-black tree.
    #[error("decoded tree is invalid: {0}")]
    Invariant(#[from] InvariantViolation),
}
