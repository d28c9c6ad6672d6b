//! The tag registry: which constructor builds which type from which tag.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use super::Tagged;
use super::error::CodecError;
use super::form::Form;
use super::reader::read;

/// Builds a value from the body of a tagged form.
pub type Constructor<T> = fn(&Form) -> Result<T, CodecError>;

/// A set of decoders keyed by tag and target type.
///
/// One tag may be registered for several target types, so that the same
/// `#persistent/RedBlackTree` text can become a `RedBlackTree<i64>` or a
/// `RedBlackTree<u8>` depending on what the caller asks for.
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::codec::{Decoders, encode};
/// use persistent_rbtree::persistent::RedBlackTree;
///
/// let decoders = Decoders::new()
///     .with::<RedBlackTree<i64>>()
///     .with::<RedBlackTree<String>>();
///
/// let tree: RedBlackTree<i64> = (0..3).collect();
/// let decoded: RedBlackTree<i64> = decoders.decode(&encode(&tree)).unwrap();
/// assert_eq!(decoded, tree);
/// ```
#[derive(Default)]
pub struct Decoders {
    // Each entry holds a `Constructor<T>` for the `T` named by its key.
    tags: HashMap<String, HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl Decoders {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under its own tag.
    pub fn register<T: Tagged + 'static>(&mut self) {
        self.register_with(T::TAG, T::read_body);
    }

    /// Builder form of [`Decoders::register`].
    #[must_use]
    pub fn with<T: Tagged + 'static>(mut self) -> Self {
        self.register::<T>();
        self
    }

    /// Registers an arbitrary constructor for `tag` and target type `T`.
    ///
    /// A later registration for the same tag and type replaces the earlier
    /// one.
    pub fn register_with<T: 'static>(&mut self, tag: &str, constructor: Constructor<T>) {
        tracing::debug!(tag, value_type = type_name::<T>(), "registering decoder");
        self.tags
            .entry(tag.to_string())
            .or_default()
            .insert(TypeId::of::<T>(), Box::new(constructor));
    }

    /// Returns `true` if any decoder is registered for `tag`.
    #[must_use]
    pub fn is_registered(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Returns the registered tags in ascending order.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Reads `text` and decodes it as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Syntax`] if the text cannot be read, and any
    /// error of [`Decoders::decode_form`] otherwise.
    pub fn decode<T: 'static>(&self, text: &str) -> Result<T, CodecError> {
        self.decode_form(&read(text)?)
    }

    /// Decodes an already read form as a `T`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Untagged`] if the form carries no tag
    /// - [`CodecError::UnrecognizedTag`] if nothing is registered for the tag
    /// - [`CodecError::UnsupportedType`] if the tag is not registered for `T`
    /// - whatever the registered constructor reports
    pub fn decode_form<T: 'static>(&self, form: &Form) -> Result<T, CodecError> {
        let (tag, body) = split_tagged(form)?;
        let constructor = self.constructor::<T>(tag)?;
        constructor(body)
    }

    /// Looks up the constructor registered for `tag` and target type `T`.
    ///
    /// The returned pointer does not borrow the registry, so it can be called
    /// after a lock around the registry has been released.
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnrecognizedTag`] if nothing is registered for the tag
    /// - [`CodecError::UnsupportedType`] if the tag is not registered for `T`
    pub fn constructor<T: 'static>(&self, tag: &str) -> Result<Constructor<T>, CodecError> {
        let Some(constructors) = self.tags.get(tag) else {
            tracing::warn!(tag, "no decoder registered for tag");
            return Err(CodecError::UnrecognizedTag { tag: tag.to_string() });
        };

        let constructor = constructors
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Constructor<T>>())
            .ok_or_else(|| CodecError::UnsupportedType {
                tag: tag.to_string(),
                type_name: type_name::<T>(),
            })?;

        tracing::trace!(tag, value_type = type_name::<T>(), "decoding tagged form");
        Ok(*constructor)
    }
}

/// Splits a tagged form into its tag and body.
pub(super) fn split_tagged(form: &Form) -> Result<(&str, &Form), CodecError> {
    match form {
        Form::Tagged { tag, body } => Ok((tag.as_str(), &**body)),
        other => Err(CodecError::Untagged { found: other.kind() }),
    }
}

impl fmt::Debug for Decoders {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Decoders")
            .field("tags", &self.tags())
            .finish()
    }
}
