//! The `Sequence` capability.

/// A collection that can be viewed as a lazy sequence of its values.
///
/// The order of the sequence is whatever the implementer's traversal
/// produces; callers must not assume it is sorted.
pub trait Sequence {
    /// The type of the stored values.
    type Element;

    /// A lazy, restartable cursor over the values.
    type Cursor<'a>: Iterator<Item = &'a Self::Element> + Clone
    where
        Self: 'a;

    /// Returns a fresh cursor positioned at the start. Empty collections
    /// give an empty cursor.
    fn traverse(&self) -> Self::Cursor<'_>;

    /// Returns a cursor over the values, or `None` when there are no
    /// values at all.
    fn to_sequence(&self) -> Option<Self::Cursor<'_>> {
        let cursor = self.traverse();
        cursor.clone().next().is_some().then_some(cursor)
    }

    /// Returns the first value of the sequence, or `None` when empty.
    fn first(&self) -> Option<&Self::Element> {
        self.traverse().next()
    }

    /// Returns the sequence without its first value. The rest of an empty
    /// collection is an empty sequence.
    fn rest(&self) -> Self::Cursor<'_> {
        let mut cursor = self.traverse();
        cursor.next();
        cursor
    }

    /// Splits the sequence into its first value and the rest.
    fn decompose(&self) -> Option<(&Self::Element, Self::Cursor<'_>)> {
        let mut cursor = self.traverse();
        let head = cursor.next()?;
        Some((head, cursor))
    }

    /// Folds the sequence from left to right.
    fn fold_sequence<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &Self::Element) -> B,
    {
        self.traverse().fold(init, function)
    }
}
