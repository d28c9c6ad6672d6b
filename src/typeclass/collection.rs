//! The `Collection` capability.

/// A persistent collection built up by insertion.
///
/// Every operation leaves `self` untouched and returns a new value. Cloning
/// is expected to be cheap (a reference count bump), as it is for every
/// persistent collection in this crate.
///
/// # Laws
///
/// - `c.empty_of().is_empty()`
/// - `c.insert_into(v).count() == c.count() + 1`
/// - `c.is_equal(&c)`
pub trait Collection: Clone {
    /// The type of the stored values.
    type Element;

    /// Returns a new collection holding everything in `self` plus `value`.
    #[must_use]
    fn insert_into(&self, value: Self::Element) -> Self;

    /// Returns the canonical empty collection of this type, regardless of
    /// the contents of `self`.
    #[must_use]
    fn empty_of(&self) -> Self;

    /// Returns the number of stored values.
    fn count(&self) -> usize;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if both collections hold the same values, however
    /// they were built.
    fn is_equal(&self, other: &Self) -> bool;

    /// Inserts every value of `values`, in order.
    #[must_use]
    fn insert_all<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>,
    {
        values
            .into_iter()
            .fold(self.clone(), |collection, value| collection.insert_into(value))
    }
}
