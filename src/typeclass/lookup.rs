//! The `Lookup` capability.

/// Membership testing by value.
pub trait Lookup {
    /// The type of the stored values.
    type Element;

    /// Returns the stored value equal to `value`, if any.
    fn lookup(&self, value: &Self::Element) -> Option<&Self::Element>;

    /// Returns `true` if a value equal to `value` is stored.
    fn contains(&self, value: &Self::Element) -> bool {
        self.lookup(value).is_some()
    }
}
