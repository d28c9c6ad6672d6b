//! The public persistent red-black tree.
//!
//! [`RedBlackTree`] wraps an optional root node and a cached count, and
//! exposes the [`Collection`], [`Sequence`] and [`Lookup`] capabilities.
//!
//! # Overview
//!
//! - O(log N) insert, sharing every subtree off the insertion path
//! - O(log N) lookup
//! - O(1) len and `is_empty`
//! - O(N) traversal, equality and hashing
//!
//! # Traversal Order
//!
//! [`RedBlackTree::iter`] walks the tree *shape*: a node, then its left
//! subtree, then its right subtree. Rotations during insertion change the
//! shape, so the order is not the insertion order and not the value order.
//! Use [`RedBlackTree::iter_sorted`] for ascending values.
//!
//! # Duplicates
//!
//! Inserting a value equal to one already stored adds a second node; it
//! neither replaces nor rejects. `len` counts both.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use super::engine::{self, TreeError};
use super::invariant::{self, InvariantViolation};
use super::node::{Color, Node};
use super::traversal::{SortedIterator, Traversal};
use crate::typeclass::{Collection, Lookup, Sequence};

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// A persistent (immutable) red-black tree.
///
/// `RedBlackTree` is an immutable data structure: every insert returns a
/// new tree and leaves the original valid. Values must be ordered; the
/// `Ord` methods never fail, the `try_` methods accept `PartialOrd` values
/// and report values that cannot be compared.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `insert`       | O(log N)          |
/// | `lookup`       | O(log N)          |
/// | `contains`     | O(log N)          |
/// | `min`/`max`    | O(log N)          |
/// | `iter`         | O(N) total        |
/// | `len`          | O(1)              |
/// | `==`           | O(N)              |
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::persistent::RedBlackTree;
///
/// let tree = RedBlackTree::new().insert(5).insert(2);
///
/// // Shape order: root first
/// let walked: Vec<i32> = tree.iter().copied().collect();
/// assert_eq!(walked, vec![5, 2]);
///
/// // Contents equality ignores shape
/// let other = RedBlackTree::new().insert(2).insert(5);
/// assert_eq!(tree, other);
/// ```
pub struct RedBlackTree<V> {
    /// Root node of the tree
    root: Option<ReferenceCounter<Node<V>>>,
    /// Number of stored values, duplicates included
    length: usize,
}

impl<V> RedBlackTree<V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    pub(crate) const fn from_root(root: Option<ReferenceCounter<Node<V>>>, length: usize) -> Self {
        Self { root, length }
    }

    #[cfg_attr(not(feature = "codec"), allow(dead_code))]
    pub(crate) const fn root(&self) -> Option<&ReferenceCounter<Node<V>>> {
        self.root.as_ref()
    }

    /// Returns the number of stored values.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree stores no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the color of the root, or `None` for an empty tree.
    ///
    /// After any insert this is always [`Color::Black`].
    #[must_use]
    pub fn root_color(&self) -> Option<Color> {
        self.root.as_ref().map(|node| node.color)
    }

    /// Returns the number of black nodes on a path from the root to an
    /// absent child.
    ///
    /// Only the leftmost path is measured; use
    /// [`check_invariants`](Self::check_invariants) to verify that every
    /// path agrees.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut link = self.root.as_ref();
        while let Some(node) = link {
            height += usize::from(node.color == Color::Black);
            link = node.left.as_ref();
        }
        height
    }

    /// Returns a lazy walk over the values in tree-shape order.
    ///
    /// The walk yields a node's value before the values of its left and
    /// then right subtrees. It is **not** sorted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..3).collect();
    /// let walked: Vec<i32> = tree.iter().copied().collect();
    /// assert_eq!(walked, vec![1, 0, 2]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Traversal<'_, V> {
        Traversal::new(self.root.as_ref(), self.length)
    }

    /// Returns the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// let sorted: Vec<i32> = tree.iter_sorted().copied().collect();
    /// assert_eq!(sorted, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn iter_sorted(&self) -> SortedIterator<'_, V> {
        SortedIterator::new(self.root.as_ref())
    }

    /// Returns the first value of the walk, or `None` for an empty tree.
    ///
    /// This is the root value, not the minimum.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.root.as_ref().map(|node| &node.value)
    }

    /// Returns the walk without its first value. The rest of an empty tree
    /// is an empty walk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new().insert(5).insert(2);
    /// assert_eq!(tree.rest().copied().collect::<Vec<_>>(), vec![2]);
    ///
    /// let empty: RedBlackTree<i32> = RedBlackTree::new();
    /// assert_eq!(empty.rest().next(), None);
    /// ```
    #[must_use]
    pub fn rest(&self) -> Traversal<'_, V> {
        self.iter().rest()
    }

    /// Splits the walk into its first value and the rest.
    #[must_use]
    pub fn decompose(&self) -> Option<(&V, Traversal<'_, V>)> {
        let mut traversal = self.iter();
        let head = traversal.next()?;
        Some((head, traversal))
    }

    /// Returns the walk, or `None` when the tree is the empty tree.
    #[must_use]
    pub fn to_sequence(&self) -> Option<Traversal<'_, V>> {
        (!self.is_empty()).then(|| self.iter())
    }

    /// Returns the smallest value.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn min(&self) -> Option<&V> {
        let mut node = self.root.as_ref()?;
        while let Some(left) = node.left.as_ref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn max(&self) -> Option<&V> {
        let mut node = self.root.as_ref()?;
        while let Some(right) = node.right.as_ref() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<V: Clone + Ord> RedBlackTree<V> {
    /// Creates a tree containing a single value.
    #[inline]
    #[must_use]
    pub fn singleton(value: V) -> Self {
        Self::new().insert(value)
    }

    /// Returns a new tree holding every value of `self` plus `value`.
    ///
    /// Only the nodes on the path from the root to the new leaf are
    /// rebuilt; all other subtrees are shared with `self`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree1 = RedBlackTree::new().insert(1);
    /// let tree2 = tree1.insert(2);
    ///
    /// assert!(!tree1.contains(&2)); // Original unchanged
    /// assert!(tree2.contains(&2));  // New version
    /// ```
    #[must_use]
    pub fn insert(&self, value: V) -> Self {
        let mut compare = |left: &V, right: &V| Ok::<_, Infallible>(left.cmp(right));
        let Ok(root) = engine::insert_by(self.root.as_ref(), value, &mut compare);
        Self::from_root(Some(root), self.length + 1)
    }

    /// Inserts every value of `values`, in order.
    #[must_use]
    pub fn insert_all<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        values
            .into_iter()
            .fold(self.clone(), |tree, value| tree.insert(value))
    }

    /// Returns the stored value equal to `value`, if any.
    ///
    /// The key may be any borrowed form of the value type, but its
    /// ordering must match the ordering of the value type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new().insert("hello".to_string());
    /// assert_eq!(tree.lookup("hello"), Some(&"hello".to_string()));
    /// assert_eq!(tree.lookup("world"), None);
    /// ```
    #[must_use]
    pub fn lookup<Q>(&self, value: &Q) -> Option<&V>
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Ok(found) = engine::lookup_by(self.root.as_ref(), |stored: &V| {
            Ok::<_, Infallible>(value.cmp(stored.borrow()))
        });
        found
    }

    /// Returns `true` if a value equal to `value` is stored.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup(value).is_some()
    }
}

impl<V: Clone + PartialOrd> RedBlackTree<V> {
    /// Inserts a value whose type is only partially ordered.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Incomparable`] when `value` cannot be compared
    /// with a stored value on its path, such as a `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::{RedBlackTree, TreeError};
    ///
    /// let tree = RedBlackTree::new().try_insert(1.5).unwrap();
    /// assert_eq!(tree.try_insert(f64::NAN).err(), Some(TreeError::Incomparable));
    /// ```
    pub fn try_insert(&self, value: V) -> Result<Self, TreeError> {
        let root = engine::insert_by(self.root.as_ref(), value, &mut partial_order)?;
        Ok(Self::from_root(Some(root), self.length + 1))
    }

    /// Looks up a value whose type is only partially ordered.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Incomparable`] when `value` cannot be compared
    /// with a stored value on its path.
    pub fn try_lookup(&self, value: &V) -> Result<Option<&V>, TreeError> {
        engine::lookup_by(self.root.as_ref(), |stored| partial_order(value, stored))
    }

    /// Returns whether a value equal to `value` is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Incomparable`] when `value` cannot be compared
    /// with a stored value on its path.
    pub fn try_contains(&self, value: &V) -> Result<bool, TreeError> {
        self.try_lookup(value).map(|found| found.is_some())
    }
}

fn partial_order<V: PartialOrd>(left: &V, right: &V) -> Result<Ordering, TreeError> {
    left.partial_cmp(right).ok_or(TreeError::Incomparable)
}

impl<V: PartialOrd> RedBlackTree<V> {
    /// Verifies the search order and every red-black invariant, returning
    /// the black height.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found. Trees built through
    /// this crate's public API never violate an invariant.
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        invariant::check(self.root.as_ref())
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<V: Clone + Ord> Collection for RedBlackTree<V> {
    type Element = V;

    fn insert_into(&self, value: V) -> Self {
        self.insert(value)
    }

    fn empty_of(&self) -> Self {
        Self::new()
    }

    fn count(&self) -> usize {
        self.length
    }

    fn is_equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl<V> Sequence for RedBlackTree<V> {
    type Element = V;
    type Cursor<'a>
        = Traversal<'a, V>
    where
        Self: 'a;

    fn traverse(&self) -> Traversal<'_, V> {
        self.iter()
    }
}

impl<V: Clone + Ord> Lookup for RedBlackTree<V> {
    type Element = V;

    fn lookup(&self, value: &V) -> Option<&V> {
        let Ok(found) =
            engine::lookup_by(self.root.as_ref(), |stored| Ok::<_, Infallible>(value.cmp(stored)));
        found
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V> Clone for RedBlackTree<V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
        }
    }
}

impl<V> Default for RedBlackTree<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Ord> FromIterator<V> for RedBlackTree<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new().insert_all(iter)
    }
}

/// Replaces `self` with a new version holding the extra values. Other
/// clones of the old version are unaffected.
impl<V: Clone + Ord> Extend<V> for RedBlackTree<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        *self = self.insert_all(iter);
    }
}

impl<'a, V> IntoIterator for &'a RedBlackTree<V> {
    type Item = &'a V;
    type IntoIter = Traversal<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Contents equality: two trees are equal when they hold the same multiset
/// of values, whatever their shape, coloring or insertion history.
///
/// An in-order walk of a search tree is already sorted, so comparing the
/// two in-order walks compares the sorted contents.
impl<V: PartialEq> PartialEq for RedBlackTree<V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter_sorted().eq(other.iter_sorted())
    }
}

impl<V: Eq> Eq for RedBlackTree<V> {}

/// Compares the ascending contents lexicographically.
impl<V: PartialOrd> PartialOrd for RedBlackTree<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter_sorted().partial_cmp(other.iter_sorted())
    }
}

impl<V: Ord> Ord for RedBlackTree<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter_sorted().cmp(other.iter_sorted())
    }
}

/// Hashes the length, then each value in ascending order, so equal trees
/// hash equally regardless of shape.
impl<V: Hash> Hash for RedBlackTree<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for value in self.iter_sorted() {
            value.hash(state);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for RedBlackTree<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter_sorted()).finish()
    }
}

impl<V: fmt::Display> fmt::Display for RedBlackTree<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self.iter_sorted() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for RedBlackTree<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter_sorted() {
            sequence.serialize_element(value)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeVisitor<V> {
    marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, V> serde::de::Visitor<'de> for RedBlackTreeVisitor<V>
where
    V: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = RedBlackTree<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = RedBlackTree::new();
        while let Some(value) = access.next_element()? {
            tree = tree.insert(value);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for RedBlackTree<V>
where
    V: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
