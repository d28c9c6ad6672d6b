//! Lazy depth-first walks over tree shapes.
//!
//! [`TreeWalk`] is independent of red-black balancing: it works over any
//! type implementing [`Branch`], visiting a node and then each of its
//! present children in order. Over a [`RedBlackTree`](super::RedBlackTree)
//! this yields values in an order fixed by the tree *shape*, which
//! rotations change, so it is **not** a sorted order.
//!
//! [`SortedIterator`] is the in-order walk used where ascending order is
//! required (equality, hashing, display).

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::ReferenceCounter;
use super::node::Node;

/// Inline capacity of the walk stacks. A red-black tree of height 32 holds
/// at least 2^16 values, so most walks never touch the heap.
const STACK_INLINE_CAPACITY: usize = 32;

// =============================================================================
// Branch Definition
// =============================================================================

/// A node of some tree shape that can enumerate its children.
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::persistent::{Branch, TreeWalk};
///
/// struct Rose {
///     label: char,
///     children: Vec<Rose>,
/// }
///
/// impl Branch for Rose {
///     fn children(&self) -> impl Iterator<Item = &Self> {
///         self.children.iter()
///     }
/// }
///
/// let rose = Rose {
///     label: 'a',
///     children: vec![
///         Rose { label: 'b', children: vec![Rose { label: 'c', children: vec![] }] },
///         Rose { label: 'd', children: vec![] },
///     ],
/// };
///
/// let labels: String = TreeWalk::new(Some(&rose)).map(|node| node.label).collect();
/// assert_eq!(labels, "abcd");
/// ```
pub trait Branch {
    /// Returns the children of this node that are present, in order.
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Returns `true` if this node has at least one child.
    fn is_branch(&self) -> bool {
        self.children().next().is_some()
    }
}

impl<V> Branch for Node<V> {
    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

// =============================================================================
// TreeWalk
// =============================================================================

/// A lazy pre-order walk: each node is produced before its children, and
/// children are walked in the order [`Branch::children`] yields them.
pub struct TreeWalk<'a, N> {
    stack: SmallVec<[&'a N; STACK_INLINE_CAPACITY]>,
}

impl<'a, N: Branch> TreeWalk<'a, N> {
    /// Starts a walk at `root`. An absent root gives an empty walk.
    #[must_use]
    pub fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, N: Branch> Iterator for TreeWalk<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children reversed so the first child is popped next
        let mark = self.stack.len();
        self.stack.extend(node.children());
        self.stack[mark..].reverse();
        Some(node)
    }
}

impl<N: Branch> FusedIterator for TreeWalk<'_, N> {}

impl<N> Clone for TreeWalk<'_, N> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// The values of a [`RedBlackTree`](super::RedBlackTree) in walk order.
///
/// Produced lazily, one value per step, and always finite: it yields
/// exactly as many values as the tree holds. Cloning a traversal gives an
/// independent cursor at the same position.
pub struct Traversal<'a, V> {
    walk: TreeWalk<'a, Node<V>>,
    remaining: usize,
}

impl<'a, V> Traversal<'a, V> {
    pub(crate) fn new(root: Option<&'a ReferenceCounter<Node<V>>>, length: usize) -> Self {
        Self {
            walk: TreeWalk::new(root.map(|node| &**node)),
            remaining: length,
        }
    }

    /// Returns the value at the cursor without advancing it.
    #[must_use]
    pub fn first(&self) -> Option<&'a V> {
        self.clone().next()
    }

    /// Returns a cursor one step further along, leaving this one in place.
    /// The rest of an exhausted traversal is empty.
    #[must_use]
    pub fn rest(&self) -> Self {
        let mut tail = self.clone();
        tail.next();
        tail
    }
}

impl<'a, V> Iterator for Traversal<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.walk.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Traversal<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for Traversal<'_, V> {}

impl<V> Clone for Traversal<'_, V> {
    fn clone(&self) -> Self {
        Self {
            walk: self.walk.clone(),
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// SortedIterator
// =============================================================================

/// The values of a [`RedBlackTree`](super::RedBlackTree) in ascending order.
pub struct SortedIterator<'a, V> {
    stack: SmallVec<[&'a Node<V>; STACK_INLINE_CAPACITY]>,
}

impl<'a, V> SortedIterator<'a, V> {
    pub(crate) fn new(root: Option<&'a ReferenceCounter<Node<V>>>) -> Self {
        let mut iterator = Self {
            stack: SmallVec::new(),
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: Option<&'a ReferenceCounter<Node<V>>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_ref();
        }
    }
}

impl<'a, V> Iterator for SortedIterator<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_ref());
        Some(&node.value)
    }
}

impl<V> FusedIterator for SortedIterator<'_, V> {}

impl<V> Clone for SortedIterator<'_, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
