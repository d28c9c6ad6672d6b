//! The immutable node of a red-black tree.

use super::ReferenceCounter;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red node. Never the root, never the parent of another red node.
    Red,
    /// A black node. Counted by the black height.
    Black,
}

impl Color {
    /// The token used for this color in the tagged text form.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Black => "black",
        }
    }

    /// Parses a color token produced by [`Color::token`].
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "red" => Some(Self::Red),
            "black" => Some(Self::Black),
            _ => None,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// A shared, possibly absent, child.
pub(crate) type Link<V> = Option<ReferenceCounter<Node<V>>>;

/// Internal node structure for the red-black tree.
///
/// Nodes are never mutated once built; rebalancing builds replacements.
pub(crate) struct Node<V> {
    pub(crate) color: Color,
    pub(crate) left: Link<V>,
    pub(crate) value: V,
    pub(crate) right: Link<V>,
}

impl<V> Node<V> {
    pub(crate) const fn new(color: Color, left: Link<V>, value: V, right: Link<V>) -> Self {
        Self {
            color,
            left,
            value,
            right,
        }
    }

    /// Creates a new red node with no children.
    pub(crate) const fn new_red(value: V) -> Self {
        Self::new(Color::Red, None, value, None)
    }

    /// Creates a copy of this node with a new color, sharing both children.
    pub(crate) fn with_color(&self, color: Color) -> Self
    where
        V: Clone,
    {
        Self::new(
            color,
            self.left.clone(),
            self.value.clone(),
            self.right.clone(),
        )
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Helper function to check if an optional node is red.
pub(crate) fn is_red<V>(link: Option<&ReferenceCounter<Node<V>>>) -> bool {
    link.is_some_and(|node| node.is_red())
}
