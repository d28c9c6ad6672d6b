//! Verification of the red-black invariants.

use std::cmp::Ordering;

use super::ReferenceCounter;
use super::node::{Color, Node, is_red};
use super::traversal::SortedIterator;

/// A broken red-black or search-order invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// The root node is red.
    #[error("the root node is red")]
    RedRoot,

    /// A red node has a red child.
    #[error("a red node has a red child")]
    RedRed,

    /// Two sibling subtrees carry a different number of black nodes.
    #[error("black height differs between sibling subtrees ({left} on the left, {right} on the right)")]
    BlackHeight {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// An in-order walk does not produce non-decreasing values.
    #[error("values are out of search order")]
    Order,
}

/// Checks every invariant and returns the black height of the tree.
///
/// Absent children count as black leaves, so an empty tree has black height 0
/// and a single black node has black height 1.
pub(crate) fn check<V: PartialOrd>(
    root: Option<&ReferenceCounter<Node<V>>>,
) -> Result<usize, InvariantViolation> {
    if is_red(root) {
        return Err(InvariantViolation::RedRoot);
    }
    let height = black_height(root)?;

    let mut values = SortedIterator::new(root);
    if let Some(mut previous) = values.next() {
        for value in values {
            match previous.partial_cmp(value) {
                Some(Ordering::Less | Ordering::Equal) => previous = value,
                _ => return Err(InvariantViolation::Order),
            }
        }
    }

    Ok(height)
}

fn black_height<V>(link: Option<&ReferenceCounter<Node<V>>>) -> Result<usize, InvariantViolation> {
    let Some(node) = link else {
        return Ok(0);
    };

    if node.is_red() && (is_red(node.left.as_ref()) || is_red(node.right.as_ref())) {
        return Err(InvariantViolation::RedRed);
    }

    let left = black_height(node.left.as_ref())?;
    let right = black_height(node.right.as_ref())?;
    if left != right {
        return Err(InvariantViolation::BlackHeight { left, right });
    }

    Ok(left + usize::from(node.color == Color::Black))
}
