//! Insertion and lookup over immutable red-black nodes.
//!
//! Insertion follows Okasaki's functional formulation: descend by
//! comparison, attach the new value as a red leaf, then rebuild the path
//! back to the root, repairing any red node with a red child through one of
//! four balance cases. The root is forced black at the end.
//!
//! Every function here is written against a fallible comparator so the same
//! code serves both totally ordered values (with an `Infallible` error) and
//! `PartialOrd` values whose comparison may be undefined.

use std::cmp::Ordering;

use super::ReferenceCounter;
use super::node::{Color, Link, Node};

/// Errors reported by the tree engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Two values could not be ordered against each other, for example a
    /// floating point `NaN`. The tree is left untouched.
    #[error("invalid argument: values are not comparable")]
    Incomparable,
}

/// Inserts `value` below `root` and returns the new, black, root.
///
/// Values comparing equal to an existing value descend to the right, so a
/// repeated insert stores a second node instead of replacing the first.
pub(crate) fn insert_by<V, E, F>(
    root: Option<&ReferenceCounter<Node<V>>>,
    value: V,
    compare: &mut F,
) -> Result<ReferenceCounter<Node<V>>, E>
where
    V: Clone,
    F: FnMut(&V, &V) -> Result<Ordering, E>,
{
    let inserted = insert_into_node(root, value, compare)?;

    // Make root black
    if inserted.is_red() {
        Ok(ReferenceCounter::new(inserted.with_color(Color::Black)))
    } else {
        Ok(inserted)
    }
}

/// Recursive helper for insert.
fn insert_into_node<V, E, F>(
    node: Option<&ReferenceCounter<Node<V>>>,
    value: V,
    compare: &mut F,
) -> Result<ReferenceCounter<Node<V>>, E>
where
    V: Clone,
    F: FnMut(&V, &V) -> Result<Ordering, E>,
{
    let Some(node_ref) = node else {
        return Ok(ReferenceCounter::new(Node::new_red(value)));
    };

    match compare(&value, &node_ref.value)? {
        Ordering::Less => {
            let new_left = insert_into_node(node_ref.left.as_ref(), value, compare)?;
            Ok(balance(
                node_ref.color,
                Some(new_left),
                node_ref.value.clone(),
                node_ref.right.clone(),
            ))
        }
        Ordering::Equal | Ordering::Greater => {
            let new_right = insert_into_node(node_ref.right.as_ref(), value, compare)?;
            Ok(balance(
                node_ref.color,
                node_ref.left.clone(),
                node_ref.value.clone(),
                Some(new_right),
            ))
        }
    }
}

/// Rebuilds a node, resolving a red-red violation directly beneath a black
/// node. Handles the four cases of red-red violation.
fn balance<V: Clone>(
    color: Color,
    left: Link<V>,
    value: V,
    right: Link<V>,
) -> ReferenceCounter<Node<V>> {
    if color == Color::Black {
        if let Some(left_node) = &left
            && left_node.is_red()
        {
            // Case 1: Left-Left
            if let Some(outer) = &left_node.left
                && outer.is_red()
            {
                return red_with_black_children(
                    (outer.left.clone(), outer.value.clone(), outer.right.clone()),
                    left_node.value.clone(),
                    (left_node.right.clone(), value, right),
                );
            }

            // Case 2: Left-Right
            if let Some(inner) = &left_node.right
                && inner.is_red()
            {
                return red_with_black_children(
                    (left_node.left.clone(), left_node.value.clone(), inner.left.clone()),
                    inner.value.clone(),
                    (inner.right.clone(), value, right),
                );
            }
        }

        if let Some(right_node) = &right
            && right_node.is_red()
        {
            // Case 3: Right-Left
            if let Some(inner) = &right_node.left
                && inner.is_red()
            {
                return red_with_black_children(
                    (left, value, inner.left.clone()),
                    inner.value.clone(),
                    (inner.right.clone(), right_node.value.clone(), right_node.right.clone()),
                );
            }

            // Case 4: Right-Right
            if let Some(outer) = &right_node.right
                && outer.is_red()
            {
                return red_with_black_children(
                    (left, value, right_node.left.clone()),
                    right_node.value.clone(),
                    (outer.left.clone(), outer.value.clone(), outer.right.clone()),
                );
            }
        }
    }

    ReferenceCounter::new(Node::new(color, left, value, right))
}

/// Builds `Red(Black(a, x, b), y, Black(c, z, d))`.
fn red_with_black_children<V>(
    (first, lower, second): (Link<V>, V, Link<V>),
    middle: V,
    (third, upper, fourth): (Link<V>, V, Link<V>),
) -> ReferenceCounter<Node<V>> {
    let left = Node::new(Color::Black, first, lower, second);
    let right = Node::new(Color::Black, third, upper, fourth);
    ReferenceCounter::new(Node::new(
        Color::Red,
        Some(ReferenceCounter::new(left)),
        middle,
        Some(ReferenceCounter::new(right)),
    ))
}

/// Binary search descent. `compare_to` compares the sought value against a
/// stored value.
pub(crate) fn lookup_by<'a, V, E, F>(
    root: Option<&'a ReferenceCounter<Node<V>>>,
    mut compare_to: F,
) -> Result<Option<&'a V>, E>
where
    F: FnMut(&V) -> Result<Ordering, E>,
{
    let mut current = root;
    while let Some(node_ref) = current {
        current = match compare_to(&node_ref.value)? {
            Ordering::Less => node_ref.left.as_ref(),
            Ordering::Greater => node_ref.right.as_ref(),
            Ordering::Equal => return Ok(Some(&node_ref.value)),
        };
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::convert::Infallible;

    fn total<V: Ord>(left: &V, right: &V) -> Result<Ordering, Infallible> {
        Ok(left.cmp(right))
    }

    fn partial(left: &f64, right: &f64) -> Result<Ordering, TreeError> {
        left.partial_cmp(right).ok_or(TreeError::Incomparable)
    }

    fn build(values: &[i32]) -> Option<ReferenceCounter<Node<i32>>> {
        values.iter().fold(None, |root, &value| {
            Some(insert_by(root.as_ref(), value, &mut total::<i32>).unwrap())
        })
    }

    fn layout(link: Option<&ReferenceCounter<Node<i32>>>) -> String {
        link.map_or_else(
            || "nil".to_string(),
            |node| {
                format!(
                    "({} {} {} {})",
                    node.color.token(),
                    layout(node.left.as_ref()),
                    node.value,
                    layout(node.right.as_ref())
                )
            },
        )
    }

    #[rstest]
    #[case(&[1, 2, 3], "(black (black nil 1 nil) 2 (black nil 3 nil))")]
    #[case(&[3, 2, 1], "(black (black nil 1 nil) 2 (black nil 3 nil))")]
    #[case(&[1, 3, 2], "(black (black nil 1 nil) 2 (black nil 3 nil))")]
    #[case(&[3, 1, 2], "(black (black nil 1 nil) 2 (black nil 3 nil))")]
    #[case(&[5, 2], "(black (red nil 2 nil) 5 nil)")]
    fn test_balance_cases(#[case] values: &[i32], #[case] expected: &str) {
        assert_eq!(layout(build(values).as_ref()), expected);
    }

    fn find(
        link: Option<&ReferenceCounter<Node<i32>>>,
        value: i32,
    ) -> Option<&ReferenceCounter<Node<i32>>> {
        let node = link?;
        if node.value == value {
            Some(node)
        } else {
            find(node.left.as_ref(), value).or_else(|| find(node.right.as_ref(), value))
        }
    }

    #[rstest]
    fn test_insert_shares_untouched_subtree() {
        let root = build(&[4, 2, 6, 1, 3, 5, 7]).unwrap();
        let grown = insert_by(Some(&root), 8, &mut total::<i32>).unwrap();

        // The leaf holding 1 is off the insertion path, even after rotation
        assert!(ReferenceCounter::ptr_eq(
            find(Some(&grown), 1).unwrap(),
            find(Some(&root), 1).unwrap()
        ));
        assert_eq!(
            layout(Some(&root)),
            "(black (black nil 1 nil) 2 (red (black (red nil 3 nil) 4 nil) 5 (black nil 6 (red nil 7 nil))))"
        );
    }

    #[rstest]
    fn test_duplicate_descends_right() {
        let root = build(&[1, 1]).unwrap();
        assert_eq!(layout(Some(&root)), "(black nil 1 (red nil 1 nil))");
    }

    #[rstest]
    fn test_lookup_found_and_missing() {
        let root = build(&[10, 20, 30, 40]);
        let seek = |target: i32| move |stored: &i32| Ok::<_, Infallible>(target.cmp(stored));
        assert_eq!(lookup_by(root.as_ref(), seek(30)), Ok(Some(&30)));
        assert_eq!(lookup_by(root.as_ref(), seek(35)), Ok(None));
        assert_eq!(lookup_by(None, seek(1)), Ok(None));
    }

    #[rstest]
    fn test_incomparable_insert_is_rejected() {
        let root = insert_by(None, 1.0_f64, &mut partial).unwrap();
        let result = insert_by(Some(&root), f64::NAN, &mut partial);
        assert_eq!(result.err(), Some(TreeError::Incomparable));
    }

    #[rstest]
    fn test_incomparable_lookup_is_rejected() {
        let root = insert_by(None, 1.0_f64, &mut partial).unwrap();
        let result = lookup_by(Some(&root), |stored| partial(&f64::NAN, stored));
        assert_eq!(result, Err(TreeError::Incomparable));
    }

    #[rstest]
    fn test_error_display() {
        assert_eq!(
            TreeError::Incomparable.to_string(),
            "invalid argument: values are not comparable"
        );
    }
}
