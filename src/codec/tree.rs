//! The tagged form of [`RedBlackTree`].
//!
//! The body mirrors the node structure exactly:
//!
//! ```text
//! shape = absent | [color, shape, value, shape]
//! color = black | red
//! ```
//!
//! so decoding rebuilds the very same shape and coloring, not merely a tree
//! with the same values. `nil` is read as `absent` too.

use super::Tagged;
use super::error::CodecError;
use super::form::Form;
use super::literal::{Literal, invalid};
use crate::persistent::node::{Color, Link, Node};
use crate::persistent::{RedBlackTree, ReferenceCounter};

/// Marks a missing child, or the whole body of an empty tree.
const ABSENT: &str = "absent";

impl<V: Literal + PartialOrd> Tagged for RedBlackTree<V> {
    const TAG: &'static str = "persistent/RedBlackTree";

    fn write_body(&self, out: &mut String) {
        write_shape(self.root(), out);
    }

    /// Rebuilds the tree node by node, then verifies every red-black
    /// invariant before handing it out.
    fn read_body(body: &Form) -> Result<Self, CodecError> {
        let (root, length) = read_shape(body)?;
        let tree = Self::from_root(root, length);
        tree.check_invariants()?;
        Ok(tree)
    }
}

/// A tree nested as a value inside another literal carries its own tag.
impl<V: Literal + PartialOrd> Literal for RedBlackTree<V> {
    fn write_literal(&self, out: &mut String) {
        out.push('#');
        out.push_str(Self::TAG);
        out.push(' ');
        self.write_body(out);
    }

    fn from_form(form: &Form) -> Result<Self, CodecError> {
        match form {
            Form::Tagged { tag, body } if tag == Self::TAG => Self::read_body(body),
            other => Err(invalid("a #persistent/RedBlackTree literal", other)),
        }
    }
}

fn write_shape<V: Literal>(link: Option<&ReferenceCounter<Node<V>>>, out: &mut String) {
    let Some(node) = link else {
        out.push_str(ABSENT);
        return;
    };
    out.push('[');
    out.push_str(node.color.token());
    out.push_str(", ");
    write_shape(node.left.as_ref(), out);
    out.push_str(", ");
    node.value.write_literal(out);
    out.push_str(", ");
    write_shape(node.right.as_ref(), out);
    out.push(']');
}

/// Returns the rebuilt subtree and the number of nodes in it.
fn read_shape<V: Literal>(form: &Form) -> Result<(Link<V>, usize), CodecError> {
    let items = match form {
        Form::Nil => return Ok((None, 0)),
        Form::Symbol(token) if token == ABSENT => return Ok((None, 0)),
        Form::Vector(items) => items,
        other => {
            return Err(CodecError::MalformedShape {
                reason: format!("expected a node vector or `{ABSENT}`, found {}", other.kind()),
            });
        }
    };

    let [color, left, value, right] = items.as_slice() else {
        return Err(CodecError::MalformedShape {
            reason: format!("expected 4 node elements, found {}", items.len()),
        });
    };

    let color = match color {
        Form::Symbol(token) => Color::from_token(token),
        _ => None,
    }
    .ok_or_else(|| CodecError::MalformedShape {
        reason: format!("expected `black` or `red`, found {color}"),
    })?;

    let (left, left_length) = read_shape(left)?;
    let value = V::from_form(value)?;
    let (right, right_length) = read_shape(right)?;

    let node = Node::new(color, left, value, right);
    Ok((
        Some(ReferenceCounter::new(node)),
        left_length + right_length + 1,
    ))
}
