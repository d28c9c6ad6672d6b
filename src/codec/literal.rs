//! Textual literal forms of value types.

use super::error::CodecError;
use super::form::{Form, char_literal, string_literal};

/// A value type with its own textual literal form.
///
/// `write_literal` must produce text that the reader turns into a form
/// accepted by `from_form`, giving back an equal value.
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::codec::{Form, Literal};
///
/// let mut text = String::new();
/// (7_u8, "seven".to_string()).write_literal(&mut text);
/// assert_eq!(text, "[7, \"seven\"]");
///
/// let form = Form::Vector(vec![Form::Integer(7), Form::Str("seven".to_string())]);
/// assert_eq!(<(u8, String)>::from_form(&form), Ok((7, "seven".to_string())));
/// ```
pub trait Literal: Sized {
    /// Appends the literal form of `self` to `out`.
    fn write_literal(&self, out: &mut String);

    /// Rebuilds a value from a form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLiteral`] when the form has the wrong
    /// kind or its value does not fit the type.
    fn from_form(form: &Form) -> Result<Self, CodecError>;
}

/// Builds the error for a form of the wrong kind.
pub(crate) fn invalid(expected: &'static str, form: &Form) -> CodecError {
    CodecError::InvalidLiteral {
        expected,
        found: form.to_string(),
    }
}

macro_rules! integer_literal {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Literal for $integer {
                fn write_literal(&self, out: &mut String) {
                    out.push_str(&self.to_string());
                }

                fn from_form(form: &Form) -> Result<Self, CodecError> {
                    match form {
                        Form::Integer(value) => Self::try_from(*value)
                            .map_err(|_| invalid(concat!("an integer in range of ", stringify!($integer)), form)),
                        other => Err(invalid(concat!("an integer in range of ", stringify!($integer)), other)),
                    }
                }
            }
        )*
    };
}

integer_literal!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl Literal for bool {
    fn write_literal(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }

    fn from_form(form: &Form) -> Result<Self, CodecError> {
        match form {
            Form::Bool(value) => Ok(*value),
            other => Err(invalid("a boolean", other)),
        }
    }
}

impl Literal for char {
    fn write_literal(&self, out: &mut String) {
        out.push_str(&char_literal(*self));
    }

    fn from_form(form: &Form) -> Result<Self, CodecError> {
        match form {
            Form::Char(value) => Ok(*value),
            other => Err(invalid("a character", other)),
        }
    }
}

impl Literal for String {
    fn write_literal(&self, out: &mut String) {
        out.push_str(&string_literal(self));
    }

    fn from_form(form: &Form) -> Result<Self, CodecError> {
        match form {
            Form::Str(value) => Ok(value.clone()),
            other => Err(invalid("a string", other)),
        }
    }
}

impl<A: Literal, B: Literal> Literal for (A, B) {
    fn write_literal(&self, out: &mut String) {
        out.push('[');
        self.0.write_literal(out);
        out.push_str(", ");
        self.1.write_literal(out);
        out.push(']');
    }

    fn from_form(form: &Form) -> Result<Self, CodecError> {
        match form {
            Form::Vector(items) => match items.as_slice() {
                [first, second] => Ok((A::from_form(first)?, B::from_form(second)?)),
                _ => Err(invalid("a pair", form)),
            },
            other => Err(invalid("a pair", other)),
        }
    }
}
