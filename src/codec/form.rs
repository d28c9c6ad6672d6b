//! The generic syntax tree produced by the reader.

use std::fmt;

/// A value read from tagged text, before any type gives it meaning.
///
/// Printing a form with `Display` yields text the reader accepts again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Form {
    /// `nil`, the absent value.
    Nil,
    /// `true` or `false`.
    Bool(bool),
    /// A signed decimal integer.
    Integer(i128),
    /// A character literal such as `\a` or `\space`.
    Char(char),
    /// A double-quoted string.
    Str(String),
    /// A bare word such as `black`.
    Symbol(String),
    /// `[a, b, ...]`; commas are optional whitespace.
    Vector(Vec<Form>),
    /// `#tag form`.
    Tagged {
        /// The tag, without the leading `#`.
        tag: String,
        /// The form following the tag.
        body: Box<Form>,
    },
}

impl Form {
    /// A short name for the kind of this form, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Char(_) => "character",
            Self::Str(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Vector(_) => "vector",
            Self::Tagged { .. } => "tagged literal",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Char(value) => formatter.write_str(&char_literal(*value)),
            Self::Str(value) => formatter.write_str(&string_literal(value)),
            Self::Symbol(name) => formatter.write_str(name),
            Self::Vector(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Tagged { tag, body } => write!(formatter, "#{tag} {body}"),
        }
    }
}

/// Named characters, shared with the reader.
pub(crate) const NAMED_CHARACTERS: [(&str, char); 4] = [
    ("newline", '\n'),
    ("space", ' '),
    ("tab", '\t'),
    ("return", '\r'),
];

/// Renders a character as `\c`, or `\name` for whitespace.
pub(crate) fn char_literal(value: char) -> String {
    NAMED_CHARACTERS
        .iter()
        .find(|(_, named)| *named == value)
        .map_or_else(|| format!("\\{value}"), |(name, _)| format!("\\{name}"))
}

/// Renders a string with quotes and escapes.
pub(crate) fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for character in value.chars() {
        match character {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\t' => literal.push_str("\\t"),
            '\r' => literal.push_str("\\r"),
            other => literal.push(other),
        }
    }
    literal.push('"');
    literal
}
