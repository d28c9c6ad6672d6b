//! Reads text into [`Form`]s.
//!
//! The grammar is a small EDN-like subset:
//!
//! ```text
//! form    = nil | true | false | integer | char | string | symbol
//!         | "[" form* "]" | "#" symbol form
//! integer = ["+" | "-"] digit+
//! char    = "\" (any | "newline" | "space" | "tab" | "return")
//! ```
//!
//! Commas count as whitespace and `;` starts a comment running to the end
//! of the line.

use super::error::CodecError;
use super::form::{Form, NAMED_CHARACTERS};

/// Maximum nesting of vectors and tagged forms.
const MAX_DEPTH: usize = 256;

/// Reads exactly one form from `text`.
///
/// # Errors
///
/// Returns [`CodecError::Syntax`] with the byte offset of the first
/// problem, including any input left over after the form.
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::codec::{Form, read};
///
/// let form = read("[black, nil, 1, nil]").unwrap();
/// assert_eq!(
///     form,
///     Form::Vector(vec![
///         Form::Symbol("black".to_string()),
///         Form::Nil,
///         Form::Integer(1),
///         Form::Nil,
///     ])
/// );
/// ```
pub fn read(text: &str) -> Result<Form, CodecError> {
    let mut reader = Reader::new(text);
    let form = reader.read_form()?;
    reader.skip_whitespace();
    if reader.peek().is_some() {
        return Err(reader.error("unexpected trailing input"));
    }
    Ok(form)
}

struct Reader<'a> {
    text: &'a str,
    offset: usize,
    depth: usize,
}

impl<'a> Reader<'a> {
    const fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            depth: 0,
        }
    }

    const fn error(&self, message: &'static str) -> CodecError {
        CodecError::Syntax {
            offset: self.offset,
            message,
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.text[self.offset..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let character = self.peek()?;
        self.offset += character.len_utf8();
        Some(character)
    }

    fn skip_whitespace(&mut self) {
        while let Some(character) = self.peek() {
            if character == ';' {
                while self.bump().is_some_and(|skipped| skipped != '\n') {}
            } else if character.is_whitespace() || character == ',' {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn read_form(&mut self) -> Result<Form, CodecError> {
        self.skip_whitespace();
        let Some(character) = self.peek() else {
            return Err(self.error("unexpected end of input"));
        };

        match character {
            '[' => self.nested(Self::read_vector),
            '#' => self.nested(Self::read_tagged),
            ']' => Err(self.error("unexpected `]`")),
            '"' => self.read_string(),
            '\\' => self.read_char(),
            '+' | '-' if self.peek_second().is_some_and(|next| next.is_ascii_digit()) => {
                self.read_integer()
            }
            digit if digit.is_ascii_digit() => self.read_integer(),
            start if is_symbol_start(start) => Ok(match self.read_symbol() {
                "nil" => Form::Nil,
                "true" => Form::Bool(true),
                "false" => Form::Bool(false),
                name => Form::Symbol(name.to_string()),
            }),
            _ => Err(self.error("unexpected character")),
        }
    }

    fn nested(
        &mut self,
        read: fn(&mut Self) -> Result<Form, CodecError>,
    ) -> Result<Form, CodecError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let form = read(self);
        self.depth -= 1;
        form
    }

    fn read_vector(&mut self) -> Result<Form, CodecError> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.error("unterminated vector")),
                Some(']') => {
                    self.bump();
                    return Ok(Form::Vector(items));
                }
                Some(_) => items.push(self.read_form()?),
            }
        }
    }

    fn read_tagged(&mut self) -> Result<Form, CodecError> {
        self.bump();
        if !self.peek().is_some_and(is_symbol_start) {
            return Err(self.error("expected a tag after `#`"));
        }
        let tag = self.read_symbol().to_string();
        let body = self.read_form()?;
        Ok(Form::Tagged {
            tag,
            body: Box::new(body),
        })
    }

    fn read_symbol(&mut self) -> &'a str {
        let start = self.offset;
        while self.peek().is_some_and(is_symbol_part) {
            self.bump();
        }
        &self.text[start..self.offset]
    }

    fn read_integer(&mut self) -> Result<Form, CodecError> {
        let start = self.offset;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        while self.peek().is_some_and(|digit| digit.is_ascii_digit()) {
            self.bump();
        }
        if self.peek().is_some_and(is_symbol_part) {
            return Err(self.error("invalid number"));
        }
        self.text[start..self.offset]
            .parse::<i128>()
            .map(Form::Integer)
            .map_err(|_| CodecError::Syntax {
                offset: start,
                message: "integer out of range",
            })
    }

    fn read_string(&mut self) -> Result<Form, CodecError> {
        self.bump();
        let mut value = String::new();
        loop {
            let Some(character) = self.bump() else {
                return Err(self.error("unterminated string"));
            };
            match character {
                '"' => return Ok(Form::Str(value)),
                '\\' => {
                    let escaped = match self.bump() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some(_) => return Err(self.error("unknown escape sequence")),
                        None => return Err(self.error("unterminated string")),
                    };
                    value.push(escaped);
                }
                other => value.push(other),
            }
        }
    }

    fn read_char(&mut self) -> Result<Form, CodecError> {
        self.bump();
        let start = self.offset;
        let Some(first) = self.bump() else {
            return Err(self.error("expected a character after `\\`"));
        };
        if !first.is_alphabetic() {
            return Ok(Form::Char(first));
        }

        while self.peek().is_some_and(char::is_alphabetic) {
            self.bump();
        }
        let name = &self.text[start..self.offset];
        if name.chars().count() == 1 {
            return Ok(Form::Char(first));
        }
        NAMED_CHARACTERS
            .iter()
            .find(|(named, _)| *named == name)
            .map(|(_, character)| Form::Char(*character))
            .ok_or(CodecError::Syntax {
                offset: start,
                message: "unknown character name",
            })
    }
}

fn is_symbol_start(character: char) -> bool {
    character.is_alphabetic() || "*+!-_?<>=/.:&".contains(character)
}

fn is_symbol_part(character: char) -> bool {
    is_symbol_start(character) || character.is_ascii_digit() || character == '#'
}
