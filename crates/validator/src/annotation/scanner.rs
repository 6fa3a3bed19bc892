//! Annotation scanner
//!
//! A single left-to-right pass over definition text. The scanner tracks one
//! flag: "a block comment was just closed, a field initializer should come
//! next". Only `<self>.<field> =` directly after a block comment (whitespace
//! aside) binds that comment's declarations to the field.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::{AnnotationTable, FieldAnnotations, ValidatorDeclaration};
use crate::error::ExtractError;

/// Receiver keywords accepted on the left of a field initializer.
pub const SELF_REFERENCES: [&str; 2] = ["this", "self"];

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s*]*@validator\s+(\w+)(?:\((.*)\))?\s*$")
        .unwrap_or_else(|e| unreachable!("declaration pattern is valid: {e}"))
});

/// Scans definition text and returns the declarations bound to each field.
///
/// Fields whose latest block comment holds no declarations are left out,
/// even when an earlier initializer of the same field was annotated.
/// Comment syntax inside string literals is ignored, and line comments
/// neither bind nor break a binding.
///
/// # Examples
///
/// ```
/// use leaf_validator::annotation::extract;
///
/// let table = extract(r#"
///     function Foo() {
///         /**
///          * @validator required
///          * @validator length(3, 5)
///          */
///         this.foo = 'bar';
///     }
/// "#).unwrap();
///
/// let names: Vec<_> = table.get("foo").unwrap().iter().map(|d| d.name.as_str()).collect();
/// assert_eq!(names, ["required", "length"]);
/// ```
pub fn extract(source: &str) -> Result<AnnotationTable, ExtractError> {
    Scanner::new(source).run()
}

struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    position: usize,
    pending: FieldAnnotations,
    expect_field: bool,
    table: AnnotationTable,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            position: 0,
            pending: Vec::new(),
            expect_field: false,
            table: AnnotationTable::new(),
        }
    }

    fn run(mut self) -> Result<AnnotationTable, ExtractError> {
        while let Some(&byte) = self.bytes.get(self.position) {
            match byte {
                b'/' if self.byte_at(1) == Some(b'*') => self.block_comment()?,
                b'/' if self.byte_at(1) == Some(b'/') => self.line_comment(),
                b'\'' | b'"' | b'`' => {
                    self.disarm();
                    self.skip_string(byte);
                }
                _ => {
                    let Some(ch) = self.source[self.position..].chars().next() else {
                        break;
                    };
                    if ch.is_whitespace() {
                        self.position += ch.len_utf8();
                        continue;
                    }
                    if self.expect_field && self.field_initializer() {
                        continue;
                    }
                    self.disarm();
                    self.position += ch.len_utf8();
                }
            }
        }

        Ok(self.table)
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.position + offset).copied()
    }

    fn disarm(&mut self) {
        self.expect_field = false;
        self.pending.clear();
    }

    /// Consumes `/* ... */` and arms the scanner with its declarations.
    fn block_comment(&mut self) -> Result<(), ExtractError> {
        let start = self.position;
        let body_start = start + 2;
        let Some(len) = self.source[body_start..].find("*/") else {
            return Err(ExtractError::UnterminatedComment {
                line: self.source[..start].matches('\n').count() + 1,
                offset: start,
            });
        };

        let body = &self.source[body_start..body_start + len];
        self.pending = parse_comment(body);
        self.expect_field = true;
        self.position = body_start + len + 2;
        Ok(())
    }

    /// Skips to the end of the line without touching the armed state.
    fn line_comment(&mut self) {
        self.position = self.source[self.position..]
            .find('\n')
            .map_or(self.bytes.len(), |i| self.position + i + 1);
    }

    /// Skips a quoted literal. Single and double quotes stop at a newline.
    fn skip_string(&mut self, quote: u8) {
        self.position += 1;
        while let Some(&byte) = self.bytes.get(self.position) {
            self.position += 1;
            match byte {
                b'\\' => self.position += 1,
                b'\n' if quote != b'`' => return,
                b if b == quote => return,
                _ => {}
            }
        }
        self.position = self.position.min(self.bytes.len());
    }

    /// Tries to read `<self>.<field> =` at the current position. On success
    /// binds the pending declarations to the field and returns `true`.
    fn field_initializer(&mut self) -> bool {
        let rest = &self.source[self.position..];

        let Some(after_receiver) = SELF_REFERENCES
            .iter()
            .find_map(|receiver| rest.strip_prefix(*receiver)?.strip_prefix('.'))
        else {
            return false;
        };

        let name_len = after_receiver
            .char_indices()
            .find(|&(i, c)| !is_identifier_char(c) || (i == 0 && c.is_ascii_digit()))
            .map_or(after_receiver.len(), |(i, _)| i);
        if name_len == 0 {
            return false;
        }

        let name = &after_receiver[..name_len];
        let tail = after_receiver[name_len..].trim_start();
        let is_assignment = tail.starts_with('=') && !tail[1..].starts_with(['=', '>']);
        if !is_assignment {
            return false;
        }

        let declarations = std::mem::take(&mut self.pending);
        trace!(field = name, declarations = declarations.len(), "bound annotation block");
        if declarations.is_empty() {
            self.table.remove(name);
        } else {
            self.table.insert(name, declarations);
        }

        self.expect_field = false;
        self.position = self.source.len() - after_receiver.len() + name_len;
        true
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Collects the `@validator` lines of a comment body, in order.
fn parse_comment(body: &str) -> FieldAnnotations {
    body.lines()
        .filter_map(|line| {
            let captures = DECLARATION.captures(line)?;
            Some(ValidatorDeclaration::new(
                &captures[1],
                captures.get(2).map(|m| m.as_str()),
            ))
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
