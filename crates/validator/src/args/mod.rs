//! Argument evaluation
//!
//! Turns the raw text found between the parentheses of a declaration such as
//! `@validator values(['admin', 'mod'], /^x/i, 42, true)` into typed values.
//!
//! The grammar is literal-only:
//!
//! ```text
//! arguments := [ value { "," value } [ "," ] ]
//! value     := string | number | boolean | regex | list
//! list      := "[" [ value { "," value } [ "," ] ] "]"
//! ```
//!
//! Nothing is ever executed: bare identifiers, operators and calls are
//! rejected with an [`ArgumentError`].

pub(crate) mod lexer;

use std::fmt;

use regex::Regex;
use serde_json::Value;

use crate::error::ArgumentError;
use crate::foundation::format_number;
use lexer::{Lexer, Token, TokenKind};

/// Maximum nesting depth for list literals.
pub const MAX_DEPTH: usize = 32;

// ============================================================================
// ARG VALUE
// ============================================================================

/// One evaluated argument.
#[derive(Debug, Clone)]
pub enum ArgValue {
    /// A quoted string, escapes resolved.
    String(String),
    /// A decimal number.
    Number(f64),
    /// `true` or `false`.
    Bool(bool),
    /// A `/pattern/flags` literal, flags folded into the pattern.
    Regex(Regex),
    /// A bracketed list of values.
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Name of the value's type, for error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Regex(_) => "regular expression",
            Self::List(_) => "list",
        }
    }

    /// The string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The compiled pattern, if this is a regex.
    #[must_use]
    pub fn as_regex(&self) -> Option<&Regex> {
        match self {
            Self::Regex(re) => Some(re),
            _ => None,
        }
    }

    /// The items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[ArgValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Loose truthiness: `""`, `0` and `false` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
            Self::Regex(_) | Self::List(_) => true,
        }
    }

    /// Whether a field value equals this literal.
    ///
    /// Regex literals match string values by pattern; lists never match.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String(expected), Value::String(actual)) => expected == actual,
            (Self::Number(expected), Value::Number(actual)) => {
                actual.as_f64().is_some_and(|actual| actual == *expected)
            }
            (Self::Bool(expected), Value::Bool(actual)) => expected == actual,
            (Self::Regex(re), Value::String(actual)) => re.is_match(actual),
            _ => false,
        }
    }
}

impl PartialEq for ArgValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Regex> for ArgValue {
    fn from(value: Regex) -> Self {
        Self::Regex(value)
    }
}

impl From<Vec<ArgValue>> for ArgValue {
    fn from(value: Vec<ArgValue>) -> Self {
        Self::List(value)
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Evaluates raw argument text into an ordered list of values.
///
/// `None` (a declaration without parentheses) and empty or blank text (a
/// declaration with `()`) both yield an empty list.
///
/// # Examples
///
/// ```
/// use leaf_validator::args::{ArgValue, evaluate};
///
/// let args = evaluate(Some("3, 'x,y', [true]")).unwrap();
/// assert_eq!(args, vec![
///     ArgValue::Number(3.0),
///     ArgValue::String("x,y".into()),
///     ArgValue::List(vec![ArgValue::Bool(true)]),
/// ]);
/// ```
pub fn evaluate(raw: Option<&str>) -> Result<Vec<ArgValue>, ArgumentError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let tokens = Lexer::new(raw).tokenize()?;
    Parser::new(tokens).parse_arguments()
}

struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn parse_arguments(mut self) -> Result<Vec<ArgValue>, ArgumentError> {
        let values = self.parse_items(0, false)?;
        let token = self.peek();
        if matches!(token.kind, TokenKind::Eof) {
            Ok(values)
        } else {
            Err(unexpected(token, "end of arguments"))
        }
    }

    fn peek(&self) -> &Token {
        // the lexer always terminates the stream with Eof
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
        token
    }

    fn at_end(&self, in_list: bool) -> bool {
        match self.peek().kind {
            TokenKind::RightBracket => in_list,
            TokenKind::Eof => !in_list,
            _ => false,
        }
    }

    fn parse_items(&mut self, depth: usize, in_list: bool) -> Result<Vec<ArgValue>, ArgumentError> {
        let mut items = Vec::new();

        while !self.at_end(in_list) {
            items.push(self.parse_value(depth)?);

            if matches!(self.peek().kind, TokenKind::Comma) {
                self.bump();
            } else if !self.at_end(in_list) {
                let expected = if in_list { "',' or ']'" } else { "','" };
                return Err(unexpected(self.peek(), expected));
            }
        }

        Ok(items)
    }

    fn parse_value(&mut self, depth: usize) -> Result<ArgValue, ArgumentError> {
        let token = self.bump();
        match token.kind {
            TokenKind::String(s) => Ok(ArgValue::String(s)),
            TokenKind::Number(n) => Ok(ArgValue::Number(n)),
            TokenKind::Bool(b) => Ok(ArgValue::Bool(b)),
            TokenKind::Regex(re) => Ok(ArgValue::Regex(re)),
            TokenKind::LeftBracket => {
                if depth + 1 > MAX_DEPTH {
                    return Err(ArgumentError::TooDeep { limit: MAX_DEPTH });
                }
                let items = self.parse_items(depth + 1, true)?;
                let close = self.bump();
                if matches!(close.kind, TokenKind::RightBracket) {
                    Ok(ArgValue::List(items))
                } else {
                    Err(unexpected(&close, "']'"))
                }
            }
            _ => Err(unexpected(&token, "a literal")),
        }
    }
}

fn unexpected(token: &Token, expected: &'static str) -> ArgumentError {
    ArgumentError::Unexpected {
        found: token.describe(),
        expected,
        offset: token.offset,
    }
}

// ============================================================================
// TESTS
// ============================================================================
