//! Error types
//!
//! Configuration problems (unknown validator names, unparsable or rejected
//! arguments, malformed annotation blocks) are errors and abort pipeline
//! construction. Validation failures are never errors: they are collected in
//! a [`ValidationReport`](crate::pipeline::ValidationReport).

use thiserror::Error;

use crate::args::ArgValue;

// ============================================================================
// COMPILE ERRORS
// ============================================================================

/// Failure to build a [`Pipeline`](crate::pipeline::Pipeline).
#[derive(Debug, Error)]
pub enum CompileError {
    /// A declaration names a validator the registry does not know.
    #[error("Cannot create validator \"{name}\"")]
    UnknownValidator {
        /// The unresolved validator name.
        name: String,
    },

    /// The raw argument text of a declaration is not a valid literal list.
    #[error("invalid arguments for validator \"{validator}\" on field \"{field}\": {source}")]
    InvalidArguments {
        /// Field the declaration is attached to.
        field: String,
        /// Validator name of the declaration.
        validator: String,
        /// What the argument parser rejected.
        source: ArgumentError,
    },

    /// A constructor rejected its evaluated arguments.
    #[error("validator \"{validator}\"{} rejected its arguments: {source}", field_suffix(.field))]
    InvalidConfiguration {
        /// Field the declaration is attached to, once known.
        field: Option<String>,
        /// Validator name of the declaration.
        validator: String,
        /// Why the constructor rejected the arguments.
        source: ArgumentMismatch,
    },

    /// The definition text could not be scanned.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl CompileError {
    /// The validator name involved in the error, if any.
    #[must_use]
    pub fn validator_name(&self) -> Option<&str> {
        match self {
            Self::UnknownValidator { name } => Some(name.as_str()),
            Self::InvalidArguments { validator, .. }
            | Self::InvalidConfiguration { validator, .. } => Some(validator.as_str()),
            Self::Extract(_) => None,
        }
    }

    /// The field whose declaration failed, if known.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArguments { field, .. } => Some(field.as_str()),
            Self::InvalidConfiguration { field, .. } => field.as_deref(),
            Self::UnknownValidator { .. } | Self::Extract(_) => None,
        }
    }

    /// Attaches the declaring field to a rejected configuration.
    pub(crate) fn on_field(mut self, name: &str) -> Self {
        if let Self::InvalidConfiguration { field, .. } = &mut self {
            *field = Some(name.to_string());
        }
        self
    }
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|field| format!(" on field \"{field}\""))
        .unwrap_or_default()
}

// ============================================================================
// ARGUMENT ERRORS
// ============================================================================

/// Raw argument text that is not a valid literal list.
///
/// Offsets are byte offsets into the raw argument text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A quoted string is missing its closing quote.
    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString {
        /// Offset of the opening quote.
        offset: usize,
    },

    /// A regular-expression literal is missing its closing slash.
    #[error("unterminated regular expression starting at offset {offset}")]
    UnterminatedRegex {
        /// Offset of the opening slash.
        offset: usize,
    },

    /// A regular-expression literal does not compile.
    #[error("invalid regular expression /{pattern}/: {message}")]
    InvalidRegex {
        /// Pattern source between the slashes.
        pattern: String,
        /// Message from the regex engine.
        message: String,
    },

    /// A regular-expression literal carries an unsupported flag.
    #[error("unsupported regular expression flag '{flag}' at offset {offset}")]
    InvalidRegexFlag {
        /// The flag character.
        flag: char,
        /// Offset of the flag.
        offset: usize,
    },

    /// A numeric literal does not parse.
    #[error("invalid number literal '{literal}' at offset {offset}")]
    InvalidNumber {
        /// The offending literal text.
        literal: String,
        /// Offset of the literal.
        offset: usize,
    },

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected {found} at offset {offset}, expected {expected}")]
    Unexpected {
        /// Description of what was found.
        found: String,
        /// Description of what the parser wanted.
        expected: &'static str,
        /// Offset of the token.
        offset: usize,
    },

    /// Lists are nested deeper than the parser accepts.
    #[error("argument lists nested deeper than {limit} levels")]
    TooDeep {
        /// The nesting limit.
        limit: usize,
    },
}

/// A constructor could not use the arguments it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ArgumentMismatch {
    message: String,
}

impl ArgumentMismatch {
    /// Creates a mismatch with a free-form message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Argument at `index` has the wrong type.
    pub fn expected(index: usize, expected: &str, found: &ArgValue) -> Self {
        Self::new(format!(
            "argument {} must be {expected}, found {}",
            index + 1,
            found.type_name()
        ))
    }

    /// Wrong number of arguments.
    pub fn arity(expected: &str, found: usize) -> Self {
        Self::new(format!("expected {expected} argument(s), found {found}"))
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// EXTRACT ERRORS
// ============================================================================

/// Failure to scan a type definition for annotations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A block comment is never closed.
    #[error("unterminated block comment starting at line {line}")]
    UnterminatedComment {
        /// 1-based line of the comment opener.
        line: usize,
        /// Byte offset of the comment opener.
        offset: usize,
    },
}

// ============================================================================
// ENTITY ERRORS
// ============================================================================

/// A value handed to [`Pipeline::validate_serialize`](crate::pipeline::Pipeline::validate_serialize)
/// could not be turned into an entity.
#[derive(Debug, Error)]
pub enum EntityError {
    /// Serialization to JSON failed.
    #[error("failed to serialize entity: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The value serialized to something other than an object.
    #[error("entity must serialize to an object, found {found}")]
    NotAnObject {
        /// JSON type that was produced instead.
        found: &'static str,
    },
}
