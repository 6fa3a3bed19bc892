//! Pattern validator

use regex::Regex;
use serde_json::Value;

use crate::args::ArgValue;
use crate::error::ArgumentMismatch;
use crate::foundation::Outcome;
use crate::macros::sync_validator;

const DEFAULT_MESSAGE: &str = "Invalid format";

/// `regex(pattern[, message])`: the value is a string matching `pattern`.
///
/// The pattern may be a regex literal (`/^[a-z]+$/i`) or a string, which is
/// compiled as-is. Number and boolean patterns are matched by their text.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    message: Option<String>,
}

impl Pattern {
    /// Creates a pattern validator with the default message.
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            message: None,
        }
    }

    /// Replaces the failure message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builds the validator from declaration arguments.
    pub fn from_args(args: &[ArgValue]) -> Result<Self, ArgumentMismatch> {
        let (pattern, message) = match args {
            [pattern] => (pattern, None),
            [pattern, message] => (pattern, Some(message)),
            _ => return Err(ArgumentMismatch::arity("1 or 2", args.len())),
        };

        let regex = match pattern {
            ArgValue::Regex(regex) => regex.clone(),
            ArgValue::String(_) | ArgValue::Number(_) | ArgValue::Bool(_) => {
                let source = pattern.to_string();
                Regex::new(&source).map_err(|e| {
                    ArgumentMismatch::new(format!("invalid pattern '{source}': {e}"))
                })?
            }
            ArgValue::List(_) => {
                return Err(ArgumentMismatch::expected(0, "a pattern", pattern));
            }
        };

        let mut validator = Self::new(regex);
        if let Some(message) = message {
            let text = message
                .as_str()
                .ok_or_else(|| ArgumentMismatch::expected(1, "a string", message))?;
            validator = validator.with_message(text);
        }
        Ok(validator)
    }

    /// Checks one value.
    #[must_use]
    pub fn check(&self, value: &Value) -> Outcome {
        Outcome::from_bool(value.as_str().is_some_and(|s| self.regex.is_match(s)))
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
    }
}

sync_validator!(Pattern);
