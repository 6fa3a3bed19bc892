//! Presence validators
//!
//! - [`Required`] - the value must be present and truthy
//! - [`Optional`] - an absent value ends the field's chain early

use serde_json::Value;

use crate::args::ArgValue;
use crate::error::ArgumentMismatch;
use crate::foundation::{Outcome, is_truthy};
use crate::macros::sync_validator;

// ============================================================================
// REQUIRED
// ============================================================================

/// `required([keepWhitespace])`: the value is truthy.
///
/// Strings are trimmed before the check unless the argument is `true` or
/// the string `'true'`, so `"   "` counts as missing by default. `null`,
/// `false`, `0` and `""` are missing; arrays and objects never are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Required {
    keep_whitespace: bool,
}

impl Required {
    /// Creates the validator.
    #[must_use]
    pub fn new(keep_whitespace: bool) -> Self {
        Self { keep_whitespace }
    }

    /// Builds the validator from declaration arguments.
    pub fn from_args(args: &[ArgValue]) -> Result<Self, ArgumentMismatch> {
        match args {
            [] => Ok(Self::default()),
            [flag] => Ok(Self::new(
                flag.as_str().map_or_else(|| flag.is_truthy(), |s| s == "true"),
            )),
            _ => Err(ArgumentMismatch::arity("0 or 1", args.len())),
        }
    }

    /// Checks one value.
    #[must_use]
    pub fn check(&self, value: &Value) -> Outcome {
        let present = match value {
            Value::String(s) if !self.keep_whitespace => !s.trim().is_empty(),
            other => is_truthy(other),
        };
        Outcome::from_bool(present)
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> String {
        "This field is required".to_string()
    }
}

// ============================================================================
// OPTIONAL
// ============================================================================

/// `optional()`: `null` and blank strings pass and skip the rest of the
/// field's chain. Any other value passes on to the next validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Optional;

impl Optional {
    /// Builds the validator from declaration arguments.
    pub fn from_args(args: &[ArgValue]) -> Result<Self, ArgumentMismatch> {
        if args.is_empty() {
            Ok(Self)
        } else {
            Err(ArgumentMismatch::arity("0", args.len()))
        }
    }

    /// Checks one value.
    #[must_use]
    pub fn check(&self, value: &Value) -> Outcome {
        match value {
            Value::Null => Outcome::Halt,
            Value::String(s) if s.trim().is_empty() => Outcome::Halt,
            _ => Outcome::Valid,
        }
    }

    /// Never reported, since the validator cannot fail.
    #[must_use]
    pub fn message(&self) -> String {
        "This field is optional".to_string()
    }
}

sync_validator!(Required, Optional);

// ============================================================================
// TESTS
// ============================================================================
