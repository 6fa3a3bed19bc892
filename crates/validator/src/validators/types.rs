//! Type validators: [`Number`] and [`Boolean`]

use serde_json::Value;

use crate::args::ArgValue;
use crate::error::ArgumentMismatch;
use crate::foundation::{Outcome, as_number};
use crate::macros::sync_validator;

fn no_arguments(args: &[ArgValue]) -> Result<(), ArgumentMismatch> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ArgumentMismatch::arity("0", args.len()))
    }
}

/// `number()`: a finite number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Number;

impl Number {
    /// Builds the validator from declaration arguments.
    pub fn from_args(args: &[ArgValue]) -> Result<Self, ArgumentMismatch> {
        no_arguments(args).map(|()| Self)
    }

    /// Checks one value.
    #[must_use]
    pub fn check(&self, value: &Value) -> Outcome {
        Outcome::from_bool(as_number(value).is_some())
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> String {
        "Must be a number".to_string()
    }
}

/// `boolean()`: `true`, `false`, or one of the strings `"true"`/`"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Boolean;

impl Boolean {
    /// Builds the validator from declaration arguments.
    pub fn from_args(args: &[ArgValue]) -> Result<Self, ArgumentMismatch> {
        no_arguments(args).map(|()| Self)
    }

    /// Checks one value.
    #[must_use]
    pub fn check(&self, value: &Value) -> Outcome {
        Outcome::from_bool(match value {
            Value::Bool(_) => true,
            Value::String(s) => matches!(s.as_str(), "true" | "false"),
            _ => false,
        })
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> String {
        "Must be true or false".to_string()
    }
}

sync_validator!(Number, Boolean);
