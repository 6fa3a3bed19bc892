//! Enumerated values validator

use serde_json::Value;

use crate::args::ArgValue;
use crate::error::ArgumentMismatch;
use crate::foundation::Outcome;
use crate::macros::sync_validator;

/// `values([a, b, c])` or `values(a, b, c)`: the value equals one of the
/// listed literals.
///
/// Strings, numbers and booleans compare by equality of the same JSON type;
/// a regex entry accepts any string it matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Values {
    allowed: Vec<ArgValue>,
}

impl Values {
    /// Creates the validator. Nested lists are rejected.
    pub fn new(allowed: Vec<ArgValue>) -> Result<Self, ArgumentMismatch> {
        if allowed.is_empty() {
            return Err(ArgumentMismatch::new("at least one allowed value is required"));
        }
        if let Some((index, nested)) = allowed
            .iter()
            .enumerate()
            .find(|(_, item)| item.as_list().is_some())
        {
            return Err(ArgumentMismatch::expected(index, "a scalar value", nested));
        }
        Ok(Self { allowed })
    }

    /// Builds the validator from declaration arguments.
    pub fn from_args(args: &[ArgValue]) -> Result<Self, ArgumentMismatch> {
        match args {
            [ArgValue::List(items)] => Self::new(items.clone()),
            _ => Self::new(args.to_vec()),
        }
    }

    /// The allowed literals, in declaration order.
    #[must_use]
    pub fn allowed(&self) -> &[ArgValue] {
        &self.allowed
    }

    /// Checks one value.
    #[must_use]
    pub fn check(&self, value: &Value) -> Outcome {
        Outcome::from_bool(self.allowed.iter().any(|item| item.matches(value)))
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Must be one of: {}", ArgValue::List(self.allowed.clone()))
    }
}

sync_validator!(Values);
