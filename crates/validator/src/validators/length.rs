//! Length validator
//!
//! Length is measured in Unicode scalar values (chars) for strings and in
//! elements for arrays. Numbers are compared by value, so a numeric field
//! annotated with `length` behaves like a range with length messages.

use serde_json::Value;

use super::range::Bounds;
use crate::args::ArgValue;
use crate::error::ArgumentMismatch;
use crate::foundation::Outcome;
use crate::macros::sync_validator;

/// `length(min[, max])` or `length('min,max')`, inclusive.
///
/// # Examples
///
/// ```
/// use leaf_validator::validators::Length;
/// use leaf_validator::args::ArgValue;
/// use leaf_validator::foundation::Outcome;
/// use serde_json::json;
///
/// let length = Length::from_args(&[ArgValue::Number(3.0), ArgValue::Number(5.0)]).unwrap();
/// assert_eq!(length.check(&json!("abcd")), Outcome::Valid);
/// assert_eq!(length.check(&json!("ab")), Outcome::Invalid);
/// assert_eq!(length.message(), "Must be between 3 and 5 characters");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    bounds: Bounds,
}

impl Length {
    /// Creates a length validator.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Builds the validator from declaration arguments.
    pub fn from_args(args: &[ArgValue]) -> Result<Self, ArgumentMismatch> {
        Bounds::from_args(args).map(Self::new)
    }

    /// Checks one value.
    #[must_use]
    pub fn check(&self, value: &Value) -> Outcome {
        Outcome::from_bool(measure(value).is_some_and(|len| self.bounds.contains(len)))
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Must be {} characters", self.bounds.length_phrase())
    }
}

#[allow(clippy::cast_precision_loss)]
fn measure(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => Some(s.chars().count() as f64),
        Value::Array(items) => Some(items.len() as f64),
        Value::Number(n) => n.as_f64(),
        Value::Null | Value::Bool(_) | Value::Object(_) => None,
    }
}

sync_validator!(Length);
