//! Core validation types and traits
//!
//! This module contains the contract every validator in a pipeline satisfies:
//!
//! - **Traits**: [`Validator`], the async, object-safe validator interface
//! - **Outcomes**: [`Outcome`], the three-way result of running one validator
//! - **Context**: [`FieldContext`], the field name plus the entity it belongs to
//!
//! # Architecture
//!
//! Validators are configured once, when a pipeline is compiled, and are
//! immutable afterwards. A validator sees the value of a single field, but it
//! also receives the whole entity so cross-field rules stay possible:
//!
//! ```rust,ignore
//! use leaf_validator::foundation::{FieldContext, Outcome, Validator};
//! use serde_json::Value;
//!
//! struct MatchesField { other: String }
//!
//! #[async_trait::async_trait]
//! impl Validator for MatchesField {
//!     async fn validate(&self, value: &Value, ctx: &FieldContext<'_>) -> Outcome {
//!         Outcome::from_bool(ctx.sibling(&self.other) == Some(value))
//!     }
//!
//!     fn describe(&self) -> String {
//!         format!("Must match {}", self.other)
//!     }
//! }
//! ```

pub mod context;
pub mod traits;

pub use context::{Entity, FieldContext};
pub use traits::{BoxedValidator, Outcome, Validator};

// ============================================================================
// VALUE HELPERS
// ============================================================================

/// Returns `true` when a JSON value is truthy under the loose rules the
/// bundled validators share: `null`, `false`, `0` and `""` are falsy,
/// everything else (including empty arrays and objects) is truthy.
#[must_use]
pub fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerces a JSON value to a finite number.
///
/// Numbers pass through; strings are trimmed and parsed. Anything else,
/// including empty or non-numeric strings, yields `None`.
#[must_use]
pub fn as_number(value: &serde_json::Value) -> Option<f64> {
    use serde_json::Value;

    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    n.is_finite().then_some(n)
}

/// Formats a number the way error messages print it: integral values
/// without a fractional part (`3`, not `3.0`).
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
