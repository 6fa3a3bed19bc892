//! Core traits for the validation system
//!
//! This module defines the contract that every validator in a pipeline
//! implements, whether it is one of the bundled primitives or supplied by a
//! custom [`Registry`](crate::registry::Registry).

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::foundation::FieldContext;

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of running one validator against one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The value passed; continue with the next validator in the chain.
    Valid,
    /// The value failed; the validator's [`describe`](Validator::describe)
    /// message goes into the report.
    Invalid,
    /// The value passed and the rest of the field's chain is skipped.
    ///
    /// Used by `optional` so that an absent value is not checked further.
    Halt,
}

impl Outcome {
    /// Maps a predicate result to [`Outcome::Valid`] or [`Outcome::Invalid`].
    #[must_use]
    pub const fn from_bool(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    /// Returns `true` for [`Outcome::Invalid`].
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator instance implements.
///
/// `validate` may suspend (a lookup, a remote check); the pipeline awaits
/// each validator before moving on to the next one. Failures of the
/// underlying work must be reported as [`Outcome::Invalid`]: the pipeline
/// has no error channel for validators.
///
/// # Examples
///
/// ```rust,ignore
/// use leaf_validator::foundation::{FieldContext, Outcome, Validator};
/// use serde_json::Value;
///
/// struct NotBlank;
///
/// #[async_trait::async_trait]
/// impl Validator for NotBlank {
///     async fn validate(&self, value: &Value, _ctx: &FieldContext<'_>) -> Outcome {
///         Outcome::from_bool(value.as_str().is_some_and(|s| !s.trim().is_empty()))
///     }
///
///     fn describe(&self) -> String {
///         "Must not be blank".to_string()
///     }
/// }
/// ```
#[async_trait]
pub trait Validator: Send + Sync {
    /// Checks `value`, the current value of `ctx.field()`.
    async fn validate(&self, value: &Value, ctx: &FieldContext<'_>) -> Outcome;

    /// Human-readable message reported when the validator fails.
    fn describe(&self) -> String;
}

/// A type-erased validator, as stored in a compiled chain.
pub type BoxedValidator = Box<dyn Validator>;

impl fmt::Debug for dyn Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.describe()).finish()
    }
}

// ============================================================================
// CLOSURE VALIDATOR
// ============================================================================

/// A synchronous validator built from a predicate and a message.
///
/// Handy for registering one-off rules in a custom registry.
pub struct FnValidator<F> {
    message: String,
    predicate: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&Value, &FieldContext<'_>) -> bool + Send + Sync,
{
    /// Creates a validator that fails with `message` when `predicate` is false.
    pub fn new(message: impl Into<String>, predicate: F) -> Self {
        Self {
            message: message.into(),
            predicate,
        }
    }
}

#[async_trait]
impl<F> Validator for FnValidator<F>
where
    F: Fn(&Value, &FieldContext<'_>) -> bool + Send + Sync,
{
    async fn validate(&self, value: &Value, ctx: &FieldContext<'_>) -> Outcome {
        Outcome::from_bool((self.predicate)(value, ctx))
    }

    fn describe(&self) -> String {
        self.message.clone()
    }
}

/// Shorthand for [`FnValidator::new`].
pub fn validator_fn<F>(message: impl Into<String>, predicate: F) -> FnValidator<F>
where
    F: Fn(&Value, &FieldContext<'_>) -> bool + Send + Sync,
{
    FnValidator::new(message, predicate)
}

// ============================================================================
// TESTS
// ============================================================================
