//! Numeric range validator
//!
//! Also home of [`Bounds`], the inclusive interval shared with
//! [`Length`](super::Length).

use serde_json::Value;

use crate::args::ArgValue;
use crate::error::ArgumentMismatch;
use crate::foundation::{Outcome, as_number, format_number};
use crate::macros::sync_validator;

// ============================================================================
// BOUNDS
// ============================================================================

/// An inclusive interval with at least one end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower bound (inclusive), if any.
    pub min: Option<f64>,
    /// Upper bound (inclusive), if any.
    pub max: Option<f64>,
}

impl Bounds {
    /// Creates an interval.
    ///
    /// Fails when both ends are missing or `min > max`.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, ArgumentMismatch> {
        match (min, max) {
            (None, None) => Err(ArgumentMismatch::new("at least one bound is required")),
            (Some(min), Some(max)) if min > max => Err(ArgumentMismatch::new(format!(
                "minimum {} is greater than maximum {}",
                format_number(min),
                format_number(max)
            ))),
            _ => Ok(Self { min, max }),
        }
    }

    /// Reads `(min[, max])` or a single `'min,max'` string form.
    ///
    /// Either side of the string form may be empty: `',5'` has no lower
    /// bound, `'5'` and `'5,'` have no upper bound.
    pub fn from_args(args: &[ArgValue]) -> Result<Self, ArgumentMismatch> {
        match args {
            [ArgValue::String(text)] => Self::parse_text(text),
            [min] => Self::new(Some(number_arg(0, min)?), None),
            [min, max] => Self::new(Some(number_arg(0, min)?), Some(number_arg(1, max)?)),
            _ => Err(ArgumentMismatch::arity("1 or 2", args.len())),
        }
    }

    fn parse_text(text: &str) -> Result<Self, ArgumentMismatch> {
        let (min, max) = text.split_once(',').unwrap_or((text, ""));
        Self::new(parse_bound(min)?, parse_bound(max)?)
    }

    /// Whether `n` lies inside the interval.
    #[must_use]
    pub fn contains(&self, n: f64) -> bool {
        self.min.is_none_or(|min| n >= min) && self.max.is_none_or(|max| n <= max)
    }

    /// Renders `between X and Y`, `{lower} X` or `{upper} Y`.
    fn phrase(&self, lower: &str, upper: &str) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!(
                "between {} and {}",
                format_number(min),
                format_number(max)
            ),
            (Some(min), None) => format!("{lower} {}", format_number(min)),
            (None, Some(max)) => format!("{upper} {}", format_number(max)),
            (None, None) => String::new(),
        }
    }

    /// Message body for length-style checks.
    pub(crate) fn length_phrase(&self) -> String {
        self.phrase("longer than", "shorter than")
    }
}

fn number_arg(index: usize, arg: &ArgValue) -> Result<f64, ArgumentMismatch> {
    arg.as_number()
        .ok_or_else(|| ArgumentMismatch::expected(index, "a number", arg))
}

fn parse_bound(text: &str) -> Result<Option<f64>, ArgumentMismatch> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| ArgumentMismatch::new(format!("invalid bound '{text}'")))
}

// ============================================================================
// RANGE
// ============================================================================

/// `range(min[, max])`: the value, as a number, lies inside the bounds.
///
/// Numeric strings are accepted. Anything that is not a number fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    bounds: Bounds,
}

impl Range {
    /// Creates a range validator.
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
        Outcome::from_bool(as_number(value).is_some_and(|n| self.bounds.contains(n)))
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Must be {}", self.bounds.phrase("at least", "at most"))
    }
}

sync_validator!(Range);

// ============================================================================
// TESTS
// ============================================================================
