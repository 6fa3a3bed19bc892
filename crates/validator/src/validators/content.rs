//! Content format validators

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::args::ArgValue;
use crate::error::ArgumentMismatch;
use crate::foundation::Outcome;
use crate::macros::sync_validator;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap_or_else(|e| unreachable!("email pattern is valid: {e}"))
});

/// `email()`: a string shaped like `local@domain`.
///
/// The local part allows the RFC 5322 atom characters and dots; the domain
/// is one or more dot-separated labels of up to 63 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Email;

impl Email {
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
        Outcome::from_bool(value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s)))
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> String {
        "Must be a valid email address".to_string()
    }
}

sync_validator!(Email);
