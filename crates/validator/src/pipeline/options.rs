//! Per-call validation options

use serde::{Deserialize, Serialize};

/// How a single field's chain reacts to a failure.
///
/// Every field is always evaluated; the mode only decides whether a chain
/// stops at its first failing validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Report only the first failing validator of each field.
    #[default]
    StopOnFirst,
    /// Run whole chains and report every failing validator.
    AggregateAll,
}

impl Mode {
    /// `true` for [`Mode::AggregateAll`].
    #[must_use]
    pub const fn aggregates(self) -> bool {
        matches!(self, Self::AggregateAll)
    }
}

impl From<bool> for Mode {
    /// `true` selects [`Mode::AggregateAll`].
    fn from(aggregate_all: bool) -> Self {
        if aggregate_all {
            Self::AggregateAll
        } else {
            Self::StopOnFirst
        }
    }
}

/// Options for one [`Pipeline::validate`](super::Pipeline::validate) call.
///
/// Plain data with serde support, so callers can keep it in their own
/// configuration files:
///
/// ```
/// use leaf_validator::pipeline::{Mode, ValidateOptions};
///
/// let options: ValidateOptions = serde_json::from_str(r#"{ "mode": "aggregate_all" }"#).unwrap();
/// assert_eq!(options.mode, Mode::AggregateAll);
/// assert!(!options.check_missing);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Chain behavior on failure.
    pub mode: Mode,
    /// Validate declared fields the entity lacks, as `null`.
    pub check_missing: bool,
}

impl ValidateOptions {
    /// Default options: stop on first failure, skip missing fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reporting every failing validator.
    #[must_use]
    pub fn aggregate_all() -> Self {
        Self::new().with_mode(Mode::AggregateAll)
    }

    /// Sets the mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether missing fields are validated.
    #[must_use]
    pub const fn with_check_missing(mut self, check_missing: bool) -> Self {
        self.check_missing = check_missing;
        self
    }
}

impl From<Mode> for ValidateOptions {
    fn from(mode: Mode) -> Self {
        Self::new().with_mode(mode)
    }
}

impl From<bool> for ValidateOptions {
    fn from(aggregate_all: bool) -> Self {
        Mode::from(aggregate_all).into()
    }
}
