//! Integration tests for leaf-validator.

mod async_validators;
mod companion;
mod properties;
mod scenarios;
mod stack_safety;

use leaf_validator::prelude::*;
use serde_json::Value;

/// The user type most scenarios validate.
pub const USER: &str = r#"
    function User() {
        /**
         * Where receipts go.
         * @validator required
         * @validator email
         */
        this.email = '';

        /**
         * @validator required
         * @validator length(3, 30)
         */
        this.username = '';

        /**
         * @validator optional
         * @validator values(["admin", "mod", "user"])
         */
        this.role = null;
    }
"#;

pub fn entity(value: Value) -> Entity {
    match value {
        Value::Object(map) => map,
        other => panic!("entity must be an object, got {other}"),
    }
}

/// Report contents as owned pairs, in report order.
pub fn pairs(report: &ValidationReport) -> Vec<(String, Vec<String>)> {
    report
        .iter()
        .map(|(field, messages)| (field.to_string(), messages.to_vec()))
        .collect()
}

pub fn owned(field: &str, messages: &[&str]) -> (String, Vec<String>) {
    (
        field.to_string(),
        messages.iter().map(ToString::to_string).collect(),
    )
}

/// Routes the crate's `tracing` events on this thread to the test output.
pub fn init_tracing() -> tracing::subscriber::DefaultGuard {
    tracing::subscriber::set_default(
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish(),
    )
}
