//! End-to-end behavior of compiled pipelines.

use leaf_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::{USER, entity, init_tracing, owned, pairs};

// ============================================================================
// SIGNUP SCENARIO
// ============================================================================

#[test]
fn signup_stop_on_first() {
    let _tracing = init_tracing();
    let pipeline = Pipeline::compile(USER, &Registry::default()).unwrap();
    let report = pipeline
        .validate_blocking(
            &entity(json!({ "email": "", "username": "x", "role": "admin" })),
            false,
        )
        .unwrap();

    assert_eq!(report.get("username").unwrap(), ["Must be between 3 and 30 characters"]);
    assert_eq!(report.get("email").unwrap(), ["This field is required"]);
    assert!(!report.contains("role"));
    assert_eq!(report.len(), 2);
}

#[test]
fn signup_valid_entity_has_no_report() {
    let pipeline = Pipeline::compile(USER, &Registry::default()).unwrap();
    let result = pipeline.validate_blocking(
        &entity(json!({ "email": "alice@example.com", "username": "alice", "role": "mod" })),
        ValidateOptions::aggregate_all(),
    );
    assert_eq!(result, None);
}

#[test]
fn signup_unknown_role() {
    let pipeline = Pipeline::compile(USER, &Registry::default()).unwrap();
    let report = pipeline
        .validate_blocking(
            &entity(json!({ "email": "alice@example.com", "username": "alice", "role": "root" })),
            false,
        )
        .unwrap();
    assert_eq!(
        pairs(&report),
        vec![owned("role", &["Must be one of: admin, mod, user"])]
    );
}

// ============================================================================
// MODES
// ============================================================================

const SHORT_NAME: &str = r"
    function Thing() {
        /**
         * @validator required
         * @validator length(3, 5)
         */
        this.name = '';
    }
";

#[rstest]
#[case(json!("ab"), Mode::StopOnFirst, &["Must be between 3 and 5 characters"][..])]
#[case(json!("ab"), Mode::AggregateAll, &["Must be between 3 and 5 characters"][..])]
#[case(json!(""), Mode::StopOnFirst, &["This field is required"][..])]
#[case(
    json!(""),
    Mode::AggregateAll,
    &["This field is required", "Must be between 3 and 5 characters"][..]
)]
fn chain_modes(#[case] value: serde_json::Value, #[case] mode: Mode, #[case] expected: &[&str]) {
    let pipeline = Pipeline::compile(SHORT_NAME, &Registry::default()).unwrap();
    let report = pipeline
        .validate_blocking(&entity(json!({ "name": value })), mode)
        .unwrap();
    assert_eq!(pairs(&report), vec![owned("name", expected)]);
}

#[test]
fn stop_on_first_never_skips_sibling_fields() {
    let pipeline = Pipeline::compile(USER, &Registry::default()).unwrap();
    let report = pipeline
        .validate_blocking(
            &entity(json!({ "email": "nope", "username": "", "role": "x" })),
            Mode::StopOnFirst,
        )
        .unwrap();
    assert_eq!(report.fields().collect::<Vec<_>>(), ["email", "username", "role"]);
}

// ============================================================================
// COMPILATION
// ============================================================================

#[test]
fn no_annotations_means_no_errors() {
    let pipeline = Pipeline::compile(
        "function Plain() { this.a = 1; this.b = ''; }",
        &Registry::default(),
    )
    .unwrap();
    assert!(pipeline.is_empty());
    assert_eq!(
        pipeline.validate_blocking(&entity(json!({ "a": null, "b": "" })), true),
        None
    );
}

#[test]
fn unknown_validator_fails_compilation() {
    let source = r"
        function Foo() {
            /** @validator baz */
            this.foo = 'bar';
        }
    ";
    let err = Pipeline::compile(source, &Registry::default()).unwrap_err();
    assert_eq!(err.validator_name(), Some("baz"));
    assert_eq!(err.to_string(), "Cannot create validator \"baz\"");
}

#[test]
fn custom_registry_replaces_defaults() {
    let registry = Registry::empty().with("foo", |args| {
        let expected = args.first().and_then(ArgValue::as_str).unwrap_or("").to_string();
        Ok(Box::new(validator_fn(format!("Must be {expected}"), move |v, _| {
            v.as_str() == Some(expected.as_str())
        })))
    });

    let pipeline = Pipeline::compile("/** @validator foo('bar') */ this.x = 1;", &registry).unwrap();
    let report = pipeline
        .validate_blocking(&entity(json!({ "x": "baz" })), false)
        .unwrap();
    assert_eq!(report.get("x").unwrap(), ["Must be bar"]);

    let err = Pipeline::compile("/** @validator required */ this.x = 1;", &registry).unwrap_err();
    assert!(matches!(err, CompileError::UnknownValidator { .. }));
}

#[test]
fn compiling_twice_is_deterministic() {
    let registry = Registry::default();
    let first = Pipeline::compile(USER, &registry).unwrap();
    let second = Pipeline::compile(USER, &registry).unwrap();

    assert_eq!(first.fields().collect::<Vec<_>>(), second.fields().collect::<Vec<_>>());
    for field in first.fields() {
        assert_eq!(first.chain_len(field), second.chain_len(field));
        assert_eq!(first.chain_messages(field), second.chain_messages(field));
    }

    let input = entity(json!({ "email": "x", "username": "", "role": 3 }));
    assert_eq!(
        first.validate_blocking(&input, true),
        second.validate_blocking(&input, true)
    );
}

#[test]
fn report_serializes_in_field_order() {
    let pipeline = Pipeline::compile(USER, &Registry::default()).unwrap();
    let report = pipeline
        .validate_blocking(&entity(json!({ "username": "x", "email": "" })), false)
        .unwrap();

    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"email":["This field is required"],"username":["Must be between 3 and 30 characters"]}"#
    );
}
