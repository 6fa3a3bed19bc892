//! Property-based tests.

use leaf_validator::prelude::*;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn definition(fields: &[(String, u8, u8)]) -> String {
    fields
        .iter()
        .map(|(name, min, max)| {
            format!("/**\n * @validator required\n * @validator length({min}, {max})\n */\nthis.{name} = '';\n")
        })
        .collect()
}

// ============================================================================
// DETERMINISM
// ============================================================================

proptest! {
    #[test]
    fn compile_is_deterministic(
        fields in prop::collection::vec((field_name(), 0u8..10, 10u8..20), 0..12),
        values in prop::collection::vec(".{0,24}", 12),
    ) {
        let source = definition(&fields);
        let registry = Registry::default();
        let a = Pipeline::compile(&source, &registry).unwrap();
        let b = Pipeline::compile(&source, &registry).unwrap();

        prop_assert_eq!(a.fields().collect::<Vec<_>>(), b.fields().collect::<Vec<_>>());

        let input: Map<String, Value> = fields
            .iter()
            .zip(&values)
            .map(|((name, _, _), value)| (name.clone(), Value::from(value.as_str())))
            .collect();
        prop_assert_eq!(a.validate_blocking(&input, true), b.validate_blocking(&input, true));
    }

    #[test]
    fn validate_is_idempotent(value in ".{0,40}", aggregate in any::<bool>()) {
        let pipeline = Pipeline::compile(crate::USER, &Registry::default()).unwrap();
        let mut input = Map::new();
        input.insert("email".to_string(), Value::from(value.as_str()));
        input.insert("username".to_string(), Value::from(value.as_str()));

        prop_assert_eq!(
            pipeline.validate_blocking(&input, aggregate),
            pipeline.validate_blocking(&input, aggregate)
        );
    }
}

// ============================================================================
// MODES
// ============================================================================

proptest! {
    #[test]
    fn stop_on_first_is_a_prefix_of_aggregate(value in ".{0,40}") {
        let pipeline = Pipeline::compile(crate::USER, &Registry::default()).unwrap();
        let mut input = Map::new();
        input.insert("email".to_string(), Value::from(value.as_str()));
        input.insert("username".to_string(), Value::from(value.as_str()));

        let first = pipeline.validate_blocking(&input, Mode::StopOnFirst);
        let all = pipeline.validate_blocking(&input, Mode::AggregateAll);

        match (first, all) {
            (None, None) => {}
            (Some(first), Some(all)) => {
                prop_assert_eq!(first.fields().collect::<Vec<_>>(), all.fields().collect::<Vec<_>>());
                for (field, messages) in first.iter() {
                    prop_assert_eq!(messages.len(), 1);
                    prop_assert_eq!(&messages[0], &all.get(field).unwrap()[0]);
                }
            }
            (first, all) => prop_assert!(false, "mismatch: {:?} vs {:?}", first, all),
        }
    }

    #[test]
    fn length_bounds_are_inclusive(min in 0usize..10, extra in 0usize..10, len in 0usize..25) {
        let max = min + extra;
        let raw = format!("{min}, {max}");
        let validator = Registry::default()
            .create("length", &evaluate(Some(&raw)).unwrap())
            .unwrap();

        let entity = Map::new();
        let ctx = FieldContext::new("f", &entity);
        let value = Value::from("a".repeat(len));
        let outcome = futures::executor::block_on(validator.validate(&value, &ctx));

        prop_assert_eq!(outcome == Outcome::Valid, (min..=max).contains(&len));
    }

    #[test]
    fn evaluate_never_panics(raw in ".{0,64}") {
        let _ = evaluate(Some(&raw));
    }

    #[test]
    fn extract_never_panics(source in "(/\\*|\\*/|this\\.|self\\.|[a-z =;'\"`\\n@]|@validator ){0,40}") {
        let _ = extract(&source);
    }
}
