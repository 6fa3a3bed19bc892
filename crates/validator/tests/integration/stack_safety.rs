//! Large entities and long chains.

use std::fmt::Write as _;

use leaf_validator::prelude::*;
use serde_json::{Map, Value, json};

const FIELDS: usize = 20_000;

fn wide_definition() -> String {
    let mut source = String::from("function Wide() {\n");
    for i in 0..FIELDS {
        let _ = writeln!(
            source,
            "    /**\n     * @validator required\n     * @validator length(1, 8)\n     */\n    this.f{i} = '';"
        );
    }
    source.push('}');
    source
}

#[test]
fn many_fields_do_not_grow_the_stack() {
    let pipeline = Pipeline::compile(&wide_definition(), &Registry::default()).unwrap();
    assert_eq!(pipeline.len(), FIELDS);

    let mut input = Map::new();
    for i in 0..FIELDS {
        let value = if i % 2 == 0 { json!("ok") } else { json!("") };
        input.insert(format!("f{i}"), value);
    }

    let report = pipeline.validate_blocking(&input, false).unwrap();
    assert_eq!(report.len(), FIELDS / 2);
    assert_eq!(report.fields().next(), Some("f1"));
    assert_eq!(report.get("f1").unwrap(), ["This field is required"]);
}

#[test]
fn long_chain_on_one_field() {
    let declarations = vec![ValidatorDeclaration::new("number", None); 50_000];
    let table = AnnotationTable::new().with_field("n", declarations);
    let pipeline = Pipeline::from_annotations(&table, &Registry::default()).unwrap();

    let mut input = Map::new();
    input.insert("n".to_string(), Value::from("x"));

    let report = pipeline
        .validate_blocking(&input, ValidateOptions::aggregate_all())
        .unwrap();
    assert_eq!(report.get("n").unwrap().len(), 50_000);
}
