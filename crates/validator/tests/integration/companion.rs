//! Annotations authored next to a type instead of scanned.

use leaf_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{USER, entity};

struct User;

impl Annotated for User {
    fn annotations() -> Result<AnnotationTable, ExtractError> {
        Ok(annotations! {
            email => [required, email],
            username => [required, length(3, 30)],
            role => [optional, values(["admin", "mod", "user"])],
        })
    }
}

struct ScannedUser;

impl Annotated for ScannedUser {
    fn annotations() -> Result<AnnotationTable, ExtractError> {
        extract(USER)
    }
}

#[test]
fn macro_table_matches_scanned_table() {
    let from_macro = User::annotations().unwrap();
    let scanned = ScannedUser::annotations().unwrap();

    assert_eq!(
        from_macro.field_names().collect::<Vec<_>>(),
        scanned.field_names().collect::<Vec<_>>()
    );
    for (field, declarations) in from_macro.iter() {
        let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
        let expected: Vec<_> = scanned
            .get(field)
            .unwrap()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, expected);

        for (ours, theirs) in declarations.iter().zip(scanned.get(field).unwrap()) {
            assert_eq!(
                evaluate(ours.raw_args.as_deref()).unwrap(),
                evaluate(theirs.raw_args.as_deref()).unwrap()
            );
        }
    }
}

#[test]
fn for_type_validates_like_compile() {
    let registry = Registry::default();
    let typed = Pipeline::for_type::<User>(&registry).unwrap();
    let scanned = Pipeline::compile(USER, &registry).unwrap();

    let input = entity(json!({ "email": "", "username": "x", "role": "admin" }));
    assert_eq!(
        typed.validate_blocking(&input, false),
        scanned.validate_blocking(&input, false)
    );
}

#[test]
fn builder_table() {
    let table = AnnotationTable::new()
        .with_field(
            "age",
            vec![
                ValidatorDeclaration::new("number", None),
                ValidatorDeclaration::new("range", Some("18, 130")),
            ],
        )
        .with_field("active", vec![ValidatorDeclaration::new("boolean", Some(""))]);

    let pipeline = Pipeline::from_annotations(&table, &Registry::default()).unwrap();
    let report = pipeline
        .validate_blocking(&entity(json!({ "age": "12", "active": "yes" })), true)
        .unwrap();

    assert_eq!(report.get("age").unwrap(), ["Must be between 18 and 130"]);
    assert_eq!(report.get("active").unwrap(), ["Must be true or false"]);
}

#[test]
fn macro_errors_surface_at_compile() {
    struct Broken;

    impl Annotated for Broken {
        fn annotations() -> Result<AnnotationTable, ExtractError> {
            Ok(annotations! { name => [length("3,1")] })
        }
    }

    let err = Pipeline::for_type::<Broken>(&Registry::default()).unwrap_err();
    assert!(matches!(
        err,
        CompileError::InvalidConfiguration { ref validator, .. } if validator == "length"
    ));
    assert_eq!(err.field(), Some("name"));
}
