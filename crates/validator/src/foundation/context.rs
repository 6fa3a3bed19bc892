//! Per-field validation context

use serde_json::{Map, Value};

/// The runtime object a pipeline validates.
///
/// Field order is insertion order (`serde_json` is built with
/// `preserve_order`), so entities built from structs keep their declaration
/// order.
pub type Entity = Map<String, Value>;

/// What a validator knows about the value it is checking.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    field: &'a str,
    entity: &'a Entity,
}

impl<'a> FieldContext<'a> {
    /// Creates a context for `field` of `entity`.
    #[must_use]
    pub fn new(field: &'a str, entity: &'a Entity) -> Self {
        Self { field, entity }
    }

    /// Name of the field being validated.
    #[must_use]
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// The entity the field belongs to.
    #[must_use]
    pub fn entity(&self) -> &'a Entity {
        self.entity
    }

    /// Looks up another field of the same entity.
    #[must_use]
    pub fn sibling(&self, name: &str) -> Option<&'a Value> {
        self.entity.get(name)
    }
}
