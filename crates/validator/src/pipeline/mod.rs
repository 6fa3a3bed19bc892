//! Validation pipeline
//!
//! A [`Pipeline`] is compiled once from a type's annotations and then
//! validates any number of entities. Compilation resolves every declaration
//! through a [`Registry`]; afterwards the compiled chains are immutable and
//! the pipeline can be shared freely between tasks.
//!
//! # Examples
//!
//! ```
//! use leaf_validator::pipeline::Pipeline;
//! use leaf_validator::registry::Registry;
//! use serde_json::json;
//!
//! let pipeline = Pipeline::compile(r#"
//!     function User() {
//!         /** @validator required */
//!         this.name = '';
//!     }
//! "#, &Registry::default()).unwrap();
//!
//! let entity = json!({ "name": "" });
//! let report = pipeline.validate_blocking(entity.as_object().unwrap(), false).unwrap();
//! assert_eq!(report.get("name").unwrap(), ["This field is required"]);
//! ```

mod options;
mod report;

pub use options::{Mode, ValidateOptions};
pub use report::ValidationReport;

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::annotation::{Annotated, AnnotationTable, extract};
use crate::args::evaluate;
use crate::error::{CompileError, EntityError};
use crate::foundation::{BoxedValidator, Entity, FieldContext, Outcome};
use crate::registry::Registry;

static NULL: Value = Value::Null;

/// Compiled field-to-validator chains.
#[derive(Debug, Default)]
pub struct Pipeline {
    chains: IndexMap<String, Vec<BoxedValidator>>,
}

impl Pipeline {
    // ========================================================================
    // COMPILATION
    // ========================================================================

    /// Scans definition text and compiles its annotations.
    ///
    /// # Errors
    ///
    /// Any unterminated comment, unparsable argument list, unknown validator
    /// name or rejected argument aborts compilation.
    pub fn compile(source: &str, registry: &Registry) -> Result<Self, CompileError> {
        Self::from_annotations(&extract(source)?, registry)
    }

    /// Compiles an annotation table.
    ///
    /// # Errors
    ///
    /// See [`compile`](Self::compile).
    pub fn from_annotations(
        table: &AnnotationTable,
        registry: &Registry,
    ) -> Result<Self, CompileError> {
        let mut chains = IndexMap::with_capacity(table.len());

        for (field, declarations) in table.iter() {
            if declarations.is_empty() {
                continue;
            }

            let chain = declarations
                .iter()
                .map(|declaration| {
                    let args = evaluate(declaration.raw_args.as_deref()).map_err(|source| {
                        CompileError::InvalidArguments {
                            field: field.to_string(),
                            validator: declaration.name.clone(),
                            source,
                        }
                    })?;
                    registry
                        .create(&declaration.name, &args)
                        .map_err(|err| err.on_field(field))
                })
                .collect::<Result<Vec<_>, _>>()?;

            debug!(field, validators = chain.len(), "compiled validator chain");
            chains.insert(field.to_string(), chain);
        }

        Ok(Self { chains })
    }

    /// Compiles the annotations a type describes about itself.
    ///
    /// # Errors
    ///
    /// See [`compile`](Self::compile).
    pub fn for_type<T: Annotated>(registry: &Registry) -> Result<Self, CompileError> {
        Self::from_annotations(&T::annotations()?, registry)
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    /// Validates every annotated field `entity` owns.
    ///
    /// Fields are visited in declaration order and each chain runs in
    /// declaration order, one validator at a time. Returns `None` when no
    /// field failed.
    #[tracing::instrument(level = "debug", skip_all, fields(chains = self.chains.len()))]
    pub async fn validate(
        &self,
        entity: &Entity,
        options: impl Into<ValidateOptions>,
    ) -> Option<ValidationReport> {
        let options = options.into();

        let mut queue: VecDeque<(&str, &[BoxedValidator], &Value)> = self
            .chains
            .iter()
            .filter_map(|(field, chain)| {
                let value = match entity.get(field) {
                    Some(value) => value,
                    None if options.check_missing => &NULL,
                    None => return None,
                };
                Some((field.as_str(), chain.as_slice(), value))
            })
            .collect();

        let checked = queue.len();
        let mut report = ValidationReport::default();

        while let Some((field, chain, value)) = queue.pop_front() {
            let messages = run_chain(field, chain, value, entity, options.mode).await;
            if !messages.is_empty() {
                report.insert(field, messages);
            }
        }

        debug!(checked, failed = report.len(), "validation finished");
        (!report.is_empty()).then_some(report)
    }

    /// Runs the chain of a single field.
    ///
    /// Returns `None` when the field has no chain or passes it. A field the
    /// entity lacks is validated as `null`.
    pub async fn validate_field(
        &self,
        entity: &Entity,
        field: &str,
        mode: Mode,
    ) -> Option<Vec<String>> {
        let chain = self.chains.get(field)?;
        let value = entity.get(field).unwrap_or(&NULL);
        let messages = run_chain(field, chain, value, entity, mode).await;
        (!messages.is_empty()).then_some(messages)
    }

    /// [`validate`](Self::validate) on the current thread.
    pub fn validate_blocking(
        &self,
        entity: &Entity,
        options: impl Into<ValidateOptions>,
    ) -> Option<ValidationReport> {
        futures::executor::block_on(self.validate(entity, options))
    }

    /// Serializes `value` to a JSON object and validates it.
    ///
    /// # Errors
    ///
    /// Fails when `value` cannot be serialized or does not serialize to an
    /// object. Validation failures are reported in the `Ok` value.
    pub async fn validate_serialize<T>(
        &self,
        value: &T,
        options: impl Into<ValidateOptions>,
    ) -> Result<Option<ValidationReport>, EntityError>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value)? {
            Value::Object(entity) => Ok(self.validate(&entity, options).await),
            other => Err(EntityError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    // ========================================================================
    // INSPECTION
    // ========================================================================

    /// Annotated field names, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    /// Number of validators compiled for `field`.
    #[must_use]
    pub fn chain_len(&self, field: &str) -> Option<usize> {
        self.chains.get(field).map(Vec::len)
    }

    /// Messages of `field`'s validators, in chain order.
    #[must_use]
    pub fn chain_messages(&self, field: &str) -> Option<Vec<String>> {
        self.chains
            .get(field)
            .map(|chain| chain.iter().map(|v| v.describe()).collect())
    }

    /// Number of annotated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// `true` when no field is annotated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

async fn run_chain(
    field: &str,
    chain: &[BoxedValidator],
    value: &Value,
    entity: &Entity,
    mode: Mode,
) -> Vec<String> {
    let ctx = FieldContext::new(field, entity);
    let mut messages = Vec::new();

    for (index, validator) in chain.iter().enumerate() {
        let outcome = validator.validate(value, &ctx).await;
        trace!(field, index, ?outcome, "validator finished");

        match outcome {
            Outcome::Valid => {}
            Outcome::Halt => break,
            Outcome::Invalid => {
                messages.push(validator.describe());
                if !mode.aggregates() {
                    break;
                }
            }
        }
    }

    messages
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// TESTS
// ============================================================================
