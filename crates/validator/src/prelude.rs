//! Prelude module for convenient imports.
//!
//! `use leaf_validator::prelude::*;` brings in the pipeline, the registry,
//! the validator contract and the error types.

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::traits::validator_fn;
pub use crate::foundation::{BoxedValidator, Entity, FieldContext, Outcome, Validator};

// ============================================================================
// ANNOTATIONS & ARGUMENTS
// ============================================================================

pub use crate::annotation::{Annotated, AnnotationTable, ValidatorDeclaration, extract};
pub use crate::annotations;
pub use crate::args::{ArgValue, evaluate};

// ============================================================================
// PIPELINE
// ============================================================================

pub use crate::pipeline::{Mode, Pipeline, ValidateOptions, ValidationReport};
pub use crate::registry::Registry;

// ============================================================================
// ERRORS
// ============================================================================

pub use crate::error::{ArgumentError, ArgumentMismatch, CompileError, EntityError, ExtractError};
