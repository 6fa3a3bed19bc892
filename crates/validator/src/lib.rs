//! # leaf-validator
//!
//! Annotation-driven, per-field validation for JSON-shaped entities.
//!
//! ## Quick Start
//!
//! ```
//! use leaf_validator::prelude::*;
//! use serde_json::json;
//!
//! let pipeline = Pipeline::compile(r#"
//!     function User() {
//!         /**
//!          * @validator required
//!          * @validator email
//!          */
//!         this.email = '';
//!
//!         /**
//!          * @validator required
//!          * @validator length(3, 30)
//!          */
//!         this.username = '';
//!     }
//! "#, &Registry::default())?;
//!
//! let entity = json!({ "email": "", "username": "x" });
//! let report = pipeline
//!     .validate_blocking(entity.as_object().unwrap(), Mode::StopOnFirst)
//!     .unwrap();
//!
//! assert_eq!(report.get("email").unwrap(), ["This field is required"]);
//! assert_eq!(report.get("username").unwrap(), ["Must be between 3 and 30 characters"]);
//! # Ok::<(), CompileError>(())
//! ```
//!
//! ## Building Blocks
//!
//! - [`annotation`]: finds `@validator name(args)` declarations, or builds
//!   them with [`annotations!`]
//! - [`args`]: the literal-only argument parser
//! - [`registry`]: validator names to constructors
//! - [`pipeline`]: compiled chains and the async validation loop
//! - [`validators`]: the bundled primitives
//!
//! ## Custom Validators
//!
//! Implement [`Validator`](foundation::Validator) (or use
//! [`validator_fn`](foundation::traits::validator_fn)) and register a
//! constructor under a name in a [`Registry`](registry::Registry).

mod macros;

pub mod annotation;
pub mod args;
pub mod error;
pub mod foundation;
pub mod pipeline;
pub mod prelude;
pub mod registry;
pub mod validators;
