//! Built-in validators
//!
//! The primitives registered in [`Registry::default`](crate::registry::Registry):
//!
//! | Name       | Type         | Arguments                   |
//! |------------|--------------|-----------------------------|
//! | `required` | [`Required`] | `[keepWhitespace]`          |
//! | `optional` | [`Optional`] | none                        |
//! | `range`    | [`Range`]    | `min[, max]` or `'min,max'` |
//! | `length`   | [`Length`]   | `min[, max]` or `'min,max'` |
//! | `number`   | [`Number`]   | none                        |
//! | `boolean`  | [`Boolean`]  | none                        |
//! | `regex`    | [`Pattern`]  | `pattern[, message]`        |
//! | `email`    | [`Email`]    | none                        |
//! | `values`   | [`Values`]   | `[a, b, ...]` or `a, b, ...` |
//!
//! Every primitive is synchronous; each exposes `from_args`, `check` and
//! `message` alongside its [`Validator`] implementation.

pub mod content;
pub mod length;
pub mod nullable;
pub mod pattern;
pub mod range;
pub mod types;
pub mod values;

pub use content::Email;
pub use length::Length;
pub use nullable::{Optional, Required};
pub use pattern::Pattern;
pub use range::{Bounds, Range};
pub use types::{Boolean, Number};
pub use values::Values;

use crate::error::ArgumentMismatch;
use crate::foundation::{BoxedValidator, Validator};
use crate::registry::Registry;

fn boxed<V: Validator + 'static>(
    validator: Result<V, ArgumentMismatch>,
) -> Result<BoxedValidator, ArgumentMismatch> {
    validator.map(|v| Box::new(v) as BoxedValidator)
}

/// Adds the bundled primitives to `registry`.
pub(crate) fn register_bundled(registry: &mut Registry) {
    registry
        .register("required", |args| boxed(Required::from_args(args)))
        .register("optional", |args| boxed(Optional::from_args(args)))
        .register("range", |args| boxed(Range::from_args(args)))
        .register("length", |args| boxed(Length::from_args(args)))
        .register("number", |args| boxed(Number::from_args(args)))
        .register("boolean", |args| boxed(Boolean::from_args(args)))
        .register("regex", |args| boxed(Pattern::from_args(args)))
        .register("email", |args| boxed(Email::from_args(args)))
        .register("values", |args| boxed(Values::from_args(args)));
}
