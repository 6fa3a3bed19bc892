//! Macros for declaring annotations and validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`annotations!`] — Build an [`AnnotationTable`](crate::annotation::AnnotationTable)
//!   in declaration syntax, without scanning definition text
//! - `sync_validator!` (crate-internal) — Implement the async
//!   [`Validator`](crate::foundation::Validator) contract for a type with
//!   synchronous `check`/`message` methods

// ============================================================================
// ANNOTATIONS MACRO
// ============================================================================

/// Builds an [`AnnotationTable`](crate::annotation::AnnotationTable) from
/// `field => [validator, validator(args), ...]` entries.
///
/// Arguments are kept as raw text and go through the same literal parser as
/// scanned annotations. Regular expressions have to be written as strings
/// here (`regex("^[a-z]+$")`), since `/.../` is not a Rust token sequence.
///
/// # Examples
///
/// ```
/// use leaf_validator::annotations;
/// use leaf_validator::args::{ArgValue, evaluate};
///
/// let table = annotations! {
///     email => [required, email],
///     username => [required, length(3, 30)],
///     role => [optional, values(["admin", "mod", "user"])],
/// };
///
/// assert_eq!(table.field_names().collect::<Vec<_>>(), ["email", "username", "role"]);
/// assert_eq!(table.get("email").unwrap()[0].raw_args, None);
///
/// let raw = table.get("username").unwrap()[1].raw_args.as_deref();
/// assert_eq!(
///     evaluate(raw).unwrap(),
///     [ArgValue::Number(3.0), ArgValue::Number(30.0)],
/// );
/// ```
#[macro_export]
macro_rules! annotations {
    ($($field:ident => [$($name:ident $(($($args:tt)*))?),* $(,)?]),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut table = $crate::annotation::AnnotationTable::new();
        $(
            table.insert(
                stringify!($field),
                vec![$($crate::__declaration!($name $(($($args)*))?)),*],
            );
        )*
        table
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __declaration {
    ($name:ident) => {
        $crate::annotation::ValidatorDeclaration::new(stringify!($name), None)
    };
    ($name:ident ($($args:tt)*)) => {
        $crate::annotation::ValidatorDeclaration::new(
            stringify!($name),
            Some(stringify!($($args)*)),
        )
    };
}

// ============================================================================
// SYNC VALIDATOR MACRO
// ============================================================================

/// Implements [`Validator`](crate::foundation::Validator) for types exposing
/// `fn check(&self, &Value) -> Outcome` and `fn message(&self) -> String`.
macro_rules! sync_validator {
    ($($ty:ty),+ $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::foundation::Validator for $ty {
                async fn validate(
                    &self,
                    value: &serde_json::Value,
                    _ctx: &$crate::foundation::FieldContext<'_>,
                ) -> $crate::foundation::Outcome {
                    self.check(value)
                }

                fn describe(&self) -> String {
                    self.message()
                }
            }
        )+
    };
}

pub(crate) use sync_validator;
