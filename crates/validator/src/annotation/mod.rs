//! Field annotations
//!
//! An annotation is a `@validator name(args)` line inside the block comment
//! that immediately precedes a field initializer:
//!
//! ```text
//! function User() {
//!     /**
//!      * The address we send receipts to.
//!      * @validator required
//!      * @validator email
//!      */
//!     this.email = '';
//! }
//! ```
//!
//! [`extract`] recovers these declarations from definition text. The
//! [`annotations!`](crate::annotations) macro and [`AnnotationTable`]'s own
//! API build the same table directly, for types whose metadata is authored
//! alongside them instead of scanned.

mod declaration;
mod scanner;

pub use declaration::{AnnotationTable, FieldAnnotations, ValidatorDeclaration};
pub use scanner::{SELF_REFERENCES, extract};

use crate::error::ExtractError;

/// A type that can describe the validators attached to its fields.
///
/// # Examples
///
/// ```
/// use leaf_validator::annotation::{Annotated, AnnotationTable};
/// use leaf_validator::error::ExtractError;
///
/// struct Account;
///
/// impl Annotated for Account {
///     fn annotations() -> Result<AnnotationTable, ExtractError> {
///         Ok(leaf_validator::annotations! {
///             name => [required, length(3, 30)],
///         })
///     }
/// }
/// ```
pub trait Annotated {
    /// The field-to-declarations table for this type.
    fn annotations() -> Result<AnnotationTable, ExtractError>;
}
