//! Validator registry
//!
//! Maps validator names to constructors. A registry is consulted once per
//! declaration while a pipeline is compiled; it is never touched during
//! validation.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::trace;

use crate::args::ArgValue;
use crate::error::{ArgumentMismatch, CompileError};
use crate::foundation::BoxedValidator;
use crate::validators;

/// Builds a validator from its evaluated, positional arguments.
pub type Constructor =
    Arc<dyn Fn(&[ArgValue]) -> Result<BoxedValidator, ArgumentMismatch> + Send + Sync>;

/// Name to constructor table.
///
/// [`Registry::default`] holds the bundled primitives (`required`,
/// `optional`, `range`, `length`, `number`, `boolean`, `regex`, `email`,
/// `values`). A registry built with [`Registry::from_constructors`] or
/// [`Registry::empty`] starts without them.
///
/// # Examples
///
/// ```
/// use leaf_validator::registry::Registry;
/// use leaf_validator::foundation::traits::validator_fn;
///
/// let mut registry = Registry::default();
/// registry.register("even", |_args| {
///     Ok(Box::new(validator_fn("Must be even", |v, _| {
///         v.as_i64().is_some_and(|n| n % 2 == 0)
///     })))
/// });
///
/// assert!(registry.contains("even"));
/// assert!(registry.contains("required"));
/// ```
#[derive(Clone)]
pub struct Registry {
    constructors: IndexMap<String, Constructor>,
}

impl Registry {
    /// A registry with no validators at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            constructors: IndexMap::new(),
        }
    }

    /// A registry holding exactly the given constructors.
    ///
    /// The bundled primitives are not included.
    pub fn from_constructors<I, K>(constructors: I) -> Self
    where
        I: IntoIterator<Item = (K, Constructor)>,
        K: Into<String>,
    {
        Self {
            constructors: constructors
                .into_iter()
                .map(|(name, ctor)| (name.into(), ctor))
                .collect(),
        }
    }

    /// Adds or replaces the constructor for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(&[ArgValue]) -> Result<BoxedValidator, ArgumentMismatch> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Arc::new(constructor));
        self
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&[ArgValue]) -> Result<BoxedValidator, ArgumentMismatch> + Send + Sync + 'static,
    {
        self.register(name, constructor);
        self
    }

    /// Whether `name` resolves.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Creates a validator instance.
    ///
    /// Fails with [`CompileError::UnknownValidator`] when `name` is not
    /// registered and with [`CompileError::InvalidConfiguration`] when the
    /// constructor rejects `args`.
    pub fn create(&self, name: &str, args: &[ArgValue]) -> Result<BoxedValidator, CompileError> {
        let constructor =
            self.constructors
                .get(name)
                .ok_or_else(|| CompileError::UnknownValidator {
                    name: name.to_string(),
                })?;

        trace!(validator = name, args = args.len(), "creating validator");
        constructor(args).map_err(|source| CompileError::InvalidConfiguration {
            field: None,
            validator: name.to_string(),
            source,
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        validators::register_bundled(&mut registry);
        registry
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("validators", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
