//! Validation report

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name to failure messages, for fields with at least one failure.
///
/// Fields appear in the order the pipeline visited them; messages keep
/// chain order. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: IndexMap<String, Vec<String>>,
}

impl ValidationReport {
    pub(crate) fn insert(&mut self, field: &str, messages: Vec<String>) {
        self.errors.insert(field.to_string(), messages);
    }

    /// Messages reported for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Whether `field` failed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed field names, in visiting order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// `(field, messages)` pairs, in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// The underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.errors
    }
}

impl fmt::Display for ValidationReport {
    /// One `field: message; message` line per failed field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, messages)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{field}: {}", messages.join("; "))?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationReport {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
