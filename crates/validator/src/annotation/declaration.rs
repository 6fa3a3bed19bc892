use indexmap::IndexMap;

/// One `@validator` line: a validator name and its unparsed argument text.
///
/// `raw_args` is `None` when the name has no parentheses and `Some("")` for
/// an empty `()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatorDeclaration {
    /// Registry name of the validator.
    pub name: String,
    /// Text between the parentheses, if any.
    pub raw_args: Option<String>,
}

impl ValidatorDeclaration {
    /// Creates a declaration.
    pub fn new(name: impl Into<String>, raw_args: Option<&str>) -> Self {
        Self {
            name: name.into(),
            raw_args: raw_args.map(str::to_string),
        }
    }
}

/// The ordered declarations of one field.
pub type FieldAnnotations = Vec<ValidatorDeclaration>;

/// Field name to declarations, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationTable {
    fields: IndexMap<String, FieldAnnotations>,
}

impl AnnotationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declarations of `field`, replacing earlier ones.
    ///
    /// A field that is set twice keeps its original position.
    pub fn insert(&mut self, field: impl Into<String>, declarations: FieldAnnotations) {
        self.fields.insert(field.into(), declarations);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, declarations: FieldAnnotations) -> Self {
        self.insert(field, declarations);
        self
    }

    /// Drops the entry of `field`, keeping the order of the rest.
    pub fn remove(&mut self, field: &str) -> Option<FieldAnnotations> {
        self.fields.shift_remove(field)
    }

    /// Declarations of `field`, if it has any entry.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[ValidatorDeclaration]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidatorDeclaration])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` when no field has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldAnnotations)> for AnnotationTable {
    fn from_iter<I: IntoIterator<Item = (K, FieldAnnotations)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (field, declarations) in iter {
            table.insert(field, declarations);
        }
        table
    }
}
