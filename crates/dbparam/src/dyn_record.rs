//! DynRecord - a record whose fields are registered at runtime.
//!
//! Useful when the shape is only known at runtime (rows read from a config,
//! generic admin tooling) or in tests that need arbitrary field layouts.

use crate::error::Result;
use crate::record::{Field, Record};
use crate::value::{FieldValue, Value};

/// Runtime registry of named, tagged fields in registration order.
///
/// # Example
///
/// ```
/// use dbparam::{params, DynRecord};
///
/// let row = DynRecord::new()
///     .field("Id", 7, [("db", "id")])
///     .field("Name", "ada", [("db", "name"), ("json", "displayName")]);
///
/// assert_eq!(params(&row).cols().unwrap(), vec!["id", "name"]);
/// assert_eq!(params(&row).tag("json").cols().unwrap(), vec!["displayName"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynRecord {
    fields: Vec<DynField>,
}

#[derive(Debug, Clone, PartialEq)]
struct DynField {
    name: String,
    exported: bool,
    tags: Vec<(String, String)>,
    value: Value,
    zero: bool,
}

impl DynRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exported field with its tags.
    pub fn field<V, I, K, T>(mut self, name: impl Into<String>, value: V, tags: I) -> Self
    where
        V: FieldValue,
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        self.fields.push(DynField {
            name: name.into(),
            exported: true,
            tags: tags
                .into_iter()
                .map(|(key, tag)| (key.into(), tag.into()))
                .collect(),
            zero: value.is_zero(),
            value: value.to_value(),
        });
        self
    }

    /// Register an unexported field. It keeps its declaration slot but never
    /// appears in a projection.
    pub fn private_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(DynField {
            name: name.into(),
            exported: false,
            tags: Vec::new(),
            value: Value::Null,
            zero: true,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for DynRecord {
    fn fields(&self) -> Result<Vec<Field<'_>>> {
        Ok(self
            .fields
            .iter()
            .map(|f| {
                if !f.exported {
                    return Field::unexported(&f.name);
                }
                let tags = f
                    .tags
                    .iter()
                    .map(|(key, tag)| (key.as_str(), tag.as_str()))
                    .collect();
                Field::new(&f.name, tags, f.value.clone(), f.zero)
            })
            .collect())
    }
}
