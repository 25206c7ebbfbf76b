//! Record - the field introspection capability projections are built on.
//!
//! A record describes its declared fields in declaration order. Each
//! [`Field`] exposes its name, whether it is exported, its tag string per tag
//! key and its current value.
//!
//! Implementations:
//! - `#[derive(Record)]` for structs with named fields (compile time)
//! - [`DynRecord`](crate::DynRecord) for records assembled at runtime
//! - One level of indirection: `&R`, `&mut R`, `Box<R>`, `Rc<R>`, `Arc<R>`,
//!   and `Option<R>` where `None` is a null reference

use crate::error::{ProjectionError, Result};
use crate::value::Value;
use std::rc::Rc;
use std::sync::Arc;

/// A record whose fields can be enumerated for projection.
pub trait Record {
    /// Describe every declared field, in declaration order.
    ///
    /// # Errors
    /// Returns [`ProjectionError::InvalidRecord`] when there is no record to
    /// describe, e.g. a `None` reference.
    fn fields(&self) -> Result<Vec<Field<'_>>>;
}

/// Descriptor of one declared field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    name: &'a str,
    exported: bool,
    tags: Vec<(&'a str, &'a str)>,
    value: Value,
    zero: bool,
}

impl<'a> Field<'a> {
    /// An exported field with its tags, current value and zero flag.
    pub fn new(name: &'a str, tags: Vec<(&'a str, &'a str)>, value: Value, zero: bool) -> Self {
        Self {
            name,
            exported: true,
            tags,
            value,
            zero,
        }
    }

    /// An unexported field. Never visited by the resolver, so it carries no
    /// tags and no value.
    pub fn unexported(name: &'a str) -> Self {
        Self {
            name,
            exported: false,
            tags: Vec::new(),
            value: Value::Null,
            zero: true,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// Tag string under `key`, if the field declares one.
    pub fn tag(&self, key: &str) -> Option<&'a str> {
        self.tags
            .iter()
            .find(|(tag_key, _)| *tag_key == key)
            .map(|(_, tag)| *tag)
    }

    pub fn tags(&self) -> &[(&'a str, &'a str)] {
        &self.tags
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the value is the zero value of the field's declared type.
    pub fn is_zero(&self) -> bool {
        self.zero
    }

    pub(crate) fn into_value(self) -> Value {
        self.value
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Result<Vec<Field<'_>>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for &mut R {
    fn fields(&self) -> Result<Vec<Field<'_>>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Result<Vec<Field<'_>>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Rc<R> {
    fn fields(&self) -> Result<Vec<Field<'_>>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn fields(&self) -> Result<Vec<Field<'_>>> {
        (**self).fields()
    }
}

impl<R: Record> Record for Option<R> {
    fn fields(&self) -> Result<Vec<Field<'_>>> {
        match self {
            Some(record) => record.fields(),
            None => Err(ProjectionError::invalid_record("null record reference")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynRecord;

    fn sample() -> DynRecord {
        DynRecord::new()
            .field("Y", 1, [("db", "y"), ("json", "bar")])
            .private_field("hidden")
    }

    #[test]
    fn test_field_tag_lookup() {
        let record = sample();
        let fields = record.fields().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].tag("db"), Some("y"));
        assert_eq!(fields[0].tag("json"), Some("bar"));
        assert_eq!(fields[0].tag("xml"), None);
        assert!(!fields[1].is_exported());
    }

    #[test]
    fn test_indirection_is_transparent() {
        let record = sample();
        let direct = record.fields().unwrap();

        assert_eq!((&record).fields().unwrap(), direct);
        assert_eq!(Box::new(record.clone()).fields().unwrap(), direct);
        assert_eq!(Arc::new(record.clone()).fields().unwrap(), direct);
        assert_eq!(Some(&record).fields().unwrap(), direct);
    }

    #[test]
    fn test_none_is_invalid_record() {
        let missing: Option<DynRecord> = None;
        let err = missing.fields().unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidRecord { .. }));
    }
}
