//! Aggregation of resolved fields into parallel column/value sequences.

use crate::filter::FilterChain;
use crate::resolve::ResolvedField;
use crate::transform::Mapper;
use crate::value::Value;
use std::collections::BTreeMap;
use tracing::trace;

/// Result of one projection: index-aligned columns and values.
///
/// `columns.len() == values.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Projection {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push(column.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Value>) {
        (self.columns, self.values)
    }

    pub fn into_pairs(self) -> Vec<(String, Value)> {
        self.columns.into_iter().zip(self.values).collect()
    }

    /// Name to value association. A later duplicate name overwrites an
    /// earlier one.
    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.columns.into_iter().zip(self.values).collect()
    }
}

/// Walk `fields` in order, keep those the chain accepts, transform their
/// values, then append `extras` untouched.
pub(crate) fn aggregate(
    fields: Vec<ResolvedField<'_>>,
    chain: &FilterChain,
    mapper: &Mapper,
    extras: &[(String, Value)],
) -> Projection {
    let mut projection = Projection::with_capacity(fields.len() + extras.len());

    for field in fields {
        if let Err(stage) = chain.check(field.column, &field.value, field.zero) {
            trace!(
                column = field.column,
                position = field.position,
                %stage,
                "field rejected"
            );
            continue;
        }
        projection.push(field.column, mapper(field.value));
    }

    for (column, value) in extras {
        projection.push(column.as_str(), value.clone());
    }

    projection
}
