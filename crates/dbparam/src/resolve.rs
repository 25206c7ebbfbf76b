//! Field resolution: exported, tagged fields of a record under one tag key.

use crate::record::Field;
use crate::value::Value;

/// A field that takes part in a projection under the active tag key.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedField<'a> {
    /// Declaration index among all of the record's fields.
    pub position: usize,
    pub column: &'a str,
    pub value: Value,
    pub zero: bool,
}

/// Keep exported fields that carry a non-empty tag under `tag_key`, in
/// declaration order. Fields without such a tag never take part, whatever
/// filters are configured. An empty `tag_key` selects nothing.
pub(crate) fn resolve<'a>(fields: Vec<Field<'a>>, tag_key: &str) -> Vec<ResolvedField<'a>> {
    if tag_key.is_empty() {
        return Vec::new();
    }

    fields
        .into_iter()
        .enumerate()
        .filter(|(_, field)| field.is_exported())
        .filter_map(|(position, field)| {
            let column = field.tag(tag_key).filter(|tag| !tag.is_empty())?;
            let zero = field.is_zero();
            Some(ResolvedField {
                position,
                column,
                value: field.into_value(),
                zero,
            })
        })
        .collect()
}
