//! Filter pipeline: column predicates, zero suppression and value predicates.
//!
//! Evaluation order per field:
//! 1. Column predicates on the resolved tag string
//! 2. Zero suppression (when enabled)
//! 3. Value predicates on the raw value
//!
//! Every stage is a logical AND: the first rejecting predicate drops the
//! field and no later predicate runs for it.

use crate::value::Value;
use std::collections::HashSet;
use std::fmt;

/// Predicate over a resolved column name.
pub type ColumnPredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Predicate over a field's raw value.
pub type ValuePredicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Stage of the pipeline that rejected a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Column,
    Zero,
    Value,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Column => write!(f, "column"),
            Stage::Zero => write!(f, "zero"),
            Stage::Value => write!(f, "value"),
        }
    }
}

#[derive(Default)]
pub(crate) struct FilterChain {
    columns: Vec<ColumnPredicate>,
    values: Vec<ValuePredicate>,
    filter_zero: bool,
}

impl FilterChain {
    pub fn push_column(&mut self, predicate: ColumnPredicate) {
        self.columns.push(predicate);
    }

    pub fn push_value(&mut self, predicate: ValuePredicate) {
        self.values.push(predicate);
    }

    pub fn enable_filter_zero(&mut self) {
        self.filter_zero = true;
    }

    /// `Ok(())` when the field survives, otherwise the rejecting stage.
    pub fn check(&self, column: &str, value: &Value, zero: bool) -> Result<(), Stage> {
        if !self.columns.iter().all(|accept| accept(column)) {
            return Err(Stage::Column);
        }
        if self.filter_zero && zero {
            return Err(Stage::Zero);
        }
        if !self.values.iter().all(|accept| accept(value)) {
            return Err(Stage::Value);
        }
        Ok(())
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("columns", &self.columns.len())
            .field("values", &self.values.len())
            .field("filter_zero", &self.filter_zero)
            .finish()
    }
}

/// Accept only the given names. An empty set accepts nothing.
pub(crate) fn whitelist(names: HashSet<String>) -> ColumnPredicate {
    Box::new(move |column| names.contains(column))
}

/// Reject the given names. An empty set rejects nothing.
pub(crate) fn blacklist(names: HashSet<String>) -> ColumnPredicate {
    Box::new(move |column| !names.contains(column))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_chain_is_conjunctive() {
        let mut chain = FilterChain::default();
        chain.push_column(whitelist(names(&["y", "z"])));
        chain.push_column(blacklist(names(&["y"])));

        assert_eq!(chain.check("y", &Value::Int(1), false), Err(Stage::Column));
        assert_eq!(chain.check("z", &Value::from("foo"), false), Ok(()));
        assert_eq!(chain.check("x", &Value::Null, true), Err(Stage::Column));
    }

    #[test]
    fn test_empty_whitelist_rejects_everything() {
        let mut chain = FilterChain::default();
        chain.push_column(whitelist(HashSet::new()));
        assert_eq!(chain.check("x", &Value::Null, false), Err(Stage::Column));
    }

    #[test]
    fn test_empty_blacklist_is_noop() {
        let mut chain = FilterChain::default();
        chain.push_column(blacklist(HashSet::new()));
        assert_eq!(chain.check("x", &Value::Null, false), Ok(()));
    }

    #[test]
    fn test_zero_checked_before_value_predicates() {
        let mut chain = FilterChain::default();
        chain.enable_filter_zero();
        chain.push_value(Box::new(|_| false));

        assert_eq!(chain.check("y", &Value::Int(0), true), Err(Stage::Zero));
        assert_eq!(chain.check("y", &Value::Int(3), false), Err(Stage::Value));
    }

    #[test]
    fn test_value_predicates_see_raw_value() {
        let mut chain = FilterChain::default();
        chain.push_value(Box::new(|v| !v.is_null()));
        chain.push_value(Box::new(|v| v.as_i64().map_or(true, |n| n > 0)));

        assert_eq!(chain.check("x", &Value::Null, true), Err(Stage::Value));
        assert_eq!(chain.check("y", &Value::Int(-1), false), Err(Stage::Value));
        assert_eq!(chain.check("y", &Value::Int(1), false), Ok(()));
        assert_eq!(chain.check("z", &Value::from("foo"), false), Ok(()));
    }
}
