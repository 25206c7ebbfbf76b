//! Params - the projection builder and its evaluation entry points.

use crate::aggregate::{aggregate, Projection};
use crate::error::Result;
use crate::filter::{blacklist, whitelist, FilterChain};
use crate::profile::ProjectionProfile;
use crate::record::Record;
use crate::resolve::resolve;
use crate::transform::{default_mapper, Mapper};
use crate::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Tag key used unless [`Params::tag`] selects another.
pub const DEFAULT_TAG: &str = "db";

/// Create a projection over `record` with the default configuration.
///
/// Shorthand for [`Params::new`].
pub fn params<R: Record>(record: R) -> Params<R> {
    Params::new(record)
}

/// Projection of a record into tagged (column, value) pairs.
///
/// Configuration calls consume and return the builder; nothing is evaluated
/// until `cols`, `vals`, `flat_vals`, `pairs` or `map` is called. Each of
/// those re-reads the record, so repeated calls give the same result.
///
/// ```
/// use dbparam::{params, Record, Value};
///
/// #[derive(Record)]
/// struct Point {
///     #[param(db = "y")]
///     pub y: i32,
///     #[param(db = "z")]
///     pub z: i32,
///     #[param(db = "label")]
///     pub label: Option<String>,
/// }
///
/// let p = Point { y: 10, z: 15, label: None };
///
/// assert_eq!(params(&p).cols().unwrap(), vec!["y", "z", "label"]);
/// assert_eq!(params(&p).use_cols(["y"]).vals().unwrap(), vec![Value::Int(10)]);
/// assert_eq!(params(&p).omit(["y"]).filter_zero().cols().unwrap(), vec!["z"]);
///
/// let (cols, vals) = params(&p).omit(["label"]).add_kv("version", 3).flat_vals().unwrap();
/// assert_eq!(cols, vec!["y", "z", "version"]);
/// assert_eq!(vals, vec![Value::Int(10), Value::Int(15), Value::Int(3)]);
/// ```
pub struct Params<R> {
    record: R,
    tag: String,
    filters: FilterChain,
    mapper: Mapper,
    extras: Vec<(String, Value)>,
}

impl<R: Record> Params<R> {
    pub fn new(record: R) -> Self {
        Self {
            record,
            tag: DEFAULT_TAG.to_string(),
            filters: FilterChain::default(),
            mapper: Box::new(default_mapper),
            extras: Vec::new(),
        }
    }

    /// Read column names from the tag under `key` instead of `"db"`.
    pub fn tag(mut self, key: impl Into<String>) -> Self {
        self.tag = key.into();
        self
    }

    /// Keep only columns named in `names`.
    ///
    /// Calling it with no names excludes every field. Repeated calls narrow
    /// further: a column must be in every set.
    pub fn use_cols<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.filters.push_column(whitelist(names));
        self
    }

    /// Drop columns named in `names`. Names that match nothing are ignored.
    pub fn omit<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.filters.push_column(blacklist(names));
        self
    }

    /// Add an arbitrary column-name predicate to the chain.
    pub fn filter_cols<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.filters.push_column(Box::new(predicate));
        self
    }

    /// Drop fields holding the zero value of their type.
    pub fn filter_zero(mut self) -> Self {
        self.filters.enable_filter_zero();
        self
    }

    /// Add a predicate over each field's raw value. Every predicate must
    /// accept a value for its field to survive.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.filters.push_value(Box::new(predicate));
        self
    }

    /// Replace the value transformer applied to surviving record fields.
    pub fn mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.mapper = Box::new(mapper);
        self
    }

    /// Append an extra pair after the record's pairs. Extra pairs bypass
    /// every filter and the mapper.
    pub fn add_kv(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.push((column.into(), value.into()));
        self
    }

    /// Apply a declarative profile: equivalent to the matching chain of
    /// `tag`, `use_cols`, `omit` and `filter_zero` calls.
    pub fn apply(self, profile: &ProjectionProfile) -> Self {
        let mut params = self;
        if let Some(tag) = &profile.tag {
            params = params.tag(tag.as_str());
        }
        if let Some(names) = &profile.use_cols {
            params = params.use_cols(names.iter().map(String::as_str));
        }
        if !profile.omit.is_empty() {
            params = params.omit(profile.omit.iter().map(String::as_str));
        }
        if profile.filter_zero {
            params = params.filter_zero();
        }
        params
    }

    /// The record this projection reads.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Active tag key.
    pub fn tag_key(&self) -> &str {
        &self.tag
    }

    /// Evaluate the full pipeline: resolve, filter, transform, aggregate.
    ///
    /// # Errors
    /// Returns [`ProjectionError::InvalidRecord`](crate::ProjectionError::InvalidRecord)
    /// when the record cannot describe its fields.
    pub fn project(&self) -> Result<Projection> {
        let fields = self.record.fields().inspect_err(|err| {
            debug!(tag = %self.tag, error = %err, "record could not be resolved");
        })?;
        let declared = fields.len();

        let resolved = resolve(fields, &self.tag);
        let candidates = resolved.len();
        let projection = aggregate(resolved, &self.filters, &self.mapper, &self.extras);

        debug!(
            tag = %self.tag,
            declared,
            candidates,
            kept = projection.len() - self.extras.len(),
            extras = self.extras.len(),
            "projected record"
        );
        Ok(projection)
    }

    /// Columns and values, index-aligned.
    pub fn flat_vals(&self) -> Result<(Vec<String>, Vec<Value>)> {
        Ok(self.project()?.into_parts())
    }

    /// Columns that satisfy every configured filter, followed by extra columns.
    pub fn cols(&self) -> Result<Vec<String>> {
        let (cols, _) = self.flat_vals()?;
        Ok(cols)
    }

    /// Values that satisfy every configured filter, followed by extra values.
    pub fn vals(&self) -> Result<Vec<Value>> {
        let (_, vals) = self.flat_vals()?;
        Ok(vals)
    }

    /// (column, value) pairs in output order.
    pub fn pairs(&self) -> Result<Vec<(String, Value)>> {
        Ok(self.project()?.into_pairs())
    }

    /// Column to value map; a later duplicate column overwrites an earlier one.
    pub fn map(&self) -> Result<BTreeMap<String, Value>> {
        Ok(self.project()?.into_map())
    }
}

impl<R: fmt::Debug> fmt::Debug for Params<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("record", &self.record)
            .field("tag", &self.tag)
            .field("filters", &self.filters)
            .field("extras", &self.extras)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynRecord;

    fn record() -> DynRecord {
        DynRecord::new()
            .field("X", None::<f32>, [("db", "x"), ("json", "foo")])
            .field("Y", 1, [("db", "y"), ("json", "bar"), ("custom", "y-axis")])
            .field("Z", "foo", [("db", "z"), ("json", "biz")])
            .private_field("Unexported")
    }

    #[test]
    fn test_defaults() {
        let p = params(record());
        assert_eq!(p.tag_key(), DEFAULT_TAG);
        assert_eq!(p.cols().unwrap(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let p = params(record()).omit(["x"]).add_kv("extra", 42);
        let first = p.flat_vals().unwrap();
        let second = p.flat_vals().unwrap();
        assert_eq!(first, second);
        assert_eq!(p.record().len(), 4);
    }

    #[test]
    fn test_filter_cols_predicate() {
        let cols = params(record())
            .filter_cols(|c| c != "z")
            .cols()
            .unwrap();
        assert_eq!(cols, vec!["x", "y"]);
    }

    #[test]
    fn test_filter_sees_untransformed_values() {
        let vals = params(record())
            .mapper(|_| Value::Null)
            .filter(|v| v.as_str().is_some())
            .vals()
            .unwrap();
        assert_eq!(vals, vec![Value::Null]);
    }

    #[test]
    fn test_filter_zero_keeps_negative_zero() {
        let signed = DynRecord::new()
            .field("Pos", 0.0f64, [("db", "pos")])
            .field("Neg", -0.0f64, [("db", "neg")]);
        assert_eq!(params(signed).filter_zero().cols().unwrap(), vec!["neg"]);
    }

    #[test]
    fn test_pairs_zip_columns_and_values() {
        let pairs = params(record()).use_cols(["y"]).pairs().unwrap();
        assert_eq!(pairs, vec![("y".to_string(), Value::Int(1))]);
    }

    #[test]
    fn test_apply_profile_matches_chain() {
        let profile = ProjectionProfile {
            tag: Some("json".to_string()),
            use_cols: Some(vec!["bar".to_string(), "biz".to_string()]),
            omit: vec!["biz".to_string()],
            filter_zero: true,
        };

        let applied = params(record()).apply(&profile).pairs().unwrap();
        let chained = params(record())
            .tag("json")
            .use_cols(["bar", "biz"])
            .omit(["biz"])
            .filter_zero()
            .pairs()
            .unwrap();
        assert_eq!(applied, chained);
        assert_eq!(applied, vec![("bar".to_string(), Value::Int(1))]);
    }

    #[test]
    fn test_params_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Params<DynRecord>>();
        assert_send_sync::<Params<std::sync::Arc<DynRecord>>>();
    }

    #[test]
    fn test_debug_hides_closures() {
        let rendered = format!("{:?}", params(record()).filter(|_| true));
        assert!(rendered.contains("Params"));
        assert!(rendered.contains("values: 1"));
    }
}
