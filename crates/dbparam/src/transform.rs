//! Value transformation applied to surviving fields before output.

use crate::value::Value;

/// Transformer from a field's raw value to the value placed in the output.
pub type Mapper = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// The default transformer: values pass through unchanged.
///
/// Swap it with `Params::mapper` when the consumer needs something else,
/// e.g. encoding a structured value as text for a driver.
pub fn default_mapper(value: Value) -> Value {
    value
}
