//! Value - the dynamic value a projected field yields.
//!
//! Field types are converted into `Value` through [`FieldValue`], which also
//! decides whether a field holds the zero value of its type (used by
//! `Params::filter_zero`).
//!
//! Serializes untagged, so a projected map renders as plain JSON:
//! `{"x": null, "y": 1, "z": "foo"}`

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// A projected field value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value; `None` options surface as this.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
    Decimal(Decimal),
    Json(serde_json::Value),
}

impl Value {
    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Signed integer view; unsigned values that fit are converted.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Uuid(_) => "uuid",
            Value::Timestamp(_) => "timestamp",
            Value::Date(_) => "date",
            Value::Decimal(_) => "decimal",
            Value::Json(_) => "json",
        }
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64, isize);
value_from!(UInt as u64: u8, u16, u32, u64, usize);
value_from!(Float as f64: f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        // Untagged serialization of every variant is infallible
        serde_json::to_value(&v).unwrap_or(serde_json::Value::Null)
    }
}

/// Conversion of a field's Rust type into a projected [`Value`].
///
/// `is_zero` reports whether the field holds its type's zero/default value:
/// numeric zero, `false`, empty text or bytes, the nil UUID, the Unix epoch,
/// decimal zero, JSON `null` and `None`.
pub trait FieldValue {
    fn to_value(&self) -> Value;
    fn is_zero(&self) -> bool;
}

macro_rules! field_value_numeric {
    ($zero:expr => $($ty:ty),+) => {
        $(
            impl FieldValue for $ty {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

field_value_numeric!(0 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Floats are zero only as positive zero; `-0.0` has its sign bit set.
macro_rules! field_value_float {
    ($($ty:ty),+) => {
        $(
            impl FieldValue for $ty {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                fn is_zero(&self) -> bool {
                    self.to_bits() == 0
                }
            }
        )+
    };
}

field_value_float!(f32, f64);

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl FieldValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FieldValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FieldValue for Uuid {
    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }

    fn is_zero(&self) -> bool {
        self.is_nil()
    }
}

impl FieldValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn is_zero(&self) -> bool {
        *self == DateTime::<Utc>::default()
    }
}

impl FieldValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    fn is_zero(&self) -> bool {
        *self == NaiveDate::default()
    }
}

impl FieldValue for Decimal {
    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl FieldValue for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::Json(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

// A `None` is the null pointer of the record world: it projects as `Null` and
// counts as zero. `Some(0)` is not zero.
impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}
