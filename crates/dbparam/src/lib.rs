//! dbparam - project records into tagged (column, value) pairs.
//!
//! Given a record type whose fields carry tags, `dbparam` produces the column
//! names and current values needed to bind a parameterized statement or build
//! a named-parameter map:
//!
//! - `Record` - field introspection (`#[derive(Record)]`, `DynRecord`)
//! - `Params` - builder: tag key, filters, mapper, extra pairs
//! - `Value` - dynamic field value, `FieldValue` - conversion + zero test
//! - `ProjectionProfile` - YAML-loadable projection settings
//!
//! # Architecture
//!
//! ```text
//! record ─► resolve ─► filter ─► transform ─► aggregate ─► cols / vals / map
//!           (tag key)  (column,    (mapper)    (+ extra pairs)
//!                       zero,
//!                       value)
//! ```
//!
//! Every read operation re-runs the whole pipeline over the borrowed record;
//! nothing is cached and nothing is mutated.
//!
//! # Example
//!
//! ```
//! use dbparam::{params, Record, Value};
//!
//! #[derive(Record)]
//! pub struct User {
//!     #[param(db = "user_id", json = "userId")]
//!     pub id: i64,
//!     #[param(db = "email", json = "email")]
//!     pub email: String,
//!     #[param(db = "nickname")]
//!     pub nickname: Option<String>,
//!     password_hash: String,
//! }
//!
//! let user = User {
//!     id: 7,
//!     email: "ada@example.com".into(),
//!     nickname: None,
//!     password_hash: "x".into(),
//! };
//!
//! assert_eq!(params(&user).cols().unwrap(), vec!["user_id", "email", "nickname"]);
//! assert_eq!(params(&user).tag("json").cols().unwrap(), vec!["userId", "email"]);
//!
//! let map = params(&user).omit(["user_id"]).map().unwrap();
//! assert_eq!(map["email"], Value::from("ada@example.com"));
//! assert!(map["nickname"].is_null());
//! # let _ = &user.password_hash;
//! ```

// Lets `#[derive(Record)]` expansions (which name `::dbparam`) build inside this crate.
extern crate self as dbparam;

mod aggregate;
mod dyn_record;
mod error;
mod filter;
mod params;
mod profile;
mod record;
mod resolve;
mod transform;
mod value;

// Re-exports
pub use aggregate::Projection;
pub use dbparam_macros::Record;
pub use dyn_record::DynRecord;
pub use error::{ProjectionError, Result};
pub use filter::{ColumnPredicate, ValuePredicate};
pub use params::{params, Params, DEFAULT_TAG};
pub use profile::{ProfileSet, ProjectionProfile};
pub use record::{Field, Record};
pub use transform::{default_mapper, Mapper};
pub use value::{FieldValue, Value};
