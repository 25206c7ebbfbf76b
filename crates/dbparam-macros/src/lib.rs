//! Procedural macros for dbparam
//!
//! This crate provides one macro:
//! - `#[derive(Record)]` - Generate field and tag introspection for named structs

use proc_macro::TokenStream;

mod record;

/// Derive macro implementing `dbparam::Record` for a struct with named fields.
///
/// Every field is described in declaration order. `pub` fields are exported and
/// carry their current value; other fields are described as unexported and their
/// types are never touched, so they do not need to implement `FieldValue`.
///
/// # Attributes
///
/// - `#[param(key = "name", ...)]` - Tag the field under one or more tag keys
///   (e.g. `db = "user_id"`, `json = "userId"`). Keys are arbitrary identifiers.
/// - `#[param(skip)]` - Leave the field out of introspection entirely
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// pub struct Account {
///     #[param(db = "account_id", json = "id")]
///     pub id: Uuid,
///     #[param(db = "balance")]
///     pub balance: Decimal,
///     cache: Vec<Entry>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(param))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
