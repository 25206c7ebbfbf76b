//! Non-`pub` fields keep their slot but need no `FieldValue` impl.

use dbparam::{params, Record};

struct Cache;

#[derive(Record)]
pub struct Account {
    #[param(db = "account_id")]
    pub id: i64,
    #[param(db = "cache")]
    cache: Cache,
}

#[derive(Record)]
pub struct Marker;

fn main() {
    let account = Account { id: 1, cache: Cache };
    let _ = &account.cache;

    assert_eq!(params(&account).cols().unwrap(), vec!["account_id"]);
    assert_eq!(account.fields().unwrap().len(), 2);
    assert!(params(Marker).cols().unwrap().is_empty());
}
