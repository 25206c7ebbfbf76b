//! This should fail: a tag key may appear once per field

#![allow(dead_code)]

use dbparam::Record;

#[derive(Record)]
pub struct User {
    #[param(db = "id", db = "user_id")]
    pub id: i64,
}

fn main() {}
