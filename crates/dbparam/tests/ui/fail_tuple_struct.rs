//! This should fail: tuple fields cannot carry tags

#![allow(dead_code)]

use dbparam::Record;

#[derive(Record)]
pub struct Pair(pub i64, pub i64);

fn main() {}
