//! This should fail: #[derive(Record)] only works on structs

#![allow(dead_code)]

use dbparam::Record;

#[derive(Record)]
pub enum Status { Active, Inactive }

fn main() {}
