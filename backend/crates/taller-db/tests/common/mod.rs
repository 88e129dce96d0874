#![allow(unused_imports)]

pub(crate) mod fixtures;
pub(crate) mod test_db;

pub use fixtures::*;
pub use test_db::*;
