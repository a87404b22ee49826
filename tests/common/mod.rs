// tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]

pub mod temp;

#[allow(unused_imports)]
pub use temp::TempDir;

pub const BIN: &str = env!("CARGO_BIN_EXE_num_words");
