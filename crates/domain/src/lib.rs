// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod agreement;
pub mod assembler;
pub mod dictionary;
pub mod period;
pub mod splitter;
pub mod triplet_namer;

pub use agreement::apply_thousands_agreement;
pub use assembler::{MINUS_WORD, Speller, ZERO_WORD, name_groups, number_to_words};
pub use dictionary::{DictionarySet, DigitDictionary, PeriodDictionary};
pub use period::{name_period, plural_form};
pub use splitter::{join_triplets, split_triplets};
pub use triplet_namer::{name_tens, name_triplet, name_triplet_words};
