// crates/shared-kernel/src/value_objects/mod.rs
pub mod period_level;
pub mod plural_form;
pub mod triplet;

pub use period_level::PeriodLevel;
pub use plural_form::PluralForm;
pub use triplet::Triplet;
