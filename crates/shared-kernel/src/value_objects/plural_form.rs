// crates/shared-kernel/src/value_objects/plural_form.rs
use serde::{Deserialize, Serialize};

/// Grammatical number used to pick a period name ("тысяча" / "тысячи" / "тысяч").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralForm {
    One,
    Few,
    Many,
}

impl PluralForm {
    pub const COUNT: usize = 3;

    /// Position of this form inside a period dictionary entry.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Few => 1,
            Self::Many => 2,
        }
    }
}
