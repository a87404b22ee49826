// crates/domain/src/dictionary.rs
//! Word tables consulted while spelling a number.
//!
//! Both tables are plain immutable values. They are built once (either the
//! built-in Russian tables or a user supplied file) and handed to every
//! spelling call by reference.

use std::collections::BTreeMap;

use num_words_shared_kernel::{DomainError, DomainResult, PeriodLevel, PluralForm};
use serde::{Deserialize, Serialize};

const RUSSIAN_DIGITS: &[(u32, &str)] = &[
    (0, ""),
    (1, "один"),
    (2, "два"),
    (3, "три"),
    (4, "четыре"),
    (5, "пять"),
    (6, "шесть"),
    (7, "семь"),
    (8, "восемь"),
    (9, "девять"),
    (10, "десять"),
    (11, "одиннадцать"),
    (12, "двенадцать"),
    (13, "тринадцать"),
    (14, "четырнадцать"),
    (15, "пятнадцать"),
    (16, "шестнадцать"),
    (17, "семнадцать"),
    (18, "восемнадцать"),
    (19, "девятнадцать"),
    (20, "двадцать"),
    (30, "тридцать"),
    (40, "сорок"),
    (50, "пятьдесят"),
    (60, "шестьдесят"),
    (70, "семьдесят"),
    (80, "восемьдесят"),
    (90, "девяносто"),
    (100, "сто"),
    (200, "двести"),
    (300, "триста"),
    (400, "четыреста"),
    (500, "пятьсот"),
    (600, "шестьсот"),
    (700, "семьсот"),
    (800, "восемьсот"),
    (900, "девятьсот"),
];

const RUSSIAN_PERIODS: &[[&str; PluralForm::COUNT]] = &[
    ["тысяча", "тысячи", "тысяч"],
    ["миллион", "миллиона", "миллионов"],
    ["миллиард", "миллиарда", "миллиардов"],
    ["триллион", "триллиона", "триллионов"],
    ["квадриллион", "квадриллиона", "квадриллионов"],
    ["квинтиллион", "квинтиллиона", "квинтиллионов"],
];

/// Spelling of the numbers 0-19, the round tens and the round hundreds.
///
/// Key `0` maps to the empty string and is only a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitDictionary(BTreeMap<u32, String>);

impl DigitDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn russian() -> Self {
        RUSSIAN_DIGITS
            .iter()
            .map(|&(key, word)| (key, word.to_string()))
            .collect()
    }

    pub fn get(&self, key: u32) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// # Errors
    /// Returns [`DomainError::MissingDigitWord`] when `key` has no entry.
    pub fn word(&self, key: u32) -> DomainResult<&str> {
        self.get(key).ok_or(DomainError::MissingDigitWord { key })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for DigitDictionary {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// Period names, one entry per level above the units group.
///
/// Every entry holds the three plural forms in [`PluralForm::index`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodDictionary(Vec<Vec<String>>);

impl PeriodDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn russian() -> Self {
        RUSSIAN_PERIODS
            .iter()
            .map(|forms| forms.iter().map(|f| (*f).to_string()).collect::<Vec<_>>())
            .collect()
    }

    pub fn entry(&self, level: PeriodLevel) -> Option<&[String]> {
        self.0.get(level.index()).map(Vec::as_slice)
    }

    pub fn push<S: Into<String>>(&mut self, forms: impl IntoIterator<Item = S>) {
        self.0.push(forms.into_iter().map(Into::into).collect());
    }

    /// Number of levels defined (thousands, millions, ...).
    pub fn levels(&self) -> usize {
        self.0.len()
    }

    /// First level whose entry does not hold exactly three forms.
    pub fn malformed_level(&self) -> Option<(PeriodLevel, usize)> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, forms)| forms.len() != PluralForm::COUNT)
            .map(|(idx, forms)| (PeriodLevel::new(idx), forms.len()))
    }
}

impl<F> FromIterator<F> for PeriodDictionary
where
    F: IntoIterator,
    F::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|forms| forms.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

/// Both tables needed to spell a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySet {
    pub digits: DigitDictionary,
    pub periods: PeriodDictionary,
}

impl DictionarySet {
    pub fn new(digits: DigitDictionary, periods: PeriodDictionary) -> Self {
        Self { digits, periods }
    }

    pub fn russian() -> Self {
        Self::new(DigitDictionary::russian(), PeriodDictionary::russian())
    }
}
