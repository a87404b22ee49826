// crates/domain/src/assembler.rs
use num_words_shared_kernel::{ErrorContext, PeriodLevel, Result, Triplet};
use tracing::{debug, trace};

use crate::agreement::apply_thousands_agreement;
use crate::dictionary::{DictionarySet, DigitDictionary, PeriodDictionary};
use crate::period::name_period;
use crate::splitter::split_triplets;
use crate::triplet_namer::{join_words, name_triplet};

pub const ZERO_WORD: &str = "нуль";
pub const MINUS_WORD: &str = "минус";

/// Spells `n` in words.
///
/// Zero is answered without consulting either dictionary. Negative numbers
/// get a leading [`MINUS_WORD`]; `i64::MIN` is handled through its unsigned
/// magnitude.
///
/// # Errors
/// Any missing digit word or period name aborts the whole call. The error
/// carries the failing group or level as context.
pub fn number_to_words(
    n: i64,
    digits: &DigitDictionary,
    periods: &PeriodDictionary,
) -> Result<String> {
    if n == 0 {
        return Ok(ZERO_WORD.to_owned());
    }

    let groups = split_triplets(n.unsigned_abs());
    debug!(number = n, groups = groups.len(), "spelling number");

    let mut words = Vec::with_capacity(groups.len() * 2 + 1);
    if n < 0 {
        words.push(MINUS_WORD.to_owned());
    }
    words.extend(name_groups(&groups, digits, periods).context("get number name")?);

    Ok(join_words(&words))
}

/// Names every non-zero group, highest first, followed by its period word.
///
/// # Errors
/// See [`number_to_words`].
pub fn name_groups(
    groups: &[Triplet],
    digits: &DigitDictionary,
    periods: &PeriodDictionary,
) -> Result<Vec<String>> {
    let mut words = Vec::with_capacity(groups.len() * 2);

    for (index, &group) in groups.iter().enumerate().rev() {
        if group.is_zero() {
            continue;
        }

        let name = name_triplet(group, digits)
            .with_context(|| format!("get triplet name for group {index}"))?;

        let Some(level) = PeriodLevel::for_group(index) else {
            trace!(group = %group, "units group");
            words.push(name);
            continue;
        };

        let name = if level.is_thousands() { apply_thousands_agreement(&name) } else { name };
        let period = name_period(level, u64::from(group), periods)
            .with_context(|| format!("get period name for level {level}"))?;
        trace!(group = %group, %level, period, "named group");

        words.push(name);
        words.push(period.to_owned());
    }

    Ok(words)
}

/// Dictionaries bundled with the spelling entry point.
///
/// Build once and share; spelling never mutates the tables.
#[derive(Debug, Clone)]
pub struct Speller {
    dictionaries: DictionarySet,
}

impl Speller {
    pub fn new(dictionaries: DictionarySet) -> Self {
        Self { dictionaries }
    }

    pub fn russian() -> Self {
        Self::new(DictionarySet::russian())
    }

    /// # Errors
    /// See [`number_to_words`].
    pub fn spell(&self, n: i64) -> Result<String> {
        number_to_words(n, &self.dictionaries.digits, &self.dictionaries.periods)
    }
}
