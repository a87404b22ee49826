// crates/domain/src/triplet_namer.rs
use num_words_shared_kernel::{DomainResult, Triplet};

use crate::dictionary::DigitDictionary;

/// Words for a number below 100, in spoken order.
///
/// 1-19 are looked up directly (irregular teens), larger values are split
/// into a round ten and an optional ones digit. `0` yields no words.
///
/// # Errors
/// Returns `MissingDigitWord` for the first key the dictionary lacks.
pub fn name_tens(n: u32, dict: &DigitDictionary) -> DomainResult<Vec<String>> {
    let mut words = Vec::with_capacity(2);
    if n == 0 {
        return Ok(words);
    }
    if n < 20 {
        words.push(dict.word(n)?.to_owned());
        return Ok(words);
    }

    let tens = n / 10 * 10;
    words.push(dict.word(tens)?.to_owned());
    let ones = n - tens;
    if ones > 0 {
        words.push(dict.word(ones)?.to_owned());
    }
    Ok(words)
}

/// Words for one digit group, in spoken order.
///
/// # Errors
/// Returns `MissingDigitWord` for the first key the dictionary lacks; no
/// partial result is returned.
pub fn name_triplet_words(triplet: Triplet, dict: &DigitDictionary) -> DomainResult<Vec<String>> {
    let mut rest = u32::from(triplet);
    let mut words = Vec::with_capacity(3);

    if rest >= 100 {
        let hundreds = rest / 100 * 100;
        words.push(dict.word(hundreds)?.to_owned());
        rest -= hundreds;
    }

    words.extend(name_tens(rest, dict)?);
    Ok(words)
}

/// [`name_triplet_words`] joined with single spaces.
///
/// # Errors
/// See [`name_triplet_words`].
pub fn name_triplet(triplet: Triplet, dict: &DigitDictionary) -> DomainResult<String> {
    name_triplet_words(triplet, dict).map(|words| join_words(&words))
}

/// Joins words with single spaces, dropping empty placeholders.
pub(crate) fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
