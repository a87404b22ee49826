// crates/domain/src/period.rs
use num_words_shared_kernel::{DomainError, DomainResult, PeriodLevel, PluralForm};

use crate::dictionary::PeriodDictionary;

/// Plural form agreeing with a group value.
///
/// 11-19 always take the "many" form, even though their last digit may be 1-4.
pub fn plural_form(magnitude: u64) -> PluralForm {
    let last_two = magnitude % 100;
    if last_two > 4 && last_two < 20 {
        return PluralForm::Many;
    }
    match last_two % 10 {
        2..=4 => PluralForm::Few,
        1 => PluralForm::One,
        _ => PluralForm::Many,
    }
}

/// Period word for a group at `level` holding `magnitude`.
///
/// # Errors
/// - `PeriodIndexOutOfRange` when the dictionary has no entry for `level`.
/// - `PeriodFormMissing` when the entry lacks the required plural form.
pub fn name_period(
    level: PeriodLevel,
    magnitude: u64,
    dict: &PeriodDictionary,
) -> DomainResult<&str> {
    let forms = dict
        .entry(level)
        .ok_or(DomainError::PeriodIndexOutOfRange { level: level.index() })?;
    let form_index = plural_form(magnitude).index();
    forms
        .get(form_index)
        .map(String::as_str)
        .ok_or(DomainError::PeriodFormMissing { level: level.index(), form_index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_selects_singular() {
        assert_eq!(plural_form(1), PluralForm::One);
        assert_eq!(plural_form(21), PluralForm::One);
        assert_eq!(plural_form(101), PluralForm::One);
    }

    #[test]
    fn two_to_four_select_few() {
        for n in [2, 3, 4, 22, 34, 104] {
            assert_eq!(plural_form(n), PluralForm::Few, "{n}");
        }
    }

    #[test]
    fn teens_override_last_digit() {
        for n in 11..=19 {
            assert_eq!(plural_form(n), PluralForm::Many, "{n}");
        }
        assert_eq!(plural_form(111), PluralForm::Many);
        assert_eq!(plural_form(912), PluralForm::Many);
    }

    #[test]
    fn round_and_large_digits_select_many() {
        for n in [0, 5, 6, 9, 10, 20, 30, 100, 500, 999] {
            assert_eq!(plural_form(n), PluralForm::Many, "{n}");
        }
    }

    #[test]
    fn valid_name() {
        let dict = PeriodDictionary::russian();
        assert_eq!(name_period(PeriodLevel::new(1), 1, &dict), Ok("миллион"));
        assert_eq!(name_period(PeriodLevel::THOUSANDS, 3, &dict), Ok("тысячи"));
        assert_eq!(name_period(PeriodLevel::THOUSANDS, 11, &dict), Ok("тысяч"));
    }

    #[test]
    fn too_big_period_index() {
        let dict = PeriodDictionary::russian();
        assert_eq!(
            name_period(PeriodLevel::new(6), 1, &dict),
            Err(DomainError::PeriodIndexOutOfRange { level: 6 })
        );
    }

    #[test]
    fn malformed_entry_reports_missing_form() {
        let mut dict = PeriodDictionary::new();
        dict.push([""]);
        assert_eq!(
            name_period(PeriodLevel::THOUSANDS, 5, &dict),
            Err(DomainError::PeriodFormMissing { level: 0, form_index: 2 })
        );
    }
}
