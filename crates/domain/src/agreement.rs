// crates/domain/src/agreement.rs
//! "тысяча" is feminine, so "один"/"два" in the thousands group become
//! "одна"/"две". Millions and above are masculine and stay untouched.

const FEMININE_FORMS: [(&str, &str); 2] = [("один", "одна"), ("два", "две")];

/// Rewrites the last word of a thousands-group name into the feminine form.
///
/// Only an exact match of the whole last word is replaced, so teens such
/// as "одиннадцать" keep their spelling.
pub fn apply_thousands_agreement(name: &str) -> String {
    let (head, last) = match name.rsplit_once(' ') {
        Some((head, last)) => (Some(head), last),
        None => (None, name),
    };

    let Some(&(_, feminine)) = FEMININE_FORMS.iter().find(|(masculine, _)| *masculine == last)
    else {
        return name.to_owned();
    };

    match head {
        Some(head) => format!("{head} {feminine}"),
        None => feminine.to_owned(),
    }
}
