// src/config.rs
//! Runtime configuration assembled from CLI arguments.
//!
//! Dictionaries come either from the built-in Russian tables or from a
//! JSON / YAML file. A file may override only one of the two tables; the
//! other keeps its built-in value.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use num_words_domain::{DictionarySet, DigitDictionary, PeriodDictionary, Speller};
use num_words_shared_kernel::{ErrorContext, InfrastructureError, NumWordsError, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::cli::{Args, parse_number};
use crate::output::OutputFormat;

/// Everything needed for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number exactly as typed, echoed back in text output.
    pub argument: String,
    pub number: i64,
    pub format: OutputFormat,
    pub speller: Speller,
}

impl TryFrom<Args> for Config {
    type Error = NumWordsError;

    fn try_from(args: Args) -> Result<Self> {
        let (argument, number) = parse_number(&args.numbers)?;
        let dictionaries = load_dictionaries(args.dictionary.as_deref())?;

        Ok(Self {
            argument: argument.to_string(),
            number,
            format: args.format.into(),
            speller: Speller::new(dictionaries),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DictionaryFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl DictionaryFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Digit keys as written in a file: YAML allows bare `1:` as well as `"1":`,
/// JSON only has string keys.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
enum DigitKey {
    Number(u32),
    Text(String),
}

/// On-disk shape of a dictionary file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DictionaryFile {
    digits: Option<BTreeMap<DigitKey, String>>,
    periods: Option<PeriodDictionary>,
}

impl DictionaryFile {
    fn into_set(self, path: &Path) -> Result<DictionarySet> {
        let digits = match self.digits {
            Some(raw) => parse_digits(path, raw)?,
            None => DigitDictionary::russian(),
        };
        Ok(DictionarySet::new(
            digits,
            self.periods.unwrap_or_else(PeriodDictionary::russian),
        ))
    }
}

fn parse_digits(path: &Path, raw: BTreeMap<DigitKey, String>) -> Result<DigitDictionary> {
    raw.into_iter()
        .map(|(key, word)| -> Result<(u32, String)> {
            let key = match key {
                DigitKey::Number(key) => key,
                DigitKey::Text(text) => {
                    text.trim()
                        .parse::<u32>()
                        .map_err(|_| InfrastructureError::InvalidDictionary {
                            path: path.to_path_buf(),
                            reason: format!("digit key '{text}' is not a non-negative integer"),
                        })?
                }
            };
            Ok((key, word))
        })
        .collect()
}

/// Built-in dictionaries, or the ones in `path` when given.
///
/// # Errors
/// Fails when the file cannot be read, has an unknown extension, does not
/// parse, has a digit key that is not an integer, or contains a period entry
/// without exactly three forms.
pub fn load_dictionaries(path: Option<&Path>) -> Result<DictionarySet> {
    let Some(path) = path else {
        return Ok(DictionarySet::russian());
    };

    let format = DictionaryFormat::from_path(path).ok_or_else(|| {
        InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }
    })?;
    let text = fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let file = parse_dictionary_file(&text, format)
        .with_context(|| format!("loading dictionary '{}'", path.display()))?;
    warn_on_partial_override(path, &file);

    let set = file.into_set(path)?;
    validate(path, &set)?;
    debug!(
        path = %path.display(),
        digits = set.digits.len(),
        periods = set.periods.levels(),
        "loaded dictionary file"
    );
    Ok(set)
}

fn parse_dictionary_file(text: &str, format: DictionaryFormat) -> Result<DictionaryFile> {
    let file = match format {
        DictionaryFormat::Json => serde_json::from_str(text)?,
        #[cfg(feature = "yaml")]
        DictionaryFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(file)
}

fn warn_on_partial_override(path: &Path, file: &DictionaryFile) {
    if file.digits.is_none() {
        warn!(path = %path.display(), "dictionary file has no digits; using built-in digits");
    }
    if file.periods.is_none() {
        warn!(path = %path.display(), "dictionary file has no periods; using built-in periods");
    }
}

fn validate(path: &Path, set: &DictionarySet) -> Result<()> {
    if let Some((level, forms)) = set.periods.malformed_level() {
        return Err(InfrastructureError::InvalidDictionary {
            path: PathBuf::from(path),
            reason: format!("period level {level} has {forms} forms, expected 3"),
        }
        .into());
    }
    Ok(())
}
