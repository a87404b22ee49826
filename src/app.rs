// src/app.rs
use std::io::Write;

use anyhow::Result;
use num_words_shared_kernel::{NumWordsError, PresentationError};
use tracing::debug;

use crate::cli::Args;
use crate::config::Config;
use crate::output;

/// Parses the number, spells it and writes the result.
///
/// Nothing is written to `w` when any step fails.
///
/// # Errors
/// Returns the underlying [`NumWordsError`] wrapped in `anyhow`.
pub fn run<W: Write>(args: Args, w: &mut W) -> Result<()> {
    let config = Config::try_from(args)?;
    let words = config.speller.spell(config.number)?;
    debug!(number = config.number, %words, "spelled");

    output::emit(w, &config, &words)?;
    Ok(())
}

/// Whether `err` calls for the usage text.
pub fn is_usage_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<NumWordsError>()
        .and_then(NumWordsError::presentation)
        .is_some_and(|e| matches!(e, PresentationError::InvalidArgumentCount { .. }))
}
