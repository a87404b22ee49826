// src/output.rs
use std::io::Write;

use num_words_shared_kernel::Result;
use serde::Serialize;

use crate::config::Config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<argument> - <words>`
    #[default]
    Text,
    /// One JSON object per invocation.
    Json,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    input: &'a str,
    value: i64,
    words: &'a str,
}

/// Writes the spelled number in the configured format.
///
/// # Errors
/// Propagates write and serialization failures.
pub fn emit<W: Write>(w: &mut W, config: &Config, words: &str) -> Result<()> {
    match config.format {
        OutputFormat::Text => writeln!(w, "{} - {}", config.argument, words)?,
        OutputFormat::Json => {
            let record = JsonOutput { input: &config.argument, value: config.number, words };
            serde_json::to_writer(&mut *w, &record)?;
            writeln!(w)?;
        }
    }
    w.flush()?;
    Ok(())
}
