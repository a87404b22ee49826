// src/cli/mod.rs
mod args;
mod parsers;
mod value_enum;

use std::io::{self, Write};

pub use args::Args;
pub use parsers::parse_number;
pub use value_enum::CliOutputFormat;

const FALLBACK_PROGRAM: &str = "num_words";

/// Program name as invoked, without leading directories.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(std::path::Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_PROGRAM.to_string())
}

/// Short usage text printed when the argument count is wrong.
///
/// # Errors
/// Propagates write failures.
pub fn usage<W: Write>(w: &mut W, program: &str) -> io::Result<()> {
    writeln!(w, "{program}: print number converted to words")?;
    writeln!(w, "usage: {program} <number>")
}
