// src/cli/parsers.rs
use num_words_shared_kernel::{PresentationError, PresentationResult};

/// Picks the single positional argument and parses it as `i64`.
///
/// Surrounding whitespace and `_` separators are not accepted; the text
/// must be a plain decimal integer with an optional sign.
///
/// # Errors
/// - `InvalidArgumentCount` unless exactly one argument is given.
/// - `NotAnInteger` when it does not parse.
pub fn parse_number(arguments: &[String]) -> PresentationResult<(&str, i64)> {
    let [argument] = arguments else {
        return Err(PresentationError::InvalidArgumentCount { got: arguments.len() });
    };
    let value = argument
        .parse::<i64>()
        .map_err(|err| PresentationError::NotAnInteger {
            argument: argument.clone(),
            reason: err.to_string(),
        })?;
    Ok((argument.as_str(), value))
}
