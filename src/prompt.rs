//! Line-based front-end: ask once, answer once.

use std::io::{self, BufRead, Write};

use crate::computus::{easter, sentence};
use crate::config::Settings;
use crate::consts::PROMPT_TEXT;
use crate::year::{InvalidYearInput, Year};

/// Turns one line of user input into the answer sentence.
///
/// # Errors
/// Returns the `InvalidYearInput` describing why the line was rejected.
pub fn answer(line: &str, settings: &Settings) -> Result<String, InvalidYearInput> {
    let year = Year::parse_text(line, settings)?;
    let date = easter(year);
    tracing::debug!(year = year.get(), %date, "prompt answered");
    Ok(sentence(year, date))
}

/// Runs the prompt once: writes [`PROMPT_TEXT`], reads a line, writes either
/// the answer or the rejection message.
///
/// Invalid input is reported to `output` and is not an error. Returns the
/// rejection, if any, so callers can choose an exit status.
///
/// # Errors
/// Only I/O failures on `input` or `output` are returned.
pub fn run<R, W>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
) -> io::Result<Option<InvalidYearInput>>
where
    R: BufRead,
    W: Write,
{
    output.write_all(PROMPT_TEXT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match answer(&line, settings) {
        Ok(text) => {
            writeln!(output, "{text}")?;
            Ok(None)
        }
        Err(rejection) => {
            tracing::debug!(input = line.trim(), error = ?rejection, "rejected year");
            writeln!(output, "{rejection}")?;
            Ok(Some(rejection))
        }
    }
}
