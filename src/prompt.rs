//! Interactive console prompts.
//!
//! Blocking stdin reads; the driver loop calls these between lookups. Parsing
//! of numeric disambiguation input is kept pure so invalid input becomes an
//! `AppError` that aborts the lookup instead of the process.

use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::errors::AppError;
use crate::services::geocode::Location;

/// Display mode for a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Current,
    Forecast,
}

impl Mode {
    /// Parse a user's mode choice ("curr" or "day", case-insensitive).
    pub fn from_input(input: &str) -> Option<Mode> {
        match input.trim().to_lowercase().as_str() {
            "curr" => Some(Mode::Current),
            "day" => Some(Mode::Forecast),
            _ => None,
        }
    }
}

/// Print `prompt` and read one trimmed line from stdin.
///
/// A zero-byte read (closed stdin) is reported as `UnexpectedEof` so the
/// driver can end the session instead of looping on empty input.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Parse a 1-based disambiguation selection against `count` candidates.
///
/// Returns the zero-based index. Non-numeric or out-of-range input is an
/// `InvalidSelection` error; the caller aborts the lookup and the loop
/// continues.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, AppError> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidSelection(format!("'{}' is not a number", input.trim())))?;

    if choice < 1 || choice > count {
        return Err(AppError::InvalidSelection(format!(
            "{} is out of range 1-{}",
            choice, count
        )));
    }

    Ok(choice - 1)
}

/// Pick one location from a deduplicated candidate list.
///
/// A single candidate is selected automatically; multiple candidates are
/// listed 1-based and the user is asked for a number.
pub fn choose_location<'a>(
    city: &str,
    candidates: &'a [Location],
) -> Result<&'a Location, AppError> {
    if candidates.len() == 1 {
        return Ok(&candidates[0]);
    }

    println!("{}", format!("Multiple results found for {}:", city).yellow());
    for (idx, place) in candidates.iter().enumerate() {
        println!("{}. {}", idx + 1, place.label());
    }

    let input = read_line("Choose a location by number: ")
        .map_err(|e| AppError::InvalidSelection(format!("could not read selection: {}", e)))?;
    let index = parse_selection(&input, candidates.len())?;
    Ok(&candidates[index])
}
