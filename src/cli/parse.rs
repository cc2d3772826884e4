use super::InputError;
use crate::settings::{DEFAULT_COUNT, MIN_LENGTH};

/// Parse a signed integer so that `-3` reads as out of range rather than as garbage.
fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parse the password length answer.
pub fn parse_length(raw: &str) -> Result<usize, InputError> {
    let n = parse_int(raw).ok_or(InputError::InvalidLength)?;
    usize::try_from(n)
        .ok()
        .filter(|&n| n >= MIN_LENGTH)
        .ok_or(InputError::LengthTooShort {
            minimum: MIN_LENGTH,
        })
}

/// Parse the password count answer. Empty means [`DEFAULT_COUNT`].
pub fn parse_count(raw: &str) -> Result<usize, InputError> {
    if raw.trim().is_empty() {
        return Ok(DEFAULT_COUNT);
    }
    let n = parse_int(raw).ok_or(InputError::InvalidCount)?;
    usize::try_from(n)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or(InputError::CountTooSmall)
}

/// Parse a yes/no answer, case-insensitive.
pub fn parse_yes_no(raw: &str) -> Result<bool, InputError> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::InvalidAnswer),
    }
}
