//! Parsing the exit code argument.
//!
//! Accepted text: optional surrounding whitespace, an optional `+` or `-`,
//! then ASCII digits that may be grouped by single underscores (`1_000`).
//! Decimal digits from other scripts (e.g. `٧`) are rejected.
//! Integers of any size are accepted and reduced modulo 2^32 into an `i32`,
//! so the bits the host keeps of an exit status (the low 8 on Unix) are the
//! low bits of the given integer.

use crate::error::Error;
use std::ffi::OsString;

/// `arguments` excludes the program name.
pub fn from_arguments(arguments: &[OsString]) -> Result<i32, Error> {
    match arguments.first() {
        None => Ok(0),
        Some(argument) => parse(&argument.to_string_lossy()),
    }
}

pub fn parse(argument: &str) -> Result<i32, Error> {
    let invalid = || Error::InvalidExitCodeArgument {
        argument: argument.to_string(),
    };
    let trimmed = argument.trim();
    let (negative, digits) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__")
    {
        return Err(invalid());
    }
    let mut value: u32 = 0;
    for character in digits.chars().filter(|character| *character != '_') {
        let digit = character.to_digit(10).ok_or_else(invalid)?;
        value = value.wrapping_mul(10).wrapping_add(digit);
    }
    let value = value as i32;
    Ok(if negative { value.wrapping_neg() } else { value })
}
