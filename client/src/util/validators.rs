//! Field validators for the registration and login forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every validator is a pure predicate over the raw input string. A value that
//! does not match is a normal `false` result rendered as an inline hint; none
//! of these functions can fail.

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

use std::sync::LazyLock;

use regex::Regex;

/// Minimum verification code length that enables the verify action.
pub const MIN_CODE_LEN: usize = 4;
/// Maximum verification code length accepted by the code input.
pub const MAX_CODE_LEN: usize = 6;

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 23;
const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '$', '%'];

static NAME_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]{3,23}$"));

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-z]{2,}$"));

/// A letter followed by 3 to 23 letters, digits, or underscores.
pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.as_ref().is_ok_and(|re| re.is_match(value))
}

/// Local part, `@`, a dotted domain, and a lowercase top-level segment of 2+ letters.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_ok_and(|re| re.is_match(value))
}

/// 8 to 23 UTF-16 code units on a single line with at least one lowercase letter,
/// one uppercase letter, one digit, and one of `!@#$%`.
pub fn is_valid_password(value: &str) -> bool {
    let len = value.encode_utf16().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }
    if value.chars().any(is_line_terminator) {
        return false;
    }

    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(&c))
}

/// The confirmation must itself be a valid password and equal the original.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    is_valid_password(confirmation) && password == confirmation
}

/// Whether an entered verification code is long enough to submit.
pub fn is_code_ready(code: &str) -> bool {
    code.chars().count() >= MIN_CODE_LEN
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
