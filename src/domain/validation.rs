//! Custom field validators used by the domain models.
//!
//! `validator` covers ranges and e-mail addresses; the rules below need
//! either look-around semantics the `regex` crate lacks (password policy)
//! or a whitespace-aware blank check shared by every name field.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::config::{
    MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH,
    PASSWORD_SPECIAL_CHARS, PHONE_PATTERN,
};

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "Value must not be blank"));
    }
    Ok(())
}

/// Names, usernames and tag/category names: non-blank and
/// `MIN_NAME_LENGTH..=MAX_NAME_LENGTH` characters.
pub fn name_rules(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;

    let length = value.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        let mut err = ValidationError::new("length");
        err.message = Some(Cow::Owned(format!(
            "Name must have between {} and {} characters",
            MIN_NAME_LENGTH, MAX_NAME_LENGTH
        )));
        return Err(err);
    }
    Ok(())
}

/// Password policy: 8-20 characters, at least one digit, one lower-case
/// and one upper-case letter, one special character, no whitespace.
pub fn password_policy(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    let valid = (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length)
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
        && !value.chars().any(char::is_whitespace);

    if valid {
        Ok(())
    } else {
        Err(error(
            "password",
            "Password must have 8-20 characters with at least one digit, one lower case letter, \
             one upper case letter, one special character and no white space",
        ))
    }
}

/// Romanian phone numbers, e.g. `+40700 000 001` or `0721123456`.
pub fn romanian_phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(error("phone", "Phone must be a valid Romanian phone number"))
    }
}
