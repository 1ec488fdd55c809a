//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty names, positive
//! durations, normalized phone numbers) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use phonenumber::{parse, Mode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Clock time string was not a valid zero-padded `HH:MM`.
    #[error("invalid time, expected HH:MM")]
    InvalidClockTime,
    /// Service duration must be at least one minute.
    #[error("duration must be at least one minute")]
    NonPositiveDuration,
    /// Price must not be negative.
    #[error("price cannot be negative")]
    NegativePrice,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Service length in whole minutes, always at least one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value == 0 {
            return Err(TypeConstraintError::NonPositiveDuration);
        }
        Ok(Self(value))
    }

    /// Returns the raw number of minutes.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for DurationMinutes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for DurationMinutes {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DurationMinutes> for u32 {
    fn from(value: DurationMinutes) -> Self {
        value.0
    }
}

/// Normalizes a phone number for use as a client dedup key.
///
/// Numbers that parse internationally are rendered in E.164; local numbers
/// without a country code are kept as their trimmed form so that the same
/// string entered twice still matches.
pub fn normalize_phone(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse(None, trimmed) {
        Ok(parsed) => Some(parsed.format().mode(Mode::E164).to_string()),
        Err(_) => Some(trimmed.to_string()),
    }
}
