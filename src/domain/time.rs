//! Wall-clock time arithmetic for the slot engine.
//!
//! Appointments are positioned on a minute grid inside a single day, so a
//! time of day is just its offset from midnight. All interval reasoning uses
//! half-open ranges `[start, start + duration)`: touching endpoints do not
//! conflict, which is what allows back-to-back bookings.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day stored as minutes since midnight, rendered as `HH:MM`.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Builds a clock time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, TypeConstraintError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TypeConstraintError::InvalidClockTime);
        }
        Ok(Self(minutes))
    }

    /// Minutes elapsed since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = TypeConstraintError;

    /// Parses a strict zero-padded 24-hour `HH:MM` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or(TypeConstraintError::InvalidClockTime)?;
        if hours.len() != 2 || minutes.len() != 2 {
            return Err(TypeConstraintError::InvalidClockTime);
        }
        let hours: u16 = hours
            .parse()
            .map_err(|_| TypeConstraintError::InvalidClockTime)?;
        let minutes: u16 = minutes
            .parse()
            .map_err(|_| TypeConstraintError::InvalidClockTime)?;
        if hours >= 24 || minutes >= 60 {
            return Err(TypeConstraintError::InvalidClockTime);
        }
        Ok(Self(hours * 60 + minutes))
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for ClockTime {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Half-open overlap test between `[start_a, start_a + dur_a)` and
/// `[start_b, start_b + dur_b)`. This is the one conflict predicate the slot
/// generator uses; touching endpoints are not an overlap.
pub fn overlaps(start_a: u32, dur_a: u32, start_b: u32, dur_b: u32) -> bool {
    start_a < start_b + dur_b && start_b < start_a + dur_a
}
