//! Workers and their weekly availability windows.
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::time::ClockTime;
use crate::domain::types::{NonEmptyString, TypeConstraintError};

/// One weekday's availability window. When `active` is false the start/end
/// times are never consulted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DayWindow {
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
    pub active: bool,
}

impl DayWindow {
    /// An open window with the given bounds.
    pub fn open(start: ClockTime, end: ClockTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            active: true,
        }
    }

    /// A closed day.
    pub fn closed() -> Self {
        Self::default()
    }

    /// True iff the day is active and both bounds are present.
    pub fn is_open(&self) -> bool {
        self.active && self.start.is_some() && self.end.is_some()
    }

    /// The `(start, end)` bounds, or `None` on a closed day. Callers treat
    /// a closed day as empty availability rather than an error.
    pub fn span(&self) -> Option<(ClockTime, ClockTime)> {
        if !self.active {
            return None;
        }
        Some((self.start?, self.end?))
    }
}

/// Per-worker weekly schedule, one window per weekday.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WeeklySchedule {
    pub monday: DayWindow,
    pub tuesday: DayWindow,
    pub wednesday: DayWindow,
    pub thursday: DayWindow,
    pub friday: DayWindow,
    pub saturday: DayWindow,
    pub sunday: DayWindow,
}

impl WeeklySchedule {
    /// The window consulted for a given weekday; a pure function of the
    /// calendar date's weekday.
    pub fn day(&self, weekday: Weekday) -> &DayWindow {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut DayWindow {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Same open window Monday through Saturday, closed Sunday.
    pub fn six_days(start: ClockTime, end: ClockTime) -> Self {
        Self {
            monday: DayWindow::open(start, end),
            tuesday: DayWindow::open(start, end),
            wednesday: DayWindow::open(start, end),
            thursday: DayWindow::open(start, end),
            friday: DayWindow::open(start, end),
            saturday: DayWindow::open(start, end),
            sunday: DayWindow::closed(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// Display color for the admin calendar.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub schedule: WeeklySchedule,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Worker {
    /// True iff the worker takes appointments on the given weekday.
    pub fn is_open(&self, weekday: Weekday) -> bool {
        self.schedule.day(weekday).is_open()
    }

    /// The weekday's open window bounds, `None` when closed.
    pub fn window_for(&self, weekday: Weekday) -> Option<(ClockTime, ClockTime)> {
        self.schedule.day(weekday).span()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewWorker {
    pub name: NonEmptyString,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub color: Option<String>,
    pub specialties: Vec<String>,
    pub schedule: WeeklySchedule,
}

impl NewWorker {
    pub fn new(name: &str, schedule: WeeklySchedule) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            phone: None,
            email: None,
            color: None,
            specialties: Vec::new(),
            schedule,
        })
    }
}

/// Partial update applied by admin edits; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateWorker {
    pub name: Option<NonEmptyString>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub color: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub schedule: Option<WeeklySchedule>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn closed_day_has_no_span() {
        let window = DayWindow::closed();
        assert!(!window.is_open());
        assert_eq!(window.span(), None);
    }

    #[test]
    fn inactive_day_ignores_recorded_bounds() {
        let window = DayWindow {
            start: Some(t("10:00")),
            end: Some(t("20:00")),
            active: false,
        };
        assert!(!window.is_open());
        assert_eq!(window.span(), None);
    }

    #[test]
    fn six_day_schedule_closes_sunday() {
        let schedule = WeeklySchedule::six_days(t("10:00"), t("20:00"));
        assert!(schedule.day(Weekday::Mon).is_open());
        assert!(schedule.day(Weekday::Sat).is_open());
        assert!(!schedule.day(Weekday::Sun).is_open());
        assert_eq!(
            schedule.day(Weekday::Wed).span(),
            Some((t("10:00"), t("20:00")))
        );
    }
}
