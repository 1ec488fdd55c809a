//! Bookings: the appointment records the slot engine schedules around.
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::time::ClockTime;

/// Minutes assumed for legacy bookings recorded before duration tracking.
pub const DEFAULT_BOOKING_MINUTES: u32 = 30;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Terminal bookings accept no further lifecycle transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Cancelled bookings do not occupy their slot.
    pub fn blocks_slot(self) -> bool {
        self != Self::Cancelled
    }
}

/// Service fields copied onto the booking at creation time so later catalog
/// edits do not retroactively change history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceSnapshot {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    /// Minutes this booking occupies; absent on legacy records.
    pub duration: Option<u32>,
}

/// Worker fields copied at creation time, same rationale.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkerSnapshot {
    pub id: Uuid,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    /// Present when the booking was linked to a persisted client.
    pub client_id: Option<Uuid>,
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub client_email: String,
    pub service: ServiceSnapshot,
    pub worker: WorkerSnapshot,
    pub date: NaiveDate,
    /// Assumed to start on a slot boundary.
    pub time: ClockTime,
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Minutes this booking occupies on the grid.
    pub fn duration_minutes(&self) -> u32 {
        self.service.duration.unwrap_or(DEFAULT_BOOKING_MINUTES)
    }
}

/// Fully resolved booking ready to be appended to the store. The service
/// layer builds this after worker resolution and client linkage.
#[derive(Clone, Debug)]
pub struct NewBooking {
    pub client_id: Option<Uuid>,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub service: ServiceSnapshot,
    pub worker: WorkerSnapshot,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub status: BookingStatus,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_flags() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());

        assert!(BookingStatus::Pending.blocks_slot());
        assert!(!BookingStatus::Cancelled.blocks_slot());
    }
}
