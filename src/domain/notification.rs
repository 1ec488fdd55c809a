//! Admin notification feed entries.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Feed size cap; older entries are dropped from the tail.
pub const MAX_NOTIFICATIONS: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    /// Event discriminator, e.g. `new_booking`.
    pub kind: String,
    pub title: String,
    pub message: String,
    pub booking_id: Option<Uuid>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewNotification {
    pub kind: String,
    pub title: String,
    pub message: String,
    pub booking_id: Option<Uuid>,
}

impl NewNotification {
    /// The event emitted for every created booking.
    pub fn new_booking(
        booking_id: Uuid,
        client_name: &str,
        service_name: &str,
        date: chrono::NaiveDate,
        time: crate::domain::time::ClockTime,
    ) -> Self {
        Self {
            kind: "new_booking".to_string(),
            title: "Nueva Reserva".to_string(),
            message: format!("{client_name} ha reservado {service_name} para el {date} a las {time}"),
            booking_id: Some(booking_id),
        }
    }
}
