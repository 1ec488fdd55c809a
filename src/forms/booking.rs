use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::booking::BookingStatus;
use crate::domain::time::ClockTime;
use crate::services::booking::{BookingRequest, WorkerChoice};
use crate::services::{ServiceError, ServiceResult};

#[derive(Deserialize, Validate)]
/// Payload for creating a booking, shared by the public widget and the
/// admin "new booking" modal.
pub struct BookingForm {
    #[validate(length(min = 1))]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub client_email: String,
    pub service_id: Uuid,
    /// Absent means "no preference": resolved to the least-booked worker.
    pub worker_id: Option<Uuid>,
    pub date: NaiveDate,
    /// `HH:MM`, expected to be a slot the availability endpoint offered.
    pub time: String,
    #[serde(default)]
    pub notes: String,
}

impl BookingForm {
    /// Builds the service-layer request; the initial status comes from the
    /// calling surface (public → pending, admin → confirmed).
    pub fn into_request(self, status: BookingStatus) -> ServiceResult<BookingRequest> {
        let time: ClockTime = self
            .time
            .parse()
            .map_err(|_| ServiceError::Validation("invalid time, expected HH:MM".to_string()))?;
        Ok(BookingRequest {
            client_name: self.client_name,
            client_phone: self.client_phone,
            client_email: self.client_email,
            service_id: self.service_id,
            worker: match self.worker_id {
                Some(id) => WorkerChoice::Specific(id),
                None => WorkerChoice::Any,
            },
            date: self.date,
            time,
            notes: self.notes,
            status,
        })
    }
}

#[derive(Deserialize)]
/// Query parameters for the availability endpoint.
pub struct SlotsQuery {
    pub date: NaiveDate,
    pub service_id: Uuid,
    /// Absent means the union of all active workers' slots.
    pub worker_id: Option<Uuid>,
}
