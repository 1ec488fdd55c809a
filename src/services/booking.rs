//! The booking transaction: resolve the worker, link or create the client,
//! append the appointment, emit the notification.
//!
//! Slot validity is NOT re-checked at write time; the caller is trusted to
//! have picked a slot the generator offered. Two sessions observing the same
//! open slot can therefore both commit — a known, deliberate gap (single
//! synchronous store, no uniqueness constraint).

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::booking::{
    Booking, BookingStatus, NewBooking, ServiceSnapshot, WorkerSnapshot,
};
use crate::domain::notification::NewNotification;
use crate::domain::time::ClockTime;
use crate::domain::worker::Worker;
use crate::repository::{
    BookingReader, BookingWriter, ClientReader, ClientWriter, NotificationWriter, ServiceReader,
    WorkerReader,
};
use crate::services::clients::find_or_create_client;
use crate::services::{ServiceError, ServiceResult};

/// Worker selection as submitted: a concrete worker, or "no preference".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerChoice {
    Specific(Uuid),
    Any,
}

#[derive(Clone, Debug)]
pub struct BookingRequest {
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    pub service_id: Uuid,
    pub worker: WorkerChoice,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub notes: String,
    /// `Pending` from the public widget, `Confirmed` from the admin panel.
    pub status: BookingStatus,
}

/// Creates a booking. Fails with a validation error on a blank client name
/// before anything is written; an unknown service or worker is `NotFound`.
pub fn create_booking<R>(repo: &R, request: BookingRequest) -> ServiceResult<Booking>
where
    R: ServiceReader
        + WorkerReader
        + BookingReader
        + BookingWriter
        + ClientReader
        + ClientWriter
        + NotificationWriter
        + ?Sized,
{
    let client_name = request.client_name.trim().to_string();
    if client_name.is_empty() {
        return Err(ServiceError::Validation(
            "client name is required".to_string(),
        ));
    }

    let service = repo
        .get_service_by_id(request.service_id)?
        .ok_or(ServiceError::NotFound)?;

    let worker = match request.worker {
        WorkerChoice::Specific(id) => repo
            .get_worker_by_id(id)?
            .ok_or(ServiceError::NotFound)?,
        WorkerChoice::Any => resolve_least_booked(repo, request.date)?,
    };

    // Two sequential read-modify-write steps from here on: an orphaned
    // client after a failed booking write is acceptable and recoverable.
    let client = find_or_create_client(
        repo,
        &client_name,
        &request.client_phone,
        Some(&request.client_email),
    )?;

    let booking = repo.create_booking(&NewBooking {
        client_id: client.map(|c| c.id),
        client_name: client_name.clone(),
        client_phone: request.client_phone.trim().to_string(),
        client_email: request.client_email.trim().to_string(),
        service: ServiceSnapshot {
            id: service.id,
            name: service.name.clone(),
            price: service.price,
            duration: Some(service.duration.get()),
        },
        worker: WorkerSnapshot {
            id: worker.id,
            name: worker.name.clone(),
        },
        date: request.date,
        time: request.time,
        status: request.status,
        notes: request.notes.trim().to_string(),
    })?;

    repo.create_notification(&NewNotification::new_booking(
        booking.id,
        &booking.client_name,
        &booking.service.name,
        booking.date,
        booking.time,
    ))?;

    Ok(booking)
}

/// "No preference" resolution: the active worker with the fewest bookings on
/// the requested date; ties go to the earliest in listing order.
fn resolve_least_booked<R>(repo: &R, date: NaiveDate) -> ServiceResult<Worker>
where
    R: WorkerReader + BookingReader + ?Sized,
{
    let workers = repo.list_active_workers()?;
    let mut best: Option<(Worker, usize)> = None;
    for worker in workers {
        let count = repo.list_bookings_for_worker(worker.id, date)?.len();
        match &best {
            Some((_, min)) if count >= *min => {}
            _ => best = Some((worker, count)),
        }
    }
    best.map(|(worker, _)| worker).ok_or_else(|| {
        ServiceError::Validation("no active workers available".to_string())
    })
}

/// Marks the booking confirmed. Missing bookings are a soft no-op.
pub fn confirm_booking<R>(repo: &R, id: Uuid) -> ServiceResult<Option<Booking>>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    transition(repo, id, BookingStatus::Confirmed)
}

/// Marks the booking completed.
pub fn complete_booking<R>(repo: &R, id: Uuid) -> ServiceResult<Option<Booking>>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    transition(repo, id, BookingStatus::Completed)
}

/// Cancels the booking, freeing its slot for the next availability call.
pub fn cancel_booking<R>(repo: &R, id: Uuid) -> ServiceResult<Option<Booking>>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    transition(repo, id, BookingStatus::Cancelled)
}

/// Status transitions are one-way: terminal bookings (completed, cancelled)
/// accept no further changes.
fn transition<R>(repo: &R, id: Uuid, status: BookingStatus) -> ServiceResult<Option<Booking>>
where
    R: BookingReader + BookingWriter + ?Sized,
{
    let Some(existing) = repo.get_booking_by_id(id)? else {
        return Ok(None);
    };
    if existing.status.is_terminal() {
        return Err(ServiceError::Validation(format!(
            "booking is already {:?}",
            existing.status
        )));
    }
    repo.set_booking_status(id, status).map_err(Into::into)
}
