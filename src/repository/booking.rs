use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingStatus, NewBooking};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BookingReader, BookingWriter, DocumentRepository};
use crate::storage::StoreKey;

impl BookingReader for DocumentRepository {
    fn list_bookings(&self) -> RepositoryResult<Vec<Booking>> {
        self.load_vec(StoreKey::Bookings)
    }

    fn get_booking_by_id(&self, id: Uuid) -> RepositoryResult<Option<Booking>> {
        Ok(self.list_bookings()?.into_iter().find(|b| b.id == id))
    }

    fn list_bookings_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Booking>> {
        Ok(self
            .list_bookings()?
            .into_iter()
            .filter(|b| b.date == date)
            .collect())
    }

    fn list_bookings_for_worker(
        &self,
        worker_id: Uuid,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<Booking>> {
        Ok(self
            .list_bookings()?
            .into_iter()
            .filter(|b| b.worker.id == worker_id && b.date == date)
            .collect())
    }

    fn list_bookings_by_status(&self, status: BookingStatus) -> RepositoryResult<Vec<Booking>> {
        Ok(self
            .list_bookings()?
            .into_iter()
            .filter(|b| b.status == status)
            .collect())
    }

    fn list_upcoming_bookings(&self, from: NaiveDate) -> RepositoryResult<Vec<Booking>> {
        let mut upcoming: Vec<Booking> = self
            .list_bookings()?
            .into_iter()
            .filter(|b| b.date >= from && b.status != BookingStatus::Cancelled)
            .collect();
        upcoming.sort_by_key(|b| (b.date, b.time));
        Ok(upcoming)
    }
}

impl BookingWriter for DocumentRepository {
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking> {
        let mut bookings = self.list_bookings()?;
        let booking = Booking {
            id: Uuid::new_v4(),
            client_id: new_booking.client_id,
            client_name: new_booking.client_name.clone(),
            client_phone: new_booking.client_phone.clone(),
            client_email: new_booking.client_email.clone(),
            service: new_booking.service.clone(),
            worker: new_booking.worker.clone(),
            date: new_booking.date,
            time: new_booking.time,
            status: new_booking.status,
            notes: new_booking.notes.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        bookings.push(booking.clone());
        self.save_vec(StoreKey::Bookings, &bookings)?;
        Ok(booking)
    }

    fn set_booking_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> RepositoryResult<Option<Booking>> {
        let mut bookings = self.list_bookings()?;
        let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        booking.status = status;
        booking.updated_at = Some(Utc::now());
        let updated = booking.clone();
        self.save_vec(StoreKey::Bookings, &bookings)?;
        Ok(Some(updated))
    }

    fn delete_booking(&self, id: Uuid) -> RepositoryResult<()> {
        let mut bookings = self.list_bookings()?;
        bookings.retain(|b| b.id != id);
        self.save_vec(StoreKey::Bookings, &bookings)
    }
}
