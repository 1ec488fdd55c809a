//! Repository capabilities over the injected storage engine.
//!
//! One Reader/Writer trait pair per entity keeps the service layer testable
//! against narrow capabilities. Updates and deletes on missing records are a
//! deliberate soft no-op: writers return `Ok(None)` (or `Ok(())` for
//! deletes) rather than an error, matching the lenient contract callers in
//! this domain expect.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::admin::AdminAccount;
use crate::domain::booking::{Booking, BookingStatus, NewBooking};
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::notification::{NewNotification, Notification};
use crate::domain::service::{NewService, Service, UpdateService};
use crate::domain::settings::{ShopSettings, UpdateSettings};
use crate::domain::transaction::{NewTransaction, Transaction};
use crate::domain::worker::{NewWorker, UpdateWorker, Worker};
use crate::repository::errors::RepositoryResult;
use crate::storage::{StorageEngine, StoreKey};

pub mod booking;
pub mod client;
pub mod errors;
pub mod notification;
pub mod service;
pub mod settings;
pub mod transaction;
pub mod worker;

pub trait ServiceReader {
    fn list_services(&self) -> RepositoryResult<Vec<Service>>;
    /// Active services in display order.
    fn list_active_services(&self) -> RepositoryResult<Vec<Service>>;
    fn get_service_by_id(&self, id: Uuid) -> RepositoryResult<Option<Service>>;
}

pub trait ServiceWriter {
    fn create_service(&self, new_service: &NewService) -> RepositoryResult<Service>;
    fn update_service(
        &self,
        id: Uuid,
        updates: &UpdateService,
    ) -> RepositoryResult<Option<Service>>;
    fn delete_service(&self, id: Uuid) -> RepositoryResult<()>;
}

pub trait WorkerReader {
    fn list_workers(&self) -> RepositoryResult<Vec<Worker>>;
    fn list_active_workers(&self) -> RepositoryResult<Vec<Worker>>;
    fn get_worker_by_id(&self, id: Uuid) -> RepositoryResult<Option<Worker>>;
}

pub trait WorkerWriter {
    fn create_worker(&self, new_worker: &NewWorker) -> RepositoryResult<Worker>;
    fn update_worker(&self, id: Uuid, updates: &UpdateWorker) -> RepositoryResult<Option<Worker>>;
    fn delete_worker(&self, id: Uuid) -> RepositoryResult<()>;
}

pub trait ClientReader {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    fn get_client_by_id(&self, id: Uuid) -> RepositoryResult<Option<Client>>;
    /// Lookup by the normalized phone dedup key.
    fn find_client_by_phone(&self, phone: &str) -> RepositoryResult<Option<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, id: Uuid, updates: &UpdateClient) -> RepositoryResult<Option<Client>>;
    /// Bumps visits/total spent/last visit when a sale is linked.
    fn record_client_visit(
        &self,
        id: Uuid,
        amount: rust_decimal::Decimal,
    ) -> RepositoryResult<Option<Client>>;
    fn delete_client(&self, id: Uuid) -> RepositoryResult<()>;
}

pub trait BookingReader {
    fn list_bookings(&self) -> RepositoryResult<Vec<Booking>>;
    fn get_booking_by_id(&self, id: Uuid) -> RepositoryResult<Option<Booking>>;
    fn list_bookings_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Booking>>;
    /// All bookings (any status) for one worker on one date.
    fn list_bookings_for_worker(
        &self,
        worker_id: Uuid,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<Booking>>;
    fn list_bookings_by_status(&self, status: BookingStatus) -> RepositoryResult<Vec<Booking>>;
    /// Non-cancelled bookings on or after the given date, ordered by date
    /// then time.
    fn list_upcoming_bookings(&self, from: NaiveDate) -> RepositoryResult<Vec<Booking>>;
}

pub trait BookingWriter {
    /// Appends a booking with a fresh identity and creation timestamp.
    fn create_booking(&self, new_booking: &NewBooking) -> RepositoryResult<Booking>;
    fn set_booking_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> RepositoryResult<Option<Booking>>;
    fn delete_booking(&self, id: Uuid) -> RepositoryResult<()>;
}

pub trait TransactionReader {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
    fn get_transaction_by_id(&self, id: Uuid) -> RepositoryResult<Option<Transaction>>;
    fn list_transactions_by_date(&self, date: NaiveDate) -> RepositoryResult<Vec<Transaction>>;
    fn list_transactions_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<Vec<Transaction>>;
}

pub trait TransactionWriter {
    fn create_transaction(&self, new_transaction: &NewTransaction)
        -> RepositoryResult<Transaction>;
    fn delete_transaction(&self, id: Uuid) -> RepositoryResult<()>;
}

pub trait NotificationReader {
    /// Newest first.
    fn list_notifications(&self) -> RepositoryResult<Vec<Notification>>;
    fn unread_notification_count(&self) -> RepositoryResult<usize>;
}

pub trait NotificationWriter {
    fn create_notification(
        &self,
        new_notification: &NewNotification,
    ) -> RepositoryResult<Notification>;
    fn mark_notification_read(&self, id: Uuid) -> RepositoryResult<()>;
    fn mark_all_notifications_read(&self) -> RepositoryResult<()>;
    fn clear_notifications(&self) -> RepositoryResult<()>;
}

pub trait SettingsReader {
    fn get_settings(&self) -> RepositoryResult<Option<ShopSettings>>;
}

pub trait SettingsWriter {
    fn save_settings(&self, settings: &ShopSettings) -> RepositoryResult<()>;
    fn update_settings(&self, updates: &UpdateSettings) -> RepositoryResult<Option<ShopSettings>>;
}

pub trait AdminReader {
    fn get_admin_account(&self) -> RepositoryResult<Option<AdminAccount>>;
}

pub trait AdminWriter {
    fn save_admin_account(&self, account: &AdminAccount) -> RepositoryResult<()>;
}

/// Raw document operations backing export and destructive reset.
pub trait BackupStore {
    /// Bundles every exported key into one JSON object keyed by document
    /// name; never-written keys are omitted.
    fn export_documents(&self) -> RepositoryResult<serde_json::Value>;
    /// Removes every document, admin credentials included.
    fn reset_documents(&self) -> RepositoryResult<()>;
}

/// Document-store implementation of every repository capability.
#[derive(Clone)]
pub struct DocumentRepository {
    engine: Arc<dyn StorageEngine>,
}

impl DocumentRepository {
    pub fn new(engine: Arc<dyn StorageEngine>) -> Self {
        Self { engine }
    }

    /// Loads an array document; a never-written key reads as empty.
    pub(crate) fn load_vec<T: DeserializeOwned>(&self, key: StoreKey) -> RepositoryResult<Vec<T>> {
        match self.engine.read(key)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Writes an array document back whole (read-modify-write cycle).
    pub(crate) fn save_vec<T: Serialize>(&self, key: StoreKey, items: &[T]) -> RepositoryResult<()> {
        let value = serde_json::to_value(items)?;
        self.engine.write(key, &value)?;
        Ok(())
    }

    /// Loads a singleton document.
    pub(crate) fn load_doc<T: DeserializeOwned>(
        &self,
        key: StoreKey,
    ) -> RepositoryResult<Option<T>> {
        match self.engine.read(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Writes a singleton document.
    pub(crate) fn save_doc<T: Serialize>(&self, key: StoreKey, doc: &T) -> RepositoryResult<()> {
        let value = serde_json::to_value(doc)?;
        self.engine.write(key, &value)?;
        Ok(())
    }
}

impl BackupStore for DocumentRepository {
    fn export_documents(&self) -> RepositoryResult<serde_json::Value> {
        let mut bundle = serde_json::Map::new();
        for key in StoreKey::EXPORTED {
            if let Some(value) = self.engine.read(key)? {
                bundle.insert(key.as_str().to_string(), value);
            }
        }
        Ok(serde_json::Value::Object(bundle))
    }

    fn reset_documents(&self) -> RepositoryResult<()> {
        for key in StoreKey::ALL {
            self.engine.remove(key)?;
        }
        Ok(())
    }
}
