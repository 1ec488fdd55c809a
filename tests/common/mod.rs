//! Shared fixtures: an in-memory repository plus builders for the records
//! most tests need.
#![allow(dead_code)] // not every test binary uses every fixture

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use habana_booking::domain::service::{NewService, Service};
use habana_booking::domain::settings::{ShopSettings, SocialMedia};
use habana_booking::domain::time::ClockTime;
use habana_booking::domain::worker::{NewWorker, WeeklySchedule, Worker};
use habana_booking::repository::{
    DocumentRepository, ServiceWriter, SettingsWriter, WorkerWriter,
};
use habana_booking::storage::memory::MemoryStorage;

pub fn memory_repo() -> DocumentRepository {
    DocumentRepository::new(Arc::new(MemoryStorage::new()))
}

pub fn t(s: &str) -> ClockTime {
    s.parse().unwrap()
}

/// Settings with a 10:00-20:00 day and the given grid step.
pub fn save_settings(repo: &DocumentRepository, slot_interval: u32) {
    repo.save_settings(&ShopSettings {
        business_name: "Test Shop".to_string(),
        address: String::new(),
        phone: String::new(),
        email: String::new(),
        open_time: t("10:00"),
        close_time: t("20:00"),
        slot_interval,
        social_media: SocialMedia::default(),
        booking_message: String::new(),
        cancellation_policy: String::new(),
        updated_at: Utc::now(),
    })
    .unwrap();
}

/// A worker open 10:00-20:00 Monday through Saturday.
pub fn add_worker(repo: &DocumentRepository, name: &str) -> Worker {
    let schedule = WeeklySchedule::six_days(t("10:00"), t("20:00"));
    repo.create_worker(&NewWorker::new(name, schedule).unwrap())
        .unwrap()
}

pub fn add_service(
    repo: &DocumentRepository,
    name: &str,
    duration: u32,
    price: Decimal,
) -> Service {
    repo.create_service(&NewService::new(name, duration, price).unwrap())
        .unwrap()
}
