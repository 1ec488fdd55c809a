use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use habana_booking::domain::booking::{
    BookingStatus, NewBooking, ServiceSnapshot, WorkerSnapshot,
};
use habana_booking::domain::types::DurationMinutes;
use habana_booking::domain::worker::Worker;
use habana_booking::repository::{BookingWriter, DocumentRepository};
use habana_booking::services::slots::{available_slots, available_slots_any_worker};

mod common;

/// A Monday, inside every six-day schedule.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn book(
    repo: &DocumentRepository,
    worker: &Worker,
    date: NaiveDate,
    time: &str,
    duration: Option<u32>,
) -> Uuid {
    let booking = repo
        .create_booking(&NewBooking {
            client_id: None,
            client_name: "Cliente".to_string(),
            client_phone: String::new(),
            client_email: String::new(),
            service: ServiceSnapshot {
                id: Uuid::new_v4(),
                name: "Corte de Pelo".to_string(),
                price: dec!(15),
                duration,
            },
            worker: WorkerSnapshot {
                id: worker.id,
                name: worker.name.clone(),
            },
            date,
            time: common::t(time),
            status: BookingStatus::Confirmed,
            notes: String::new(),
        })
        .unwrap();
    booking.id
}

fn d(minutes: u32) -> DurationMinutes {
    DurationMinutes::new(minutes).unwrap()
}

#[test]
fn empty_day_walks_the_full_grid() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let worker = common::add_worker(&repo, "Andy");

    let slots = available_slots(&repo, monday(), worker.id, d(30)).unwrap();

    // 10:00 through 19:30 inclusive on a 30-minute grid.
    assert_eq!(slots.len(), 20);
    assert_eq!(slots.first().unwrap(), &common::t("10:00"));
    assert_eq!(slots.last().unwrap(), &common::t("19:30"));
}

#[test]
fn long_services_stop_earlier() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let worker = common::add_worker(&repo, "Andy");

    let slots = available_slots(&repo, monday(), worker.id, d(70)).unwrap();

    // 18:50 would run past close; the last start fitting 70 minutes is 18:30.
    assert_eq!(slots.last().unwrap(), &common::t("18:30"));
}

#[test]
fn overlapping_booking_blocks_covered_grid_points() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let worker = common::add_worker(&repo, "Andy");
    book(&repo, &worker, monday(), "10:00", Some(40));

    let slots = available_slots(&repo, monday(), worker.id, d(30)).unwrap();

    // The 40-minute appointment spills into the 10:30 slot as well.
    assert!(!slots.contains(&common::t("10:00")));
    assert!(!slots.contains(&common::t("10:30")));
    assert_eq!(slots.first().unwrap(), &common::t("11:00"));
}

#[test]
fn back_to_back_slots_touch_without_conflict() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let worker = common::add_worker(&repo, "Andy");
    book(&repo, &worker, monday(), "12:00", Some(30));

    let slots = available_slots(&repo, monday(), worker.id, d(30)).unwrap();

    assert!(slots.contains(&common::t("11:30")));
    assert!(!slots.contains(&common::t("12:00")));
    assert!(slots.contains(&common::t("12:30")));
}

#[test]
fn cancelled_booking_frees_its_slot() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let worker = common::add_worker(&repo, "Andy");
    let id = book(&repo, &worker, monday(), "12:00", Some(30));

    let before = available_slots(&repo, monday(), worker.id, d(30)).unwrap();
    assert!(!before.contains(&common::t("12:00")));

    repo.set_booking_status(id, BookingStatus::Cancelled).unwrap();

    let after = available_slots(&repo, monday(), worker.id, d(30)).unwrap();
    assert!(after.contains(&common::t("12:00")));
}

#[test]
fn legacy_booking_without_duration_blocks_thirty_minutes() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let worker = common::add_worker(&repo, "Andy");
    book(&repo, &worker, monday(), "12:00", None);

    let slots = available_slots(&repo, monday(), worker.id, d(30)).unwrap();

    // A record predating duration tracking occupies the default 30 minutes.
    assert!(slots.contains(&common::t("11:30")));
    assert!(!slots.contains(&common::t("12:00")));
    assert!(slots.contains(&common::t("12:30")));
}

#[test]
fn zero_interval_settings_fall_back_to_the_default_grid() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 0);
    let worker = common::add_worker(&repo, "Andy");

    let slots = available_slots(&repo, monday(), worker.id, d(30)).unwrap();

    // A hand-edited document with interval 0 must not stall the walk.
    assert_eq!(slots.len(), 20);
    assert_eq!(slots[1], common::t("10:30"));
}

#[test]
fn closed_day_and_unknown_worker_yield_empty() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let worker = common::add_worker(&repo, "Andy");

    let sunday = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert!(available_slots(&repo, sunday, worker.id, d(30))
        .unwrap()
        .is_empty());
    assert!(available_slots(&repo, monday(), Uuid::new_v4(), d(30))
        .unwrap()
        .is_empty());
}

#[test]
fn generation_is_read_only() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let worker = common::add_worker(&repo, "Andy");
    book(&repo, &worker, monday(), "13:00", Some(30));

    let first = available_slots(&repo, monday(), worker.id, d(30)).unwrap();
    let second = available_slots(&repo, monday(), worker.id, d(30)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn custom_interval_changes_the_grid() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 60);
    let worker = common::add_worker(&repo, "Andy");

    let slots = available_slots(&repo, monday(), worker.id, d(30)).unwrap();

    assert_eq!(slots.len(), 10);
    assert_eq!(slots[1], common::t("11:00"));
}

#[test]
fn any_worker_union_keeps_slots_one_worker_still_offers() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    let andy = common::add_worker(&repo, "Andy");
    let rodrigo = common::add_worker(&repo, "Rodrigo");
    book(&repo, &andy, monday(), "10:00", Some(30));

    let union = available_slots_any_worker(&repo, monday(), d(30)).unwrap();

    // Rodrigo is still free at 10:00, so the union offers it.
    assert!(union.contains(&common::t("10:00")));

    book(&repo, &rodrigo, monday(), "10:00", Some(30));
    let union = available_slots_any_worker(&repo, monday(), d(30)).unwrap();
    assert!(!union.contains(&common::t("10:00")));
}
