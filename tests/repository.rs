use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use habana_booking::domain::booking::{
    BookingStatus, NewBooking, ServiceSnapshot, WorkerSnapshot,
};
use habana_booking::domain::client::NewClient;
use habana_booking::domain::notification::{NewNotification, MAX_NOTIFICATIONS};
use habana_booking::domain::service::UpdateService;
use habana_booking::domain::settings::UpdateSettings;
use habana_booking::domain::types::NonEmptyString;
use habana_booking::domain::worker::UpdateWorker;
use habana_booking::repository::{
    AdminReader, AdminWriter, BackupStore, BookingReader, BookingWriter, ClientReader,
    ClientWriter, DocumentRepository, NotificationReader, NotificationWriter, ServiceReader,
    ServiceWriter, SettingsReader, SettingsWriter, WorkerReader, WorkerWriter,
};

mod common;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn booking_for(repo: &DocumentRepository, date: NaiveDate, time: &str) -> Uuid {
    let worker = common::add_worker(repo, "Andy");
    repo.create_booking(&NewBooking {
        client_id: None,
        client_name: "Cliente".to_string(),
        client_phone: String::new(),
        client_email: String::new(),
        service: ServiceSnapshot {
            id: Uuid::new_v4(),
            name: "Corte de Pelo".to_string(),
            price: dec!(15),
            duration: Some(40),
        },
        worker: WorkerSnapshot {
            id: worker.id,
            name: worker.name,
        },
        date,
        time: common::t(time),
        status: BookingStatus::Pending,
        notes: String::new(),
    })
    .unwrap()
    .id
}

#[test]
fn service_crud_and_active_listing() {
    let repo = common::memory_repo();
    let corte = common::add_service(&repo, "Corte de Pelo", 40, dec!(15));
    let cejas = common::add_service(&repo, "Cejas", 10, dec!(5));

    assert_eq!(repo.list_services().unwrap().len(), 2);

    // Deactivated services disappear from the public listing only.
    repo.update_service(
        cejas.id,
        &UpdateService {
            active: Some(false),
            ..UpdateService::default()
        },
    )
    .unwrap();
    let active = repo.list_active_services().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, corte.id);
    assert_eq!(repo.list_services().unwrap().len(), 2);

    repo.delete_service(corte.id).unwrap();
    assert!(repo.get_service_by_id(corte.id).unwrap().is_none());
}

#[test]
fn updates_on_missing_records_are_soft_no_ops() {
    let repo = common::memory_repo();

    let missing = Uuid::new_v4();
    assert!(repo
        .update_service(missing, &UpdateService::default())
        .unwrap()
        .is_none());
    assert!(repo
        .update_worker(missing, &UpdateWorker::default())
        .unwrap()
        .is_none());
    assert!(repo
        .record_client_visit(missing, dec!(10))
        .unwrap()
        .is_none());
    assert!(repo
        .set_booking_status(missing, BookingStatus::Confirmed)
        .unwrap()
        .is_none());
    assert!(repo.update_settings(&UpdateSettings::default()).unwrap().is_none());

    // Deletes on missing records succeed silently.
    repo.delete_service(missing).unwrap();
    repo.delete_worker(missing).unwrap();
    repo.delete_client(missing).unwrap();
    repo.delete_booking(missing).unwrap();
    repo.mark_notification_read(missing).unwrap();
}

#[test]
fn worker_update_touches_only_provided_fields() {
    let repo = common::memory_repo();
    let worker = common::add_worker(&repo, "Andy");

    let updated = repo
        .update_worker(
            worker.id,
            &UpdateWorker {
                name: Some(NonEmptyString::new("Andrés").unwrap()),
                active: Some(false),
                ..UpdateWorker::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Andrés");
    assert!(!updated.active);
    assert_eq!(updated.schedule, worker.schedule);
    assert!(repo.list_active_workers().unwrap().is_empty());
}

#[test]
fn client_phone_lookup_uses_the_normalized_key() {
    let repo = common::memory_repo();
    let client = repo
        .create_client(&NewClient::new("María", " 631040925 ").unwrap())
        .unwrap();

    assert_eq!(client.phone, "631040925");
    let found = repo.find_client_by_phone("631040925").unwrap().unwrap();
    assert_eq!(found.id, client.id);
    assert!(repo.find_client_by_phone("699999999").unwrap().is_none());
    assert!(repo.find_client_by_phone("   ").unwrap().is_none());
}

#[test]
fn upcoming_bookings_skip_cancelled_and_sort_chronologically() {
    let repo = common::memory_repo();
    let later = booking_for(&repo, monday().succ_opt().unwrap(), "10:00");
    let earlier = booking_for(&repo, monday(), "12:00");
    let same_day_first = booking_for(&repo, monday(), "10:30");
    let cancelled = booking_for(&repo, monday(), "11:00");
    repo.set_booking_status(cancelled, BookingStatus::Cancelled)
        .unwrap();

    let upcoming = repo.list_upcoming_bookings(monday()).unwrap();

    let ids: Vec<Uuid> = upcoming.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![same_day_first, earlier, later]);

    // A later horizon drops the earlier day entirely.
    let from_tomorrow = repo
        .list_upcoming_bookings(monday().succ_opt().unwrap())
        .unwrap();
    assert_eq!(from_tomorrow.len(), 1);
    assert_eq!(from_tomorrow[0].id, later);
}

#[test]
fn notification_feed_is_newest_first_and_capped() {
    let repo = common::memory_repo();

    for i in 0..(MAX_NOTIFICATIONS + 5) {
        repo.create_notification(&NewNotification {
            kind: "new_booking".to_string(),
            title: "Nueva Reserva".to_string(),
            message: format!("reserva {i}"),
            booking_id: None,
        })
        .unwrap();
    }

    let notifications = repo.list_notifications().unwrap();
    assert_eq!(notifications.len(), MAX_NOTIFICATIONS);
    assert_eq!(notifications[0].message, format!("reserva {}", MAX_NOTIFICATIONS + 4));
    assert_eq!(repo.unread_notification_count().unwrap(), MAX_NOTIFICATIONS);

    let target = notifications[3].id;
    repo.mark_notification_read(target).unwrap();
    assert_eq!(
        repo.unread_notification_count().unwrap(),
        MAX_NOTIFICATIONS - 1
    );

    repo.mark_all_notifications_read().unwrap();
    assert_eq!(repo.unread_notification_count().unwrap(), 0);

    repo.clear_notifications().unwrap();
    assert!(repo.list_notifications().unwrap().is_empty());
}

#[test]
fn settings_update_merges_partial_fields() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);

    let updated = repo
        .update_settings(&UpdateSettings {
            slot_interval: Some(15),
            close_time: Some(common::t("21:00")),
            ..UpdateSettings::default()
        })
        .unwrap()
        .unwrap();

    assert_eq!(updated.slot_interval, 15);
    assert_eq!(updated.close_time, common::t("21:00"));
    assert_eq!(updated.open_time, common::t("10:00"));
    assert_eq!(updated.business_name, "Test Shop");
}

#[test]
fn export_bundles_documents_but_never_credentials() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    common::add_service(&repo, "Corte de Pelo", 40, dec!(15));
    repo.save_admin_account(
        &habana_booking::services::auth::new_admin_account("admin", "secret", "Admin").unwrap(),
    )
    .unwrap();

    let bundle = repo.export_documents().unwrap();
    let object = bundle.as_object().unwrap();
    assert!(object.contains_key("services"));
    assert!(object.contains_key("settings"));
    assert!(!object.contains_key("admin"));
    // Documents never written are omitted rather than exported empty.
    assert!(!object.contains_key("transactions"));
}

#[test]
fn reset_wipes_every_document() {
    let repo = common::memory_repo();
    common::save_settings(&repo, 30);
    common::add_service(&repo, "Corte de Pelo", 40, dec!(15));
    booking_for(&repo, monday(), "10:00");
    repo.save_admin_account(
        &habana_booking::services::auth::new_admin_account("admin", "secret", "Admin").unwrap(),
    )
    .unwrap();

    repo.reset_documents().unwrap();

    assert!(repo.list_services().unwrap().is_empty());
    assert!(repo.list_workers().unwrap().is_empty());
    assert!(repo.list_bookings().unwrap().is_empty());
    assert!(repo.get_settings().unwrap().is_none());
    assert!(repo.get_admin_account().unwrap().is_none());
}
