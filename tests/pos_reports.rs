use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use habana_booking::domain::booking::BookingStatus;
use habana_booking::domain::transaction::{LineItem, PaymentMethod};
use habana_booking::repository::{ClientReader, DocumentRepository, TransactionReader};
use habana_booking::services::booking::{
    cancel_booking, complete_booking, create_booking, BookingRequest, WorkerChoice,
};
use habana_booking::services::pos::{record_sale, SaleRequest, ANONYMOUS_CLIENT};
use habana_booking::services::reports::{daily_report, monthly_report, weekly_report};
use habana_booking::services::ServiceError;

mod common;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn sale(
    worker_id: Uuid,
    date: NaiveDate,
    phone: &str,
    items: &[(&str, rust_decimal::Decimal)],
    payment_method: PaymentMethod,
) -> SaleRequest {
    SaleRequest {
        client_name: "María".to_string(),
        client_phone: phone.to_string(),
        worker_id,
        items: items
            .iter()
            .map(|&(name, price)| LineItem {
                name: name.to_string(),
                price,
            })
            .collect(),
        payment_method,
        date,
        time: common::t("12:00"),
    }
}

#[test]
fn sale_total_is_the_sum_of_line_items() {
    let repo = common::memory_repo();
    let worker = common::add_worker(&repo, "Andy");

    let transaction = record_sale(
        &repo,
        sale(
            worker.id,
            monday(),
            "631 11 22 33",
            &[("Corte de Pelo", dec!(15)), ("Cejas", dec!(5))],
            PaymentMethod::Cash,
        ),
    )
    .unwrap();

    assert_eq!(transaction.total, dec!(20));
    assert_eq!(transaction.worker.name, "Andy");
}

#[test]
fn empty_sale_is_rejected() {
    let repo = common::memory_repo();
    let worker = common::add_worker(&repo, "Andy");

    let result = record_sale(
        &repo,
        sale(worker.id, monday(), "", &[], PaymentMethod::Cash),
    );

    assert!(matches!(result, Err(ServiceError::Validation(_))));
    assert!(repo.list_transactions().unwrap().is_empty());
}

#[test]
fn linked_sale_bumps_client_counters() {
    let repo = common::memory_repo();
    let worker = common::add_worker(&repo, "Andy");

    for _ in 0..2 {
        record_sale(
            &repo,
            sale(
                worker.id,
                monday(),
                "631 11 22 33",
                &[("Corte de Pelo", dec!(15))],
                PaymentMethod::Card,
            ),
        )
        .unwrap();
    }

    let clients = repo.list_clients().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].visits, 2);
    assert_eq!(clients[0].total_spent, dec!(30));
    assert!(clients[0].last_visit.is_some());
}

#[test]
fn anonymous_sale_records_without_a_client() {
    let repo = common::memory_repo();
    let worker = common::add_worker(&repo, "Andy");

    let transaction = record_sale(
        &repo,
        SaleRequest {
            client_name: String::new(),
            client_phone: String::new(),
            worker_id: worker.id,
            items: vec![LineItem {
                name: "Rapado".to_string(),
                price: dec!(10),
            }],
            payment_method: PaymentMethod::Cash,
            date: monday(),
            time: common::t("12:00"),
        },
    )
    .unwrap();

    assert_eq!(transaction.client_name, ANONYMOUS_CLIENT);
    assert_eq!(transaction.client_id, None);
    assert!(repo.list_clients().unwrap().is_empty());
}

#[test]
fn daily_report_aggregates_revenue_and_statuses() {
    let repo = common::memory_repo();
    let worker = common::add_worker(&repo, "Andy");
    let service = common::add_service(&repo, "Corte de Pelo", 40, dec!(15));

    record_sale(
        &repo,
        sale(
            worker.id,
            monday(),
            "",
            &[("Corte de Pelo", dec!(15)), ("Cejas", dec!(5))],
            PaymentMethod::Cash,
        ),
    )
    .unwrap();
    record_sale(
        &repo,
        sale(
            worker.id,
            monday(),
            "",
            &[("Rapado", dec!(10))],
            PaymentMethod::Card,
        ),
    )
    .unwrap();

    let make_booking = |time: &str| {
        create_booking(
            &repo,
            BookingRequest {
                client_name: "Juan".to_string(),
                client_phone: String::new(),
                client_email: String::new(),
                service_id: service.id,
                worker: WorkerChoice::Specific(worker.id),
                date: monday(),
                time: common::t(time),
                notes: String::new(),
                status: BookingStatus::Pending,
            },
        )
        .unwrap()
    };
    let done = make_booking("10:00");
    let dropped = make_booking("11:00");
    make_booking("12:00");
    complete_booking(&repo, done.id).unwrap();
    cancel_booking(&repo, dropped.id).unwrap();

    let report = daily_report(&repo, monday()).unwrap();

    assert_eq!(report.total_revenue, dec!(30));
    assert_eq!(report.total_transactions, 2);
    assert_eq!(report.average_ticket, dec!(15));
    assert_eq!(report.payment_breakdown.cash, dec!(20));
    assert_eq!(report.payment_breakdown.card, dec!(10));
    assert_eq!(report.payment_breakdown.bizum, dec!(0));

    assert_eq!(report.total_bookings, 3);
    assert_eq!(report.completed_bookings, 1);
    assert_eq!(report.cancelled_bookings, 1);
    assert_eq!(report.pending_bookings, 1);

    let corte = &report.service_breakdown["Corte de Pelo"];
    assert_eq!(corte.count, 1);
    assert_eq!(corte.revenue, dec!(15));
    let andy = &report.worker_breakdown["Andy"];
    assert_eq!(andy.count, 2);
    assert_eq!(andy.revenue, dec!(30));
}

#[test]
fn empty_day_report_is_all_zeroes() {
    let repo = common::memory_repo();

    let report = daily_report(&repo, monday()).unwrap();

    assert_eq!(report.total_revenue, dec!(0));
    assert_eq!(report.average_ticket, dec!(0));
    assert_eq!(report.total_bookings, 0);
    assert!(report.service_breakdown.is_empty());
}

#[test]
fn weekly_report_folds_seven_days() {
    let repo = common::memory_repo();
    let worker = common::add_worker(&repo, "Andy");

    // Monday and Wednesday of the same week.
    let wednesday = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
    for date in [monday(), wednesday] {
        record_sale(
            &repo,
            sale(
                worker.id,
                date,
                "",
                &[("Corte de Pelo", dec!(15))],
                PaymentMethod::Cash,
            ),
        )
        .unwrap();
    }

    let report = weekly_report(&repo, monday()).unwrap();

    assert_eq!(report.days.len(), 7);
    assert_eq!(report.start_date, monday());
    assert_eq!(report.end_date, NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
    assert_eq!(report.total_revenue, dec!(30));
    assert_eq!(report.days[0].total_revenue, dec!(15));
    assert_eq!(report.days[1].total_revenue, dec!(0));
}

#[test]
fn monthly_report_covers_every_calendar_day() {
    let repo = common::memory_repo();

    let report = monthly_report(&repo, 2026, 2).unwrap();
    assert_eq!(report.days.len(), 28);

    let leap = monthly_report(&repo, 2024, 2).unwrap();
    assert_eq!(leap.days.len(), 29);

    assert!(monthly_report(&repo, 2026, 13).is_err());
}
