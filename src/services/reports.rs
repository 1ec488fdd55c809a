//! Revenue and booking aggregation over date ranges.
//!
//! Plain grouping and summation: transactions feed the revenue figures,
//! bookings feed the status counts. Weekly and monthly reports are folds of
//! the daily report.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::booking::BookingStatus;
use crate::domain::transaction::PaymentMethod;
use crate::repository::{BookingReader, TransactionReader};
use crate::services::{ServiceError, ServiceResult};

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct BreakdownEntry {
    pub count: usize,
    pub revenue: Decimal,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct PaymentTotals {
    pub cash: Decimal,
    pub card: Decimal,
    pub bizum: Decimal,
}

impl PaymentTotals {
    fn add(&mut self, method: PaymentMethod, amount: Decimal) {
        match method {
            PaymentMethod::Cash => self.cash += amount,
            PaymentMethod::Card => self.card += amount,
            PaymentMethod::Bizum => self.bizum += amount,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_revenue: Decimal,
    pub total_transactions: usize,
    pub total_bookings: usize,
    pub completed_bookings: usize,
    pub cancelled_bookings: usize,
    pub pending_bookings: usize,
    /// Per-service sales, keyed by the snapshotted line item name.
    pub service_breakdown: BTreeMap<String, BreakdownEntry>,
    /// Per-worker revenue, keyed by the snapshotted worker name.
    pub worker_breakdown: BTreeMap<String, BreakdownEntry>,
    pub payment_breakdown: PaymentTotals,
    pub average_ticket: Decimal,
    pub generated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub struct WeeklyReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<DailyReport>,
    pub total_revenue: Decimal,
    pub total_bookings: usize,
    pub avg_daily_revenue: Decimal,
    pub generated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DailyReport>,
    pub total_revenue: Decimal,
    pub total_bookings: usize,
    pub avg_daily_revenue: Decimal,
    pub generated_at: DateTime<Utc>,
}

pub fn daily_report<R>(repo: &R, date: NaiveDate) -> ServiceResult<DailyReport>
where
    R: TransactionReader + BookingReader + ?Sized,
{
    let transactions = repo.list_transactions_by_date(date)?;
    let bookings = repo.list_bookings_by_date(date)?;

    let mut service_breakdown: BTreeMap<String, BreakdownEntry> = BTreeMap::new();
    let mut worker_breakdown: BTreeMap<String, BreakdownEntry> = BTreeMap::new();
    let mut payment_breakdown = PaymentTotals::default();
    let mut total_revenue = Decimal::ZERO;

    for transaction in &transactions {
        for item in &transaction.items {
            let entry = service_breakdown.entry(item.name.clone()).or_default();
            entry.count += 1;
            entry.revenue += item.price;
        }
        let entry = worker_breakdown
            .entry(transaction.worker.name.clone())
            .or_default();
        entry.count += 1;
        entry.revenue += transaction.total;

        payment_breakdown.add(transaction.payment_method, transaction.total);
        total_revenue += transaction.total;
    }

    let average_ticket = if transactions.is_empty() {
        Decimal::ZERO
    } else {
        total_revenue / Decimal::from(transactions.len() as u64)
    };

    let count_status =
        |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();

    Ok(DailyReport {
        date,
        total_revenue,
        total_transactions: transactions.len(),
        total_bookings: bookings.len(),
        completed_bookings: count_status(BookingStatus::Completed),
        cancelled_bookings: count_status(BookingStatus::Cancelled),
        pending_bookings: count_status(BookingStatus::Pending),
        service_breakdown,
        worker_breakdown,
        payment_breakdown,
        average_ticket,
        generated_at: Utc::now(),
    })
}

/// Seven consecutive daily reports starting at `start`.
pub fn weekly_report<R>(repo: &R, start: NaiveDate) -> ServiceResult<WeeklyReport>
where
    R: TransactionReader + BookingReader + ?Sized,
{
    let mut days = Vec::with_capacity(7);
    let mut total_revenue = Decimal::ZERO;
    let mut total_bookings = 0;

    for offset in 0..7u64 {
        let date = start
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| ServiceError::Validation("date out of range".to_string()))?;
        let daily = daily_report(repo, date)?;
        total_revenue += daily.total_revenue;
        total_bookings += daily.total_bookings;
        days.push(daily);
    }

    let end_date = days[6].date;
    Ok(WeeklyReport {
        start_date: start,
        end_date,
        days,
        total_revenue,
        total_bookings,
        avg_daily_revenue: total_revenue / Decimal::from(7),
        generated_at: Utc::now(),
    })
}

/// Daily reports for every day of the given calendar month.
pub fn monthly_report<R>(repo: &R, year: i32, month: u32) -> ServiceResult<MonthlyReport>
where
    R: TransactionReader + BookingReader + ?Sized,
{
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ServiceError::Validation("invalid year/month".to_string()))?;
    let days_in_month = days_in_month(first);

    let mut days = Vec::with_capacity(days_in_month as usize);
    let mut total_revenue = Decimal::ZERO;
    let mut total_bookings = 0;

    for day in 1..=days_in_month {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ServiceError::Validation("invalid date".to_string()))?;
        let daily = daily_report(repo, date)?;
        total_revenue += daily.total_revenue;
        total_bookings += daily.total_bookings;
        days.push(daily);
    }

    Ok(MonthlyReport {
        year,
        month,
        days,
        total_revenue,
        total_bookings,
        avg_daily_revenue: total_revenue / Decimal::from(days_in_month),
        generated_at: Utc::now(),
    })
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next_month {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        // unreachable for valid months; fall back to the shortest month
        None => 28,
    }
}
