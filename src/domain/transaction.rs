//! Point-of-sale transactions. Independent of bookings: a walk-in sale does
//! not need an appointment behind it.
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::booking::WorkerSnapshot;
use crate::domain::time::ClockTime;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Bizum,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Bizum];
}

/// A sold line item, snapshotted by name and price at sale time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub price: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub client_id: Option<Uuid>,
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    pub worker: WorkerSnapshot,
    pub items: Vec<LineItem>,
    /// Always the sum of the line item prices.
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub created_at: DateTime<Utc>,
}

/// A sale ready to be appended; the service layer computes the total and
/// resolves the client link.
#[derive(Clone, Debug)]
pub struct NewTransaction {
    pub client_id: Option<Uuid>,
    pub client_name: String,
    pub client_phone: String,
    pub worker: WorkerSnapshot,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
    pub time: ClockTime,
}
