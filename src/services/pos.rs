//! Point-of-sale: record a payment, update the linked client's history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::booking::WorkerSnapshot;
use crate::domain::time::ClockTime;
use crate::domain::transaction::{LineItem, NewTransaction, PaymentMethod, Transaction};
use crate::repository::{ClientReader, ClientWriter, TransactionWriter, WorkerReader};
use crate::services::clients::find_or_create_client;
use crate::services::{ServiceError, ServiceResult};

/// Fallback display name for anonymous walk-ins.
pub const ANONYMOUS_CLIENT: &str = "Cliente anónimo";

#[derive(Clone, Debug)]
pub struct SaleRequest {
    pub client_name: String,
    pub client_phone: String,
    pub worker_id: Uuid,
    pub items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
    pub date: NaiveDate,
    pub time: ClockTime,
}

/// Records a sale. The total is always recomputed as the sum of line items;
/// with a phone the client is linked (created on first contact) and its
/// visit counters bumped by the sale total.
pub fn record_sale<R>(repo: &R, request: SaleRequest) -> ServiceResult<Transaction>
where
    R: WorkerReader + ClientReader + ClientWriter + TransactionWriter + ?Sized,
{
    if request.items.is_empty() {
        return Err(ServiceError::Validation(
            "a sale needs at least one item".to_string(),
        ));
    }

    let worker = repo
        .get_worker_by_id(request.worker_id)?
        .ok_or(ServiceError::NotFound)?;

    let client_name = {
        let trimmed = request.client_name.trim();
        if trimmed.is_empty() {
            ANONYMOUS_CLIENT.to_string()
        } else {
            trimmed.to_string()
        }
    };

    let client = find_or_create_client(repo, &client_name, &request.client_phone, None)?;
    let total: Decimal = request.items.iter().map(|i| i.price).sum();

    let transaction = repo.create_transaction(&NewTransaction {
        client_id: client.as_ref().map(|c| c.id),
        client_name,
        client_phone: request.client_phone.trim().to_string(),
        worker: WorkerSnapshot {
            id: worker.id,
            name: worker.name.clone(),
        },
        items: request.items,
        total,
        payment_method: request.payment_method,
        date: request.date,
        time: request.time,
    })?;

    if let Some(client) = client {
        repo.record_client_visit(client.id, total)?;
    }

    Ok(transaction)
}
