use chrono::{Local, NaiveDate, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::time::ClockTime;
use crate::domain::transaction::{LineItem, PaymentMethod};
use crate::domain::types::TypeConstraintError;
use crate::services::pos::SaleRequest;
use crate::services::{ServiceError, ServiceResult};

#[derive(Serialize, Deserialize, Validate)]
pub struct SaleItemForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub price: Decimal,
}

#[derive(Deserialize, Validate)]
/// Payload for recording a point-of-sale payment.
pub struct SaleForm {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_phone: String,
    pub worker_id: Uuid,
    #[validate(length(min = 1), nested)]
    pub items: Vec<SaleItemForm>,
    pub payment_method: PaymentMethod,
    /// Defaults to today's local date.
    pub date: Option<NaiveDate>,
    /// `HH:MM`; defaults to the current local time.
    pub time: Option<String>,
}

impl SaleForm {
    pub fn into_request(self) -> ServiceResult<SaleRequest> {
        if self.items.iter().any(|item| item.price.is_sign_negative()) {
            return Err(TypeConstraintError::NegativePrice.into());
        }
        let now = Local::now();
        let date = self.date.unwrap_or_else(|| now.date_naive());
        let time = match self.time {
            Some(raw) => raw.parse().map_err(|_| {
                ServiceError::Validation("invalid time, expected HH:MM".to_string())
            })?,
            None => ClockTime::from_minutes((now.hour() * 60 + now.minute()) as u16)?,
        };
        Ok(SaleRequest {
            client_name: self.client_name,
            client_phone: self.client_phone,
            worker_id: self.worker_id,
            items: self
                .items
                .into_iter()
                .map(|item| LineItem {
                    name: item.name,
                    price: item.price,
                })
                .collect(),
            payment_method: self.payment_method,
            date,
            time,
        })
    }
}
