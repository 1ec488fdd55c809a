//! Client records, deduplicated by phone number.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{normalize_phone, NonEmptyString, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    /// Natural dedup key; normalized at creation.
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
    pub visits: u32,
    pub total_spent: Decimal,
    pub last_visit: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: NonEmptyString,
    pub phone: String,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl NewClient {
    pub fn new(name: &str, phone: &str) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            phone: normalize_phone(phone).unwrap_or_default(),
            email: None,
            notes: None,
        })
    }
}

/// Partial update applied by admin edits; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateClient {
    pub name: Option<NonEmptyString>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

/// Aggregate figures for the admin client overview.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ClientStats {
    pub total: usize,
    pub total_revenue: Decimal,
    pub avg_spent: Decimal,
    pub top_clients: Vec<Client>,
}
