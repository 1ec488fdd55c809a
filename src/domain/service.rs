//! The service catalog: what the shop sells and how long each item takes.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{DurationMinutes, NonEmptyString, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    /// Minutes consumed by the slot generator when this service is booked.
    pub duration: DurationMinutes,
    pub price: Decimal,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    pub active: bool,
    /// Presentation order; not uniqueness-enforced.
    pub order: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewService {
    pub name: NonEmptyString,
    pub duration: DurationMinutes,
    pub price: Decimal,
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl NewService {
    pub fn new(
        name: &str,
        duration: u32,
        price: Decimal,
    ) -> Result<Self, TypeConstraintError> {
        if price.is_sign_negative() {
            return Err(TypeConstraintError::NegativePrice);
        }
        Ok(Self {
            name: NonEmptyString::new(name)?,
            duration: DurationMinutes::new(duration)?,
            price,
            icon: None,
            description: None,
        })
    }
}

/// Partial update applied by admin edits; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateService {
    pub name: Option<NonEmptyString>,
    pub duration: Option<DurationMinutes>,
    pub price: Option<Decimal>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_service_rejects_bad_values() {
        assert!(NewService::new("Corte de Pelo", 40, dec!(15)).is_ok());
        assert!(NewService::new("", 40, dec!(15)).is_err());
        assert!(NewService::new("Corte", 0, dec!(15)).is_err());
        assert!(NewService::new("Corte", 40, dec!(-1)).is_err());
    }
}
