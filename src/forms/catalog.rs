use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::domain::service::{NewService, UpdateService};
use crate::domain::settings::{SocialMedia, UpdateSettings};
use crate::domain::time::ClockTime;
use crate::domain::types::{DurationMinutes, NonEmptyString, TypeConstraintError};
use crate::domain::worker::{NewWorker, UpdateWorker, WeeklySchedule};
use crate::services::{ServiceError, ServiceResult};

#[derive(Deserialize, Validate)]
/// Payload for adding a catalog service.
pub struct AddServiceForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub duration: u32,
    pub price: Decimal,
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<AddServiceForm> for NewService {
    type Error = ServiceError;

    fn try_from(form: AddServiceForm) -> Result<Self, Self::Error> {
        let mut service = NewService::new(&form.name, form.duration, form.price)?;
        service.icon = form.icon;
        service.description = form.description;
        Ok(service)
    }
}

#[derive(Deserialize, Default)]
/// Partial service edit; omitted fields are untouched.
pub struct EditServiceForm {
    pub name: Option<String>,
    pub duration: Option<u32>,
    pub price: Option<Decimal>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub order: Option<i32>,
}

impl TryFrom<EditServiceForm> for UpdateService {
    type Error = ServiceError;

    fn try_from(form: EditServiceForm) -> Result<Self, Self::Error> {
        if let Some(price) = form.price {
            if price.is_sign_negative() {
                return Err(TypeConstraintError::NegativePrice.into());
            }
        }
        Ok(UpdateService {
            name: form.name.map(NonEmptyString::new).transpose()?,
            duration: form.duration.map(DurationMinutes::new).transpose()?,
            price: form.price,
            icon: form.icon,
            description: form.description,
            active: form.active,
            order: form.order,
        })
    }
}

#[derive(Deserialize, Validate)]
/// Payload for adding a worker.
pub struct AddWorkerForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub schedule: WeeklySchedule,
}

impl TryFrom<AddWorkerForm> for NewWorker {
    type Error = ServiceError;

    fn try_from(form: AddWorkerForm) -> Result<Self, Self::Error> {
        let mut worker = NewWorker::new(&form.name, form.schedule)?;
        worker.phone = form.phone;
        worker.email = form.email;
        worker.color = form.color;
        worker.specialties = form.specialties;
        Ok(worker)
    }
}

#[derive(Deserialize, Default)]
/// Partial worker edit; omitted fields are untouched.
pub struct EditWorkerForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub color: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub schedule: Option<WeeklySchedule>,
    pub active: Option<bool>,
}

impl TryFrom<EditWorkerForm> for UpdateWorker {
    type Error = ServiceError;

    fn try_from(form: EditWorkerForm) -> Result<Self, Self::Error> {
        Ok(UpdateWorker {
            name: form.name.map(NonEmptyString::new).transpose()?,
            phone: form.phone,
            email: form.email,
            color: form.color,
            specialties: form.specialties,
            schedule: form.schedule,
            active: form.active,
        })
    }
}

#[derive(Deserialize, Default)]
/// Partial settings edit; times come in as `HH:MM` strings.
pub struct SettingsForm {
    pub business_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub slot_interval: Option<u32>,
    pub social_media: Option<SocialMedia>,
    pub booking_message: Option<String>,
    pub cancellation_policy: Option<String>,
}

impl SettingsForm {
    pub fn into_updates(self) -> ServiceResult<UpdateSettings> {
        let parse_time = |raw: Option<String>| -> ServiceResult<Option<ClockTime>> {
            raw.map(|s| {
                s.parse().map_err(|_| {
                    ServiceError::Validation("invalid time, expected HH:MM".to_string())
                })
            })
            .transpose()
        };
        if let Some(interval) = self.slot_interval {
            if interval == 0 {
                return Err(ServiceError::Validation(
                    "slot interval must be positive".to_string(),
                ));
            }
        }
        Ok(UpdateSettings {
            business_name: self.business_name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            open_time: parse_time(self.open_time)?,
            close_time: parse_time(self.close_time)?,
            slot_interval: self.slot_interval,
            social_media: self.social_media,
            booking_message: self.booking_message,
            cancellation_policy: self.cancellation_policy,
        })
    }
}
