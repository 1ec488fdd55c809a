//! Shop-wide settings consulted by the slot generator and the public site.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::time::ClockTime;

/// Step size used when no interval is recorded in the settings document.
pub const DEFAULT_SLOT_INTERVAL: u32 = 30;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct SocialMedia {
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub tiktok: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShopSettings {
    pub business_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// Opening defaults applied when a worker carries no explicit override.
    pub open_time: ClockTime,
    pub close_time: ClockTime,
    /// Grid step in minutes for bookable start times.
    pub slot_interval: u32,
    #[serde(default)]
    pub social_media: SocialMedia,
    #[serde(default)]
    pub booking_message: String,
    #[serde(default)]
    pub cancellation_policy: String,
    pub updated_at: DateTime<Utc>,
}

impl ShopSettings {
    /// Interval actually used by the slot generator; a zero or missing value
    /// in a hand-edited document falls back to the default.
    pub fn effective_slot_interval(&self) -> u32 {
        if self.slot_interval == 0 {
            DEFAULT_SLOT_INTERVAL
        } else {
            self.slot_interval
        }
    }
}

/// Partial settings update; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateSettings {
    pub business_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub open_time: Option<ClockTime>,
    pub close_time: Option<ClockTime>,
    pub slot_interval: Option<u32>,
    pub social_media: Option<SocialMedia>,
    pub booking_message: Option<String>,
    pub cancellation_policy: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn zero_interval_falls_back_to_the_default() {
        let mut settings = ShopSettings {
            business_name: "Test Shop".to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            open_time: "10:00".parse().unwrap(),
            close_time: "20:00".parse().unwrap(),
            slot_interval: 0,
            social_media: SocialMedia::default(),
            booking_message: String::new(),
            cancellation_policy: String::new(),
            updated_at: Utc::now(),
        };
        assert_eq!(settings.effective_slot_interval(), DEFAULT_SLOT_INTERVAL);

        settings.slot_interval = 15;
        assert_eq!(settings.effective_slot_interval(), 15);
    }
}
