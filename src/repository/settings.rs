use chrono::Utc;

use crate::domain::admin::AdminAccount;
use crate::domain::settings::{ShopSettings, UpdateSettings};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AdminReader, AdminWriter, DocumentRepository, SettingsReader, SettingsWriter,
};
use crate::storage::StoreKey;

impl SettingsReader for DocumentRepository {
    fn get_settings(&self) -> RepositoryResult<Option<ShopSettings>> {
        self.load_doc(StoreKey::Settings)
    }
}

impl SettingsWriter for DocumentRepository {
    fn save_settings(&self, settings: &ShopSettings) -> RepositoryResult<()> {
        self.save_doc(StoreKey::Settings, settings)
    }

    fn update_settings(&self, updates: &UpdateSettings) -> RepositoryResult<Option<ShopSettings>> {
        let Some(mut settings) = self.get_settings()? else {
            return Ok(None);
        };
        if let Some(business_name) = &updates.business_name {
            settings.business_name = business_name.clone();
        }
        if let Some(address) = &updates.address {
            settings.address = address.clone();
        }
        if let Some(phone) = &updates.phone {
            settings.phone = phone.clone();
        }
        if let Some(email) = &updates.email {
            settings.email = email.clone();
        }
        if let Some(open_time) = updates.open_time {
            settings.open_time = open_time;
        }
        if let Some(close_time) = updates.close_time {
            settings.close_time = close_time;
        }
        if let Some(slot_interval) = updates.slot_interval {
            settings.slot_interval = slot_interval;
        }
        if let Some(social_media) = &updates.social_media {
            settings.social_media = social_media.clone();
        }
        if let Some(booking_message) = &updates.booking_message {
            settings.booking_message = booking_message.clone();
        }
        if let Some(cancellation_policy) = &updates.cancellation_policy {
            settings.cancellation_policy = cancellation_policy.clone();
        }
        settings.updated_at = Utc::now();
        self.save_settings(&settings)?;
        Ok(Some(settings))
    }
}

impl AdminReader for DocumentRepository {
    fn get_admin_account(&self) -> RepositoryResult<Option<AdminAccount>> {
        self.load_doc(StoreKey::Admin)
    }
}

impl AdminWriter for DocumentRepository {
    fn save_admin_account(&self, account: &AdminAccount) -> RepositoryResult<()> {
        self.save_doc(StoreKey::Admin, account)
    }
}
