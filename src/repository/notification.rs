use chrono::Utc;
use uuid::Uuid;

use crate::domain::notification::{NewNotification, Notification, MAX_NOTIFICATIONS};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DocumentRepository, NotificationReader, NotificationWriter};
use crate::storage::StoreKey;

impl NotificationReader for DocumentRepository {
    fn list_notifications(&self) -> RepositoryResult<Vec<Notification>> {
        self.load_vec(StoreKey::Notifications)
    }

    fn unread_notification_count(&self) -> RepositoryResult<usize> {
        Ok(self
            .list_notifications()?
            .iter()
            .filter(|n| !n.read)
            .count())
    }
}

impl NotificationWriter for DocumentRepository {
    fn create_notification(
        &self,
        new_notification: &NewNotification,
    ) -> RepositoryResult<Notification> {
        let mut notifications = self.list_notifications()?;
        let notification = Notification {
            id: Uuid::new_v4(),
            kind: new_notification.kind.clone(),
            title: new_notification.title.clone(),
            message: new_notification.message.clone(),
            booking_id: new_notification.booking_id,
            read: false,
            created_at: Utc::now(),
        };
        // newest first, capped feed
        notifications.insert(0, notification.clone());
        notifications.truncate(MAX_NOTIFICATIONS);
        self.save_vec(StoreKey::Notifications, &notifications)?;
        Ok(notification)
    }

    fn mark_notification_read(&self, id: Uuid) -> RepositoryResult<()> {
        let mut notifications = self.list_notifications()?;
        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(());
        };
        notification.read = true;
        self.save_vec(StoreKey::Notifications, &notifications)
    }

    fn mark_all_notifications_read(&self) -> RepositoryResult<()> {
        let mut notifications = self.list_notifications()?;
        for notification in &mut notifications {
            notification.read = true;
        }
        self.save_vec(StoreKey::Notifications, &notifications)
    }

    fn clear_notifications(&self) -> RepositoryResult<()> {
        self.save_vec::<Notification>(StoreKey::Notifications, &[])
    }
}
