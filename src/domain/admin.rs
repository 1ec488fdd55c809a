//! The single admin account guarding the management surface.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminAccount {
    pub username: String,
    /// bcrypt hash of the admin password.
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
