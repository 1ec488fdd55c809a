//! The key-value document store behind the repositories.
//!
//! The persisted state is a fixed set of named JSON documents, each read and
//! written whole. Mutations are synchronous read-modify-write cycles with
//! last-write-wins semantics at whole-key granularity; there is no
//! transaction boundary spanning keys.

use serde_json::Value;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// The durable document set. A session's auth flag is deliberately not part
/// of this list; it lives in the cookie session and dies with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Services,
    Workers,
    Clients,
    Bookings,
    Transactions,
    Notifications,
    Settings,
    Admin,
}

impl StoreKey {
    pub const ALL: [StoreKey; 8] = [
        StoreKey::Services,
        StoreKey::Workers,
        StoreKey::Clients,
        StoreKey::Bookings,
        StoreKey::Transactions,
        StoreKey::Notifications,
        StoreKey::Settings,
        StoreKey::Admin,
    ];

    /// Keys bundled by the backup export; the admin credentials stay out.
    pub const EXPORTED: [StoreKey; 7] = [
        StoreKey::Services,
        StoreKey::Workers,
        StoreKey::Clients,
        StoreKey::Bookings,
        StoreKey::Transactions,
        StoreKey::Notifications,
        StoreKey::Settings,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StoreKey::Services => "services",
            StoreKey::Workers => "workers",
            StoreKey::Clients => "clients",
            StoreKey::Bookings => "bookings",
            StoreKey::Transactions => "transactions",
            StoreKey::Notifications => "notifications",
            StoreKey::Settings => "settings",
            StoreKey::Admin => "admin",
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt document {key}: {source}")]
    CorruptDocument {
        key: &'static str,
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A synchronous engine over the opaque key→document map. Implementations
/// must make a written document visible to the next read.
pub trait StorageEngine: Send + Sync {
    /// Reads a whole document; `Ok(None)` when the key was never written.
    fn read(&self, key: StoreKey) -> Result<Option<Value>, StorageError>;

    /// Replaces a whole document.
    fn write(&self, key: StoreKey, value: &Value) -> Result<(), StorageError>;

    /// Removes a document; absent keys are not an error.
    fn remove(&self, key: StoreKey) -> Result<(), StorageError>;
}
