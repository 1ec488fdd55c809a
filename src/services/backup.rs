//! On-demand JSON backup and destructive reset. Restore is deliberately not
//! implemented.

use crate::repository::BackupStore;
use crate::services::ServiceResult;

/// One JSON object bundling every business document (admin credentials
/// excluded), suitable for download as a backup file.
pub fn export_data<R>(repo: &R) -> ServiceResult<serde_json::Value>
where
    R: BackupStore + ?Sized,
{
    repo.export_documents().map_err(Into::into)
}

/// Clears every stored document, admin account included. Confirmation is the
/// caller's responsibility; there is no undo.
pub fn reset_data<R>(repo: &R) -> ServiceResult<()>
where
    R: BackupStore + ?Sized,
{
    log::warn!("destructive reset: clearing all stored documents");
    repo.reset_documents().map_err(Into::into)
}
