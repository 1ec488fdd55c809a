//! Admin credential checks and the session auth flag.
//!
//! The authenticated state is a session-scoped flag in the cookie session —
//! explicitly passed to every admin operation, never a durable document —
//! so it disappears when the session does. There is no lockout or backoff.

use actix_session::Session;

use crate::domain::admin::AdminAccount;
use crate::repository::{AdminReader, AdminWriter};
use crate::services::{ServiceError, ServiceResult};

const SESSION_AUTH_KEY: &str = "admin_authenticated";

/// Verifies credentials against the stored account and marks the session
/// authenticated. Wrong username or password is an `AuthFailure`.
pub fn login<R>(repo: &R, session: &Session, username: &str, password: &str) -> ServiceResult<()>
where
    R: AdminReader + ?Sized,
{
    let account = repo
        .get_admin_account()?
        .ok_or(ServiceError::AuthFailure)?;
    if account.username != username {
        return Err(ServiceError::AuthFailure);
    }
    let valid = bcrypt::verify(password, &account.password_hash)
        .map_err(|_| ServiceError::AuthFailure)?;
    if !valid {
        return Err(ServiceError::AuthFailure);
    }
    session
        .insert(SESSION_AUTH_KEY, true)
        .map_err(|e| ServiceError::Session(e.to_string()))?;
    Ok(())
}

/// Clears the session flag.
pub fn logout(session: &Session) {
    session.remove(SESSION_AUTH_KEY);
}

/// Guard for every admin operation.
pub fn require_admin(session: &Session) -> ServiceResult<()> {
    match session.get::<bool>(SESSION_AUTH_KEY) {
        Ok(Some(true)) => Ok(()),
        Ok(_) => Err(ServiceError::Unauthorized),
        Err(e) => Err(ServiceError::Session(e.to_string())),
    }
}

/// Changes the admin password after verifying the old one.
pub fn change_password<R>(repo: &R, old_password: &str, new_password: &str) -> ServiceResult<()>
where
    R: AdminReader + AdminWriter + ?Sized,
{
    let mut account = repo
        .get_admin_account()?
        .ok_or(ServiceError::AuthFailure)?;
    let valid = bcrypt::verify(old_password, &account.password_hash)
        .map_err(|_| ServiceError::AuthFailure)?;
    if !valid {
        return Err(ServiceError::AuthFailure);
    }
    account.password_hash = hash_password(new_password)?;
    repo.save_admin_account(&account)?;
    Ok(())
}

/// bcrypt hash at the default cost.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| ServiceError::Validation(format!("password hash failed: {e}")))
}

/// Builds a fresh admin account record.
pub fn new_admin_account(username: &str, password: &str, name: &str) -> ServiceResult<AdminAccount> {
    Ok(AdminAccount {
        username: username.to_string(),
        password_hash: hash_password(password)?,
        name: name.to_string(),
        created_at: chrono::Utc::now(),
    })
}
