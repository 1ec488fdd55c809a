//! HTTP collaborator layer. Handlers validate payloads, delegate to the
//! service layer and render JSON; no conflict-checking or aggregation logic
//! lives here.

use validator::Validate;

use crate::services::ServiceError;

pub mod admin;
pub mod public;

/// Runs `validator` checks, folding failures into a 400 response.
pub(crate) fn validated<T: Validate>(form: T) -> Result<T, ServiceError> {
    form.validate()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;
    Ok(form)
}
