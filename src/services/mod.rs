//! Business operations over the repository capabilities.
//!
//! Handlers stay thin: anything with a rule in it (slot computation, booking
//! transactions, sales, reports, credentials) lives here, generic over the
//! repository traits so tests can run against the in-memory engine.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod backup;
pub mod booking;
pub mod clients;
pub mod pos;
pub mod reports;
pub mod slots;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required input missing or malformed; nothing was written.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entity not found")]
    NotFound,

    /// Wrong credentials on login or password change.
    #[error("Invalid credentials")]
    AuthFailure,

    /// Admin session flag missing.
    #[error("Authentication required")]
    Unauthorized,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Session error: {0}")]
    Session(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::AuthFailure | ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Repository(_) | ServiceError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("request failed: {self}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
