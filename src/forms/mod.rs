//! Deserialized and validated request payloads, converted into domain
//! inputs before they reach the service layer.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod pos;
