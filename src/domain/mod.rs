//! Domain aggregates exposed by the booking service layer.

pub mod admin;
pub mod booking;
pub mod client;
pub mod notification;
pub mod service;
pub mod settings;
pub mod time;
pub mod transaction;
pub mod types;
pub mod worker;
