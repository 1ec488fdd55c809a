//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Directory holding the JSON document store.
    pub data_dir: String,
    /// Static assets served at `/assets`.
    pub assets_dir: String,
    /// Session cookie signing key material.
    pub secret: String,
    /// Password for the admin account seeded on first start.
    pub admin_password: String,
}
