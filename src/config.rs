//! Runtime configuration for the credit service.
//!
//! The whole environment surface is two variables, deserialized into a
//! typed struct with `envy` so a missing or malformed value fails at
//! startup rather than at first use.

use serde::Deserialize;

/// Settings read from the environment at startup.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string for the
///   credits database
/// - `SERVER_PORT` (optional): port the HTTP server binds, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Port used when SERVER_PORT is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// A `.env` file is loaded first when present (development
    /// convenience; absent in deployed environments). `envy` maps field
    /// names to upper-cased variables, so `database_url` comes from
    /// `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is missing or a value cannot be parsed
    /// into its field type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }
}
