//! CLI configuration loaded from environment variables.

use anyhow::{bail, Context as _, Result};

/// Resolved process configuration.
///
/// Built once at startup and passed by reference into every command
/// handler; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the SQLite database.
    /// Env: `DATABASE_URL` (required; an optional `sqlite://` scheme is
    /// accepted and stripped by the store)
    pub database_url: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fails when `DATABASE_URL` is missing or empty so that no command
    /// ever starts without a usable database location.
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .context("The `DATABASE_URL` environment variable is missing")?;

        if database_url.trim().is_empty() {
            bail!("The `DATABASE_URL` environment variable is empty");
        }

        Ok(Self { database_url })
    }
}
