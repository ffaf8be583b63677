//! # bindery-cli
//!
//! Command-line fixture tool for the bindery print-order database.
//!
//! This binary provides:
//! - **create-order**: one fully-populated order (status history, files,
//!   optional services and their file associations) for an existing user
//! - **seed**: the bookbinding catalog plus the merchant account
//! - **add-merchant**: a standalone merchant account
//!
//! Every command runs its inserts in a single transaction; a failure at any
//! point leaves no partial rows behind.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "bindery", version, about = "Synthetic fixture data for the print-order database")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Creates a single fully-populated order for an existing user
    CreateOrder(commands::create_order::Args),

    /// Populates the bookbinding catalog and creates the merchant account
    Seed(commands::seed::Args),

    /// Adds a merchant account to the database
    AddMerchant(commands::add_merchant::Args),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (respects RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration.  A missing or empty DATABASE_URL is fatal before
    // any command runs.
    let config = Config::from_env()?;
    info!(database_url = %config.database_url, "loaded configuration");

    let cli = Cli::parse();

    match cli.command {
        Command::CreateOrder(args) => commands::create_order::run(&config, args),
        Command::Seed(args) => commands::seed::run(&config, args),
        Command::AddMerchant(args) => commands::add_merchant::run(&config, args),
    }
}
