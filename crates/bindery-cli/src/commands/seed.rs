use anyhow::{Context as _, Result};

use bindery_fixtures::{plan_catalog, CatalogRules};
use bindery_store::Database;

use crate::config::Config;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// The email of the merchant account
    #[arg(short = 'e', long)]
    pub merchant_email: String,

    /// The name of the merchant account
    #[arg(short = 'n', long)]
    pub merchant_name: String,
}

pub fn run(config: &Config, args: Args) -> Result<()> {
    let mut db = Database::open_url(&config.database_url)?;

    let seed = plan_catalog(
        &mut rand::thread_rng(),
        &CatalogRules::default(),
        &args.merchant_email,
        &args.merchant_name,
    );

    let summary = db
        .seed_catalog(&seed)
        .context("Failed to seed the bookbinding catalog")?;

    println!(
        "Created {} bookbinding types and a merchant user with ID `{}`",
        summary.bookbinding_types, summary.merchant_id
    );
    Ok(())
}
