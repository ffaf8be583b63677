use anyhow::{Context as _, Result};
use chrono::Utc;
use tracing::info;

use bindery_fixtures::{plan_order, OrderRules};
use bindery_store::Database;

use crate::config::Config;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// The email of the user that will own the order
    pub email: String,

    /// The order number sequence
    pub order_number: String,
}

pub fn run(config: &Config, args: Args) -> Result<()> {
    let mut db = Database::open_url(&config.database_url)?;

    let tree = plan_order(
        &mut rand::thread_rng(),
        &OrderRules::default(),
        &args.order_number,
        Utc::now(),
    );
    info!(
        files = tree.files.len(),
        services = tree.services.len(),
        "planned order fixture"
    );

    let order_id = db
        .create_order_tree(&args.email, &tree)
        .with_context(|| format!("Failed to create an order for `{}`", args.email))?;

    println!("Created order `{}` with ID `{order_id}`", args.order_number);
    Ok(())
}
