use anyhow::{Context as _, Result};

use bindery_store::{role, Database, NewUser};

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
    let db = Database::open_url(&config.database_url)?;

    let merchant_id = db
        .create_user(&NewUser {
            email: args.merchant_email,
            name: args.merchant_name,
            role: role::MERCHANT.to_string(),
            is_onboarded: true,
            profile_url: None,
        })
        .context("Failed while trying to create a merchant account")?;

    println!("Created a merchant user with ID `{merchant_id}`");
    Ok(())
}
