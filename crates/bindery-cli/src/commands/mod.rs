//! Fixture command handlers.
//!
//! Each sub-module owns one subcommand: its clap argument struct and a
//! `run` function taking the resolved [`Config`](crate::config::Config).

pub mod add_merchant;
pub mod create_order;
pub mod seed;
