//! # bindery-fixtures
//!
//! Pure fixture planning for the bindery database: declarative rule tables
//! and the generators that turn them into insert payloads.
//!
//! Nothing here touches SQL.  Generators take any [`rand::Rng`], so the CLI
//! feeds them `thread_rng` while tests replay a seeded `StdRng`, and return
//! fully-decided payloads that `bindery-store` inserts atomically.

pub mod catalog;
pub mod order;
pub mod rules;

pub use catalog::plan_catalog;
pub use order::plan_order;
pub use rules::{CatalogRules, OrderRules};
