//! # bindery-store
//!
//! SQLite persistence layer for the bindery fixture tool.
//!
//! The crate exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides the two transactional write
//! operations the fixture commands need: inserting a fully-populated order
//! tree and seeding the bookbinding catalog.  Both either commit every row
//! or none of them.

pub mod catalog;
pub mod database;
pub mod migrations;
pub mod models;
pub mod orders;
pub mod users;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use models::*;
