use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error (constraint violations included).
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The given email does not map to an existing user.
    #[error("No user exists with email `{email}`")]
    UserNotFound { email: String },

    /// A query expected exactly one row but found none.
    #[error("Record not found")]
    NotFound,

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// An order tree association points at a file or service position that
    /// was never part of the tree.
    #[error("Order tree references an unknown position: {0}")]
    InvalidTree(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
