//! Lookup and insert operations for [`User`] records.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{NewUser, User};

impl Database {
    /// Fetch a user by email, the unique lookup key.
    ///
    /// Returns [`StoreError::UserNotFound`] when no row matches.
    pub fn find_user_by_email(&self, email: &str) -> Result<User> {
        self.conn()
            .query_row(
                "SELECT id, email, name, role, is_onboarded, profile_url, created_at
                 FROM users
                 WHERE email = ?1",
                params![email],
                row_to_user,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::UserNotFound {
                    email: email.to_string(),
                },
                other => StoreError::Sqlite(other),
            })
    }

    /// Insert a new user and return its generated id.
    pub fn create_user(&self, user: &NewUser) -> Result<i64> {
        insert_user(self.conn(), user)
    }
}

/// Resolve a user id by email on a raw connection (usable inside a
/// transaction, since `Transaction` derefs to `Connection`).
pub(crate) fn user_id_by_email(conn: &Connection, email: &str) -> Result<i64> {
    conn.query_row(
        "SELECT id FROM users WHERE email = ?1",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => StoreError::UserNotFound {
            email: email.to_string(),
        },
        other => StoreError::Sqlite(other),
    })
}

/// Insert a user row on a raw connection and return the generated id.
pub(crate) fn insert_user(conn: &Connection, user: &NewUser) -> Result<i64> {
    conn.execute(
        "INSERT INTO users (email, name, role, is_onboarded, profile_url, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            user.email,
            user.name,
            user.role,
            user.is_onboarded,
            user.profile_url,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Map a `rusqlite::Row` to a [`User`].
fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let created_str: String = row.get(6)?;
    let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        role: row.get(3)?,
        is_onboarded: row.get(4)?,
        profile_url: row.get(5)?,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role;

    fn open_test_db(dir: &tempfile::TempDir) -> Database {
        Database::open_at(&dir.path().join("test.db")).unwrap()
    }

    fn merchant(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Copy Corner".to_string(),
            role: role::MERCHANT.to_string(),
            is_onboarded: true,
            profile_url: None,
        }
    }

    #[test]
    fn create_then_find_by_email() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        let id = db.create_user(&merchant("shop@example.com")).unwrap();
        let user = db.find_user_by_email("shop@example.com").unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.role, role::MERCHANT);
        assert!(user.is_onboarded);
        assert_eq!(user.profile_url, None);
    }

    #[test]
    fn unknown_email_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        let err = db.find_user_by_email("ghost@example.com").unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound { email } if email == "ghost@example.com"));
    }

    #[test]
    fn duplicate_email_violates_unique_constraint() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        db.create_user(&merchant("shop@example.com")).unwrap();
        let err = db.create_user(&merchant("shop@example.com")).unwrap_err();
        assert!(matches!(err, StoreError::Sqlite(_)));
    }
}
