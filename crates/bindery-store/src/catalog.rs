//! Bookbinding catalog seeding.
//!
//! [`Database::seed_catalog`] inserts the bookbinding styles, one
//! paper-size association per style and the merchant account in a single
//! transaction.  The paper size used for the associations is the one the
//! datastore flags as default; the rule for picking it never leaves this
//! module.

use rusqlite::{params, Connection};

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{BookbindingType, CatalogSeed, CatalogSummary, PaperSize};
use crate::users;

impl Database {
    /// Seed the bookbinding catalog and create the merchant account.
    ///
    /// Every style is associated with the shop-default paper size and
    /// marked coverable.  All rows commit together or not at all.
    pub fn seed_catalog(&mut self, seed: &CatalogSeed) -> Result<CatalogSummary> {
        let tx = self.conn_mut().transaction()?;

        let paper_size_id = default_paper_size_id(&tx)?;

        for style in &seed.bookbinding_types {
            tx.execute(
                "INSERT INTO bookbinding_types (name, is_available) VALUES (?1, ?2)",
                params![style.name, style.is_available],
            )?;
            let bookbinding_type_id = tx.last_insert_rowid();

            tx.execute(
                "INSERT INTO bookbinding_types_paper_sizes
                     (bookbinding_type_id, paper_size_id, coverable)
                 VALUES (?1, ?2, ?3)",
                params![bookbinding_type_id, paper_size_id, true],
            )?;
        }

        let merchant_id = users::insert_user(&tx, &seed.merchant)?;

        tx.commit()?;
        Ok(CatalogSummary {
            bookbinding_types: seed.bookbinding_types.len(),
            merchant_id,
        })
    }

    /// List every bookbinding style, ordered by id.
    pub fn list_bookbinding_types(&self) -> Result<Vec<BookbindingType>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name, is_available FROM bookbinding_types ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(BookbindingType {
                id: row.get(0)?,
                name: row.get(1)?,
                is_available: row.get(2)?,
            })
        })?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::Sqlite)
    }

    /// List the paper sizes associated with a bookbinding style.
    pub fn paper_sizes_for_type(&self, bookbinding_type_id: i64) -> Result<Vec<PaperSize>> {
        let mut stmt = self.conn().prepare(
            "SELECT p.id, p.name, p.length_mm, p.width_mm, p.is_default
             FROM bookbinding_types_paper_sizes bp
             JOIN paper_sizes p ON p.id = bp.paper_size_id
             WHERE bp.bookbinding_type_id = ?1
             ORDER BY p.id ASC",
        )?;

        let rows = stmt.query_map(params![bookbinding_type_id], |row| {
            Ok(PaperSize {
                id: row.get(0)?,
                name: row.get(1)?,
                length_mm: row.get(2)?,
                width_mm: row.get(3)?,
                is_default: row.get(4)?,
            })
        })?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::Sqlite)
    }
}

/// Resolve the id of the paper size the datastore flags as default.
pub(crate) fn default_paper_size_id(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT id FROM paper_sizes WHERE is_default = 1 ORDER BY id LIMIT 1",
        [],
        |row| row.get(0),
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
        other => StoreError::Sqlite(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{role, NewBookbindingType, NewUser};

    fn open_test_db(dir: &tempfile::TempDir) -> Database {
        Database::open_at(&dir.path().join("test.db")).unwrap()
    }

    fn seed(n: usize, merchant_email: &str) -> CatalogSeed {
        CatalogSeed {
            bookbinding_types: (0..n)
                .map(|i| NewBookbindingType {
                    name: format!("Binding {i}"),
                    is_available: i % 2 == 0,
                })
                .collect(),
            merchant: NewUser {
                email: merchant_email.to_string(),
                name: "Copy Corner".to_string(),
                role: role::MERCHANT.to_string(),
                is_onboarded: true,
                profile_url: None,
            },
        }
    }

    #[test]
    fn seeds_catalog_and_merchant() {
        let dir = tempfile::tempdir().unwrap();
        let mut db = open_test_db(&dir);

        let summary = db.seed_catalog(&seed(7, "shop@example.com")).unwrap();
        assert_eq!(summary.bookbinding_types, 7);

        let styles = db.list_bookbinding_types().unwrap();
        assert_eq!(styles.len(), 7);
        for style in &styles {
            // Exactly one association per style, using the default size.
            let sizes = db.paper_sizes_for_type(style.id).unwrap();
            assert_eq!(sizes.len(), 1);
            assert!(sizes[0].is_default);
        }

        let merchant = db.find_user_by_email("shop@example.com").unwrap();
        assert_eq!(merchant.id, summary.merchant_id);
        assert_eq!(merchant.role, role::MERCHANT);
        assert!(merchant.is_onboarded);
    }

    #[test]
    fn default_paper_size_is_seeded_by_migration() {
        let dir = tempfile::tempdir().unwrap();
        let db = open_test_db(&dir);

        let id = default_paper_size_id(db.conn()).unwrap();
        assert!(id > 0);
    }

    #[test]
    fn failed_seed_rolls_back_catalog_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut db = open_test_db(&dir);

        db.seed_catalog(&seed(5, "shop@example.com")).unwrap();

        // Same merchant email again: the user insert violates the unique
        // constraint after the styles went in, so the styles must vanish too.
        let err = db.seed_catalog(&seed(6, "shop@example.com")).unwrap_err();
        assert!(matches!(err, StoreError::Sqlite(_)));
        assert_eq!(db.list_bookbinding_types().unwrap().len(), 5);
    }
}
