//! Atomic insertion of order fixtures and the read helpers around them.
//!
//! [`Database::create_order_tree`] is the heart of the store: it writes an
//! order plus its status history, files, services and service/file
//! associations in one transaction.  The transaction rolls back on drop, so
//! every early return leaves the database untouched.

use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::{FileRecord, Order, OrderStatusUpdate, OrderTree, Service, ServiceFile};
use crate::users;

impl Database {
    /// Insert a fully-decided order tree for the user with the given email.
    ///
    /// The owner lookup happens inside the same transaction as the inserts;
    /// an unknown email aborts before anything is written.  Returns the
    /// generated order id.
    pub fn create_order_tree(&mut self, owner_email: &str, tree: &OrderTree) -> Result<i64> {
        let tx = self.conn_mut().transaction()?;

        let owner_id = users::user_id_by_email(&tx, owner_email)?;
        let created_at = tree.created_at.to_rfc3339();

        tx.execute(
            "INSERT INTO orders (owner_id, order_number, status, price, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![owner_id, tree.order_number, tree.status, tree.price, created_at],
        )?;
        let order_id = tx.last_insert_rowid();

        for update in &tree.status_updates {
            tx.execute(
                "INSERT INTO order_status_updates (order_id, status, created_at)
                 VALUES (?1, ?2, ?3)",
                params![order_id, update.status, update.created_at.to_rfc3339()],
            )?;
        }

        let mut file_ids = Vec::with_capacity(tree.files.len());
        for file in &tree.files {
            tx.execute(
                "INSERT INTO files (order_id, idx, object_id, filename, filetype, filesize,
                                    is_colour, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    order_id,
                    file.idx,
                    file.object_id,
                    file.filename,
                    file.filetype,
                    file.filesize,
                    file.is_colour,
                    created_at,
                ],
            )?;
            file_ids.push(tx.last_insert_rowid());
        }

        let mut service_ids = Vec::with_capacity(tree.services.len());
        for service in &tree.services {
            tx.execute(
                "INSERT INTO services (order_id, idx, service_type, bookbinding_type_id,
                                       created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    order_id,
                    service.idx,
                    service.service_type,
                    service.bookbinding_type_id,
                    created_at,
                ],
            )?;
            service_ids.push(tx.last_insert_rowid());
        }

        for link in &tree.links {
            let service_id = service_ids.get(link.service_pos).copied().ok_or_else(|| {
                StoreError::InvalidTree(format!("service position {}", link.service_pos))
            })?;
            let file_id = file_ids.get(link.file_pos).copied().ok_or_else(|| {
                StoreError::InvalidTree(format!("file position {}", link.file_pos))
            })?;
            tx.execute(
                "INSERT INTO services_files (order_id, service_id, file_id)
                 VALUES (?1, ?2, ?3)",
                params![order_id, service_id, file_id],
            )?;
        }

        tx.commit()?;
        Ok(order_id)
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Fetch a single order by its unique order number.
    pub fn get_order_by_number(&self, order_number: &str) -> Result<Order> {
        self.conn()
            .query_row(
                "SELECT id, owner_id, order_number, status, price, created_at
                 FROM orders
                 WHERE order_number = ?1",
                params![order_number],
                row_to_order,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                other => StoreError::Sqlite(other),
            })
    }

    /// List an order's status history in insertion order.
    pub fn list_status_updates(&self, order_id: i64) -> Result<Vec<OrderStatusUpdate>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, order_id, status, created_at
             FROM order_status_updates
             WHERE order_id = ?1
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map(params![order_id], row_to_status_update)?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::Sqlite)
    }

    /// List an order's files, ordered by their position.
    pub fn list_files(&self, order_id: i64) -> Result<Vec<FileRecord>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, order_id, idx, object_id, filename, filetype, filesize,
                    is_colour, created_at
             FROM files
             WHERE order_id = ?1
             ORDER BY idx ASC",
        )?;

        let rows = stmt.query_map(params![order_id], row_to_file)?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::Sqlite)
    }

    /// List an order's services, ordered by their position.
    pub fn list_services(&self, order_id: i64) -> Result<Vec<Service>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, order_id, idx, service_type, bookbinding_type_id, created_at
             FROM services
             WHERE order_id = ?1
             ORDER BY idx ASC",
        )?;

        let rows = stmt.query_map(params![order_id], row_to_service)?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::Sqlite)
    }

    /// List an order's service/file associations.
    pub fn list_service_files(&self, order_id: i64) -> Result<Vec<ServiceFile>> {
        let mut stmt = self.conn().prepare(
            "SELECT order_id, service_id, file_id
             FROM services_files
             WHERE order_id = ?1
             ORDER BY service_id ASC, file_id ASC",
        )?;

        let rows = stmt.query_map(params![order_id], |row| {
            Ok(ServiceFile {
                order_id: row.get(0)?,
                service_id: row.get(1)?,
                file_id: row.get(2)?,
            })
        })?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StoreError::Sqlite)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Map a `rusqlite::Row` to an [`Order`].
fn row_to_order(row: &rusqlite::Row<'_>) -> rusqlite::Result<Order> {
    let created_str: String = row.get(5)?;

    Ok(Order {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        order_number: row.get(2)?,
        status: row.get(3)?,
        price: row.get(4)?,
        created_at: parse_timestamp(5, &created_str)?,
    })
}

fn row_to_status_update(row: &rusqlite::Row<'_>) -> rusqlite::Result<OrderStatusUpdate> {
    let created_str: String = row.get(3)?;

    Ok(OrderStatusUpdate {
        id: row.get(0)?,
        order_id: row.get(1)?,
        status: row.get(2)?,
        created_at: parse_timestamp(3, &created_str)?,
    })
}

fn row_to_file(row: &rusqlite::Row<'_>) -> rusqlite::Result<FileRecord> {
    let created_str: String = row.get(8)?;

    Ok(FileRecord {
        id: row.get(0)?,
        order_id: row.get(1)?,
        idx: row.get(2)?,
        object_id: row.get(3)?,
        filename: row.get(4)?,
        filetype: row.get(5)?,
        filesize: row.get(6)?,
        is_colour: row.get(7)?,
        created_at: parse_timestamp(8, &created_str)?,
    })
}

fn row_to_service(row: &rusqlite::Row<'_>) -> rusqlite::Result<Service> {
    let created_str: String = row.get(5)?;

    Ok(Service {
        id: row.get(0)?,
        order_id: row.get(1)?,
        idx: row.get(2)?,
        service_type: row.get(3)?,
        bookbinding_type_id: row.get(4)?,
        created_at: parse_timestamp(5, &created_str)?,
    })
}
