//! v001 -- Initial schema creation.
//!
//! Creates the order-management tables (`users`, `orders`,
//! `order_status_updates`, `files`, `services`, `services_files`) and the
//! bookbinding catalog tables (`bookbinding_types`, `paper_sizes`,
//! `bookbinding_types_paper_sizes`), then seeds the shop-default paper
//! size.  Tables are created with IF NOT EXISTS so a pre-existing
//! compatible schema is accepted unchanged.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Users
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS users (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    email        TEXT NOT NULL UNIQUE,
    name         TEXT NOT NULL,
    role         TEXT NOT NULL DEFAULT 'customer',  -- 'customer' | 'merchant'
    is_onboarded INTEGER NOT NULL DEFAULT 0,        -- boolean 0/1
    profile_url  TEXT,
    created_at   TEXT NOT NULL                      -- ISO-8601 / RFC-3339
);

-- ----------------------------------------------------------------
-- Orders
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS orders (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_id     INTEGER NOT NULL,                  -- FK -> users(id)
    order_number TEXT NOT NULL UNIQUE,
    status       TEXT NOT NULL,
    price        INTEGER NOT NULL,
    created_at   TEXT NOT NULL,

    FOREIGN KEY (owner_id) REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_orders_owner_id ON orders(owner_id);

-- ----------------------------------------------------------------
-- Order status history (append-only)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS order_status_updates (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    order_id   INTEGER NOT NULL,                    -- FK -> orders(id)
    status     TEXT NOT NULL,
    created_at TEXT NOT NULL,

    FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_status_updates_order
    ON order_status_updates(order_id, created_at);

-- ----------------------------------------------------------------
-- Files
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS files (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    order_id   INTEGER NOT NULL,                    -- FK -> orders(id)
    idx        INTEGER NOT NULL,                    -- zero-based, contiguous per order
    object_id  TEXT NOT NULL UNIQUE,                -- hex-encoded 128-bit value
    filename   TEXT NOT NULL,
    filetype   TEXT NOT NULL,                       -- 'pdf' | 'png' | 'jpg'
    filesize   INTEGER NOT NULL,                    -- bytes
    is_colour  INTEGER NOT NULL,                    -- boolean 0/1
    created_at TEXT NOT NULL,

    UNIQUE (order_id, idx),
    FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE CASCADE
);

-- ----------------------------------------------------------------
-- Services
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS services (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    order_id            INTEGER NOT NULL,           -- FK -> orders(id)
    idx                 INTEGER NOT NULL,           -- zero-based, contiguous per order
    service_type        TEXT NOT NULL,              -- 'bookbinding' | 'bookbinding_with_cover' | 'laminate'
    bookbinding_type_id INTEGER,                    -- nullable FK -> bookbinding_types(id)
    created_at          TEXT NOT NULL,

    UNIQUE (order_id, idx),
    FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE CASCADE,
    FOREIGN KEY (bookbinding_type_id) REFERENCES bookbinding_types(id)
);

-- ----------------------------------------------------------------
-- Service/file associations
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS services_files (
    order_id   INTEGER NOT NULL,                    -- FK -> orders(id)
    service_id INTEGER NOT NULL,                    -- FK -> services(id)
    file_id    INTEGER NOT NULL,                    -- FK -> files(id)

    PRIMARY KEY (service_id, file_id),
    FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE CASCADE,
    FOREIGN KEY (service_id) REFERENCES services(id) ON DELETE CASCADE,
    FOREIGN KEY (file_id) REFERENCES files(id) ON DELETE CASCADE
);

-- ----------------------------------------------------------------
-- Bookbinding catalog
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS bookbinding_types (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    is_available INTEGER NOT NULL DEFAULT 1         -- boolean 0/1
);

CREATE TABLE IF NOT EXISTS paper_sizes (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    length_mm  INTEGER NOT NULL,
    width_mm   INTEGER NOT NULL,
    is_default INTEGER NOT NULL DEFAULT 0           -- boolean 0/1
);

CREATE TABLE IF NOT EXISTS bookbinding_types_paper_sizes (
    bookbinding_type_id INTEGER NOT NULL,           -- FK -> bookbinding_types(id)
    paper_size_id       INTEGER NOT NULL,           -- FK -> paper_sizes(id)
    coverable           INTEGER NOT NULL DEFAULT 0, -- boolean 0/1

    PRIMARY KEY (bookbinding_type_id, paper_size_id),
    FOREIGN KEY (bookbinding_type_id) REFERENCES bookbinding_types(id) ON DELETE CASCADE,
    FOREIGN KEY (paper_size_id) REFERENCES paper_sizes(id) ON DELETE CASCADE
);

-- The shop-default paper size.  Catalog seeding resolves the default via
-- the is_default flag, never by a hard-coded id.
INSERT INTO paper_sizes (name, length_mm, width_mm, is_default)
SELECT 'A4', 297, 210, 1
WHERE NOT EXISTS (SELECT 1 FROM paper_sizes WHERE is_default = 1);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
