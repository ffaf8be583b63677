//! Domain model structs persisted in the fixture database.
//!
//! Every struct derives `Serialize` and `Deserialize` so fixtures and tests
//! can treat them as plain data.  Row identifiers are the SQLite integer
//! primary keys; insert payloads (`New*`) omit them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status labels, in progression order.
pub mod status {
    pub const REVIEWING: &str = "reviewing";
    pub const PROCESSING: &str = "processing";
    pub const READY: &str = "ready";
    pub const COMPLETED: &str = "completed";
}

/// Service type labels.  Both bookbinding variants share the
/// `bookbinding` prefix.
pub mod service_type {
    pub const BOOKBINDING: &str = "bookbinding";
    pub const BOOKBINDING_WITH_COVER: &str = "bookbinding_with_cover";
    pub const LAMINATE: &str = "laminate";
}

/// User role labels.
pub mod role {
    pub const CUSTOMER: &str = "customer";
    pub const MERCHANT: &str = "merchant";
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A user account.  The email is the unique lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Human-readable display name.
    pub name: String,
    /// `merchant` or `customer`.
    pub role: String,
    /// Whether the account finished onboarding.
    pub is_onboarded: bool,
    /// Optional avatar / profile picture URL.
    pub profile_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_onboarded: bool,
    pub profile_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// A customer print job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    /// The user that owns the order.
    pub owner_id: i64,
    /// Unique human-readable order number.
    pub order_number: String,
    /// Current status; always matches the last status update.
    pub status: String,
    /// Price in whole currency units.
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

/// One entry in an order's append-only status history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStatusUpdate {
    pub id: i64,
    pub order_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// A document attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    pub id: i64,
    pub order_id: i64,
    /// Zero-based position within the order; contiguous per order.
    pub idx: i64,
    /// Content-addressed object identifier (hex-encoded 128-bit value).
    pub object_id: String,
    pub filename: String,
    /// `pdf`, `png` or `jpg`.
    pub filetype: String,
    /// Size in bytes.
    pub filesize: i64,
    /// Whether the document prints in colour.
    pub is_colour: bool,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// A processing step applied to an order (binding, lamination).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    pub id: i64,
    pub order_id: i64,
    /// Zero-based position within the order; contiguous per order.
    pub idx: i64,
    pub service_type: String,
    /// Catalog reference; present only for bookbinding variants.
    pub bookbinding_type_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Association between a [`Service`] and a [`FileRecord`] of the same order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceFile {
    pub order_id: i64,
    pub service_id: i64,
    pub file_id: i64,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A bookbinding style offered by the shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookbindingType {
    pub id: i64,
    pub name: String,
    pub is_available: bool,
}

/// A paper format the shop stocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaperSize {
    pub id: i64,
    pub name: String,
    pub length_mm: i64,
    pub width_mm: i64,
    /// Exactly one size is flagged as the shop default.
    pub is_default: bool,
}

// ---------------------------------------------------------------------------
// Insert payloads
// ---------------------------------------------------------------------------

/// A fully-decided order fixture: one order plus everything hanging off it.
///
/// Produced by the fixture planner; inserted atomically by
/// [`Database::create_order_tree`](crate::Database::create_order_tree).
/// Associations reference files and services by their position in the
/// respective vectors, since row ids only exist after insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTree {
    pub order_number: String,
    pub status: String,
    pub price: i64,
    /// Creation timestamp of the order; files and services share it.
    pub created_at: DateTime<Utc>,
    pub status_updates: Vec<NewStatusUpdate>,
    pub files: Vec<NewFile>,
    pub services: Vec<NewService>,
    pub links: Vec<ServiceFileLink>,
}

/// Insert payload for one status history entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStatusUpdate {
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for one attached file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFile {
    pub idx: i64,
    pub object_id: String,
    pub filename: String,
    pub filetype: String,
    pub filesize: i64,
    pub is_colour: bool,
}

/// Insert payload for one service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewService {
    pub idx: i64,
    pub service_type: String,
    pub bookbinding_type_id: Option<i64>,
}

impl NewService {
    /// Whether this service is one of the bookbinding variants.
    /// Bookbinding applies to every file of the order.
    pub fn is_bookbinding(&self) -> bool {
        self.service_type.starts_with(service_type::BOOKBINDING)
    }
}

/// Positional association between a service and a file of the same tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceFileLink {
    /// Index into [`OrderTree::services`].
    pub service_pos: usize,
    /// Index into [`OrderTree::files`].
    pub file_pos: usize,
}

/// Catalog seed payload: bookbinding styles plus the merchant account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSeed {
    pub bookbinding_types: Vec<NewBookbindingType>,
    pub merchant: NewUser,
}

/// Insert payload for one bookbinding style.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBookbindingType {
    pub name: String,
    pub is_available: bool,
}

/// What a catalog seed actually created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSummary {
    pub bookbinding_types: usize,
    pub merchant_id: i64,
}
