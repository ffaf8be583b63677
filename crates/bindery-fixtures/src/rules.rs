//! Declarative generation rules.
//!
//! Every range and choice set the generators draw from lives here, separate
//! from the generation code, so a test can tighten a range or swap a pool
//! without touching the planner.

use std::ops::RangeInclusive;

use bindery_store::service_type;

/// Rules for one generated order tree.
#[derive(Debug, Clone)]
pub struct OrderRules {
    /// Order price in whole currency units.
    pub price: RangeInclusive<i64>,
    /// Number of files attached to the order.
    pub file_count: RangeInclusive<usize>,
    /// File size in bytes.
    pub filesize: RangeInclusive<i64>,
    /// Numeric tag appended to generated filenames.
    pub filename_tag: RangeInclusive<u32>,
    /// File type pool; must not be empty.
    pub filetypes: &'static [&'static str],
    /// Probability that a file prints in colour.
    pub colour_chance: f64,
    /// Minutes after creation at which the order enters `processing`.
    pub processing_after: RangeInclusive<i64>,
    /// Minutes after creation at which the order becomes `ready`.
    pub ready_after: RangeInclusive<i64>,
    /// Minutes after creation at which the order is `completed`.
    pub completed_after: RangeInclusive<i64>,
    /// Probability that the order carries any services at all.
    pub service_chance: f64,
    /// Number of services when present.  The first is always a bookbinding
    /// variant; every further one is lamination.
    pub service_count: RangeInclusive<usize>,
    /// Bookbinding variant pool for the first service; must not be empty.
    pub binding_types: &'static [&'static str],
    /// Catalog ids a bookbinding service may reference.
    pub binding_catalog_ids: RangeInclusive<i64>,
    /// Per-file probability that a lamination service covers the file.
    pub laminate_link_chance: f64,
}

impl Default for OrderRules {
    fn default() -> Self {
        Self {
            price: 5..=80,
            file_count: 3..=6,
            filesize: 1_000..=50_000_000,
            filename_tag: 1000..=9999,
            filetypes: &["pdf", "png", "jpg"],
            colour_chance: 0.5,
            processing_after: 1..=3,
            ready_after: 4..=7,
            completed_after: 8..=15,
            service_chance: 0.5,
            service_count: 1..=2,
            binding_types: &[
                service_type::BOOKBINDING,
                service_type::BOOKBINDING_WITH_COVER,
            ],
            binding_catalog_ids: 1..=5,
            laminate_link_chance: 0.5,
        }
    }
}

/// Rules for one catalog seed.
#[derive(Debug, Clone)]
pub struct CatalogRules {
    /// Number of bookbinding styles to create.
    pub type_count: RangeInclusive<usize>,
    /// Style name pool, sampled without replacement; must hold at least
    /// `type_count.end()` entries.
    pub type_names: &'static [&'static str],
    /// Probability that a style is currently orderable.
    pub available_chance: f64,
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self {
            type_count: 5..=10,
            type_names: &[
                "Saddle Stitch",
                "Perfect Binding",
                "Spiral Coil",
                "Wire-O",
                "Case Binding",
                "Comb Binding",
                "Tape Binding",
                "Screw Post",
                "Japanese Stab",
                "Coptic Stitch",
            ],
            available_chance: 0.5,
        }
    }
}
