use crate::types::metadata::AccessLevel;
use chrono::NaiveDate;

/// A dated exception that pins a deprecated access category to a fixed
/// weight while records still carry it. Each entry must be deleted once its
/// category is retired from the collection schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionalOverride {
    pub access_level: AccessLevel,
    pub pinned_weight: f64,
    pub reason: &'static str,
    /// ISO-8601 date after which the override is overdue for removal.
    pub review_by: &'static str,
}

impl TransitionalOverride {
    pub fn review_date(&self) -> Option<NaiveDate> {
        self.review_by.parse().ok()
    }

    /// An override with an unparseable review date is treated as overdue.
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.review_date().map_or(true, |date| as_of > date)
    }

    pub fn applies_to(&self, level: AccessLevel) -> bool {
        self.access_level == level
    }
}

/// SCRAPING_FRIENDLY is being folded into DIRECT_ACCESS; until collectors
/// stop emitting it, it scores as direct access.
pub const SCRAPING_FRIENDLY_AS_DIRECT: TransitionalOverride = TransitionalOverride {
    access_level: AccessLevel::ScrapingFriendly,
    pinned_weight: 1.0,
    reason: "SCRAPING_FRIENDLY is deprecated and scored as DIRECT_ACCESS until retired",
    review_by: "2026-12-31",
};
