//! Listing data structure.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

use super::config::BASE_URL;

/// A single listing extracted from the recent feed.
///
/// Items are rebuilt from scratch every poll cycle and carry no identity
/// across cycles; the recency window is the only deduplication mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Author handle (empty when the author marker is absent)
    pub author: String,

    /// Publication instant; `None` when no attribute parsed as RFC 3339
    pub published_at: Option<DateTime<FixedOffset>>,

    /// Listing title
    pub title: String,

    /// Site-relative URL of the listing
    pub path: String,

    /// External link target (empty for self-posts)
    pub domain: String,
}

impl Item {
    /// Whether the item was published inside the recency window.
    ///
    /// The comparison is strict: an item whose age equals the window
    /// exactly is stale. Undated items are never fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, window: TimeDelta) -> bool {
        match self.published_at {
            Some(ts) => now.signed_duration_since(ts) < window,
            None => false,
        }
    }

    /// Absolute URL of the listing page.
    pub fn url(&self) -> String {
        format!("{}{}", BASE_URL, self.path)
    }
}
