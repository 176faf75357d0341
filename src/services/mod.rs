//! Service layer for the watcher application.
//!
//! This module contains the scraping logic:
//! - Listing extraction (`ItemExtractor`)
//!
//! The `ItemSource` trait is the seam between the poll cycle and however
//! the page markup is queried, so the pipeline stays testable with canned
//! sources.

mod extract;

pub use extract::ItemExtractor;

use crate::models::Item;

/// Capability to yield candidate listings from a raw page body.
pub trait ItemSource: Send + Sync {
    /// Extract every candidate listing, in document order.
    ///
    /// Extraction never fails: fields that cannot be located default to
    /// empty, and a missing timestamp is surfaced as `None` for the caller
    /// to discard.
    fn scan(&self, body: &str) -> Vec<Item>;
}
