// src/services/extract.rs

//! Listing extraction from the recent-feed markup.
//!
//! The site is a React app with CSS-module class names (`item_hunk__DFX1z`
//! and friends); the selectors below match on the stable class prefix so a
//! rebuild of the site only breaks us when the markup itself changes.

use chrono::DateTime;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::ItemSource;
use crate::error::{AppError, Result};
use crate::models::Item;

/// CSS-selector and regex based listing extractor.
///
/// All patterns are compiled once at startup; extraction itself never
/// fails, every field independently defaults on no-match.
pub struct ItemExtractor {
    /// One listing fragment per feed entry
    row: Selector,

    /// Primary title anchor: inner text is the title, `href` the path
    title_link: Selector,

    /// External-link anchor, present only when the listing links offsite
    external_link: Selector,

    /// Any element carrying a `title` attribute (timestamp candidates)
    titled: Selector,

    /// Author handle, marked by the `@` text node and comment separator
    /// the site renders immediately before it
    author_marker: Regex,
}

impl ItemExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            row: parse_selector("[class*='item_hunk']")?,
            title_link: parse_selector("a[class^='item_title']")?,
            external_link: parse_selector("a[class^='item_link']")?,
            titled: parse_selector("[title]")?,
            author_marker: Regex::new(r"@<!-- -->(\w+)<span>")?,
        })
    }

    fn extract(&self, row: ElementRef<'_>) -> Item {
        let (title, path) = row
            .select(&self.title_link)
            .next()
            .map(|anchor| {
                let text: String = anchor.text().collect();
                let href = anchor.value().attr("href").unwrap_or("");
                (text.trim().to_string(), href.to_string())
            })
            .unwrap_or_default();

        let domain = row
            .select(&self.external_link)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .unwrap_or("")
            .to_string();

        let author = self
            .author_marker
            .captures(&row.html())
            .map(|captures| captures[1].to_string())
            .unwrap_or_default();

        // First title attribute that parses strictly as RFC 3339 wins;
        // anything else (relative times, tooltips) is passed over.
        let published_at = row
            .select(&self.titled)
            .filter_map(|el| el.value().attr("title"))
            .find_map(|raw| DateTime::parse_from_rfc3339(raw).ok());

        Item {
            author,
            published_at,
            title,
            path,
            domain,
        }
    }
}

impl ItemSource for ItemExtractor {
    fn scan(&self, body: &str) -> Vec<Item> {
        let document = Html::parse_document(body);
        document.select(&self.row).map(|row| self.extract(row)).collect()
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
