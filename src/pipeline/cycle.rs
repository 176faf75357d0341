// src/pipeline/cycle.rs

//! One poll cycle: fetch, extract, sift, notify.

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Client;

use crate::error::Result;
use crate::models::{Config, Item};
use crate::notify::{self, AlertChannel};
use crate::services::ItemSource;
use crate::utils::http;

/// Summary of a poll cycle.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Listing fragments found on the page
    pub scanned: usize,

    /// Listings dropped for lacking a parseable timestamp
    pub undated: usize,

    /// Listings older than the recency window
    pub stale: usize,

    /// Listings surfaced to the operator
    pub notified: usize,
}

/// Run one poll cycle against the configured feed.
///
/// Transport failures and non-success statuses propagate as errors and are
/// fatal to the process; everything per-listing is logged and skipped.
pub async fn run_cycle(
    config: &Config,
    client: &Client,
    source: &dyn ItemSource,
    channel: &dyn AlertChannel,
    window: TimeDelta,
) -> Result<CycleOutcome> {
    let url = config.target_url();
    log::debug!("Fetching {url}");
    let body = http::fetch_text(client, &url).await?;

    let items = source.scan(&body);
    let now = Utc::now();
    let (matches, mut outcome) = sift(items, now, window, config);

    for item in &matches {
        notify::announce(item, channel).await;
    }
    outcome.notified = matches.len();

    log::info!(
        "Cycle complete: {} listings, {} undated, {} stale, {} notified",
        outcome.scanned,
        outcome.undated,
        outcome.stale,
        outcome.notified
    );
    Ok(outcome)
}

/// Select the fresh, matching listings out of one page scan, preserving
/// document order.
fn sift(
    items: Vec<Item>,
    now: DateTime<Utc>,
    window: TimeDelta,
    config: &Config,
) -> (Vec<Item>, CycleOutcome) {
    let mut outcome = CycleOutcome {
        scanned: items.len(),
        ..CycleOutcome::default()
    };
    let mut matches = Vec::new();

    for item in items {
        if item.published_at.is_none() {
            outcome.undated += 1;
            log::warn!(
                "Skipping a listing without a parseable timestamp: {:?}",
                item.title
            );
            continue;
        }
        if !item.is_fresh(now, window) {
            outcome.stale += 1;
            continue;
        }
        if !config.criteria.is_match(&item) {
            continue;
        }
        matches.push(item);
    }

    (matches, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Criteria;

    fn config(criteria: Criteria) -> Config {
        Config {
            criteria,
            territory: None,
            interval_mins: 5,
            nostr: None,
        }
    }

    fn item_aged(author: &str, title: &str, age: TimeDelta, now: DateTime<Utc>) -> Item {
        Item {
            author: author.to_string(),
            published_at: Some((now - age).fixed_offset()),
            title: title.to_string(),
            path: "/items/1".to_string(),
            domain: String::new(),
        }
    }

    fn authors(list: &[&str]) -> Criteria {
        Criteria::new(list.iter().map(|s| s.to_string()).collect(), vec![], vec![], vec![])
    }

    #[test]
    fn stale_items_never_reach_the_matcher() {
        let now = Utc::now();
        // matches the criteria, but is 10 minutes old against a 5 minute window
        let items = vec![item_aged("alice", "hi", TimeDelta::minutes(10), now)];

        let (matches, outcome) =
            sift(items, now, TimeDelta::minutes(5), &config(authors(&["alice"])));

        assert!(matches.is_empty());
        assert_eq!(outcome.stale, 1);
    }

    #[test]
    fn fresh_matching_item_is_selected() {
        let now = Utc::now();
        let items = vec![item_aged("Alice", "hello", TimeDelta::minutes(1), now)];

        let (matches, outcome) =
            sift(items, now, TimeDelta::minutes(5), &config(authors(&["alice"])));

        assert_eq!(matches.len(), 1);
        assert_eq!(outcome.scanned, 1);
        assert_eq!(outcome.stale, 0);
    }

    #[test]
    fn undated_items_are_counted_and_skipped() {
        let now = Utc::now();
        let mut item = item_aged("alice", "hi", TimeDelta::minutes(1), now);
        item.published_at = None;

        let (matches, outcome) =
            sift(vec![item], now, TimeDelta::minutes(5), &config(authors(&["alice"])));

        assert!(matches.is_empty());
        assert_eq!(outcome.undated, 1);
    }

    #[test]
    fn muted_items_are_dropped_silently() {
        let now = Utc::now();
        let criteria = Criteria::new(
            vec![],
            vec!["hello".to_string()],
            vec![],
            vec!["spam".to_string()],
        );
        let items = vec![
            item_aged("a", "hello world", TimeDelta::minutes(1), now),
            item_aged("b", "hello spam world", TimeDelta::minutes(1), now),
        ];

        let (matches, outcome) = sift(items, now, TimeDelta::minutes(5), &config(criteria));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "hello world");
        assert_eq!(outcome.scanned, 2);
    }

    #[test]
    fn document_order_is_preserved() {
        let now = Utc::now();
        let items = vec![
            item_aged("alice", "one", TimeDelta::minutes(1), now),
            item_aged("alice", "two", TimeDelta::minutes(2), now),
        ];

        let (matches, _) =
            sift(items, now, TimeDelta::minutes(5), &config(authors(&["alice"])));

        let titles: Vec<&str> = matches.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["one", "two"]);
    }
}
