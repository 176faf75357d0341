// src/models/config.rs

//! Application configuration structures.
//!
//! The configuration is assembled once from CLI flags and passed by
//! reference into the pipeline; nothing here mutates after startup.

use std::time::Duration;

use chrono::TimeDelta;

use super::Criteria;
use crate::error::{AppError, Result};

/// Base URL of the watched site.
pub const BASE_URL: &str = "https://stacker.news";

/// Relay endpoints used when none are supplied.
pub const DEFAULT_RELAYS: [&str; 3] = [
    "wss://nostr-pub.wellorder.net",
    "wss://nos.lol",
    "wss://relay.damus.io",
];

/// Root application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interest and mute criteria
    pub criteria: Criteria,

    /// Territory sub-path to watch; `None` watches the whole site
    pub territory: Option<String>,

    /// Poll interval in minutes
    pub interval_mins: u64,

    /// Encrypted-notification settings; `None` falls back to the audio tone
    pub nostr: Option<NostrConfig>,
}

/// Nostr direct-message notification settings.
#[derive(Debug, Clone)]
pub struct NostrConfig {
    /// Hex private key of the notifier
    pub sender_key: String,

    /// Hex public key of the recipient
    pub recipient_key: String,

    /// Relay endpoints, each published to independently
    pub relays: Vec<String>,
}

impl Config {
    /// URL of the recent feed, honoring the configured territory.
    pub fn target_url(&self) -> String {
        match &self.territory {
            Some(territory) => format!("{BASE_URL}/~{territory}/recent"),
            None => format!("{BASE_URL}/recent"),
        }
    }

    /// Recency window for steady-state cycles.
    pub fn window(&self) -> TimeDelta {
        TimeDelta::minutes(self.interval_mins as i64)
    }

    /// Timer period between cycles.
    pub fn tick(&self) -> Duration {
        Duration::from_secs(self.interval_mins * 60)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if !self.criteria.has_filters() {
            return Err(AppError::config(
                "at least one of authors, topics or domains must be set",
            ));
        }
        if self.interval_mins == 0 {
            return Err(AppError::config("interval must be > 0 minutes"));
        }
        if let Some(nostr) = &self.nostr {
            if nostr.sender_key.trim().is_empty() || nostr.recipient_key.trim().is_empty() {
                return Err(AppError::config(
                    "both the sender private key and recipient public key are required",
                ));
            }
            if nostr.relays.is_empty() {
                return Err(AppError::config("no nostr relays configured"));
            }
            for relay in &nostr.relays {
                url::Url::parse(relay)?;
            }
        }
        Ok(())
    }
}
