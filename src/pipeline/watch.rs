// src/pipeline/watch.rs

//! Fixed-interval scheduling around the poll cycle.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::time::{self, MissedTickBehavior};

use super::cycle::run_cycle;
use crate::error::Result;
use crate::models::Config;
use crate::notify::{self, AlertChannel};
use crate::services::ItemExtractor;
use crate::utils::http;

/// Window for the very first cycle, wide enough to surface a backlog.
const INITIAL_WINDOW_MINS: i64 = 300;

/// Scheduler around the poll cycle: one immediate run with the wide
/// initial window, then a fixed-interval loop for the life of the process.
pub struct Watcher {
    config: Arc<Config>,
    client: reqwest::Client,
    extractor: ItemExtractor,
    channel: Box<dyn AlertChannel>,

    /// Completion time of the last cycle; observability only, no decision
    /// logic reads it
    last_checked: Option<DateTime<Utc>>,
}

impl Watcher {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = http::create_async_client()?;
        let extractor = ItemExtractor::new()?;
        let channel = notify::channel_from(&config)?;

        Ok(Self {
            config,
            client,
            extractor,
            channel,
            last_checked: None,
        })
    }

    /// Run forever. Returns only on a fatal fetch error; there is no
    /// graceful-shutdown path other than external termination.
    pub async fn run(mut self) -> Result<()> {
        // Startup self-check: the tone plays even when nostr is configured.
        if let Err(e) = notify::play_alert().await {
            log::warn!("Alert tone self-check failed: {e}");
        }

        log::info!(
            "Watching {} every {} minutes via {}",
            self.config.target_url(),
            self.config.interval_mins,
            self.channel.name()
        );

        self.cycle(TimeDelta::minutes(INITIAL_WINDOW_MINS)).await?;

        let mut ticker = time::interval(self.config.tick());
        // A tick that fires while a cycle is still running is coalesced,
        // never queued.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        ticker.tick().await; // consume the immediate first tick

        loop {
            ticker.tick().await;
            self.cycle(self.config.window()).await?;
        }
    }

    async fn cycle(&mut self, window: TimeDelta) -> Result<()> {
        run_cycle(
            &self.config,
            &self.client,
            &self.extractor,
            self.channel.as_ref(),
            window,
        )
        .await?;

        if let Some(previous) = self.last_checked {
            log::debug!("Previous cycle finished at {previous}");
        }
        self.last_checked = Some(Utc::now());
        Ok(())
    }
}

/// Entry point for the CLI.
pub async fn run(config: Arc<Config>) -> Result<()> {
    Watcher::new(config)?.run().await
}
