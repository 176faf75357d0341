// src/notify/mod.rs

//! Alert rendering and dispatch.
//!
//! Every matching listing is printed to stdout, then handed to the single
//! configured [`AlertChannel`]: an encrypted nostr direct message when a
//! key pair is configured, the local alert tone otherwise. Channel errors
//! are logged and never abort the poll cycle.

mod audio;
mod nostr;

pub use audio::{AudioChannel, play_alert};
pub use nostr::NostrChannel;

use async_trait::async_trait;
use chrono::Local;

use crate::error::Result;
use crate::models::{Config, Item};

// ANSI palette for the console alert lines
pub const GRAY: &str = "\x1b[37m";
pub const BLUE: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[38;5;198m";
pub const YELLOW: &str = "\x1b[38;5;220m";
pub const RESET: &str = "\x1b[0m";

/// A notification delivery mechanism.
#[async_trait]
pub trait AlertChannel: Send + Sync {
    /// Channel name for log messages.
    fn name(&self) -> &'static str;

    /// Deliver one rendered note.
    async fn send(&self, note: &str) -> Result<()>;
}

/// Select the channel implied by the configuration.
pub fn channel_from(config: &Config) -> Result<Box<dyn AlertChannel>> {
    match &config.nostr {
        Some(nostr) => Ok(Box::new(NostrChannel::new(nostr)?)),
        None => Ok(Box::new(AudioChannel)),
    }
}

/// Local-time display format for alert lines and notes.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn local_time(item: &Item) -> String {
    item.published_at
        .map(|ts| ts.with_timezone(&Local).format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Render the plaintext note payload.
///
/// Layout: author and local time, title, the domain line only for offsite
/// links, then a blank line and the absolute listing URL.
pub fn render_note(item: &Item) -> String {
    let mut note = format!("{} - {}\n{}\n", item.author, local_time(item), item.title);
    if !item.domain.is_empty() {
        note.push_str(&item.domain);
        note.push('\n');
    }
    note.push('\n');
    note.push_str(&item.url());
    note
}

/// Print the colored alert block for one listing.
pub fn print_alert(item: &Item) {
    println!(
        "{MAGENTA}{}{RESET} - {GRAY}{}{RESET}",
        item.author,
        local_time(item)
    );
    println!("{BLUE}{}{RESET}", item.title);
    if !item.domain.is_empty() {
        println!("{}", item.domain);
    }
    println!("{YELLOW}{}{RESET}\n", item.url());
}

/// Surface one matching listing: console first, then the channel.
pub async fn announce(item: &Item, channel: &dyn AlertChannel) {
    print_alert(item);

    let note = render_note(item);
    if let Err(e) = channel.send(&note).await {
        log::warn!("{} notification failed: {}", channel.name(), e);
    }
}
