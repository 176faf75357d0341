//! stackwatch CLI
//!
//! Polls the stacker.news recent feed on a fixed interval and alerts on
//! listings matching the configured filters.

use std::sync::Arc;

use clap::{CommandFactory, Parser};
use stackwatch::{
    error::Result,
    models::{Config, Criteria, DEFAULT_RELAYS, NostrConfig},
    notify::{MAGENTA, RESET},
    pipeline,
};

/// stackwatch - stacker.news feed watcher
#[derive(Parser, Debug)]
#[command(
    name = "stackwatch",
    version,
    about = "Watches the stacker.news recent feed and alerts on matching items"
)]
struct Cli {
    /// Comma-separated list of accepted authors
    #[arg(long, value_delimiter = ',')]
    authors: Vec<String>,

    /// Comma-separated list of interesting topics
    #[arg(long, value_delimiter = ',')]
    topics: Vec<String>,

    /// Comma-separated list of interesting domains
    #[arg(long, value_delimiter = ',')]
    domains: Vec<String>,

    /// Comma-separated list of muted words (applied to authors, topics, domains)
    #[arg(long, value_delimiter = ',')]
    mute: Vec<String>,

    /// Territory to watch, default is home (all)
    #[arg(long)]
    territory: Option<String>,

    /// Interval check in minutes
    #[arg(long, default_value_t = 5)]
    interval: u64,

    /// Nostr private hex key of the notifier
    #[arg(long)]
    nostr_from: Option<String>,

    /// Nostr public hex key of the recipient (you!)
    #[arg(long)]
    nostr_to: Option<String>,

    /// Nostr relays
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_RELAYS.map(String::from))]
    nostr_relays: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let criteria = Criteria::new(cli.authors, cli.topics, cli.domains, cli.mute);
    if !criteria.has_filters() {
        println!("{MAGENTA}You need to give me some filters!{RESET}\n");
        Cli::command().print_help()?;
        return Ok(());
    }

    if cli.nostr_from.is_some() != cli.nostr_to.is_some() {
        println!("{MAGENTA}You must provide both --nostr-from and --nostr-to{RESET}");
        return Ok(());
    }

    let nostr = match (cli.nostr_from, cli.nostr_to) {
        (Some(sender_key), Some(recipient_key)) => Some(NostrConfig {
            sender_key,
            recipient_key,
            relays: cli.nostr_relays,
        }),
        _ => None,
    };

    let config = Config {
        criteria,
        territory: cli.territory,
        interval_mins: cli.interval,
        nostr,
    };
    config.validate()?;

    pipeline::watch::run(Arc::new(config)).await
}
