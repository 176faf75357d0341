//! Pipeline entry points for watcher operations.
//!
//! - `run_cycle`: one fetch → extract → sift → notify pass
//! - `watch::run`: the forever loop around it

pub mod cycle;
pub mod watch;

pub use cycle::{CycleOutcome, run_cycle};
pub use watch::Watcher;
