//! Queue View - keeps a list view in sync with a live play queue.
//!
//! The play queue emits a change signal for every mutation; the list adapter
//! holds a single subscription, maps header, track and footer rows onto one
//! flat position space, and asks its host for a full re-render per signal.
//! The CLI drives that pipeline from a background producer thread.

pub mod cli;
pub mod config;
pub mod error;
pub mod player;
#[cfg(test)]
pub mod test_utils;
pub mod ui;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("queue_view=info".parse()?))
        .init();

    let config = config::load();
    cli::run_command(&args, &config)
}
