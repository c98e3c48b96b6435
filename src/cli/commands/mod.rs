//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `demo`: live queue mutations rendered through the adapter
//! - `inspect`: configuration and one-shot queue snapshots

mod demo;
mod inspect;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::player::RemovalPolicy;
use crate::ui::{ItemViewBuilder, QueueAdapter, Row};

pub use demo::{DemoOptions, cmd_demo};
pub use inspect::{cmd_config, cmd_snapshot};

/// Queue View CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Mutate a queue from a background thread and print every re-render
    Demo {
        /// Tracks queued before the producer starts
        #[arg(long)]
        tracks: Option<usize>,
        /// Number of random mutations
        #[arg(long)]
        steps: Option<usize>,
        /// Delay between mutations in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Keep the current index fixed when earlier items are removed
        #[arg(long)]
        keep_index: bool,
    },
    /// Show the effective configuration
    Config {
        /// Only print the config file location
        #[arg(long)]
        path: bool,
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
    /// Build a queue from files and print it once
    Snapshot {
        /// Files to queue, in order
        paths: Vec<PathBuf>,
        /// Current index
        #[arg(short, long, default_value = "0")]
        index: usize,
        /// Remove this index before printing
        #[arg(long)]
        remove: Option<usize>,
        /// Print the queue as JSON instead of rows
        #[arg(long)]
        json: bool,
    },
}

/// Run the specified CLI command. Without a subcommand the demo runs with
/// configured defaults.
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Demo {
            tracks,
            steps,
            interval_ms,
            keep_index,
        }) => {
            let mut options = DemoOptions::from_config(config);
            options.tracks = tracks.unwrap_or(options.tracks);
            options.steps = steps.unwrap_or(options.steps);
            options.interval_ms = interval_ms.unwrap_or(options.interval_ms);
            if *keep_index {
                options.removal_policy = RemovalPolicy::KeepIndex;
            }
            cmd_demo(config, &options)
        }
        Some(Commands::Config { path, write }) => Ok(cmd_config(config, *path, *write)?),
        Some(Commands::Snapshot {
            paths,
            index,
            remove,
            json,
        }) => Ok(cmd_snapshot(config, paths, *index, *remove, *json)?),
        None => cmd_demo(config, &DemoOptions::from_config(config)),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Apply the `[view]` settings to an adapter.
pub(crate) fn apply_view_config<B: ItemViewBuilder>(
    adapter: &mut QueueAdapter<B, String>,
    config: &Config,
) {
    if config.view.show_header {
        adapter.set_header(config.view.header.clone());
    } else {
        adapter.clear_header();
    }
    adapter.set_footer(config.view.footer.clone());
    adapter.show_footer(config.view.show_footer);
}

/// Act as the rendering host: create and bind every row, one line each.
pub(crate) fn render_lines<B>(adapter: &QueueAdapter<B, String>) -> Vec<String>
where
    B: ItemViewBuilder<Row = crate::ui::TextRow>,
{
    (0..adapter.item_count())
        .map(|position| match adapter.row_at(position) {
            Row::Header(text) => format!("== {} ==", text.unwrap_or_default()),
            Row::Footer(text) => format!("-- {} --", text.unwrap_or_default()),
            Row::Item(row) => {
                let marker = if row.selected { ">>" } else { "  " };
                format!("{} {}", marker, row.view.line)
            }
            Row::Inert => String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayQueue;
    use crate::test_utils::make_items;
    use crate::ui::TextItemBuilder;
    use clap::CommandFactory;
    use std::sync::Arc;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_snapshot() {
        let cli = Cli::parse_from(["queue-view", "snapshot", "a.mp3", "b.mp3", "-i", "1", "--json"]);
        match cli.command {
            Some(Commands::Snapshot {
                paths, index, json, remove,
            }) => {
                assert_eq!(paths.len(), 2);
                assert_eq!(index, 1);
                assert!(json);
                assert_eq!(remove, None);
            }
            _ => panic!("expected snapshot command"),
        }
    }

    #[test]
    fn test_render_lines_with_default_view() {
        let queue = Arc::new(PlayQueue::with_items(make_items(&["a", "b"]), 1));
        let mut adapter = QueueAdapter::new(queue, TextItemBuilder::new());
        apply_view_config(&mut adapter, &Config::default());

        assert_eq!(
            render_lines(&adapter),
            vec![
                "== Play Queue ==",
                "   a [--:--]",
                ">> b [--:--]",
                "-- End of queue --",
            ]
        );
    }

    #[test]
    fn test_render_lines_without_header() {
        let queue = Arc::new(PlayQueue::with_items(make_items(&["a"]), 0));
        let mut adapter = QueueAdapter::new(queue, TextItemBuilder::new());
        adapter.set_header("stale".to_string());

        let mut config = Config::default();
        config.view.show_header = false;
        config.view.show_footer = false;
        apply_view_config(&mut adapter, &config);

        assert!(adapter.header().is_none());
        assert_eq!(render_lines(&adapter), vec![">> a [--:--]"]);
    }
}
