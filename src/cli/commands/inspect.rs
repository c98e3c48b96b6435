//! Configuration display and one-shot queue snapshots.

use serde::Serialize;
use std::path::PathBuf;

use super::{apply_view_config, render_lines};
use crate::config::{self, Config, ConfigError};
use crate::error::{Result, ResultExt};
use crate::player::{PlayQueue, QueueItem};
use crate::ui::{QueueAdapter, TextItemBuilder};

/// Print the effective configuration, or just its file location.
pub fn cmd_config(config: &Config, path_only: bool, write: bool) -> Result<()> {
    if path_only {
        match config::config_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("No config directory available"),
        }
        return Ok(());
    }

    if write {
        config::save(config).with_context("Cannot write configuration")?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    print!("{}", contents);
    Ok(())
}

#[derive(Serialize)]
struct Snapshot<'a> {
    index: usize,
    items: &'a [QueueItem],
}

/// Build a queue from `paths`, optionally remove one entry, and print it.
pub fn cmd_snapshot(
    config: &Config,
    paths: &[PathBuf],
    index: usize,
    remove: Option<usize>,
    json: bool,
) -> Result<()> {
    let output = snapshot(config, paths, index, remove, json)?;
    println!("{}", output);
    Ok(())
}

fn snapshot(
    config: &Config,
    paths: &[PathBuf],
    index: usize,
    remove: Option<usize>,
    json: bool,
) -> Result<String> {
    let items = paths.iter().cloned().map(QueueItem::from_path).collect();
    let queue = PlayQueue::with_items(items, index).with_removal_policy(config.queue.removal_policy);

    if let Some(remove) = remove {
        queue
            .remove(remove)
            .with_context(format!("Cannot remove entry {}", remove))?;
    }

    if json {
        let items = queue.streams();
        let snapshot = Snapshot {
            index: queue.index(),
            items: &items,
        };
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }

    let mut adapter = QueueAdapter::new(std::sync::Arc::new(queue), TextItemBuilder::new());
    apply_view_config(&mut adapter, config);
    Ok(render_lines(&adapter).join("\n"))
}
