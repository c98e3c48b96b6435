//! Live demo: a producer thread mutates the queue while the main thread
//! pumps the adapter and prints each re-render.

use anyhow::anyhow;
use rand::Rng;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::{apply_view_config, render_lines};
use crate::config::Config;
use crate::player::{PlayQueue, QueueItem, RemovalPolicy, TrackInfo};
use crate::ui::{QueueAdapter, TextItemBuilder};

/// How often the render loop checks for pending signals.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const DEMO_TRACKS: &[(&str, &str, u64)] = &[
    ("Teardrop", "Massive Attack", 330),
    ("Roygbiv", "Boards of Canada", 151),
    ("Svefn-g-englar", "Sigur Rós", 604),
    ("Avril 14th", "Aphex Twin", 125),
    ("Kid A", "Radiohead", 284),
    ("Nude", "Radiohead", 255),
    ("Hyperballad", "Björk", 321),
    ("Strangers", "Portishead", 238),
];

/// Effective demo settings (config overridden by CLI flags).
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub tracks: usize,
    pub steps: usize,
    pub interval_ms: u64,
    pub removal_policy: RemovalPolicy,
}

impl DemoOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tracks: config.demo.tracks,
            steps: config.demo.steps,
            interval_ms: config.demo.interval_ms,
            removal_policy: config.queue.removal_policy,
        }
    }
}

/// Run the demo until the producer closes the queue.
pub fn cmd_demo(config: &Config, options: &DemoOptions) -> anyhow::Result<()> {
    let queue = Arc::new(
        PlayQueue::with_items(demo_items(0..options.tracks), 0)
            .with_removal_policy(options.removal_policy),
    );

    tracing::info!(
        target: "queue_view::demo",
        "Starting demo with {} tracks ({:?} on remove)",
        queue.len(),
        queue.removal_policy()
    );

    let mut adapter = QueueAdapter::new(Arc::clone(&queue), TextItemBuilder::new());
    apply_view_config(&mut adapter, config);
    adapter.set_selected_listener(Box::new(|item| {
        println!("Selected: {}", item.display_title());
    }));

    let first_data_row = usize::from(adapter.header().is_some());
    adapter.select(first_data_row);

    let producer = {
        let queue = Arc::clone(&queue);
        let steps = options.steps;
        let interval = Duration::from_millis(options.interval_ms);
        thread::spawn(move || run_producer(&queue, steps, interval))
    };

    let mut frame = 0;
    print_frame(&adapter, frame);

    while !adapter.is_disposed() {
        adapter.pump();
        if adapter.take_render_request() {
            frame += 1;
            print_frame(&adapter, frame);
        }
        thread::sleep(FRAME_INTERVAL);
    }

    // The last change can arrive in the same batch as the terminal signal
    if adapter.take_render_request() {
        print_frame(&adapter, frame + 1);
    }

    producer
        .join()
        .map_err(|_| anyhow!("Producer thread panicked"))?;

    tracing::info!(
        target: "queue_view::demo",
        "Demo finished: {} renders, {} suppressed errors",
        adapter.render_count(),
        adapter.suppressed_errors()
    );
    Ok(())
}

fn print_frame(adapter: &QueueAdapter<TextItemBuilder>, frame: usize) {
    println!("[render {}]", frame);
    for line in render_lines(adapter) {
        println!("{}", line);
    }
    println!();
}

/// Items cycling through the built-in track list.
fn demo_items(range: std::ops::Range<usize>) -> Vec<QueueItem> {
    range
        .map(|n| {
            let (title, artist, secs) = DEMO_TRACKS[n % DEMO_TRACKS.len()];
            let info = TrackInfo {
                title: Some(title.to_string()),
                artist: Some(artist.to_string()),
                album: None,
                duration_secs: Some(secs),
            };
            QueueItem::with_info(format!("/music/demo/{:02}.flac", n), info)
        })
        .collect()
}

/// Perform `steps` random mutations, then close the queue.
fn run_producer(queue: &PlayQueue, steps: usize, interval: Duration) {
    let mut rng = rand::rng();
    let mut next_track = queue.len();

    for step in 0..steps {
        thread::sleep(interval);

        let len = queue.len();
        let result = match rng.random_range(0..10) {
            0..=2 => {
                let count = rng.random_range(1..=2);
                let items = demo_items(next_track..next_track + count);
                next_track += count;
                tracing::info!(target: "queue_view::demo", "step {}: append {}", step, count);
                queue.append(items)
            }
            3..=4 => {
                // Occasionally one past the end, to exercise the error path
                let index = rng.random_range(0..=len);
                tracing::info!(target: "queue_view::demo", "step {}: remove {}", step, index);
                queue.remove(index).map(|_| ())
            }
            5 if len > 1 => {
                let from = rng.random_range(0..len);
                let to = rng.random_range(0..len);
                tracing::info!(target: "queue_view::demo", "step {}: move {} -> {}", step, from, to);
                queue.move_item(from, to)
            }
            6..=7 => {
                tracing::info!(target: "queue_view::demo", "step {}: next track", step);
                queue.offset_index(1).map(|_| ())
            }
            8 => {
                tracing::info!(target: "queue_view::demo", "step {}: shuffle", step);
                queue.shuffle()
            }
            _ => {
                tracing::info!(target: "queue_view::demo", "step {}: producer error", step);
                queue.report_error(format!("simulated failure at step {}", step));
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::warn!(target: "queue_view::demo", "step {} rejected: {}", step, e);
        }
    }

    queue.close();
}
