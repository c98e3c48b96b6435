//! Queue entries and their display metadata.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Track metadata for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Length of the track in seconds
    pub duration_secs: Option<u64>,
}

impl TrackInfo {
    /// Get display artist.
    pub fn display_artist(&self) -> &str {
        self.artist.as_deref().unwrap_or("Unknown Artist")
    }

    /// Get the duration, if known.
    pub fn duration(&self) -> Option<Duration> {
        self.duration_secs.map(Duration::from_secs)
    }
}

/// A single entry in the play queue.
///
/// Items have no identity of their own; they are addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    /// Path to the audio file
    pub path: PathBuf,
    /// Display metadata, if known
    pub info: Option<TrackInfo>,
}

impl QueueItem {
    /// Create a queue item from a file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            info: None,
        }
    }

    /// Create a queue item with metadata.
    pub fn with_info(path: impl Into<PathBuf>, info: TrackInfo) -> Self {
        Self {
            path: path.into(),
            info: Some(info),
        }
    }

    /// Get the display title (file stem if no title is known).
    pub fn display_title(&self) -> String {
        self.info
            .as_ref()
            .and_then(|i| i.title.clone())
            .unwrap_or_else(|| file_stem(&self.path))
    }

    /// Get the display duration as MM:SS, or `--:--` when unknown.
    pub fn display_duration(&self) -> String {
        self.info
            .as_ref()
            .and_then(TrackInfo::duration)
            .map(format_duration)
            .unwrap_or_else(|| "--:--".to_string())
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Format a duration as MM:SS or HH:MM:SS.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}
