//! Test utilities and fixtures for queue-view tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{make_items, RecordingBuilder};
//!
//! let queue = Arc::new(PlayQueue::with_items(make_items(&["a", "b"]), 0));
//! let adapter: QueueAdapter<_, &str> = QueueAdapter::new(queue, RecordingBuilder::default());
//! ```

use std::cell::Cell;

use crate::player::QueueItem;
use crate::ui::{ItemViewBuilder, SelectedListener};

/// Creates a queue item whose display title is `name`.
pub fn make_item(name: &str) -> QueueItem {
    QueueItem::from_path(format!("/music/{}.mp3", name))
}

/// Creates one item per name, in order.
pub fn make_items(names: &[&str]) -> Vec<QueueItem> {
    names.iter().map(|name| make_item(name)).collect()
}

/// Display titles of `items`, in order.
pub fn titles(items: &[QueueItem]) -> Vec<String> {
    items.iter().map(QueueItem::display_title).collect()
}

/// Builder whose rows are just the item title. Counts `build` calls.
#[derive(Default)]
pub struct RecordingBuilder {
    builds: Cell<usize>,
    on_selected: Option<SelectedListener>,
}

impl RecordingBuilder {
    pub fn builds(&self) -> usize {
        self.builds.get()
    }
}

impl ItemViewBuilder for RecordingBuilder {
    type Row = String;

    fn create_row(&self) -> String {
        String::new()
    }

    fn build(&self, row: &mut String, item: &QueueItem) {
        self.builds.set(self.builds.get() + 1);
        *row = item.display_title();
    }

    fn set_on_selected_listener(&mut self, listener: SelectedListener) {
        self.on_selected = Some(listener);
    }

    fn notify_selected(&self, item: &QueueItem) {
        if let Some(listener) = &self.on_selected {
            listener(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_items_titles() {
        assert_eq!(titles(&make_items(&["a", "b"])), ["a", "b"]);
    }

    #[test]
    fn test_recording_builder_counts() {
        let builder = RecordingBuilder::default();
        let mut row = builder.create_row();
        builder.build(&mut row, &make_item("x"));
        assert_eq!(row, "x");
        assert_eq!(builder.builds(), 1);
    }
}
