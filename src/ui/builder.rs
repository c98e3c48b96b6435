//! Item builders turn queue entries into row contents.

use crate::player::QueueItem;

/// Called with the item of a row the user selected.
pub type SelectedListener = Box<dyn Fn(&QueueItem)>;

/// Populates data rows for a [`QueueAdapter`](super::QueueAdapter).
pub trait ItemViewBuilder {
    /// The row type this builder renders into.
    type Row;

    /// Create a fresh, empty row.
    fn create_row(&self) -> Self::Row;

    /// Fill `row` with the contents of `item`.
    fn build(&self, row: &mut Self::Row, item: &QueueItem);

    /// Replace the listener notified on interactive selection.
    fn set_on_selected_listener(&mut self, listener: SelectedListener);

    /// Invoke the selection listener, if any.
    fn notify_selected(&self, item: &QueueItem);
}

/// A plain-text row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRow {
    pub line: String,
}

/// Builds one line of text per item: title, artist and duration.
#[derive(Default)]
pub struct TextItemBuilder {
    on_selected: Option<SelectedListener>,
}

impl TextItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemViewBuilder for TextItemBuilder {
    type Row = TextRow;

    fn create_row(&self) -> TextRow {
        TextRow::default()
    }

    fn build(&self, row: &mut TextRow, item: &QueueItem) {
        row.line = match item.info.as_ref() {
            Some(info) => format!(
                "{} - {} [{}]",
                item.display_title(),
                info.display_artist(),
                item.display_duration()
            ),
            None => format!("{} [{}]", item.display_title(), item.display_duration()),
        };
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
