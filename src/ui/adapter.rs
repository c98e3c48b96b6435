//! View-model that keeps a list view in sync with a [`PlayQueue`].
//!
//! The adapter exposes one flat position space to the rendering host:
//!
//! ```text
//! flat:   0        1 .. n       n + 1
//!       [header] [data rows] [footer]
//! ```
//!
//! Header and footer are optional; the footer is only counted while it is
//! both set and visible. The adapter never caches queue contents: every
//! query re-reads the queue.

use std::sync::Arc;

use crate::player::{ChangeSignal, PlayQueue, QueueError, QueueItem, Subscription};

use super::builder::{ItemViewBuilder, SelectedListener};
use super::rows::{ItemRow, Row, ViewKind};

/// Adapter lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    /// Listening to the queue
    Subscribed,
    /// Terminal. Only `dispose` may be called again
    Disposed,
}

/// Maps a play queue onto list rows and tracks when the list must redraw.
///
/// All methods are expected to run on the render thread. Queue mutations may
/// happen anywhere; their signals are only acted on inside [`QueueAdapter::pump`].
pub struct QueueAdapter<B: ItemViewBuilder, H: Clone = String> {
    queue: Arc<PlayQueue>,
    builder: B,
    header: Option<H>,
    footer: Option<H>,
    footer_visible: bool,
    /// At most one live subscription. `None` once disposed.
    subscription: Option<Subscription>,
    render_requested: bool,
    render_count: u64,
    suppressed_errors: u64,
}

impl<B: ItemViewBuilder, H: Clone> QueueAdapter<B, H> {
    /// Bind to `queue` and start listening immediately.
    pub fn new(queue: Arc<PlayQueue>, builder: B) -> Self {
        let mut adapter = Self {
            queue,
            builder,
            header: None,
            footer: None,
            footer_visible: false,
            subscription: None,
            render_requested: false,
            render_count: 0,
            suppressed_errors: 0,
        };
        adapter.start_reactor();
        adapter
    }

    fn start_reactor(&mut self) {
        if let Some(mut previous) = self.subscription.take() {
            previous.dispose();
        }
        self.subscription = Some(self.queue.broadcast_receiver().subscribe());
        tracing::debug!(target: "queue_view::adapter", "Subscribed to play queue");
    }

    /// Replace the current subscription with a fresh one.
    pub fn resubscribe(&mut self) {
        if self.is_disposed() {
            return;
        }
        self.start_reactor();
    }

    /// Handle every pending signal. Returns how many were consumed.
    ///
    /// Each change requests one full re-render, producer errors are
    /// swallowed, and the terminal signal disposes the adapter.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let Some(signal) = self.subscription.as_ref().and_then(Subscription::try_next) else {
                break;
            };
            handled += 1;

            match signal {
                ChangeSignal::Changed(kind) => {
                    tracing::trace!(target: "queue_view::adapter", "Queue changed: {:?}", kind);
                    self.request_render();
                }
                ChangeSignal::Error(message) => self.swallow_producer_error(&message),
                ChangeSignal::Complete => {
                    tracing::debug!(target: "queue_view::adapter", "Queue completed, disposing adapter");
                    self.dispose();
                }
            }
        }
        handled
    }

    /// Producer errors must never tear down the list; log and move on.
    fn swallow_producer_error(&mut self, message: &str) {
        self.suppressed_errors += 1;
        tracing::warn!(target: "queue_view::adapter", "Ignoring play queue error: {}", message);
    }

    fn request_render(&mut self) {
        self.render_requested = true;
        self.render_count += 1;
    }

    /// Returns `true` once per pending full re-render request.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    /// Total number of re-render requests made so far.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Number of producer errors swallowed so far.
    pub fn suppressed_errors(&self) -> u64 {
        self.suppressed_errors
    }

    /// Release the subscription. Idempotent.
    pub fn dispose(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.dispose();
            tracing::debug!(target: "queue_view::adapter", "Adapter disposed");
        }
    }

    pub fn state(&self) -> AdapterState {
        if self.subscription.is_some() {
            AdapterState::Subscribed
        } else {
            AdapterState::Disposed
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.state() == AdapterState::Disposed
    }

    // ------------------------------------------------------------------
    // Header / footer
    // ------------------------------------------------------------------

    pub fn set_header(&mut self, header: H) {
        self.update_slots(|a| a.header = Some(header));
    }

    pub fn clear_header(&mut self) {
        self.update_slots(|a| a.header = None);
    }

    pub fn set_footer(&mut self, footer: H) {
        self.update_slots(|a| a.footer = Some(footer));
    }

    pub fn clear_footer(&mut self) {
        self.update_slots(|a| a.footer = None);
    }

    /// Toggle footer visibility, whether or not a footer is set.
    pub fn show_footer(&mut self, visible: bool) {
        self.update_slots(|a| a.footer_visible = visible);
    }

    fn update_slots(&mut self, update: impl FnOnce(&mut Self)) {
        if self.is_disposed() {
            return;
        }
        update(self);
        self.request_render();
    }

    pub fn header(&self) -> Option<&H> {
        self.header.as_ref()
    }

    pub fn footer(&self) -> Option<&H> {
        self.footer.as_ref()
    }

    pub fn footer_visible(&self) -> bool {
        self.footer_visible
    }

    fn footer_shown(&self) -> bool {
        self.footer.is_some() && self.footer_visible
    }

    // ------------------------------------------------------------------
    // Queue delegation
    // ------------------------------------------------------------------

    /// Append items to the queue. The list redraws when the signal arrives.
    pub fn add(&self, items: impl IntoIterator<Item = QueueItem>) -> Result<(), QueueError> {
        if self.is_disposed() {
            return Ok(());
        }
        self.queue.append(items)
    }

    pub fn add_one(&self, item: QueueItem) -> Result<(), QueueError> {
        self.add(std::iter::once(item))
    }

    /// Remove an item from the queue. Returns `Ok(None)` once disposed.
    pub fn remove(&self, index: usize) -> Result<Option<QueueItem>, QueueError> {
        if self.is_disposed() {
            return Ok(None);
        }
        self.queue.remove(index).map(Some)
    }

    pub fn items(&self) -> Vec<QueueItem> {
        self.queue.streams()
    }

    pub fn queue(&self) -> &Arc<PlayQueue> {
        &self.queue
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn set_selected_listener(&mut self, listener: SelectedListener) {
        if self.is_disposed() {
            return;
        }
        self.builder.set_on_selected_listener(listener);
    }

    // ------------------------------------------------------------------
    // Position mapping
    // ------------------------------------------------------------------

    /// Number of flat positions: header, data rows, visible footer.
    pub fn item_count(&self) -> usize {
        let mut count = self.queue.len();
        if self.header.is_some() {
            count += 1;
        }
        if self.footer_shown() {
            count += 1;
        }
        count
    }

    /// Kind of row at `position`.
    pub fn item_view_type(&self, position: usize) -> ViewKind {
        let mut position = position;
        if self.header.is_some() {
            if position == 0 {
                return ViewKind::Header;
            }
            position -= 1;
        }
        if self.footer_shown() && position == self.queue.len() {
            return ViewKind::Footer;
        }
        ViewKind::Data
    }

    /// Data-relative index for a flat position, ignoring bounds.
    fn data_index(&self, position: usize) -> Option<usize> {
        if self.header.is_some() {
            position.checked_sub(1)
        } else {
            Some(position)
        }
    }

    /// Create a row for a host-supplied type code.
    ///
    /// Unknown codes yield [`Row::Inert`]; they point at a bug in the
    /// position mapping, and a broken row beats a broken render pass.
    pub fn create_row(&self, code: i32) -> Row<H, B::Row> {
        match ViewKind::from_code(code) {
            Some(kind) => self.create_row_for(kind),
            None => {
                tracing::error!(target: "queue_view::adapter", "Unknown row type {}", code);
                Row::Inert
            }
        }
    }

    pub fn create_row_for(&self, kind: ViewKind) -> Row<H, B::Row> {
        match kind {
            ViewKind::Header => Row::Header(self.header.clone()),
            ViewKind::Footer => Row::Footer(self.footer.clone()),
            ViewKind::Data => Row::Item(ItemRow {
                view: self.builder.create_row(),
                selected: false,
            }),
        }
    }

    /// Fill `row` with the contents for `position`.
    pub fn bind(&self, row: &mut Row<H, B::Row>, position: usize) {
        match row {
            Row::Item(item_row) => {
                let Some(index) = self.data_index(position) else {
                    tracing::warn!(target: "queue_view::adapter", "Data row bound at header position");
                    return;
                };
                // Builders may read the queue, so never call them under its lock
                let snapshot = self
                    .queue
                    .peek(|items, current| items.get(index).cloned().map(|item| (item, current)));
                let Some((item, current)) = snapshot else {
                    tracing::warn!(target: "queue_view::adapter", "No queue item for position {}", position);
                    return;
                };
                self.builder.build(&mut item_row.view, &item);
                item_row.selected = index == current;
            }
            Row::Header(slot) => *slot = self.header.clone(),
            Row::Footer(slot) => {
                *slot = if self.footer_visible {
                    self.footer.clone()
                } else {
                    None
                };
            }
            Row::Inert => {}
        }
    }

    /// Create and bind the row at `position` in one go.
    pub fn row_at(&self, position: usize) -> Row<H, B::Row> {
        let mut row = self.create_row_for(self.item_view_type(position));
        self.bind(&mut row, position);
        row
    }

    /// Report an interactive selection of the data row at `position`.
    pub fn select(&self, position: usize) -> Option<QueueItem> {
        if self.is_disposed() || self.item_view_type(position) != ViewKind::Data {
            return None;
        }
        let item = self.queue.item(self.data_index(position)?)?;
        self.builder.notify_selected(&item);
        Some(item)
    }
}
