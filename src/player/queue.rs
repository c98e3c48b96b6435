//! Play queue management.
//!
//! The queue owns the ordered items and the current index. Every mutator
//! emits exactly one [`ChangeSignal`](super::ChangeSignal) while still holding
//! the write lock, so a second mutation can never slip in between a change and
//! its notification.

use parking_lot::RwLock;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::broadcast::ChangeBroadcaster;
use super::events::ChangeKind;
use super::item::QueueItem;

/// What happens to the current index when an item before it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Shift the index down so it keeps pointing at the same item
    #[default]
    TrackItem,
    /// Keep the index numerically fixed
    KeepIndex,
}

/// Queue errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Index {index} out of range for queue of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Queue is closed")]
    Closed,
}

#[derive(Debug, Default)]
struct QueueState {
    items: Vec<QueueItem>,
    /// Current index, only meaningful while `items` is non-empty
    position: usize,
    closed: bool,
}

impl QueueState {
    fn ensure_open(&self) -> Result<(), QueueError> {
        if self.closed {
            Err(QueueError::Closed)
        } else {
            Ok(())
        }
    }

    fn clamp_position(&mut self) {
        self.position = self.position.min(self.items.len().saturating_sub(1));
    }
}

/// The play queue with current position tracking.
///
/// Shared between threads behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct PlayQueue {
    state: RwLock<QueueState>,
    broadcaster: ChangeBroadcaster,
    removal_policy: RemovalPolicy,
}

impl PlayQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue pre-filled with items. Emits nothing.
    pub fn with_items(items: Vec<QueueItem>, index: usize) -> Self {
        let mut state = QueueState {
            items,
            position: index,
            closed: false,
        };
        state.clamp_position();

        Self {
            state: RwLock::new(state),
            ..Self::default()
        }
    }

    /// Set the policy used by [`PlayQueue::remove`].
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    /// The event source for this queue.
    pub fn broadcast_receiver(&self) -> ChangeBroadcaster {
        self.broadcaster.clone()
    }

    /// Snapshot of the items, consistent with the last emitted signal.
    pub fn streams(&self) -> Vec<QueueItem> {
        self.state.read().items.clone()
    }

    /// Get a single item by index.
    pub fn item(&self, index: usize) -> Option<QueueItem> {
        self.state.read().items.get(index).cloned()
    }

    /// Current index. Zero when the queue is empty.
    pub fn index(&self) -> usize {
        self.state.read().position
    }

    /// Get the current item.
    pub fn current(&self) -> Option<QueueItem> {
        let state = self.state.read();
        state.items.get(state.position).cloned()
    }

    /// Read items and current index under a single lock.
    pub fn peek<T>(&self, f: impl FnOnce(&[QueueItem], usize) -> T) -> T {
        let state = self.state.read();
        f(&state.items, state.position)
    }

    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().items.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.state.read().closed
    }

    /// Add items to the end of the queue, keeping their relative order.
    pub fn append(&self, items: impl IntoIterator<Item = QueueItem>) -> Result<(), QueueError> {
        let mut state = self.state.write();
        state.ensure_open()?;

        let before = state.items.len();
        state.items.extend(items);
        let count = state.items.len() - before;
        if count == 0 {
            return Ok(());
        }

        tracing::debug!(target: "queue_view::queue", "Appended {} items ({} total)", count, state.items.len());
        self.broadcaster.changed(ChangeKind::Append { count });
        Ok(())
    }

    /// Remove the item at `index`.
    pub fn remove(&self, index: usize) -> Result<QueueItem, QueueError> {
        let mut state = self.state.write();
        state.ensure_open()?;

        let len = state.items.len();
        if index >= len {
            return Err(QueueError::IndexOutOfRange { index, len });
        }

        let item = state.items.remove(index);
        if self.removal_policy == RemovalPolicy::TrackItem && index < state.position {
            state.position -= 1;
        }
        state.clamp_position();

        tracing::debug!(target: "queue_view::queue", "Removed item {} (index now {})", index, state.position);
        self.broadcaster.changed(ChangeKind::Remove { index });
        Ok(item)
    }

    /// Move an item from one position to another. The current index follows
    /// the item it pointed at.
    pub fn move_item(&self, from: usize, to: usize) -> Result<(), QueueError> {
        let mut state = self.state.write();
        state.ensure_open()?;

        let len = state.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(QueueError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let item = state.items.remove(from);
        state.items.insert(to, item);

        let pos = state.position;
        if from == pos {
            state.position = to;
        } else if from < pos && to >= pos {
            state.position -= 1;
        } else if from > pos && to <= pos {
            state.position += 1;
        }

        self.broadcaster.changed(ChangeKind::Move { from, to });
        Ok(())
    }

    /// Jump to a specific position, clamped into range.
    ///
    /// Returns the new index. Emits only if the index actually changed.
    pub fn set_index(&self, index: usize) -> Result<usize, QueueError> {
        let mut state = self.state.write();
        state.ensure_open()?;
        Ok(self.select_locked(&mut state, index))
    }

    /// Move the current index by `delta`, saturating at both ends.
    pub fn offset_index(&self, delta: isize) -> Result<usize, QueueError> {
        let mut state = self.state.write();
        state.ensure_open()?;
        let target = state.position.saturating_add_signed(delta);
        Ok(self.select_locked(&mut state, target))
    }

    fn select_locked(&self, state: &mut QueueState, index: usize) -> usize {
        if state.items.is_empty() {
            return 0;
        }

        let index = index.min(state.items.len() - 1);
        if index != state.position {
            state.position = index;
            self.broadcaster.changed(ChangeKind::Select { index });
        }
        index
    }

    /// Randomize the order, keeping the current item first.
    pub fn shuffle(&self) -> Result<(), QueueError> {
        let mut state = self.state.write();
        state.ensure_open()?;

        if state.items.len() < 2 {
            return Ok(());
        }

        let position = state.position;
        let current = state.items.remove(position);
        state.items.shuffle(&mut rand::rng());
        state.items.insert(0, current);
        state.position = 0;

        self.broadcaster.changed(ChangeKind::Reorder);
        Ok(())
    }

    /// Remove every item.
    pub fn clear(&self) -> Result<(), QueueError> {
        let mut state = self.state.write();
        state.ensure_open()?;

        if state.items.is_empty() {
            return Ok(());
        }

        state.items.clear();
        state.position = 0;
        self.broadcaster.changed(ChangeKind::Clear);
        Ok(())
    }

    /// Forward a producer-side error to subscribers.
    pub fn report_error(&self, message: impl Into<String>) -> bool {
        self.broadcaster.error(message)
    }

    /// End the session: emit the terminal signal and reject further mutation.
    pub fn close(&self) {
        let mut state = self.state.write();
        if state.closed {
            return;
        }
        state.closed = true;
        tracing::debug!(target: "queue_view::queue", "Queue closed with {} items", state.items.len());
        self.broadcaster.complete();
    }
}
