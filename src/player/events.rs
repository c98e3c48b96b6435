//! Change signals emitted by the play queue.

/// What kind of mutation produced a [`ChangeSignal::Changed`].
///
/// Consumers that only care that *something* changed can ignore this; it is
/// carried for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Items were appended to the end of the queue
    Append { count: usize },
    /// The item at `index` was removed
    Remove { index: usize },
    /// An item was moved from one position to another
    Move { from: usize, to: usize },
    /// The current index moved
    Select { index: usize },
    /// The whole order changed (shuffle)
    Reorder,
    /// All items were removed
    Clear,
}

/// A single notification delivered to a subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSignal {
    /// The queue's contents or current index changed.
    Changed(ChangeKind),
    /// The producer hit an error. Subscribers swallow these.
    Error(String),
    /// No further signals will be emitted. Always the last signal.
    Complete,
}

impl ChangeSignal {
    /// Whether this is the terminal signal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChangeSignal::Complete)
    }
}
