//! The play queue and its change notifications.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐        ┌───────────────────────────────┐
//! │   PlayQueue (any thread)     │ emits  │  ChangeBroadcaster            │
//! │  items + current index       ├───────►│  one crossbeam queue per      │
//! │  behind a parking_lot lock   │        │  Subscription                 │
//! └──────────────────────────────┘        └───────────────┬───────────────┘
//!                                                         │ drained on the
//!                                                         ▼ render thread
//!                                         ┌───────────────────────────────┐
//!                                         │  ui::QueueAdapter             │
//!                                         └───────────────────────────────┘
//! ```

mod broadcast;
mod events;
mod item;
mod queue;

pub use broadcast::{ChangeBroadcaster, Subscription};
pub use events::{ChangeKind, ChangeSignal};
pub use item::{QueueItem, TrackInfo, format_duration};
pub use queue::{PlayQueue, QueueError, RemovalPolicy};
