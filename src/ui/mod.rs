//! List view model for the play queue.
//!
//! - [`QueueAdapter`]: flat position mapping and re-render tracking
//! - [`ItemViewBuilder`]: turns queue items into row contents
//! - [`Row`] / [`ViewKind`]: what the rendering host creates and binds

mod adapter;
mod builder;
mod rows;

pub use adapter::{AdapterState, QueueAdapter};
pub use builder::{ItemViewBuilder, SelectedListener, TextItemBuilder, TextRow};
pub use rows::{ItemRow, Row, ViewKind};
