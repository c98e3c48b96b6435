//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`QueueError`], [`ConfigError`]), while `main` uses `anyhow` for
//! convenient error propagation.
//!
//! # Example
//!
//! ```ignore
//! use queue_view::error::{Result, ResultExt};
//!
//! fn dump(queue: &PlayQueue) -> Result<String> {
//!     let json = serde_json::to_string(&queue.streams())?;
//!     Ok(json)
//! }
//! ```

use crate::config::ConfigError;
use crate::player::QueueError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Play queue rejected an operation
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, QueueError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Queue(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_error_display() {
        let err: Error = QueueError::IndexOutOfRange { index: 4, len: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Queue error: Index 4 out of range for queue of 2 items"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::from(QueueError::Closed).context("while removing track");
        let msg = err.to_string();
        assert!(msg.contains("while removing track"));
        assert!(msg.contains("Queue is closed"));
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), QueueError> = Err(QueueError::Closed);
        let with_ctx = result.with_context("additional context");
        assert!(with_ctx.unwrap_err().to_string().contains("additional context"));
    }

    #[test]
    fn test_config_error_with_context() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NoConfigDir);
        let err = result.with_context("Cannot write configuration").unwrap_err();

        let Error::WithContext { source, .. } = &err else {
            panic!("expected context, got {:?}", err);
        };
        assert!(matches!(**source, Error::Config(ConfigError::NoConfigDir)));
        assert_eq!(
            err.to_string(),
            "Cannot write configuration: Configuration error: Could not determine config directory"
        );
    }
}
