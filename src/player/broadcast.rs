//! Change broadcaster with explicit, disposable subscriptions.
//!
//! Every subscription owns its own unbounded `crossbeam` queue. Producers may
//! emit from any thread; the consumer drains its queue from wherever it
//! renders, which is how signals get marshaled onto the render thread.

use crossbeam_channel::{Receiver, Sender, unbounded};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

use super::events::{ChangeKind, ChangeSignal};

type SubscriberId = u64;

#[derive(Debug, Default)]
struct Registry {
    next_id: SubscriberId,
    subscribers: Vec<(SubscriberId, Sender<ChangeSignal>)>,
    completed: bool,
}

/// Multicast source of [`ChangeSignal`]s.
///
/// Cloning yields another handle to the same source.
#[derive(Debug, Clone, Default)]
pub struct ChangeBroadcaster {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeBroadcaster {
    /// Create a broadcaster with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    ///
    /// The subscriber only sees signals emitted after this call. Subscribing
    /// to a completed broadcaster yields a subscription holding just
    /// [`ChangeSignal::Complete`].
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = unbounded();
        let mut registry = self.registry.lock();

        if registry.completed {
            let _ = tx.send(ChangeSignal::Complete);
            return Subscription {
                id: None,
                registry: Weak::new(),
                receiver: Some(rx),
            };
        }

        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, tx));
        tracing::debug!(
            target: "queue_view::broadcast",
            "Subscriber {} registered ({} active)",
            id,
            registry.subscribers.len()
        );

        Subscription {
            id: Some(id),
            registry: Arc::downgrade(&self.registry),
            receiver: Some(rx),
        }
    }

    /// Deliver a signal to every live subscriber.
    ///
    /// Returns `false` if the broadcaster has already completed, in which case
    /// nothing is delivered.
    pub fn emit(&self, signal: ChangeSignal) -> bool {
        let mut registry = self.registry.lock();
        if registry.completed {
            tracing::debug!(target: "queue_view::broadcast", "Dropping {:?} after completion", signal);
            return false;
        }

        // A failed send means the receiving half is gone; forget that subscriber
        registry
            .subscribers
            .retain(|(_, tx)| tx.send(signal.clone()).is_ok());

        if signal.is_terminal() {
            registry.completed = true;
            registry.subscribers.clear();
            tracing::debug!(target: "queue_view::broadcast", "Broadcaster completed");
        }
        true
    }

    /// Emit a [`ChangeSignal::Changed`].
    pub fn changed(&self, kind: ChangeKind) -> bool {
        self.emit(ChangeSignal::Changed(kind))
    }

    /// Emit a producer-side error.
    pub fn error(&self, message: impl Into<String>) -> bool {
        self.emit(ChangeSignal::Error(message.into()))
    }

    /// Emit the terminal signal. Later emissions are rejected.
    pub fn complete(&self) -> bool {
        self.emit(ChangeSignal::Complete)
    }

    /// Whether the terminal signal has been emitted.
    pub fn is_completed(&self) -> bool {
        self.registry.lock().completed
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.registry.lock().subscribers.len()
    }
}

/// Handle to one registration on a [`ChangeBroadcaster`].
///
/// Dropping the handle disposes it.
#[derive(Debug)]
pub struct Subscription {
    id: Option<SubscriberId>,
    registry: Weak<Mutex<Registry>>,
    receiver: Option<Receiver<ChangeSignal>>,
}

impl Subscription {
    /// A subscription fed by a raw channel, outside any broadcaster.
    #[cfg(test)]
    pub(crate) fn detached(receiver: Receiver<ChangeSignal>) -> Self {
        Self {
            id: None,
            registry: Weak::new(),
            receiver: Some(receiver),
        }
    }

    /// Take the next pending signal without blocking.
    pub fn try_next(&self) -> Option<ChangeSignal> {
        self.receiver.as_ref()?.try_recv().ok()
    }

    /// Whether [`Subscription::dispose`] has run.
    pub fn is_disposed(&self) -> bool {
        self.receiver.is_none()
    }

    /// Unregister and discard any undelivered signals. Idempotent.
    pub fn dispose(&mut self) {
        let Some(receiver) = self.receiver.take() else {
            return;
        };

        if let (Some(id), Some(registry)) = (self.id, self.registry.upgrade()) {
            let mut registry = registry.lock();
            registry.subscribers.retain(|(sid, _)| *sid != id);
            tracing::debug!(
                target: "queue_view::broadcast",
                "Subscriber {} disposed ({} active)",
                id,
                registry.subscribers.len()
            );
        }

        drop(receiver);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}
