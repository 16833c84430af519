//! Typed publish-subscribe bus.
//!
//! Replaces implicit process-wide notification broadcasts with an
//! explicit subscription interface: each bus carries one payload type
//! and is owned by the composition root, so its lifetime ends with the
//! services that publish on it.

use tokio::sync::broadcast;

/// A broadcast bus for one event type.
///
/// Publishing with no live subscriber drops the event silently, the
/// usual broadcast semantics. Slow subscribers that fall more than the
/// bus capacity behind see a `Lagged` error on receive, not a stall of
/// the publisher.
pub struct EventBus<T: Clone> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> EventBus<T> {
    /// Creates a bus that buffers up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all current subscribers.
    pub fn publish(&self, event: T) {
        // A send error only means nobody is listening right now.
        let _ = self.sender.send(event);
    }

    /// Returns a new subscription receiving events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
