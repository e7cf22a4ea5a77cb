//! Event bus for session changes using tokio::broadcast
//!
//! The session store publishes here; UI layers subscribe to know when to
//! re-read auth and profile state.

use tokio::sync::broadcast;

/// Events emitted by the session store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A user signed in
    SignedIn { uid: String },
    /// The current user signed out
    SignedOut,
    /// Profile record was replaced
    ProfileUpdated,
    /// Profile record was removed
    ProfileCleared,
}

/// Event bus for broadcasting session events
///
/// Cloning shares the underlying channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create with default capacity (64 events)
    pub fn default_capacity() -> Self {
        Self::new(64)
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Get current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::default_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus_publish_subscribe() {
        let bus = EventBus::default_capacity();
        let mut rx = bus.subscribe();

        bus.publish(SessionEvent::SignedIn {
            uid: "u-1".to_string(),
        });
        bus.publish(SessionEvent::SignedOut);

        let first = rx.recv().await.unwrap();
        assert!(matches!(first, SessionEvent::SignedIn { uid } if uid == "u-1"));

        let second = rx.recv().await.unwrap();
        assert_eq!(second, SessionEvent::SignedOut);
    }

    #[tokio::test]
    async fn test_event_bus_clone_shares_channel() {
        let bus = EventBus::default_capacity();
        let other = bus.clone();
        let mut rx = bus.subscribe();

        assert_eq!(other.subscriber_count(), 1);

        other.publish(SessionEvent::ProfileUpdated);
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::ProfileUpdated);
    }

    #[test]
    fn test_event_bus_no_subscribers_ok() {
        let bus = EventBus::default_capacity();
        bus.publish(SessionEvent::ProfileCleared);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
