//! Broadcast channel bridging the locked engine state to async subscribers.

use tokio::sync::broadcast;

use crate::protocol::StatusSnapshot;

/// If a subscriber falls behind by more than this many snapshots, it skips
/// ahead (lagged) instead of being disconnected.
const BROADCAST_CAPACITY: usize = 64;

/// Owned by the engine. `publish()` never blocks, so it is safe to call with
/// the state lock held.
#[derive(Debug, Clone)]
pub struct StatusBroadcaster {
    tx: broadcast::Sender<StatusSnapshot>,
}

impl StatusBroadcaster {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { tx }
    }

    /// Push a snapshot to all subscribers. Returns how many received it.
    pub fn publish(&self, snapshot: StatusSnapshot) -> usize {
        self.tx.send(snapshot).unwrap_or(0)
    }

    /// Create a receiver for a newly connected subscriber.
    pub fn subscribe(&self) -> broadcast::Receiver<StatusSnapshot> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for StatusBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
