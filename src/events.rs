use serde::Serialize;
use tokio::sync::broadcast;

use crate::domain::delivery::Delivery;
use crate::domain::order::Order;

const CHANNEL_CAPACITY: usize = 64;

/// Realtime notification pushed to connected websocket clients.
///
/// Serializes as `{"event": "newOrder", "data": {...}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum AppEvent {
    NewOrder(Order),
    OrderUpdated(Order),
    DeliveryUpdated(Delivery),
}

/// Fan-out bus between HTTP handlers and websocket sessions.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish an event to all connected clients. A send error only means
    /// nobody is listening right now.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
