//! Post-change notifications for external subscribers
//!
//! The change pipeline publishes one event per applied mutation through an
//! [`EventPublisher`]. [`EventBus`] is the in-process implementation: topic
//! keyed handlers receiving JSON payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Topic of the event published after an entry changed
pub const ENTRY_CHANGED_TOPIC: &str = "config:entry_changed";

/// Payload of [`ENTRY_CHANGED_TOPIC`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryChanged {
    pub name: String,
    pub value: String,
}

/// Sink for post-change notifications
pub trait EventPublisher {
    fn publish(&mut self, topic: &str, payload: Value);
}

type Handler = Box<dyn FnMut(&Value)>;

/// Synchronous topic-based event bus
///
/// Handlers run inline in subscription order. Every published event is also
/// kept in a pending queue until drained with [`EventBus::take_published`].
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<String, Vec<Handler>>,
    published: Vec<(String, Value)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a topic
    pub fn subscribe(&mut self, topic: &str, handler: impl FnMut(&Value) + 'static) {
        self.handlers
            .entry(topic.to_string())
            .or_default()
            .push(Box::new(handler));
    }

    /// Take pending publish events
    pub fn take_published(&mut self) -> Vec<(String, Value)> {
        std::mem::take(&mut self.published)
    }
}

impl EventPublisher for EventBus {
    fn publish(&mut self, topic: &str, payload: Value) {
        if let Some(handlers) = self.handlers.get_mut(topic) {
            for handler in handlers.iter_mut() {
                handler(&payload);
            }
        }
        self.published.push((topic.to_string(), payload));
    }
}
