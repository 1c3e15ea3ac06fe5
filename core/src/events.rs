//! Host-facing event channel.
//!
//! The original card dispatched DOM events upward; here the host registers
//! plain callbacks instead. Everything is synchronous and single-threaded;
//! dispatch runs each subscriber in registration order before returning.
//! The color resolver itself never emits events.

use crate::config::TileConfig;

/// Events a tile (or its configuration editor) reports to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum TileEvent {
    /// The user activated the tile icon and wants the entity detail view.
    MoreInfo {
        /// Entity id of the observed sensor
        entity_id: String,
    },
    /// The editor committed a new configuration snapshot.
    ConfigChanged {
        /// The complete replacement configuration
        config: TileConfig,
    },
}

/// Registry of host callbacks.
#[derive(Default)]
pub struct EventDispatcher {
    subscribers: Vec<Box<dyn Fn(&TileEvent)>>,
}

impl EventDispatcher {
    /// Create a dispatcher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for all tile events.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&TileEvent) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver an event to every subscriber, in registration order.
    pub fn dispatch(&self, event: &TileEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }

    /// Report an icon activation for the given entity.
    pub fn more_info(&self, entity_id: impl Into<String>) {
        self.dispatch(&TileEvent::MoreInfo {
            entity_id: entity_id.into(),
        });
    }

    /// Report a committed configuration snapshot.
    pub fn config_changed(&self, config: TileConfig) {
        self.dispatch(&TileEvent::ConfigChanged { config });
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscriber_receives_events() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut dispatcher = EventDispatcher::new();
        dispatcher.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        dispatcher.more_info("sensor.kitchen_co2");
        dispatcher.config_changed(TileConfig::new("sensor.kitchen_co2"));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            TileEvent::MoreInfo {
                entity_id: "sensor.kitchen_co2".to_owned()
            }
        );
        assert!(matches!(seen[1], TileEvent::ConfigChanged { .. }));
    }

    #[test]
    fn test_dispatch_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut dispatcher = EventDispatcher::new();
        for tag in ["first", "second"] {
            let sink = Rc::clone(&order);
            dispatcher.subscribe(move |_| sink.borrow_mut().push(tag));
        }
        assert_eq!(dispatcher.subscriber_count(), 2);

        dispatcher.more_info("sensor.x");
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_dispatch_without_subscribers_is_a_noop() {
        let dispatcher = EventDispatcher::new();
        dispatcher.more_info("sensor.x");
    }
}
