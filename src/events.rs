// Input events and the single-threaded bus that hands them to listeners.
// A listener exists exactly as long as its `Subscription` value: dropping it
// deregisters, so nothing is delivered after teardown.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to absolute window coordinates.
    PointerMove { x: f64, y: f64 },
    /// Viewport changed size.
    Resize { width: usize, height: usize },
}

struct Listener {
    id: u64,
    queue: VecDeque<InputEvent>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Fan-out of input events. Cheap to clone; clones share the same listeners.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It receives every event published from now until it is dropped.
    pub fn subscribe(&self) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push(Listener { id, queue: VecDeque::new() });
        Subscription { id, registry: Rc::downgrade(&self.registry) }
    }

    pub fn publish(&self, event: InputEvent) {
        for l in &mut self.registry.borrow_mut().listeners {
            l.queue.push_back(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle for one registered listener.
#[must_use]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Take everything queued for this listener, oldest first.
    pub fn drain(&self) -> Vec<InputEvent> {
        let Some(registry) = self.registry.upgrade() else {
            return Vec::new();
        };
        let mut reg = registry.borrow_mut();
        reg.listeners
            .iter_mut()
            .find(|l| l.id == self.id)
            .map(|l| l.queue.drain(..).collect())
            .unwrap_or_default()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|l| l.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_in_order_to_each_listener() {
        let bus = EventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();
        bus.publish(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        bus.publish(InputEvent::Resize { width: 10, height: 20 });

        let expected = vec![
            InputEvent::PointerMove { x: 1.0, y: 2.0 },
            InputEvent::Resize { width: 10, height: 20 },
        ];
        assert_eq!(a.drain(), expected);
        assert_eq!(b.drain(), expected);
        assert!(a.drain().is_empty());
    }

    #[test]
    fn late_subscriber_misses_earlier_events() {
        let bus = EventBus::new();
        bus.publish(InputEvent::PointerMove { x: 1.0, y: 1.0 });
        let s = bus.subscribe();
        assert!(s.drain().is_empty());
    }

    #[test]
    fn drop_deregisters() {
        let bus = EventBus::new();
        let a = bus.subscribe();
        {
            let _b = bus.subscribe();
            assert_eq!(bus.listener_count(), 2);
        }
        assert_eq!(bus.listener_count(), 1);
        drop(a);
        assert_eq!(bus.listener_count(), 0);
        // Publishing with nobody listening is fine
        bus.publish(InputEvent::Resize { width: 1, height: 1 });
    }

    #[test]
    fn subscription_outliving_bus_is_inert() {
        let bus = EventBus::new();
        let s = bus.subscribe();
        drop(bus);
        assert!(s.drain().is_empty());
    }
}
