//! Single-threaded trigger bus with scoped subscriptions.
//!
//! The host forwards its mount/resize/scroll notifications into an
//! [`EventBus`]; widgets subscribe a redraw closure and hold the returned
//! [`Subscription`] for as long as they live. Dropping the subscription
//! removes the listener, so a removed widget can never leak a callback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Why a repaint is happening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    Resize,
    Scroll,
}

type Listener = Rc<RefCell<dyn FnMut(Trigger)>>;

#[derive(Default)]
struct BusInner {
    next_id: usize,
    listeners: Vec<(usize, Listener)>,
}

/// Synchronous, single-threaded event fan-out. Deliberately `!Send`.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener; it stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl FnMut(Trigger) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(RefCell::new(listener))));
        Subscription {
            bus: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Delivers `trigger` to every current listener, synchronously and in
    /// subscription order. Each listener finishes before the next runs.
    pub fn emit(&self, trigger: Trigger) {
        // Snapshot so listeners may subscribe/unsubscribe while running.
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            (&mut *listener.borrow_mut())(trigger);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Guard for one registered listener; unsubscribes on drop.
///
/// Holds only a weak reference to the bus, so a forgotten subscription
/// never keeps the bus alive.
pub struct Subscription {
    bus: Weak<RefCell<BusInner>>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
