use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::pixel::PixelFormat;
use crate::viewport::ScrollBars;

/// Notification published by the viewer after a state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    ImageLoaded {
        width: u32,
        height: u32,
        format: PixelFormat,
    },
    ZoomChanged { zoom: u32 },
    OriginChanged { x: u32, y: u32 },
    ScrollBarsChanged(ScrollBars),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ViewportEvent)>;

/// Subscriber registry keyed by [`SubscriptionId`].
///
/// Subscribers live until they are explicitly unsubscribed or the hub is
/// dropped. Publishing is skipped entirely while a [`SuppressGuard`] is alive.
pub struct EventHub {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    suppress_depth: Rc<Cell<usize>>,
}

impl Default for EventHub {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
            suppress_depth: Rc::new(Cell::new(0)),
        }
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("subscribers", &self.subscribers.len())
            .field("suppress_depth", &self.suppress_depth.get())
            .finish()
    }
}

impl EventHub {
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ViewportEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppress_depth.get() > 0
    }

    /// Silence publishing until the returned guard is dropped. Guards nest.
    pub fn suppress(&self) -> SuppressGuard {
        SuppressGuard::new(Rc::clone(&self.suppress_depth))
    }

    pub fn publish(&mut self, event: ViewportEvent) {
        if self.is_suppressed() {
            trace!(?event, "Event suppressed");
            return;
        }
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

/// Scoped suppression of viewer notifications.
#[must_use = "notifications resume as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SuppressGuard {
    depth: Rc<Cell<usize>>,
}

impl SuppressGuard {
    fn new(depth: Rc<Cell<usize>>) -> Self {
        depth.set(depth.get() + 1);
        Self { depth }
    }
}

impl Drop for SuppressGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}
