//! Push delivery of gesture changes and clicks to consumers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::arbiter::{ClickRequest, GestureChange};

/// What a listener did with a gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Leave the event in place for other readers.
    Ignored,
    /// The event was acted on; clear it once every listener has seen it.
    Consumed,
}

/// A consumer of engine output.  Called synchronously from inside
/// `GestureEngine::process_frame`, after the frame is classified.
pub trait GestureListener {
    /// The current gesture event changed (fired, expired or cleared).
    fn on_gesture(&mut self, change: &GestureChange) -> Disposition;

    /// A debounced pinch click happened.
    fn on_click(&mut self, _click: &ClickRequest) {}
}

/// Lets a host keep a handle on a listener it hands to the engine.
impl<L: GestureListener> GestureListener for Rc<RefCell<L>> {
    fn on_gesture(&mut self, change: &GestureChange) -> Disposition {
        self.borrow_mut().on_gesture(change)
    }

    fn on_click(&mut self, click: &ClickRequest) {
        self.borrow_mut().on_click(click)
    }
}

/// Handle returned by `subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Registered listeners in subscription order.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<(ListenerId, Box<dyn GestureListener>)>,
    next_id: u64,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn GestureListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns true if a listener was removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() < before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver a change to every listener.  Returns `Consumed` if any of
    /// them consumed it; everyone still sees the change.
    pub fn notify_gesture(&mut self, change: &GestureChange) -> Disposition {
        let mut disposition = Disposition::Ignored;
        for (_, listener) in &mut self.listeners {
            if listener.on_gesture(change) == Disposition::Consumed {
                disposition = Disposition::Consumed;
            }
        }
        disposition
    }

    pub fn notify_click(&mut self, click: &ClickRequest) {
        for (_, listener) in &mut self.listeners {
            listener.on_click(click);
        }
    }
}

// ── Test helpers ───────────────────────────────────────────

/// Records everything it is told; optionally consumes every event.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub changes: Vec<GestureChange>,
    pub clicks: Vec<ClickRequest>,
    pub consume: bool,
}

#[cfg(test)]
impl Recorder {
    /// Events that were fired (ignores clears and expiries).
    pub fn fired(&self) -> Vec<crate::arbiter::GestureEvent> {
        self.changes.iter().filter_map(|c| c.current).collect()
    }
}

#[cfg(test)]
impl GestureListener for Recorder {
    fn on_gesture(&mut self, change: &GestureChange) -> Disposition {
        self.changes.push(*change);
        if self.consume && change.current.is_some() {
            Disposition::Consumed
        } else {
            Disposition::Ignored
        }
    }

    fn on_click(&mut self, click: &ClickRequest) {
        self.clicks.push(*click);
    }
}
