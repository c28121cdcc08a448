//! Event subscription and dispatch
//!
//! Dispatch snapshots the handler list before invoking it, so a handler may
//! subscribe or unsubscribe from inside its own callback without deadlocking.
//! Changes made during dispatch take effect from the next publish.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::UnboundedSender;

use crate::session::event::{EventKind, RecognitionEvent};

/// Callback invoked for each published event of a subscribed kind
pub type Handler = Arc<dyn Fn(&RecognitionEvent) + Send + Sync>;

/// Identifies one registered handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    kind: EventKind,
    id: u64,
}

impl Subscription {
    /// Event kind this subscription listens for
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }
}

#[derive(Default)]
struct Inner {
    handlers: HashMap<EventKind, Vec<(u64, Handler)>>,
    tap: Option<UnboundedSender<(EventKind, RecognitionEvent)>>,
    next_id: u64,
}

/// Dispatches recognition events to registered handlers in subscription order
#[derive(Default)]
pub struct EventBus {
    inner: Mutex<Inner>,
}

impl EventBus {
    /// Create a new event bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind
    pub fn subscribe(&self, kind: EventKind, handler: Handler) -> Subscription {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.entry(kind).or_default().push((id, handler));

        Subscription { kind, id }
    }

    /// Remove one handler, returning whether it was still registered
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        inner.handlers.get_mut(&subscription.kind).is_some_and(|subs| {
            let before = subs.len();
            subs.retain(|(id, _)| *id != subscription.id);
            subs.len() < before
        })
    }

    /// Install a channel sender that receives every published event
    pub fn set_tap(&self, tap: UnboundedSender<(EventKind, RecognitionEvent)>) {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        inner.tap = Some(tap);
    }

    /// Invoke every handler registered for `kind`, in subscription order
    pub fn publish(&self, kind: EventKind, event: &RecognitionEvent) {
        let (handlers, tap) = {
            let inner = self
                .inner
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);

            let handlers: Vec<Handler> = inner.handlers.get(&kind).map_or_else(Vec::new, |subs| {
                subs.iter().map(|(_, handler)| Arc::clone(handler)).collect()
            });

            (handlers, inner.tap.clone())
        };

        for handler in &handlers {
            handler(event);
        }

        if let Some(tap) = tap {
            // A dropped receiver only disables the tap
            let _ = tap.send((kind, event.clone()));
        }
    }
}
