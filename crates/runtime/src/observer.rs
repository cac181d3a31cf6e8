//! Explicit observer registration for gameplay events.
//!
//! Hosts register observers once at startup; the facade calls them after
//! every successful operation, after the new state has been persisted.
//! Observers are presentation-side: they may play sounds or update views,
//! but they never feed back into the rules engine.

use stockpile_core::{GameEvent, Session};

/// Receives the events of one successful operation.
pub trait GameObserver: Send {
    fn on_event(&mut self, event: &GameEvent, session: &Session);
}

/// Ordered set of registered observers.
///
/// Notification order is registration order, per event.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn GameObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&mut self, events: &[GameEvent], session: &Session) {
        for event in events {
            for observer in &mut self.observers {
                observer.on_event(event, session);
            }
        }
    }
}
