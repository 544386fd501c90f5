use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use plugin_logging::plugin_trace;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SelectionChange,
    UiMessage,
}

/// Event delivered by the host's serialized event queue.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The page selection changed. Carries no payload; the selection is read
    /// from the host when the event is handled.
    SelectionChanged,
    /// Raw payload posted by the UI surface.
    UiMessage(Value),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::SelectionChanged => EventKind::SelectionChange,
            HostEvent::UiMessage(_) => EventKind::UiMessage,
        }
    }
}

/// Handle returned by a registration call.
///
/// Dropping the handle does not unsubscribe; only [`Subscription::unsubscribe`] does.
#[derive(Debug, Clone)]
pub struct Subscription {
    kind: EventKind,
    active: Arc<AtomicBool>,
}

impl Subscription {
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn unsubscribe(&self) {
        self.active.store(false, Ordering::Relaxed);
    }
}

/// Producer side of the queue, held by whatever plays the host and the UI.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::Sender<HostEvent>,
}

impl EventSender {
    /// Queues an event. Returns false once the controller side is gone.
    pub fn send(&self, event: HostEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn selection_changed(&self) -> bool {
        self.send(HostEvent::SelectionChanged)
    }

    pub fn ui_message(&self, payload: Value) -> bool {
        self.send(HostEvent::UiMessage(payload))
    }
}

/// Consumer side of the host event queue. Events are yielded strictly in
/// arrival order; events of a kind nobody is subscribed to are dropped.
pub struct EventQueue {
    rx: mpsc::Receiver<HostEvent>,
    subscriptions: Vec<Subscription>,
}

impl EventQueue {
    pub fn channel() -> (EventSender, EventQueue) {
        let (tx, rx) = mpsc::channel();
        (
            EventSender { tx },
            EventQueue {
                rx,
                subscriptions: Vec::new(),
            },
        )
    }

    pub fn subscribe(&mut self, kind: EventKind) -> Subscription {
        let subscription = Subscription {
            kind,
            active: Arc::new(AtomicBool::new(true)),
        };
        self.subscriptions.push(subscription.clone());
        subscription
    }

    pub fn on_selection_change(&mut self) -> Subscription {
        self.subscribe(EventKind::SelectionChange)
    }

    pub fn on_ui_message(&mut self) -> Subscription {
        self.subscribe(EventKind::UiMessage)
    }

    /// Blocks until a subscribed event arrives. `None` once every sender is dropped.
    pub fn recv(&self) -> Option<HostEvent> {
        loop {
            let event = self.rx.recv().ok()?;
            if self.is_subscribed(event.kind()) {
                return Some(event);
            }
            plugin_trace!("No subscriber for {:?}; dropped", event.kind());
        }
    }

    /// Returns the next subscribed event already queued, without blocking.
    pub fn try_recv(&self) -> Option<HostEvent> {
        loop {
            let event = self.rx.try_recv().ok()?;
            if self.is_subscribed(event.kind()) {
                return Some(event);
            }
            plugin_trace!("No subscriber for {:?}; dropped", event.kind());
        }
    }

    fn is_subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions
            .iter()
            .any(|sub| sub.kind == kind && sub.is_active())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unsubscribed_kinds_are_dropped() {
        let (sender, mut queue) = EventQueue::channel();
        let _ui = queue.on_ui_message();

        sender.selection_changed();
        sender.ui_message(json!({ "type": "runAction" }));

        assert_eq!(
            queue.try_recv(),
            Some(HostEvent::UiMessage(json!({ "type": "runAction" })))
        );
        assert_eq!(queue.try_recv(), None);
    }

    #[test]
    fn unsubscribe_stops_delivery_but_drop_does_not() {
        let (sender, mut queue) = EventQueue::channel();
        let selection = queue.on_selection_change();
        drop(queue.on_ui_message());

        sender.ui_message(json!({}));
        assert!(queue.try_recv().is_some());

        selection.unsubscribe();
        assert!(!selection.is_active());
        sender.selection_changed();
        assert_eq!(queue.try_recv(), None);
    }

    #[test]
    fn recv_ends_when_senders_are_gone() {
        let (sender, mut queue) = EventQueue::channel();
        let _sub = queue.on_selection_change();
        sender.selection_changed();
        drop(sender);

        assert_eq!(queue.recv(), Some(HostEvent::SelectionChanged));
        assert_eq!(queue.recv(), None);
    }
}
