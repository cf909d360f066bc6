//! Application events and the publish/subscribe bus.
//!
//! All coupling between input, state, and views is indirect: intent and
//! change notifications travel as [`AppEvent`] values through an
//! [`EventBus`] constructed once at startup and passed by reference.
//! Dispatch is synchronous: `emit` invokes every matching handler, in
//! registration order, before it returns. Handlers may re-enter `emit`;
//! a handler panic propagates to the emitter (no error isolation).

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{CheckoutField, FormErrors, FormKind, OrderDraft, ProductItem};

/// Every event that can travel through the bus.
///
/// Change notifications carry the data views need so that handlers never
/// have to reach back into state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Catalog was replaced with freshly loaded items.
    CatalogChanged(Vec<ProductItem>),
    /// A catalog card was activated.
    CardSelected(ProductItem),
    /// The previewed item changed.
    PreviewChanged(ProductItem),
    /// Buy/remove action on the preview card; the wiring routes it to an
    /// add or a delete depending on basket membership.
    PreviewAction(ProductItem),
    ProductAdded(ProductItem),
    ProductRemoved(ProductItem),
    /// Basket contents changed (also fired for no-op adds/removes).
    BasketChanged(Vec<ProductItem>),
    /// Basket item count changed; separate from [`AppEvent::BasketChanged`]
    /// because the page counter and the basket view update independently.
    CounterChanged(usize),
    BasketOpened,
    /// Order form opened; triggers the order-items snapshot.
    OrderOpened,
    /// Delivery step submitted; advances to the contacts step.
    OrderSubmitted,
    /// Contacts step submitted; triggers the order API call.
    ContactsSubmitted,
    /// One checkout field was edited. Structured routing replaces the
    /// name-pattern subscriptions of older designs.
    FieldChanged {
        form: FormKind,
        field: CheckoutField,
        value: String,
    },
    /// Validation ran; carries the full replacement error map, which may
    /// be empty so views can clear stale error text.
    FormErrorsChanged(FormErrors),
    /// Delivery fields are valid. Observable signal only; no handler acts
    /// on it beyond diagnostics.
    OrderReady(OrderDraft),
    /// Contact fields are valid. Observable signal only.
    ContactsReady(OrderDraft),
    ModalOpened,
    ModalClosed,
    /// Escape/backdrop interaction asking the modal to close.
    ModalCloseRequested,
    /// The success view's dismiss action.
    SuccessDismissed,
}

/// Discriminant used for exact-kind subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    CatalogChanged,
    CardSelected,
    PreviewChanged,
    PreviewAction,
    ProductAdded,
    ProductRemoved,
    BasketChanged,
    CounterChanged,
    BasketOpened,
    OrderOpened,
    OrderSubmitted,
    ContactsSubmitted,
    FieldChanged,
    FormErrorsChanged,
    OrderReady,
    ContactsReady,
    ModalOpened,
    ModalClosed,
    ModalCloseRequested,
    SuccessDismissed,
}

impl AppEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::CatalogChanged(_) => EventKind::CatalogChanged,
            AppEvent::CardSelected(_) => EventKind::CardSelected,
            AppEvent::PreviewChanged(_) => EventKind::PreviewChanged,
            AppEvent::PreviewAction(_) => EventKind::PreviewAction,
            AppEvent::ProductAdded(_) => EventKind::ProductAdded,
            AppEvent::ProductRemoved(_) => EventKind::ProductRemoved,
            AppEvent::BasketChanged(_) => EventKind::BasketChanged,
            AppEvent::CounterChanged(_) => EventKind::CounterChanged,
            AppEvent::BasketOpened => EventKind::BasketOpened,
            AppEvent::OrderOpened => EventKind::OrderOpened,
            AppEvent::OrderSubmitted => EventKind::OrderSubmitted,
            AppEvent::ContactsSubmitted => EventKind::ContactsSubmitted,
            AppEvent::FieldChanged { .. } => EventKind::FieldChanged,
            AppEvent::FormErrorsChanged(_) => EventKind::FormErrorsChanged,
            AppEvent::OrderReady(_) => EventKind::OrderReady,
            AppEvent::ContactsReady(_) => EventKind::ContactsReady,
            AppEvent::ModalOpened => EventKind::ModalOpened,
            AppEvent::ModalClosed => EventKind::ModalClosed,
            AppEvent::ModalCloseRequested => EventKind::ModalCloseRequested,
            AppEvent::SuccessDismissed => EventKind::SuccessDismissed,
        }
    }
}

/// Handler invoked on dispatch. Receives the event, the mutable app
/// context, and the bus itself so it can emit follow-up events.
pub type Handler<Ctx> = Rc<RefCell<dyn FnMut(&AppEvent, &mut Ctx, &EventBus<Ctx>)>>;

struct Registration<Ctx> {
    /// `None` registers for every emission (diagnostics).
    filter: Option<EventKind>,
    handler: Handler<Ctx>,
}

/// Synchronous typed publish/subscribe dispatcher.
///
/// Generic over the context threaded through handlers so tests can drive
/// it with a minimal stand-in instead of the full app.
pub struct EventBus<Ctx> {
    registrations: RefCell<Vec<Registration<Ctx>>>,
}

impl<Ctx> EventBus<Ctx> {
    pub fn new() -> Self {
        Self {
            registrations: RefCell::new(Vec::new()),
        }
    }

    /// Register a handler for one event kind.
    pub fn on<F>(&self, kind: EventKind, handler: F)
    where
        F: FnMut(&AppEvent, &mut Ctx, &EventBus<Ctx>) + 'static,
    {
        self.registrations.borrow_mut().push(Registration {
            filter: Some(kind),
            handler: Rc::new(RefCell::new(handler)),
        });
    }

    /// Register a handler invoked for every emission regardless of kind.
    pub fn on_all<F>(&self, handler: F)
    where
        F: FnMut(&AppEvent, &mut Ctx, &EventBus<Ctx>) + 'static,
    {
        self.registrations.borrow_mut().push(Registration {
            filter: None,
            handler: Rc::new(RefCell::new(handler)),
        });
    }

    /// Dispatch one event to all matching handlers, in registration
    /// order, before returning.
    ///
    /// The handler list is snapshotted up front, so handlers registered
    /// during dispatch only see subsequent emissions.
    pub fn emit(&self, event: &AppEvent, ctx: &mut Ctx) {
        let matching: Vec<Handler<Ctx>> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.filter.map_or(true, |k| k == event.kind()))
            .map(|r| Rc::clone(&r.handler))
            .collect();
        for handler in matching {
            (handler.borrow_mut())(event, ctx, self);
        }
    }

    /// Dispatch a sequence of events in order. Used to fan out the event
    /// lists returned by state mutators.
    pub fn emit_all<I>(&self, events: I, ctx: &mut Ctx)
    where
        I: IntoIterator<Item = AppEvent>,
    {
        for event in events {
            self.emit(&event, ctx);
        }
    }
}

impl<Ctx> Default for EventBus<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> ProductItem {
        ProductItem {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category: "other".to_string(),
            image: String::new(),
            price: Some(1),
        }
    }

    #[test]
    fn test_exact_kind_subscription_matches_only_that_kind() {
        let bus: EventBus<Vec<&'static str>> = EventBus::new();
        bus.on(EventKind::BasketOpened, |_, log, _| log.push("basket"));
        bus.on(EventKind::ModalClosed, |_, log, _| log.push("closed"));

        let mut log = Vec::new();
        bus.emit(&AppEvent::BasketOpened, &mut log);
        assert_eq!(log, vec!["basket"]);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let bus: EventBus<Vec<u32>> = EventBus::new();
        bus.on(EventKind::BasketOpened, |_, log, _| log.push(1));
        bus.on(EventKind::BasketOpened, |_, log, _| log.push(2));
        bus.on(EventKind::BasketOpened, |_, log, _| log.push(3));

        let mut log = Vec::new();
        bus.emit(&AppEvent::BasketOpened, &mut log);
        assert_eq!(log, vec![1, 2, 3]);
    }

    #[test]
    fn test_on_all_sees_every_emission_with_payload() {
        let bus: EventBus<Vec<EventKind>> = EventBus::new();
        bus.on_all(|event, log, _| log.push(event.kind()));

        let mut log = Vec::new();
        bus.emit(&AppEvent::BasketOpened, &mut log);
        bus.emit(&AppEvent::CounterChanged(2), &mut log);
        assert_eq!(log, vec![EventKind::BasketOpened, EventKind::CounterChanged]);
    }

    #[test]
    fn test_emit_completes_fanout_before_returning() {
        let bus: EventBus<Vec<&'static str>> = EventBus::new();
        bus.on(EventKind::BasketOpened, |_, log, _| log.push("handler"));

        let mut log = Vec::new();
        bus.emit(&AppEvent::BasketOpened, &mut log);
        log.push("after-emit");
        assert_eq!(log, vec!["handler", "after-emit"]);
    }

    #[test]
    fn test_reentrant_emit_from_handler() {
        let bus: EventBus<Vec<&'static str>> = EventBus::new();
        bus.on(EventKind::ProductAdded, |_, log, bus| {
            log.push("added");
            bus.emit(&AppEvent::CounterChanged(1), log);
            log.push("added-done");
        });
        bus.on(EventKind::CounterChanged, |_, log, _| log.push("counter"));

        let mut log = Vec::new();
        bus.emit(&AppEvent::ProductAdded(product("p")), &mut log);
        // The nested emission fully fans out inside the outer handler.
        assert_eq!(log, vec!["added", "counter", "added-done"]);
    }

    #[test]
    fn test_emit_all_preserves_sequence() {
        let bus: EventBus<Vec<EventKind>> = EventBus::new();
        bus.on_all(|event, log, _| log.push(event.kind()));

        let mut log = Vec::new();
        bus.emit_all(
            [
                AppEvent::BasketChanged(vec![]),
                AppEvent::CounterChanged(0),
            ],
            &mut log,
        );
        assert_eq!(
            log,
            vec![EventKind::BasketChanged, EventKind::CounterChanged]
        );
    }

    #[test]
    fn test_handler_registered_during_dispatch_sees_next_emission() {
        let bus: EventBus<Vec<&'static str>> = EventBus::new();
        bus.on(EventKind::BasketOpened, |_, log: &mut Vec<&'static str>, bus| {
            log.push("first");
            bus.on(EventKind::BasketOpened, |_, log, _| log.push("late"));
        });

        let mut log = Vec::new();
        bus.emit(&AppEvent::BasketOpened, &mut log);
        assert_eq!(log, vec!["first"]);
        bus.emit(&AppEvent::BasketOpened, &mut log);
        assert_eq!(log, vec!["first", "first", "late"]);
    }
}
