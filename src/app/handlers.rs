//! Orchestration wiring: registers every bus handler and routes async
//! results back into the dispatch path.
//!
//! This layer owns no state of its own. Each handler reads the event,
//! calls the matching state or context mutator, and dispatches whatever
//! events that mutator produced. Views and state never reference each
//! other directly.

use crate::events::{AppEvent, EventBus, EventKind};
use crate::models::{CheckoutField, FormKind};

use super::{App, AppMessage, ModalView};

/// Register all handlers on the bus. Called once at startup.
pub fn wire_events(bus: &EventBus<App>) {
    // Diagnostics: every emission, name and payload, debug level.
    bus.on_all(|event, _app, _bus| {
        tracing::debug!(?event, "event");
    });

    // Catalog replaced: keep the grid selection in range.
    bus.on(EventKind::CatalogChanged, |event, app, _bus| {
        if let AppEvent::CatalogChanged(items) = event {
            app.catalog_index = app.catalog_index.min(items.len().saturating_sub(1));
        }
    });

    // A catalog card was activated: record the preview selection.
    bus.on(EventKind::CardSelected, |event, app, bus| {
        if let AppEvent::CardSelected(item) = event {
            let events = app.state.set_preview(item);
            bus.emit_all(events, app);
        }
    });

    // Preview selection changed: show the preview card in the modal.
    bus.on(EventKind::PreviewChanged, |event, app, bus| {
        if let AppEvent::PreviewChanged(item) = event {
            let events = app.show_modal(ModalView::Preview(item.clone()));
            bus.emit_all(events, app);
        }
    });

    // Buy/remove pressed on the preview: close the modal, then route to
    // an add or a delete depending on basket membership.
    bus.on(EventKind::PreviewAction, |event, app, bus| {
        if let AppEvent::PreviewAction(item) = event {
            let item = item.clone();
            let events = app.close_modal();
            bus.emit_all(events, app);
            if app.state.in_basket(&item.id) {
                bus.emit(&AppEvent::ProductRemoved(item), app);
            } else if item.purchasable() {
                bus.emit(&AppEvent::ProductAdded(item), app);
            }
        }
    });

    bus.on(EventKind::ProductAdded, |event, app, bus| {
        if let AppEvent::ProductAdded(item) = event {
            let events = app.state.add_to_basket(item.clone());
            bus.emit_all(events, app);
        }
    });

    bus.on(EventKind::ProductRemoved, |event, app, bus| {
        if let AppEvent::ProductRemoved(item) = event {
            let events = app.state.remove_from_basket(&item.id);
            bus.emit_all(events, app);
        }
    });

    // Basket contents changed: keep the basket row selection in range.
    bus.on(EventKind::BasketChanged, |event, app, _bus| {
        if let AppEvent::BasketChanged(items) = event {
            app.basket_index = app.basket_index.min(items.len().saturating_sub(1));
        }
    });

    // Item count changed: update the page header counter.
    bus.on(EventKind::CounterChanged, |event, app, _bus| {
        if let AppEvent::CounterChanged(count) = event {
            app.basket_count = *count;
        }
    });

    bus.on(EventKind::BasketOpened, |_event, app, bus| {
        let events = app.show_modal(ModalView::Basket);
        bus.emit_all(events, app);
    });

    // Order form opened: snapshot the basket ids into the draft and show
    // the delivery step with a clean validation slate.
    bus.on(EventKind::OrderOpened, |_event, app, bus| {
        app.state.snapshot_order_items();
        app.order_focus = CheckoutField::Payment;
        app.order_form_valid = false;
        app.order_errors.clear();
        let events = app.show_modal(ModalView::OrderForm);
        bus.emit_all(events, app);
    });

    // Delivery step submitted: advance to the contacts step.
    bus.on(EventKind::OrderSubmitted, |_event, app, bus| {
        app.contacts_focus = CheckoutField::Email;
        app.contacts_form_valid = false;
        app.contacts_errors.clear();
        let events = app.show_modal(ModalView::ContactsForm);
        bus.emit_all(events, app);
    });

    // Contacts step submitted: send the order to the backend.
    bus.on(EventKind::ContactsSubmitted, |_event, app, _bus| {
        if app.order_in_flight {
            return;
        }
        app.order_in_flight = true;
        let client = std::sync::Arc::clone(&app.client);
        let order = app.state.order.clone();
        let tx = app.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.order_products(&order).await {
                Ok(result) => AppMessage::OrderCompleted(result),
                Err(err) => AppMessage::OrderFailed(err.to_string()),
            };
            let _ = tx.send(message);
        });
    });

    // One checkout field edited: explicit routing by form, no pattern
    // matching on event names.
    bus.on(EventKind::FieldChanged, |event, app, bus| {
        if let AppEvent::FieldChanged { form, field, value } = event {
            let events = match form {
                FormKind::Order => app.state.set_order_field(*field, value),
                FormKind::Contacts => app.state.set_contact_field(*field, value),
            };
            bus.emit_all(events, app);
        }
    });

    // Validation ran: refresh the per-form valid flags and joined error
    // text, clearing stale text when the map is empty.
    bus.on(EventKind::FormErrorsChanged, |event, app, _bus| {
        if let AppEvent::FormErrorsChanged(errors) = event {
            let joined = |fields: &[CheckoutField]| {
                fields
                    .iter()
                    .filter_map(|field| errors.get(field).cloned())
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            app.order_errors = joined(&[CheckoutField::Payment, CheckoutField::Address]);
            app.contacts_errors = joined(&[CheckoutField::Email, CheckoutField::Phone]);
            app.order_form_valid = app.order_errors.is_empty();
            app.contacts_form_valid = app.contacts_errors.is_empty();
        }
    });

    // Readiness signals have no consumer beyond diagnostics.
    bus.on(EventKind::OrderReady, |_event, _app, _bus| {
        tracing::debug!("delivery details complete");
    });
    bus.on(EventKind::ContactsReady, |_event, _app, _bus| {
        tracing::debug!("contact details complete");
    });

    // The modal transitions are the sole trigger for the scroll lock.
    bus.on(EventKind::ModalOpened, |_event, app, _bus| {
        app.scroll_locked = true;
    });
    bus.on(EventKind::ModalClosed, |_event, app, _bus| {
        app.scroll_locked = false;
    });

    bus.on(EventKind::ModalCloseRequested, |_event, app, bus| {
        let events = app.close_modal();
        bus.emit_all(events, app);
    });

    // Success dismissed: close, then clear the basket. The basket is
    // intentionally kept intact until this point.
    bus.on(EventKind::SuccessDismissed, |_event, app, bus| {
        let mut events = app.close_modal();
        events.extend(app.state.clear_basket());
        bus.emit_all(events, app);
    });
}

impl App {
    /// Handle one async result, re-entering the synchronous dispatch
    /// path. Network failures are logged and not surfaced to the user.
    pub fn handle_message(&mut self, msg: AppMessage, bus: &EventBus<App>) {
        match msg {
            AppMessage::CatalogLoaded(items) => {
                let events = self.state.set_catalog(items);
                bus.emit_all(events, self);
            }
            AppMessage::CatalogFailed(err) => {
                tracing::warn!(error = %err, "catalog fetch failed");
            }
            AppMessage::OrderCompleted(result) => {
                self.order_in_flight = false;
                tracing::info!(order_id = %result.id, total = result.total, "order confirmed");
                let events = self.show_modal(ModalView::Success {
                    total: result.total,
                });
                bus.emit_all(events, self);
            }
            AppMessage::OrderFailed(err) => {
                self.order_in_flight = false;
                tracing::warn!(error = %err, "order submission failed");
            }
        }
    }
}
