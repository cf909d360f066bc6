//! Application state: the single authoritative holder of catalog,
//! basket, order draft, preview selection, and validation errors.
//!
//! Mutators return the ordered list of events they produce instead of
//! emitting directly; the app context dispatches them through the bus
//! after the mutation completes, so handlers never observe a partially
//! updated basket or order.

use crate::events::AppEvent;
use crate::models::{CheckoutField, FormErrors, OrderDraft, PaymentMethod, ProductItem};

/// In-memory application state. Page-session scoped: nothing survives
/// process exit.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: Vec<ProductItem>,
    /// Insertion order is display order; no duplicate ids.
    pub basket: Vec<ProductItem>,
    pub order: OrderDraft,
    /// Id of the currently previewed product, if any.
    pub preview: Option<String>,
    pub form_errors: FormErrors,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog with freshly loaded items.
    pub fn set_catalog(&mut self, items: Vec<ProductItem>) -> Vec<AppEvent> {
        self.catalog = items;
        vec![AppEvent::CatalogChanged(self.catalog.clone())]
    }

    pub fn in_basket(&self, id: &str) -> bool {
        self.basket.iter().any(|item| item.id == id)
    }

    /// Sum of basket prices; priceless items contribute 0.
    pub fn basket_total(&self) -> u64 {
        self.basket
            .iter()
            .map(|item| item.price.unwrap_or(0))
            .sum()
    }

    /// Add an item to the basket. Adding an item that is already present
    /// is a no-op, but the basket events still fire so dependent views
    /// stay in sync.
    pub fn add_to_basket(&mut self, item: ProductItem) -> Vec<AppEvent> {
        if !self.in_basket(&item.id) {
            self.basket.push(item);
        }
        self.basket_changed()
    }

    /// Remove an item by id. Removing an absent item is a no-op; events
    /// still fire with identical content.
    pub fn remove_from_basket(&mut self, id: &str) -> Vec<AppEvent> {
        self.basket.retain(|item| item.id != id);
        self.basket_changed()
    }

    pub fn clear_basket(&mut self) -> Vec<AppEvent> {
        self.basket.clear();
        self.basket_changed()
    }

    /// Recompute the draft total and produce the two basket events in
    /// their fixed order: contents first, counter second.
    fn basket_changed(&mut self) -> Vec<AppEvent> {
        self.order.total = self.basket_total();
        vec![
            AppEvent::BasketChanged(self.basket.clone()),
            AppEvent::CounterChanged(self.basket.len()),
        ]
    }

    /// Record the previewed product.
    pub fn set_preview(&mut self, item: &ProductItem) -> Vec<AppEvent> {
        self.preview = Some(item.id.clone());
        vec![AppEvent::PreviewChanged(item.clone())]
    }

    /// Snapshot the current basket ids into the order draft. Called when
    /// the order form opens; later basket changes do not alter it.
    pub fn snapshot_order_items(&mut self) {
        self.order.items = self.basket.iter().map(|item| item.id.clone()).collect();
    }

    /// Write one delivery field, then revalidate. Produces the errors
    /// event and, when the form is valid, a readiness signal.
    pub fn set_order_field(&mut self, field: CheckoutField, value: &str) -> Vec<AppEvent> {
        match field {
            CheckoutField::Payment => {
                if let Some(method) = PaymentMethod::parse(value) {
                    self.order.payment = method;
                }
            }
            CheckoutField::Address => self.order.address = value.to_string(),
            // Contact fields are routed to set_contact_field.
            CheckoutField::Email | CheckoutField::Phone => {}
        }
        let mut events = self.validate_order();
        if self.form_errors.is_empty() {
            events.push(AppEvent::OrderReady(self.order.clone()));
        }
        events
    }

    /// Write one contact field, then revalidate.
    pub fn set_contact_field(&mut self, field: CheckoutField, value: &str) -> Vec<AppEvent> {
        match field {
            CheckoutField::Email => self.order.email = value.to_string(),
            CheckoutField::Phone => self.order.phone = value.to_string(),
            CheckoutField::Payment | CheckoutField::Address => {}
        }
        let mut events = self.validate_contact();
        if self.form_errors.is_empty() {
            events.push(AppEvent::ContactsReady(self.order.clone()));
        }
        events
    }

    /// Presence check for the delivery step. Replaces the whole error
    /// map and always produces the errors event, even on success, so
    /// views can clear stale error text.
    pub fn validate_order(&mut self) -> Vec<AppEvent> {
        let mut errors = FormErrors::new();
        if self.order.address.is_empty() {
            errors.insert(CheckoutField::Address, "Address is required".to_string());
        }
        self.form_errors = errors;
        vec![AppEvent::FormErrorsChanged(self.form_errors.clone())]
    }

    /// Presence check for the contact step. Same replacement semantics.
    pub fn validate_contact(&mut self) -> Vec<AppEvent> {
        let mut errors = FormErrors::new();
        if self.order.email.is_empty() {
            errors.insert(CheckoutField::Email, "Email is required".to_string());
        }
        if self.order.phone.is_empty() {
            errors.insert(CheckoutField::Phone, "Phone is required".to_string());
        }
        self.form_errors = errors;
        vec![AppEvent::FormErrorsChanged(self.form_errors.clone())]
    }
}
