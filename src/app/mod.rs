//! Application context for the TUI.
//!
//! [`App`] owns the authoritative [`AppState`] plus the view-side state
//! the renderer reads each frame: which modal is open, list selections,
//! form focus, and the derived form validity/error text maintained by
//! the bus handlers in [`handlers`].

pub mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::StoreApi;
use crate::events::AppEvent;
use crate::models::{CheckoutField, ProductItem};
use crate::state::AppState;

/// What the modal currently shows.
///
/// State machine: `Closed` -> open on showing content (emits
/// [`AppEvent::ModalOpened`]); open -> `Closed` on explicit close or
/// escape (emits [`AppEvent::ModalClosed`]). Replacing content while
/// already open is not a transition and emits nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    Closed,
    /// Product preview card.
    Preview(ProductItem),
    Basket,
    /// Checkout step one: payment method and address.
    OrderForm,
    /// Checkout step two: email and phone.
    ContactsForm,
    /// Order confirmation with the total reported by the backend.
    Success { total: u64 },
}

impl ModalView {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalView::Closed)
    }
}

/// Main application context threaded through the event bus.
pub struct App {
    /// Authoritative application state.
    pub state: AppState,
    /// Current modal content.
    pub modal: ModalView,
    /// Page scroll lock; toggled exclusively by the modal open/close
    /// handlers.
    pub scroll_locked: bool,
    /// Basket counter shown in the page header; maintained by the
    /// counter-changed handler.
    pub basket_count: usize,
    /// Selected catalog cell.
    pub catalog_index: usize,
    /// Selected basket row.
    pub basket_index: usize,
    /// Focused field on the order form.
    pub order_focus: CheckoutField,
    /// Focused field on the contacts form.
    pub contacts_focus: CheckoutField,
    /// Aggregate validity of the order form; maintained by the
    /// form-errors handler.
    pub order_form_valid: bool,
    pub contacts_form_valid: bool,
    /// Joined error text per form.
    pub order_errors: String,
    pub contacts_errors: String,
    /// An order submission is in flight; guards against double submits.
    pub order_in_flight: bool,
    pub should_quit: bool,
    /// Store API client (shared with async tasks).
    pub client: Arc<StoreApi>,
    /// Sender for async results (clone into spawned tasks).
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side; taken by the run loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(client: Arc<StoreApi>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            modal: ModalView::Closed,
            scroll_locked: false,
            basket_count: 0,
            catalog_index: 0,
            basket_index: 0,
            order_focus: CheckoutField::Payment,
            contacts_focus: CheckoutField::Email,
            order_form_valid: false,
            contacts_form_valid: false,
            order_errors: String::new(),
            contacts_errors: String::new(),
            order_in_flight: false,
            should_quit: false,
            client,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Show content in the modal. Produces [`AppEvent::ModalOpened`]
    /// only on the closed-to-open transition; replacing content while
    /// open emits nothing.
    pub fn show_modal(&mut self, view: ModalView) -> Vec<AppEvent> {
        let was_closed = !self.modal.is_open();
        self.modal = view;
        if was_closed {
            vec![AppEvent::ModalOpened]
        } else {
            Vec::new()
        }
    }

    /// Close the modal. Produces [`AppEvent::ModalClosed`] only when it
    /// was actually open.
    pub fn close_modal(&mut self) -> Vec<AppEvent> {
        if self.modal.is_open() {
            self.modal = ModalView::Closed;
            vec![AppEvent::ModalClosed]
        } else {
            Vec::new()
        }
    }
}
