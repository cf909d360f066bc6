//! Keyboard handling.
//!
//! Translates key events into emitted [`AppEvent`]s according to the
//! current modal state. Selection movement and focus changes are local
//! view-state writes; everything that carries intent across component
//! boundaries goes through the bus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, ModalView};
use crate::events::AppEvent;
use crate::models::{CheckoutField, FormKind, PaymentMethod};

/// Handle one key event. Returns the events to dispatch through the bus.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Vec<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    // Global quit; works everywhere, including inside forms.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Vec::new();
    }

    match app.modal.clone() {
        ModalView::Closed => handle_catalog_key(app, key),
        ModalView::Preview(item) => handle_preview_key(key, &item),
        ModalView::Basket => handle_basket_key(app, key),
        ModalView::OrderForm => handle_order_form_key(app, key),
        ModalView::ContactsForm => handle_contacts_form_key(app, key),
        ModalView::Success { .. } => handle_success_key(key),
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) -> Vec<AppEvent> {
    let len = app.state.catalog.len();
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.catalog_index = app.catalog_index.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if len > 0 {
                app.catalog_index = (app.catalog_index + 1).min(len - 1);
            }
            Vec::new()
        }
        KeyCode::Enter => match app.state.catalog.get(app.catalog_index) {
            Some(item) => vec![AppEvent::CardSelected(item.clone())],
            None => Vec::new(),
        },
        KeyCode::Char('b') => vec![AppEvent::BasketOpened],
        _ => Vec::new(),
    }
}

fn handle_preview_key(key: KeyEvent, item: &crate::models::ProductItem) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Esc => vec![AppEvent::ModalCloseRequested],
        KeyCode::Enter => vec![AppEvent::PreviewAction(item.clone())],
        _ => Vec::new(),
    }
}

fn handle_basket_key(app: &mut App, key: KeyEvent) -> Vec<AppEvent> {
    let len = app.state.basket.len();
    match key.code {
        KeyCode::Esc => vec![AppEvent::ModalCloseRequested],
        KeyCode::Up | KeyCode::Char('k') => {
            app.basket_index = app.basket_index.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if len > 0 {
                app.basket_index = (app.basket_index + 1).min(len - 1);
            }
            Vec::new()
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            match app.state.basket.get(app.basket_index) {
                Some(item) => vec![AppEvent::ProductRemoved(item.clone())],
                None => Vec::new(),
            }
        }
        // Checkout initiation is disabled while the basket is empty.
        KeyCode::Enter if len > 0 => vec![AppEvent::OrderOpened],
        _ => Vec::new(),
    }
}

fn handle_order_form_key(app: &mut App, key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Esc => vec![AppEvent::ModalCloseRequested],
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.order_focus = match app.order_focus {
                CheckoutField::Payment => CheckoutField::Address,
                _ => CheckoutField::Payment,
            };
            Vec::new()
        }
        KeyCode::Enter if app.order_form_valid => vec![AppEvent::OrderSubmitted],
        _ => match app.order_focus {
            CheckoutField::Payment => handle_payment_key(app, key),
            _ => edit_field(
                FormKind::Order,
                CheckoutField::Address,
                app.state.order.address.clone(),
                key,
            ),
        },
    }
}

fn handle_payment_key(app: &App, key: KeyEvent) -> Vec<AppEvent> {
    let toggled = match app.state.order.payment {
        PaymentMethod::Card => PaymentMethod::Cash,
        PaymentMethod::Cash => PaymentMethod::Card,
    };
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => vec![AppEvent::FieldChanged {
            form: FormKind::Order,
            field: CheckoutField::Payment,
            value: toggled.as_str().to_string(),
        }],
        _ => Vec::new(),
    }
}

fn handle_contacts_form_key(app: &mut App, key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Esc => vec![AppEvent::ModalCloseRequested],
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.contacts_focus = match app.contacts_focus {
                CheckoutField::Email => CheckoutField::Phone,
                _ => CheckoutField::Email,
            };
            Vec::new()
        }
        KeyCode::Enter if app.contacts_form_valid && !app.order_in_flight => {
            vec![AppEvent::ContactsSubmitted]
        }
        _ => {
            let (field, value) = match app.contacts_focus {
                CheckoutField::Phone => (CheckoutField::Phone, app.state.order.phone.clone()),
                _ => (CheckoutField::Email, app.state.order.email.clone()),
            };
            edit_field(FormKind::Contacts, field, value, key)
        }
    }
}

fn handle_success_key(key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => vec![AppEvent::SuccessDismissed],
        _ => Vec::new(),
    }
}

/// Apply one edit keystroke to a text field value and produce the
/// field-changed event carrying the full new value.
fn edit_field(
    form: FormKind,
    field: CheckoutField,
    mut value: String,
    key: KeyEvent,
) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Char(c) => value.push(c),
        KeyCode::Backspace => {
            value.pop();
        }
        _ => return Vec::new(),
    }
    vec![AppEvent::FieldChanged { form, field, value }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StoreApi;
    use crate::config::StoreConfig;
    use crate::models::ProductItem;
    use std::sync::Arc;

    fn app() -> App {
        App::new(Arc::new(StoreApi::new(&StoreConfig::default())))
    }

    fn item(id: &str, price: Option<u64>) -> ProductItem {
        ProductItem {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category: "other".to_string(),
            image: String::new(),
            price,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_on_catalog_selects_card() {
        let mut app = app();
        app.state.catalog = vec![item("1", Some(100))];
        let events = handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(events, vec![AppEvent::CardSelected(item("1", Some(100)))]);
    }

    #[test]
    fn test_catalog_selection_stays_in_range() {
        let mut app = app();
        app.state.catalog = vec![item("1", Some(1)), item("2", Some(2))];
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.catalog_index, 1);
        handle_key(&mut app, press(KeyCode::Up));
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.catalog_index, 0);
    }

    #[test]
    fn test_checkout_disabled_on_empty_basket() {
        let mut app = app();
        app.modal = ModalView::Basket;
        let events = handle_key(&mut app, press(KeyCode::Enter));
        assert!(events.is_empty());

        app.state.basket = vec![item("1", Some(100))];
        let events = handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(events, vec![AppEvent::OrderOpened]);
    }

    #[test]
    fn test_typing_address_emits_field_changed_with_full_value() {
        let mut app = app();
        app.modal = ModalView::OrderForm;
        app.order_focus = CheckoutField::Address;
        app.state.order.address = "Nevsk".to_string();
        let events = handle_key(&mut app, press(KeyCode::Char('y')));
        assert_eq!(
            events,
            vec![AppEvent::FieldChanged {
                form: FormKind::Order,
                field: CheckoutField::Address,
                value: "Nevsky".to_string(),
            }]
        );
    }

    #[test]
    fn test_backspace_trims_field_value() {
        let mut app = app();
        app.modal = ModalView::ContactsForm;
        app.contacts_focus = CheckoutField::Phone;
        app.state.order.phone = "+79".to_string();
        let events = handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(
            events,
            vec![AppEvent::FieldChanged {
                form: FormKind::Contacts,
                field: CheckoutField::Phone,
                value: "+7".to_string(),
            }]
        );
    }

    #[test]
    fn test_payment_toggle() {
        let mut app = app();
        app.modal = ModalView::OrderForm;
        app.order_focus = CheckoutField::Payment;
        let events = handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(
            events,
            vec![AppEvent::FieldChanged {
                form: FormKind::Order,
                field: CheckoutField::Payment,
                value: "cash".to_string(),
            }]
        );
    }

    #[test]
    fn test_order_submit_gated_on_validity() {
        let mut app = app();
        app.modal = ModalView::OrderForm;
        app.order_focus = CheckoutField::Address;
        assert!(handle_key(&mut app, press(KeyCode::Enter)).is_empty());

        app.order_form_valid = true;
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Enter)),
            vec![AppEvent::OrderSubmitted]
        );
    }

    #[test]
    fn test_contacts_submit_guarded_while_in_flight() {
        let mut app = app();
        app.modal = ModalView::ContactsForm;
        app.contacts_form_valid = true;
        app.order_in_flight = true;
        assert!(handle_key(&mut app, press(KeyCode::Enter)).is_empty());

        app.order_in_flight = false;
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Enter)),
            vec![AppEvent::ContactsSubmitted]
        );
    }

    #[test]
    fn test_success_dismiss() {
        let mut app = app();
        app.modal = ModalView::Success { total: 500 };
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Enter)),
            vec![AppEvent::SuccessDismissed]
        );
    }

    #[test]
    fn test_escape_requests_modal_close() {
        let mut app = app();
        app.modal = ModalView::Preview(item("1", Some(1)));
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Esc)),
            vec![AppEvent::ModalCloseRequested]
        );
    }
}
