//! Integration tests for the two-step checkout: order snapshot,
//! field editing, validation errors, and the form-valid flags the
//! submit keys are gated on.

use std::sync::Arc;

use larek::api::StoreApi;
use larek::app::handlers::wire_events;
use larek::app::{App, ModalView};
use larek::config::StoreConfig;
use larek::events::{AppEvent, EventBus};
use larek::models::{CheckoutField, FormKind, PaymentMethod, ProductItem};

fn wired_app() -> (App, EventBus<App>) {
    let client = Arc::new(StoreApi::new(&StoreConfig::default()));
    let app = App::new(client);
    let bus = EventBus::new();
    wire_events(&bus);
    (app, bus)
}

fn item(id: &str, price: Option<u64>) -> ProductItem {
    ProductItem {
        id: id.to_string(),
        title: format!("Item {}", id),
        description: String::new(),
        category: "other".to_string(),
        image: String::new(),
        price,
    }
}

fn field_changed(form: FormKind, field: CheckoutField, value: &str) -> AppEvent {
    AppEvent::FieldChanged {
        form,
        field,
        value: value.to_string(),
    }
}

#[test]
fn test_order_open_snapshots_basket_ids() {
    let (mut app, bus) = wired_app();
    bus.emit(&AppEvent::ProductAdded(item("1", Some(100))), &mut app);
    bus.emit(&AppEvent::ProductAdded(item("2", Some(200))), &mut app);

    bus.emit(&AppEvent::OrderOpened, &mut app);
    assert_eq!(app.modal, ModalView::OrderForm);
    assert_eq!(app.state.order.items, vec!["1", "2"]);

    // Later basket changes must not alter the snapshot.
    bus.emit(&AppEvent::ProductRemoved(item("1", Some(100))), &mut app);
    bus.emit(&AppEvent::ProductAdded(item("3", Some(300))), &mut app);
    assert_eq!(app.state.order.items, vec!["1", "2"]);
}

#[test]
fn test_empty_address_reports_error_and_blocks_submit() {
    let (mut app, bus) = wired_app();
    bus.emit(&AppEvent::ProductAdded(item("1", Some(100))), &mut app);
    bus.emit(&AppEvent::OrderOpened, &mut app);

    bus.emit(
        &field_changed(FormKind::Order, CheckoutField::Payment, "cash"),
        &mut app,
    );
    assert!(!app.order_form_valid);
    assert_eq!(app.order_errors, "Address is required");
    assert_eq!(app.state.order.payment, PaymentMethod::Cash);
}

#[test]
fn test_filled_address_clears_error_and_validates() {
    let (mut app, bus) = wired_app();
    bus.emit(&AppEvent::ProductAdded(item("1", Some(100))), &mut app);
    bus.emit(&AppEvent::OrderOpened, &mut app);

    bus.emit(
        &field_changed(FormKind::Order, CheckoutField::Address, "Spb, Nevsky 1"),
        &mut app,
    );
    assert!(app.order_form_valid);
    assert!(app.order_errors.is_empty());
    assert_eq!(app.state.order.address, "Spb, Nevsky 1");
}

#[test]
fn test_erasing_address_brings_error_back() {
    let (mut app, bus) = wired_app();
    bus.emit(
        &field_changed(FormKind::Order, CheckoutField::Address, "X"),
        &mut app,
    );
    assert!(app.order_form_valid);

    bus.emit(
        &field_changed(FormKind::Order, CheckoutField::Address, ""),
        &mut app,
    );
    assert!(!app.order_form_valid);
    assert_eq!(app.order_errors, "Address is required");
}

#[test]
fn test_order_submit_advances_to_contacts() {
    let (mut app, bus) = wired_app();
    bus.emit(&AppEvent::ProductAdded(item("1", Some(100))), &mut app);
    bus.emit(&AppEvent::OrderOpened, &mut app);
    bus.emit(&AppEvent::OrderSubmitted, &mut app);

    assert_eq!(app.modal, ModalView::ContactsForm);
    // Replacing the modal content keeps the page locked.
    assert!(app.scroll_locked);
}

#[test]
fn test_contact_errors_join_both_fields() {
    let (mut app, bus) = wired_app();
    bus.emit(
        &field_changed(FormKind::Contacts, CheckoutField::Email, ""),
        &mut app,
    );
    assert!(!app.contacts_form_valid);
    assert_eq!(app.contacts_errors, "Email is required; Phone is required");
}

#[test]
fn test_contacts_valid_when_both_filled() {
    let (mut app, bus) = wired_app();
    bus.emit(
        &field_changed(FormKind::Contacts, CheckoutField::Email, "a@b.c"),
        &mut app,
    );
    assert!(!app.contacts_form_valid);

    bus.emit(
        &field_changed(FormKind::Contacts, CheckoutField::Phone, "+7 000"),
        &mut app,
    );
    assert!(app.contacts_form_valid);
    assert!(app.contacts_errors.is_empty());
    assert_eq!(app.state.order.email, "a@b.c");
    assert_eq!(app.state.order.phone, "+7 000");
}

#[test]
fn test_contact_validation_replaces_order_errors() {
    let (mut app, bus) = wired_app();
    // Leave the delivery step invalid.
    bus.emit(
        &field_changed(FormKind::Order, CheckoutField::Address, ""),
        &mut app,
    );
    assert!(!app.order_form_valid);

    // A contact edit replaces the whole error map, so the delivery
    // form reads as valid again.
    bus.emit(
        &field_changed(FormKind::Contacts, CheckoutField::Email, "a@b.c"),
        &mut app,
    );
    assert!(app.order_form_valid);
    assert!(app.order_errors.is_empty());
}
