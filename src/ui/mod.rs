//! View layer.
//!
//! Every frame rebuilds immutable view models from the [`App`] context
//! and hands them to pure render functions. Views hold no state of
//! their own.

pub mod basket;
pub mod card;
pub mod forms;
pub mod layout;
pub mod modal;
pub mod page;
pub mod success;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, ModalView};
use crate::models::CheckoutField;

use basket::BasketViewConfig;
use card::CardConfig;
use forms::{ContactsFormConfig, OrderFormConfig, FORM_HEIGHT};
use page::PageConfig;
use success::{SuccessConfig, SUCCESS_HEIGHT};

/// Render one frame: the page, then whatever the modal shows on top.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let page_config = PageConfig {
        counter: app.basket_count,
        locked: app.scroll_locked,
        items: &app.state.catalog,
        selected: app.catalog_index,
    };
    page::render_page(frame, area, &page_config);

    match &app.modal {
        ModalView::Closed => {}
        ModalView::Preview(item) => {
            let label = if app.state.in_basket(&item.id) {
                "Remove from basket"
            } else {
                "Buy"
            };
            let card = CardConfig::new(&item.title, item.price)
                .category(&item.category)
                .description(&item.description)
                .image(&item.image)
                .button_label(label);
            let inner = modal::render_modal_frame(frame, area, &item.title, 56, 14);
            card::render_card_detail(frame, inner, &card);
        }
        ModalView::Basket => {
            let config = BasketViewConfig::new(
                &app.state.basket,
                app.basket_index,
                app.state.basket_total(),
            );
            let height = (app.state.basket.len().max(1) as u16).saturating_add(2);
            let inner = modal::render_modal_frame(frame, area, "Basket", 56, height);
            basket::render_basket(frame, inner, &config);
        }
        ModalView::OrderForm => {
            let config = OrderFormConfig {
                payment: app.state.order.payment,
                address: &app.state.order.address,
                focus: order_focus(app.order_focus),
                errors: &app.order_errors,
                valid: app.order_form_valid,
            };
            let inner = modal::render_modal_frame(frame, area, "Delivery", 56, FORM_HEIGHT);
            forms::render_order_form(frame, inner, &config);
        }
        ModalView::ContactsForm => {
            let config = ContactsFormConfig {
                email: &app.state.order.email,
                phone: &app.state.order.phone,
                focus: contacts_focus(app.contacts_focus),
                errors: &app.contacts_errors,
                valid: app.contacts_form_valid,
                in_flight: app.order_in_flight,
            };
            let inner = modal::render_modal_frame(frame, area, "Contacts", 56, FORM_HEIGHT);
            forms::render_contacts_form(frame, inner, &config);
        }
        ModalView::Success { total } => {
            let config = SuccessConfig { total: *total };
            let inner = modal::render_modal_frame(frame, area, "Done", 44, SUCCESS_HEIGHT);
            success::render_success(frame, inner, &config);
        }
    }
}

// Focus values outside the form's own fields fall back to its first
// field, so a stale focus never renders two unfocused inputs.
fn order_focus(focus: CheckoutField) -> CheckoutField {
    match focus {
        CheckoutField::Payment | CheckoutField::Address => focus,
        _ => CheckoutField::Payment,
    }
}

fn contacts_focus(focus: CheckoutField) -> CheckoutField {
    match focus {
        CheckoutField::Email | CheckoutField::Phone => focus,
        _ => CheckoutField::Email,
    }
}
