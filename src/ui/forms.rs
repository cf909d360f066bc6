//! Checkout forms: delivery (payment + address) and contacts
//! (email + phone).
//!
//! Both render from immutable view models built fresh each frame; the
//! error line and the submit hint reflect whatever validation last
//! reported.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{CheckoutField, PaymentMethod};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_DISABLED, COLOR_ERROR, COLOR_INPUT_BG};

/// View model for the delivery step.
#[derive(Debug, Clone)]
pub struct OrderFormConfig<'a> {
    pub payment: PaymentMethod,
    pub address: &'a str,
    pub focus: CheckoutField,
    pub errors: &'a str,
    pub valid: bool,
}

/// View model for the contact step.
#[derive(Debug, Clone)]
pub struct ContactsFormConfig<'a> {
    pub email: &'a str,
    pub phone: &'a str,
    pub focus: CheckoutField,
    pub errors: &'a str,
    pub valid: bool,
    /// A submission is already on the wire.
    pub in_flight: bool,
}

/// Render the delivery form into `area`.
pub fn render_order_form(frame: &mut Frame, area: Rect, config: &OrderFormConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_payment_selector(
        frame,
        chunks[0],
        config.payment,
        config.focus == CheckoutField::Payment,
    );
    render_text_field(
        frame,
        chunks[1],
        "Address",
        config.address,
        config.focus == CheckoutField::Address,
    );
    render_error_line(frame, chunks[2], config.errors);
    render_submit_hint(frame, chunks[3], "Next", config.valid);
}

/// Render the contacts form into `area`.
pub fn render_contacts_form(frame: &mut Frame, area: Rect, config: &ContactsFormConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_text_field(
        frame,
        chunks[0],
        "Email",
        config.email,
        config.focus == CheckoutField::Email,
    );
    render_text_field(
        frame,
        chunks[1],
        "Phone",
        config.phone,
        config.focus == CheckoutField::Phone,
    );
    render_error_line(frame, chunks[2], config.errors);
    let label = if config.in_flight { "Sending..." } else { "Pay" };
    render_submit_hint(frame, chunks[3], label, config.valid && !config.in_flight);
}

fn render_payment_selector(frame: &mut Frame, area: Rect, payment: PaymentMethod, focused: bool) {
    let marker = if focused { "> " } else { "  " };
    let option = |method: PaymentMethod, label: &str| {
        if payment == method {
            Span::styled(
                format!("[{}]", label),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(COLOR_DIM))
        }
    };
    let lines = vec![
        Line::from(Span::styled("Payment", Style::default().fg(COLOR_DIM))),
        Line::from(vec![
            Span::raw(marker),
            option(PaymentMethod::Card, "Online"),
            Span::raw("  "),
            option(PaymentMethod::Cash, "On delivery"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_text_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let marker = if focused { "> " } else { "  " };
    let cursor = if focused { "_" } else { "" };
    let value_style = if focused {
        Style::default().bg(COLOR_INPUT_BG)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let lines = vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(COLOR_DIM))),
        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_error_line(frame: &mut Frame, area: Rect, errors: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(errors.to_string(), Style::default().fg(COLOR_ERROR))),
        area,
    );
}

fn render_submit_hint(frame: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let hint = if enabled {
        Span::styled(
            format!("[Enter] {}  Esc close", label),
            Style::default().fg(COLOR_ACCENT),
        )
    } else {
        Span::styled(
            format!("{} unavailable  Esc close", label),
            Style::default().fg(COLOR_DISABLED),
        )
    };
    frame.render_widget(Paragraph::new(hint), area);
}

/// Rows needed by either form inside the modal.
pub const FORM_HEIGHT: u16 = 6;
