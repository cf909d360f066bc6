//! Order confirmation view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_PRICE};

/// View model for the confirmation dialog.
#[derive(Debug, Clone, Copy)]
pub struct SuccessConfig {
    /// Total reported by the backend, not the local basket sum.
    pub total: u64,
}

/// Render the confirmation message into `area`.
pub fn render_success(frame: &mut Frame, area: Rect, config: &SuccessConfig) {
    let lines = vec![
        Line::from(Span::styled(
            "Order placed",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Charged "),
            Span::styled(
                format!("{} syn", config.total),
                Style::default().fg(COLOR_PRICE),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Back to shopping",
            Style::default().fg(COLOR_ACCENT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Rows needed inside the modal.
pub const SUCCESS_HEIGHT: u16 = 5;
