//! Basket modal contents: rows, total, checkout hint.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::ProductItem;
use crate::ui::card::{basket_row, format_price, CardConfig};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_DISABLED, COLOR_PRICE};

/// View model for the basket modal.
#[derive(Debug, Clone)]
pub struct BasketViewConfig<'a> {
    pub items: &'a [ProductItem],
    pub selected: usize,
    pub total: u64,
    /// Derived, never set directly: an empty basket cannot check out.
    checkout_enabled: bool,
}

impl<'a> BasketViewConfig<'a> {
    pub fn new(items: &'a [ProductItem], selected: usize, total: u64) -> Self {
        Self {
            items,
            selected,
            total,
            checkout_enabled: !items.is_empty(),
        }
    }

    pub fn checkout_enabled(&self) -> bool {
        self.checkout_enabled
    }
}

/// Render the basket rows, total, and checkout hint into `area`.
pub fn render_basket(frame: &mut Frame, area: Rect, config: &BasketViewConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let lines: Vec<Line> = if config.items.is_empty() {
        vec![Line::from(Span::styled(
            "Basket is empty",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        config
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let card = CardConfig::new(&item.title, item.price)
                    .index(i + 1)
                    .selected(i == config.selected);
                basket_row(&card)
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Total: "),
            Span::styled(
                format_price(Some(config.total)),
                Style::default().fg(COLOR_PRICE),
            ),
        ])),
        chunks[1],
    );

    let hint = if config.checkout_enabled {
        Span::styled(
            "d remove  [Enter] Checkout  Esc close",
            Style::default().fg(COLOR_ACCENT),
        )
    } else {
        Span::styled("Checkout unavailable  Esc close", Style::default().fg(COLOR_DISABLED))
    };
    frame.render_widget(Paragraph::new(hint), chunks[2]);
}
