//! Product card rendering.
//!
//! One config serves all three card contexts: catalog grid cell, the
//! preview modal, and basket rows, via optional fields. A `None` price
//! renders as empty text and marks the item as not purchasable.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DISABLED, COLOR_PRICE};

/// View model for a product card.
#[derive(Debug, Clone)]
pub struct CardConfig<'a> {
    pub title: &'a str,
    pub price: Option<u64>,
    /// Category tag; shown on catalog cells and the preview.
    pub category: Option<&'a str>,
    /// Long description; preview only.
    pub description: Option<&'a str>,
    /// Resolved image URL; preview only.
    pub image: Option<&'a str>,
    /// 1-based position; basket rows only.
    pub index: Option<usize>,
    /// Action label; preview only ("Buy" / "Remove from basket").
    pub button_label: Option<&'a str>,
    pub selected: bool,
}

impl<'a> CardConfig<'a> {
    pub fn new(title: &'a str, price: Option<u64>) -> Self {
        Self {
            title,
            price,
            category: None,
            description: None,
            image: None,
            index: None,
            button_label: None,
            selected: false,
        }
    }

    pub fn category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn image(mut self, image: &'a str) -> Self {
        self.image = Some(image);
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn button_label(mut self, label: &'a str) -> Self {
        self.button_label = Some(label);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Price text: plain number of synapses, empty for priceless items.
pub fn format_price(price: Option<u64>) -> String {
    match price {
        Some(value) => format!("{} syn", value),
        None => String::new(),
    }
}

/// Truncate a string to the given display width, appending an ellipsis
/// when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('\u{2026}');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Render a catalog grid cell: bordered title, category, price.
pub fn render_card_cell(frame: &mut Frame, area: Rect, config: &CardConfig) {
    let border_color = if config.selected {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(config.title, inner_width),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(category) = config.category {
        lines.push(Line::from(Span::styled(
            truncate_to_width(category, inner_width),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::from(Span::styled(
        format_price(config.price),
        Style::default().fg(COLOR_PRICE),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the preview card: full details plus the action label.
pub fn render_card_detail(frame: &mut Frame, area: Rect, config: &CardConfig) {
    let mut lines = vec![Line::from(Span::styled(
        config.title,
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(category) = config.category {
        lines.push(Line::from(Span::styled(
            category,
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::from(""));
    if let Some(description) = config.description {
        lines.push(Line::from(description));
        lines.push(Line::from(""));
    }
    if let Some(image) = config.image {
        lines.push(Line::from(Span::styled(image, Style::default().fg(COLOR_DIM))));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format_price(config.price),
        Style::default().fg(COLOR_PRICE),
    )));
    lines.push(Line::from(""));
    match config.button_label {
        Some(label) if config.price.is_some() => {
            lines.push(Line::from(Span::styled(
                format!("[Enter] {}", label),
                Style::default().fg(COLOR_ACCENT),
            )));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                "Not for sale",
                Style::default().fg(COLOR_DISABLED),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

/// One basket row: position, title, price.
pub fn basket_row(config: &CardConfig) -> Line<'static> {
    let marker = if config.selected { "> " } else { "  " };
    let index = config.index.map_or(String::new(), |i| format!("{}. ", i));
    Line::from(vec![
        Span::styled(
            format!("{}{}{}", marker, index, config.title),
            if config.selected {
                Style::default().fg(COLOR_ACCENT)
            } else {
                Style::default()
            },
        ),
        Span::raw("  "),
        Span::styled(format_price(config.price), Style::default().fg(COLOR_PRICE)),
    ])
}
