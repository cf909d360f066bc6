//! Main page: header with the basket counter and the catalog grid.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::ProductItem;
use crate::ui::card::{render_card_cell, CardConfig};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_DIM, COLOR_HEADER};

/// Height of one catalog cell including its border.
const CARD_HEIGHT: u16 = 5;

/// View model for the main page.
#[derive(Debug, Clone)]
pub struct PageConfig<'a> {
    /// Basket counter shown in the header.
    pub counter: usize,
    /// While a modal is open the catalog behind it is frozen.
    pub locked: bool,
    pub items: &'a [ProductItem],
    pub selected: usize,
}

/// Render the header and catalog grid into `area`.
pub fn render_page(frame: &mut Frame, area: Rect, config: &PageConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], config);
    render_catalog(frame, chunks[1], config);

    let hint = if config.locked {
        ""
    } else {
        "j/k move  Enter view  b basket  q quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(COLOR_DIM))),
        chunks[2],
    );
}

fn render_header(frame: &mut Frame, area: Rect, config: &PageConfig) {
    let line = Line::from(vec![
        Span::styled(
            "LAREK",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("basket: {}", config.counter),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_catalog(frame: &mut Frame, area: Rect, config: &PageConfig) {
    if config.items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Loading catalog...",
                Style::default().fg(COLOR_DIM),
            )),
            area,
        );
        return;
    }

    let ctx = LayoutContext::new(area);
    let columns = grid_columns(&ctx);
    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    if visible_rows == 0 {
        return;
    }

    // Keep the selected cell's row in view.
    let selected_row = config.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (screen_row, row_rect) in row_rects.iter().enumerate() {
        let row = first_row + screen_row;
        let cell_rects = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_rect);
        for (col, cell_rect) in cell_rects.iter().enumerate() {
            let index = row * columns + col;
            let Some(item) = config.items.get(index) else {
                continue;
            };
            let card = CardConfig::new(&item.title, item.price)
                .category(&item.category)
                .selected(!config.locked && index == config.selected);
            render_card_cell(frame, *cell_rect, &card);
        }
    }
}

/// Column count scales with terminal width.
pub fn grid_columns(ctx: &LayoutContext) -> usize {
    if ctx.is_narrow() {
        1
    } else if ctx.width < 110 {
        2
    } else {
        3
    }
}
