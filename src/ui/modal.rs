//! Modal dialog frame.
//!
//! Clears a centered region over the dimmed page and draws a titled
//! border; callers render their content into the returned inner rect.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Padding},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_MODAL_BG};

/// Draw the modal frame and return the inner content area.
pub fn render_modal_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    width: u16,
    height: u16,
) -> Rect {
    let ctx = LayoutContext::new(area);
    let width = if ctx.is_narrow() {
        area.width.saturating_sub(2)
    } else {
        width
    };
    // Content plus border and padding.
    let dialog = ctx.centered(area, width, height + 4);

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(COLOR_ACCENT))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_MODAL_BG))
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    inner
}
