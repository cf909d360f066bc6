//! Layout helpers.
//!
//! A small [`LayoutContext`] wraps the frame dimensions and centers the
//! modal dialog; the grid math lives with the page view.

use ratatui::layout::Rect;

/// Frame dimensions for responsive sizing decisions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(area: Rect) -> Self {
        Self {
            width: area.width,
            height: area.height,
        }
    }

    /// Narrow terminals get full-width dialogs.
    pub fn is_narrow(&self) -> bool {
        self.width < 60
    }

    /// A rect of at most `width` x `height`, centered in `area`.
    pub fn centered(&self, area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width.saturating_sub(2));
        let height = height.min(area.height.saturating_sub(2));
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }
}
