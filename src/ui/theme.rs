//! Color theme constants for the storefront UI.
//!
//! Minimal dark palette used throughout the views.

use ratatui::style::Color;

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selected card.
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color.
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for secondary info (categories, image URLs, hints).
pub const COLOR_DIM: Color = Color::DarkGray;

/// Price text.
pub const COLOR_PRICE: Color = Color::LightGreen;

/// Inline validation error text.
pub const COLOR_ERROR: Color = Color::Red;

/// Disabled actions (checkout on an empty basket, priceless items).
pub const COLOR_DISABLED: Color = Color::DarkGray;

/// Background for modal dialogs.
pub const COLOR_MODAL_BG: Color = Color::Rgb(10, 15, 35);

/// Background for input areas.
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);
