//! Color theme constants for the mushaf UI
//!
//! Dark palette lifted from the reference design: gold for the page number
//! and basmala, soft gray for body text.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header/title color
pub const COLOR_HEADER: Color = Color::White;

/// Gold accent - page number, basmala, verse numbers
pub const COLOR_GOLD: Color = Color::Rgb(251, 191, 36);

/// Body text - soft gray
pub const COLOR_TEXT: Color = Color::Rgb(229, 231, 235);

/// Secondary labels - pale blue
pub const COLOR_LABEL: Color = Color::Rgb(203, 213, 245);

/// Error banner text
pub const COLOR_ERROR: Color = Color::Rgb(252, 165, 165);

/// Dim text for hints and the footer note
pub const COLOR_DIM: Color = Color::DarkGray;

/// Loading spinner
pub const COLOR_LOADING: Color = Color::LightGreen;
