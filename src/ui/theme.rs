//! Color theme constants for the studio UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background of the selected list row
pub const COLOR_SELECTION_BG: Color = Color::Rgb(30, 35, 55);

// ============================================================================
// Status Colors
// ============================================================================

/// Spinners and in-progress work
pub const COLOR_BUSY: Color = Color::Yellow;

/// Completed work
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Errors
pub const COLOR_ERROR: Color = Color::Red;

/// Links and image URLs
pub const COLOR_LINK: Color = Color::Rgb(0, 122, 204); // blue #007ACC
