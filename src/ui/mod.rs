//! UI rendering for studio
//!
//! The frame is split into three rows:
//! - Top navigation with the Create and History screens
//! - The active screen (Create: sidebar form + canvas, or History list)
//! - Status bar with key hints and the current error
//!
//! Sizing decisions go through [`LayoutContext`] so narrow terminals stack
//! the Create panels and shorten labels.

mod canvas;
mod components;
mod create;
mod history;
mod layout;
mod navigation;
mod status_bar;
mod theme;
mod wrap;

pub use layout::{breakpoints, LayoutContext};
pub use wrap::{truncate_to_width, wrap_text};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Screen};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    navigation::render_navigation(frame, chunks[0], app.screen);
    match app.screen {
        Screen::Create => create::render_create_screen(frame, chunks[1], app),
        Screen::History => history::render_history(frame, chunks[1], app),
    }
    status_bar::render_status_bar(frame, chunks[2], app);
}
