//! Bottom status bar: key hints on the left, the current error (or the
//! backend URL) on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus, Screen};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR};
use crate::ui::wrap::truncate_to_width;

/// Key hints for the current screen and focus.
pub(super) fn key_hints(screen: Screen, focus: Focus, compact: bool) -> Vec<(&'static str, &'static str)> {
    let mut hints = match screen {
        Screen::Create => {
            let mut hints = vec![("Tab", "focus")];
            match focus {
                Focus::ContentTypes => hints.push(("↑↓", "type")),
                Focus::Tabs => hints.push(("←→", "input")),
                Focus::Input => {}
                Focus::Canvas => hints.push(("PgUp/PgDn", "scroll")),
            }
            hints.push(("^G", "generate"));
            if !compact {
                hints.push(("^R", "reset"));
            }
            hints
        }
        Screen::History => {
            let mut hints = vec![("↑↓", "select"), ("Enter", "open"), ("d", "delete")];
            if !compact {
                hints.push(("r", "refresh"));
            }
            hints
        }
    };
    hints.push(("^Q", "quit"));
    hints
}

fn hints_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(*key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

/// Error shown for the active screen, if any.
pub(super) fn current_error(app: &App) -> Option<&str> {
    match app.screen {
        Screen::Create => app
            .workflow
            .error
            .as_deref()
            .or(app.workflow.project_error.as_deref()),
        Screen::History => app.history.error.as_deref(),
    }
}

pub(super) fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = LayoutContext::from_rect(frame.area());
    let hints = hints_line(&key_hints(app.screen, app.focus, ctx.is_compact()));
    let hints_width = hints.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(hints_width), Constraint::Min(0)])
        .split(area);
    frame.render_widget(Paragraph::new(hints), chunks[0]);

    let right_width = chunks[1].width.saturating_sub(1) as usize;
    let right = match current_error(app) {
        Some(error) => Span::styled(
            truncate_to_width(&format!("✗ {}", error), right_width),
            Style::default().fg(COLOR_ERROR),
        ),
        None => Span::styled(
            truncate_to_width(&app.base_url, right_width),
            Style::default().fg(COLOR_DIM),
        ),
    };
    let right = Line::from(right).right_aligned();
    frame.render_widget(Paragraph::new(right), chunks[1]);
}
