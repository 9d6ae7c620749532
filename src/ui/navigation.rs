//! Top navigation bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Screen;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_SELECTION_BG};

pub(super) fn navigation_line(active: Screen) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            " studio ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(COLOR_DIM)),
    ];

    for screen in Screen::ALL {
        let label = format!(" {} {} ", screen.shortcut(), screen.label());
        let style = if screen == active {
            Style::default()
                .fg(COLOR_ACCENT)
                .bg(COLOR_SELECTION_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

pub(super) fn render_navigation(frame: &mut Frame, area: Rect, active: Screen) {
    frame.render_widget(Paragraph::new(navigation_line(active)), area);
}
