//! History screen: list of past generations.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::HistoryItem;
use crate::state::HistoryState;
use crate::ui::components::{render_status_indicator, spinner_char, StatusIndicatorType};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BUSY, COLOR_DIM, COLOR_SELECTION_BG,
};
use crate::ui::wrap::truncate_to_width;

pub const EMPTY_TITLE: &str = "No generations yet";

/// Column width reserved for the content-type label.
const LABEL_WIDTH: usize = 18;

/// Loading, error and empty states; `None` when the list should be shown.
pub(super) fn history_indicator(history: &HistoryState, tick: u64) -> Option<StatusIndicatorType> {
    if history.is_loading && history.items.is_empty() {
        return Some(StatusIndicatorType::spinner("Loading history...", tick));
    }
    if let Some(error) = &history.error {
        if history.items.is_empty() {
            return Some(StatusIndicatorType::error("Could not load history", error.clone()));
        }
    }
    if history.is_empty() {
        return Some(StatusIndicatorType::info(
            EMPTY_TITLE,
            Some("Generated content shows up here. Press F1 to create some.".to_string()),
        ));
    }
    None
}

/// One row: type label, title, and date right-aligned to `width`.
pub(super) fn history_row(
    item: &HistoryItem,
    width: u16,
    deleting: bool,
    tick: u64,
) -> Line<'static> {
    let label = truncate_to_width(&item.content_type_label(), LABEL_WIDTH - 1);
    let label = format!("{:<w$}", label, w = LABEL_WIDTH);
    let date = if deleting {
        format!("{} deleting", spinner_char(tick))
    } else {
        item.created_date()
    };

    let title_width = (width as usize)
        .saturating_sub(LABEL_WIDTH + date.width() + 2)
        .max(1);
    let title = truncate_to_width(&item.title(), title_width);
    let padding = title_width.saturating_sub(title.width());

    let date_style = if deleting {
        Style::default().fg(COLOR_BUSY)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(COLOR_DIM)),
        Span::styled(title, Style::default().fg(COLOR_ACCENT)),
        Span::raw(" ".repeat(padding + 2)),
        Span::styled(date, date_style),
    ])
}

pub(super) fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let history = &app.history;
    let mut title = vec![Span::styled(
        " History ",
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )];
    if !history.items.is_empty() {
        title.push(Span::styled(
            format!("({}) ", history.items.len()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    if history.is_loading && !history.items.is_empty() {
        title.push(Span::styled(
            format!("{} ", spinner_char(app.tick_count)),
            Style::default().fg(COLOR_BUSY),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(indicator) = history_indicator(history, app.tick_count) {
        frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), inner);
        return;
    }

    let row_width = inner.width.saturating_sub(3);
    let items: Vec<ListItem> = history
        .items
        .iter()
        .map(|item| {
            let deleting = history.deleting.as_deref() == Some(item.id.as_str());
            ListItem::new(history_row(item, row_width, deleting, app.tick_count))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(COLOR_SELECTION_BG).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(history.selected));
    frame.render_stateful_widget(list, inner, &mut state);
}
