//! Create screen: the sidebar form and the canvas.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{ContentType, InputFormat};
use crate::state::WorkflowState;
use crate::ui::canvas::render_canvas;
use crate::ui::components::{
    render_input_field, render_tab_selector, spinner_char, InputFieldConfig, TabItem,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_BUSY, COLOR_DIM, COLOR_ERROR,
    COLOR_SELECTION_BG,
};
use crate::ui::wrap::wrap_text;

const URL_PLACEHOLDER: &str = "https://example.com/article";
const TEXT_PLACEHOLDER: &str = "Paste or type the source text";

pub(super) fn render_create_screen(frame: &mut Frame, area: Rect, app: &mut App) {
    let ctx = LayoutContext::from_rect(area);

    let (sidebar, canvas) = if ctx.should_stack_panels() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Min(5)])
            .split(area);
        (chunks[0], chunks[1])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(ctx.sidebar_width()), Constraint::Min(20)])
            .split(area);
        (chunks[0], chunks[1])
    };

    render_sidebar(frame, sidebar, app, &ctx);
    render_canvas(frame, canvas, app);
}

fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let color = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// One row per content type, the selected one marked.
pub(super) fn content_type_lines(selected: ContentType, focused: bool) -> Vec<Line<'static>> {
    ContentType::ALL
        .iter()
        .map(|content_type| {
            if *content_type == selected {
                let mut style = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
                if focused {
                    style = style.bg(COLOR_SELECTION_BG);
                }
                Line::from(vec![
                    Span::styled("▶ ", Style::default().fg(COLOR_ACCENT)),
                    Span::styled(content_type.label(), style),
                ])
            } else {
                Line::from(Span::styled(
                    format!("  {}", content_type.label()),
                    Style::default().fg(COLOR_DIM),
                ))
            }
        })
        .collect()
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let workflow = &app.workflow;
    let block = panel_block("Create", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner_width = inner.width.saturating_sub(2);
    let description = if ctx.should_show_descriptions() {
        wrap_text(workflow.selected_content_type.description(), inner_width)
    } else {
        Vec::new()
    };
    let error = workflow
        .error
        .as_deref()
        .map(|e| wrap_text(&format!("✗ {}", e), inner.width))
        .unwrap_or_default();

    let picker_height = ContentType::ALL.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(picker_height),
            Constraint::Length(description.len() as u16),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(error.len() as u16),
            Constraint::Length(1),
        ])
        .split(inner);

    let picker = Paragraph::new(content_type_lines(
        workflow.selected_content_type,
        app.focus == Focus::ContentTypes,
    ))
    .block(panel_block("Content Type", app.focus == Focus::ContentTypes));
    frame.render_widget(picker, chunks[0]);

    let description: Vec<Line> = description
        .into_iter()
        .map(|l| Line::from(Span::styled(format!(" {}", l), Style::default().fg(COLOR_DIM))))
        .collect();
    frame.render_widget(Paragraph::new(description), chunks[1]);

    render_tabs(frame, chunks[2], workflow, app.focus == Focus::Tabs, ctx);
    render_input(frame, chunks[3], workflow, app.focus == Focus::Input);

    let error: Vec<Line> = error
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(COLOR_ERROR))))
        .collect();
    frame.render_widget(Paragraph::new(error), chunks[4]);

    frame.render_widget(Paragraph::new(generate_line(workflow, app.tick_count)), chunks[5]);
}

fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    workflow: &WorkflowState,
    focused: bool,
    ctx: &LayoutContext,
) {
    let items: Vec<TabItem> = InputFormat::ALL
        .iter()
        .map(|format| match format {
            InputFormat::File => TabItem::new(format.label()).unavailable(),
            _ => TabItem::new(format.label()),
        })
        .collect();
    let selected = InputFormat::ALL
        .iter()
        .position(|f| *f == workflow.active_tab)
        .unwrap_or(0);

    let label_style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let lines = vec![
        Line::from(Span::styled("Input", label_style)),
        render_tab_selector(&items, selected, focused, ctx),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_input(frame: &mut Frame, area: Rect, workflow: &WorkflowState, focused: bool) {
    match workflow.active_tab {
        InputFormat::Text => {
            let config = InputFieldConfig::new("Source text", &workflow.input_text)
                .focused(focused)
                .placeholder(TEXT_PLACEHOLDER);
            render_input_field(frame, area, &config);
        }
        InputFormat::Url => {
            let url_area = Rect {
                height: area.height.min(4),
                ..area
            };
            let config = InputFieldConfig::new("Source URL", &workflow.input_url)
                .focused(focused)
                .placeholder(URL_PLACEHOLDER);
            render_input_field(frame, url_area, &config);
        }
        InputFormat::File => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "File upload is not available yet.",
                    Style::default().fg(COLOR_DIM),
                )),
                Line::from(Span::styled(
                    "Use the Text or URL tab.",
                    Style::default().fg(COLOR_DIM),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}

/// The generate button, or a spinner while a generation runs.
pub(super) fn generate_line(workflow: &WorkflowState, tick: u64) -> Line<'static> {
    if workflow.is_generating {
        Line::from(Span::styled(
            format!("{} Generating {}...", spinner_char(tick), workflow.selected_content_type.label()),
            Style::default().fg(COLOR_BUSY),
        ))
    } else {
        Line::from(vec![
            Span::styled("[ Ctrl+G ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                format!("Generate {}", workflow.selected_content_type.label()),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ]", Style::default().fg(COLOR_DIM)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_content_type_lines_mark_selection() {
        let lines = content_type_lines(ContentType::ConceptMap, true);
        assert_eq!(lines.len(), 8);
        let marked: Vec<_> = lines.iter().map(text).filter(|t| t.starts_with('▶')).collect();
        assert_eq!(marked, vec![format!("▶ {}", ContentType::ConceptMap.label())]);
    }

    #[test]
    fn test_generate_line() {
        let idle = WorkflowState::new();
        assert!(text(&generate_line(&idle, 0)).contains("Ctrl+G"));

        let mut busy = WorkflowState::new();
        busy.is_generating = true;
        assert!(text(&generate_line(&busy, 0)).contains("Generating"));
    }
}
