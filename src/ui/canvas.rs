//! Canvas: the result area of the Create screen.
//!
//! Shows, in priority order: the generation spinner, the project loading
//! spinner, a project load error, the loaded result (text or image URLs),
//! the "still processing" notice, or the "Ready to Create" placeholder.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{GenerationOutput, GenerationStatus, LoadedProject};
use crate::state::WorkflowState;
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_LINK, COLOR_SUCCESS,
};
use crate::ui::wrap::wrap_text;

pub const READY_TITLE: &str = "Ready to Create";
pub const PROCESSING_NOTICE: &str = "Your content is still processing.";
pub const PROCESSING_DETAIL: &str =
    "Status updates are not available yet. Check History later for the result.";

/// Title for the canvas block: the loaded project's type, or the selected one.
fn canvas_title(workflow: &WorkflowState) -> String {
    match &workflow.project {
        Some(project) => match project.content_type() {
            Some(content_type) => content_type.label().to_string(),
            None if !project.content_type.is_empty() => project.content_type.clone(),
            None => workflow.selected_content_type.label().to_string(),
        },
        None => workflow.selected_content_type.label().to_string(),
    }
}

/// Lines for a loaded project at `width` columns.
pub(super) fn project_lines(project: &LoadedProject, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let source = if !project.input_url.is_empty() {
        Some(project.input_url.as_str())
    } else if !project.input.is_empty() {
        project.input.lines().next()
    } else {
        None
    };
    if let Some(source) = source {
        for l in wrap_text(&format!("Source: {}", source), width) {
            lines.push(Line::from(Span::styled(l, Style::default().fg(COLOR_DIM))));
        }
        lines.push(Line::from(""));
    }

    match &project.output {
        Some(GenerationOutput::Text(text)) => {
            lines.extend(wrap_text(text, width).into_iter().map(Line::from));
        }
        Some(GenerationOutput::Images(urls)) => {
            let count = urls.len();
            lines.push(Line::from(Span::styled(
                format!("{} image{}", count, if count == 1 { "" } else { "s" }),
                Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for (idx, url) in urls.iter().enumerate() {
                let prefix = format!("{:>2}. ", idx + 1);
                let indent = " ".repeat(prefix.len());
                let wrapped = wrap_text(url, width.saturating_sub(prefix.len() as u16));
                for (row, part) in wrapped.into_iter().enumerate() {
                    let lead = if row == 0 { prefix.clone() } else { indent.clone() };
                    lines.push(Line::from(vec![
                        Span::styled(lead, Style::default().fg(COLOR_DIM)),
                        Span::styled(part, Style::default().fg(COLOR_LINK)),
                    ]));
                }
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "This generation has no result.",
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    lines
}

/// Everything the canvas shows other than a loaded result.
pub(super) fn canvas_indicator(workflow: &WorkflowState, tick: u64) -> Option<StatusIndicatorType> {
    if workflow.is_generating {
        return Some(StatusIndicatorType::spinner(
            format!("Generating {}...", workflow.selected_content_type.label()),
            tick,
        ));
    }
    if workflow.is_loading_project {
        return Some(StatusIndicatorType::spinner("Loading project...", tick));
    }
    if let Some(error) = &workflow.project_error {
        return Some(StatusIndicatorType::error("Could not load project", error.clone()));
    }
    if workflow.project.is_some() {
        return None;
    }
    if workflow.last_status == Some(GenerationStatus::Processing) {
        return Some(StatusIndicatorType::info(
            PROCESSING_NOTICE,
            Some(PROCESSING_DETAIL.to_string()),
        ));
    }
    Some(StatusIndicatorType::info(
        READY_TITLE,
        Some(format!(
            "{}. Add your source on the left and press Ctrl+G.",
            workflow.selected_content_type.description()
        )),
    ))
}

/// Render the canvas and record how far it can scroll.
pub(super) fn render_canvas(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Canvas;
    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", canvas_title(&app.workflow)),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    if let Some(indicator) = canvas_indicator(&app.workflow, app.tick_count) {
        app.canvas_max_scroll = 0;
        app.canvas_scroll = 0;
        let lines: Vec<Line> = render_status_indicator(&indicator)
            .into_iter()
            .flat_map(|line| rewrap_centered(line, content.width))
            .collect();
        frame.render_widget(Paragraph::new(lines), content);
        return;
    }

    let Some(project) = &app.workflow.project else {
        return;
    };
    let lines = project_lines(project, content.width);
    app.canvas_max_scroll = max_scroll(lines.len(), content.height);
    app.canvas_scroll = app.canvas_scroll.min(app.canvas_max_scroll);

    frame.render_widget(
        Paragraph::new(lines).scroll((app.canvas_scroll, 0)),
        content,
    );

    if app.canvas_max_scroll > 0 {
        let mut state = ScrollbarState::new(app.canvas_max_scroll as usize)
            .position(app.canvas_scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            inner,
            &mut state,
        );
    }
}

/// Furthest scroll offset for `line_count` rendered lines. Saturates at
/// `u16::MAX`, the widest offset `Paragraph::scroll` takes.
fn max_scroll(line_count: usize, height: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}

/// Wrap a centered single-style line that may be wider than the canvas.
fn rewrap_centered(line: Line<'static>, width: u16) -> Vec<Line<'static>> {
    let alignment = line.alignment;
    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    if text.chars().count() <= width as usize || line.spans.len() != 1 {
        return vec![line];
    }
    let style = line.spans[0].style;
    wrap_text(&text, width)
        .into_iter()
        .map(|l| {
            let mut out = Line::from(Span::styled(l, style));
            out.alignment = alignment;
            out
        })
        .collect()
}
