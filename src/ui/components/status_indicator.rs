//! Status Indicator Component
//!
//! Centered spinner, info, and error blocks used by the canvas and the
//! history list.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_BUSY, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame (the event loop ticks every 16ms).
const TICKS_PER_FRAME: u64 = 6;

/// Status indicator types
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, tick: u64 },
    /// Heading with an optional dim line below
    Info { title: String, detail: Option<String> },
    /// Error heading with the error text below
    Error { header: String, details: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            tick,
        }
    }

    pub fn info(title: impl Into<String>, detail: Option<String>) -> Self {
        Self::Info {
            title: title.into(),
            detail,
        }
    }

    pub fn error(header: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Error {
            header: header.into(),
            details: details.into(),
        }
    }
}

/// Spinner character for an app tick count
pub fn spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Render a status indicator as centered lines
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    match indicator {
        StatusIndicatorType::Spinner { message, tick } => {
            lines.push(
                Line::from(vec![
                    Span::styled(
                        format!("{} ", spinner_char(*tick)),
                        Style::default().fg(COLOR_BUSY),
                    ),
                    Span::styled(
                        message.clone(),
                        Style::default().fg(COLOR_BUSY).add_modifier(Modifier::BOLD),
                    ),
                ])
                .alignment(Alignment::Center),
            );
        }
        StatusIndicatorType::Info { title, detail } => {
            lines.push(
                Line::from(Span::styled(
                    title.clone(),
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            );
            if let Some(detail) = detail {
                lines.push(Line::from(""));
                lines.push(
                    Line::from(Span::styled(detail.clone(), Style::default().fg(COLOR_DIM)))
                        .alignment(Alignment::Center),
                );
            }
        }
        StatusIndicatorType::Error { header, details } => {
            lines.push(
                Line::from(vec![
                    Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
                    Span::styled(
                        header.clone(),
                        Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                    ),
                ])
                .alignment(Alignment::Center),
            );
            lines.push(
                Line::from(Span::styled(details.clone(), Style::default().fg(COLOR_ERROR)))
                    .alignment(Alignment::Center),
            );
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_spinner_advances_slowly() {
        assert_eq!(spinner_char(0), '◐');
        assert_eq!(spinner_char(TICKS_PER_FRAME - 1), '◐');
        assert_eq!(spinner_char(TICKS_PER_FRAME), '◓');
        assert_eq!(spinner_char(TICKS_PER_FRAME * 4), '◐');
    }

    #[test]
    fn test_render_variants() {
        let spinner = render_status_indicator(&StatusIndicatorType::spinner("Working", 0));
        assert!(text(&spinner).contains("◐ Working"));

        let info = render_status_indicator(&StatusIndicatorType::info(
            "Ready",
            Some("Pick a type".to_string()),
        ));
        assert!(text(&info).contains("Pick a type"));

        let error = render_status_indicator(&StatusIndicatorType::error("Failed", "boom"));
        let rendered = text(&error);
        assert!(rendered.contains("✗ Failed"));
        assert!(rendered.contains("boom"));
    }
}
