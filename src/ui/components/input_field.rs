//! Input Field Component
//!
//! A labelled text box with rounded borders, a block cursor when focused,
//! and a dim placeholder when empty. Long values wrap, and the box follows
//! the end of the text so the cursor stays visible.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_INPUT_BG};
use crate::ui::wrap::wrap_text;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Placeholder text shown when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Lines shown inside a box of `inner_width` x `inner_height`.
///
/// Returns the wrapped lines of the value (plus cursor) and how many lines
/// to skip so the last line is visible.
pub fn visible_input_lines(
    config: &InputFieldConfig,
    inner_width: u16,
    inner_height: u16,
) -> (Vec<String>, usize) {
    let mut content = config.value.to_string();
    if config.focused {
        content.push('\u{2588}'); // Block cursor
    }
    let lines = wrap_text(&content, inner_width);
    let skip = lines.len().saturating_sub(inner_height.max(1) as usize);
    (lines, skip)
}

/// Render the label in the first row of `area` and the box in the rest.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    if area.height < 2 {
        return;
    }

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let box_area = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    let border_color = if config.focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));
    let inner = block.inner(box_area);

    let lines: Vec<Line> = match config.placeholder {
        Some(placeholder) if config.value.is_empty() && !config.focused => {
            vec![Line::from(Span::styled(placeholder, Style::default().fg(COLOR_DIM)))]
        }
        _ => {
            let text_style = if config.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let (wrapped, skip) = visible_input_lines(config, inner.width, inner.height);
            wrapped
                .into_iter()
                .skip(skip)
                .map(|l| Line::from(Span::styled(l, text_style)))
                .collect()
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), box_area);
}
