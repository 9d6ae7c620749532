//! Tab Selector Component
//!
//! A horizontal tab strip. The active tab carries a `▶` marker; tabs that
//! cannot be used yet are drawn dim with a `(soon)` suffix.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
    /// Whether the tab leads to a working input
    pub available: bool,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
            available: true,
        }
    }

    pub fn with_short_label(mut self, short_label: &'a str) -> Self {
        self.short_label = short_label;
        self
    }

    /// Mark the tab as not usable yet.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// Render a horizontal tab selector as a single line.
///
/// # Example
/// ```ignore
/// let items = [TabItem::new("Text"), TabItem::new("URL"), TabItem::new("File").unavailable()];
/// let line = render_tab_selector(&items, 0, true, &ctx);
/// ```
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let gap = if ctx.is_extra_small() { " " } else { "  " };
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(gap));
        }

        let mut label = if ctx.is_compact() {
            item.short_label.to_string()
        } else {
            item.label.to_string()
        };
        if !item.available && !ctx.is_compact() {
            label.push_str(" (soon)");
        }

        if idx == selected {
            let mut style = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
            if focused {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled("▶ ", Style::default().fg(COLOR_ACCENT)));
            spans.push(Span::styled(label, style));
        } else {
            let style = if item.available {
                Style::default().fg(COLOR_ACCENT)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label, style));
        }
    }

    Line::from(spans)
}
