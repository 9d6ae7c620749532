//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the views ask: how wide the sidebar is, whether panels stack,
//! and whether labels should be shortened.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Sidebar width bounds on the Create screen.
const SIDEBAR_MIN_WIDTH: u16 = 34;
const SIDEBAR_MAX_WIDTH: u16 = 52;

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
///
/// if ctx.should_stack_panels() {
///     // sidebar above canvas
/// } else {
///     let sidebar = ctx.sidebar_width();
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create a layout context from a ratatui `Rect`.
    pub fn from_rect(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        let percentage = percentage.min(100);
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]` and to the terminal width.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max).min(self.width)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: condense labels and hints.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Layout Mode Decisions
    // ========================================================================

    /// Stack the sidebar above the canvas instead of side by side.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Show the description under the content-type picker.
    pub fn should_show_descriptions(&self) -> bool {
        !self.is_short()
    }

    /// Width of the Create sidebar in side-by-side mode.
    pub fn sidebar_width(&self) -> u16 {
        let percentage = if self.width < breakpoints::MD_WIDTH { 40 } else { 35 };
        self.bounded_width(percentage, SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH)
    }
}
