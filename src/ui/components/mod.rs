//! Reusable UI Components
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal tab selector with arrow marker
//! - `InputField` - Labelled, wrapping text input with focus handling
//! - `StatusIndicator` - Spinner, info, and error blocks

mod input_field;
mod status_indicator;
mod tab_selector;

pub use input_field::{render_input_field, visible_input_lines, InputFieldConfig};
pub use status_indicator::{render_status_indicator, spinner_char, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
