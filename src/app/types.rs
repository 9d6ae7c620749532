//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`Focus`] - Which panel of the Create screen has focus

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Create,
    History,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Create, Screen::History];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Create => "Create",
            Screen::History => "History",
        }
    }

    /// Function key that switches to this screen.
    pub fn shortcut(&self) -> &'static str {
        match self {
            Screen::Create => "F1",
            Screen::History => "F2",
        }
    }
}

/// Represents which panel of the Create screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ContentTypes,
    Tabs,
    Input,
    Canvas,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::ContentTypes, Focus::Tabs, Focus::Input, Focus::Canvas];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Screen::default(), Screen::Create);
        assert_eq!(Focus::default(), Focus::ContentTypes);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::ContentTypes.next(), Focus::Tabs);
        assert_eq!(Focus::Canvas.next(), Focus::ContentTypes);
        assert_eq!(Focus::ContentTypes.prev(), Focus::Canvas);
        assert_eq!(Focus::Input.prev(), Focus::Tabs);
    }

    #[test]
    fn test_screen_labels() {
        assert_eq!(Screen::History.label(), "History");
        assert_eq!(Screen::Create.shortcut(), "F1");
    }
}
