//! Keyboard and paste handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::InputFormat;

use super::{App, Focus, Screen};

/// Lines moved by PageUp / PageDown on the canvas.
const PAGE_SCROLL: u16 = 10;

impl App {
    /// Handle a key press. Global bindings win over screen bindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.quit();
                return;
            }
            KeyCode::F(1) => {
                self.navigate_to(Screen::Create);
                return;
            }
            KeyCode::F(2) => {
                self.navigate_to(Screen::History);
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Create => self.handle_create_key(key),
            Screen::History => self.handle_history_key(key),
        }
    }

    fn handle_create_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            KeyCode::Char('g') if ctrl => {
                self.submit_generation();
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.update_workflow(|w| w.reset_form());
                return;
            }
            KeyCode::Esc => {
                self.update_workflow(|w| w.clear_error());
                return;
            }
            KeyCode::PageUp => {
                self.scroll_canvas_up(PAGE_SCROLL);
                return;
            }
            KeyCode::PageDown => {
                self.scroll_canvas_down(PAGE_SCROLL);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::ContentTypes => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    let prev = self.workflow.selected_content_type.prev();
                    self.update_workflow(|w| w.set_content_type(prev));
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let next = self.workflow.selected_content_type.next();
                    self.update_workflow(|w| w.set_content_type(next));
                }
                KeyCode::Enter => self.focus = Focus::Tabs,
                _ => {}
            },
            Focus::Tabs => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    let prev = self.workflow.active_tab.prev();
                    self.update_workflow(|w| w.set_active_tab(prev));
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    let next = self.workflow.active_tab.next();
                    self.update_workflow(|w| w.set_active_tab(next));
                }
                KeyCode::Enter | KeyCode::Down => self.focus = Focus::Input,
                _ => {}
            },
            Focus::Input => self.handle_input_key(key),
            Focus::Canvas => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.scroll_canvas_up(1),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_canvas_down(1),
                KeyCode::Home => self.canvas_scroll = 0,
                _ => {}
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let tab = self.workflow.active_tab;
        match key.code {
            KeyCode::Enter if tab == InputFormat::Url => self.submit_generation(),
            KeyCode::Enter if tab == InputFormat::Text => self.insert_input("\n"),
            KeyCode::Backspace => self.edit_active_input(|value| {
                value.pop();
            }),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut buf = [0u8; 4];
                self.insert_input(c.encode_utf8(&mut buf));
            }
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.update_history(|h| h.select_prev()),
            KeyCode::Down | KeyCode::Char('j') => self.update_history(|h| h.select_next()),
            KeyCode::Enter => self.open_selected_history_item(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_history_item(),
            KeyCode::Char('r') => self.refresh_history(),
            KeyCode::Esc => self.navigate_to(Screen::Create),
            _ => {}
        }
    }

    /// Insert pasted text into the input field. URLs are single-line, so
    /// line breaks are dropped on the URL tab.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen != Screen::Create {
            return;
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        match self.workflow.active_tab {
            InputFormat::Url => {
                let single_line: String = text.split('\n').map(str::trim).collect();
                self.insert_input(&single_line);
            }
            InputFormat::Text => self.insert_input(&text),
            InputFormat::File => return,
        }
        self.focus = Focus::Input;
    }

    fn insert_input(&mut self, text: &str) {
        self.edit_active_input(|value| value.push_str(text));
    }

    fn edit_active_input(&mut self, edit: impl FnOnce(&mut String)) {
        match self.workflow.active_tab {
            InputFormat::Text => {
                let mut value = self.workflow.input_text.clone();
                edit(&mut value);
                self.update_workflow(|w| w.set_input_text(value));
            }
            InputFormat::Url => {
                let mut value = self.workflow.input_url.clone();
                edit(&mut value);
                self.update_workflow(|w| w.set_input_url(value));
            }
            InputFormat::File => {}
        }
    }
}
