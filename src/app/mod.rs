//! Application state and logic.
//!
//! [`App`] owns the workflow and history state. Key handling lives in
//! `keys`, network actions in `actions`, and results of spawned tasks come
//! back through [`AppMessage`] and are applied in `handlers`.

mod actions;
mod handlers;
mod keys;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, Screen};

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::config::StudioConfig;
use crate::services::{GenerationService, HistoryService};
use crate::state::{HistoryState, WorkflowState};

/// Main application state
pub struct App {
    /// Create screen form, generation and loaded project
    pub workflow: WorkflowState,
    /// History screen list
    pub history: HistoryState,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Current focus panel
    pub focus: Focus,
    /// Scroll offset of the canvas, in wrapped lines
    pub canvas_scroll: u16,
    /// Largest useful canvas scroll, updated during render
    pub canvas_max_scroll: u16,
    /// Receiver for async messages
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations (spinner)
    pub tick_count: u64,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Terminal height in rows
    pub terminal_height: u16,
    /// Whether the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Backend base URL, shown in the status bar
    pub base_url: String,
    generation_service: GenerationService,
    history_service: HistoryService,
}

impl App {
    /// Create the app around an API client.
    pub fn new(client: ApiClient, config: &StudioConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let base_url = client.base_url().to_string();
        let generation_service =
            GenerationService::new(client.clone()).with_timeout(config.generation_timeout);
        let history_service = HistoryService::new(client);

        let (terminal_width, terminal_height) = crossterm::terminal::size().unwrap_or((80, 24));

        Self {
            workflow: WorkflowState::new(),
            history: HistoryState::new(),
            should_quit: false,
            screen: Screen::default(),
            focus: Focus::default(),
            canvas_scroll: 0,
            canvas_max_scroll: 0,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            terminal_width,
            terminal_height,
            needs_redraw: true,
            base_url,
            generation_service,
            history_service,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only spinners animate, so only busy states redraw.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            self.mark_dirty();
        }
    }

    /// Whether any request the user is waiting on is in flight.
    pub fn is_busy(&self) -> bool {
        self.workflow.is_generating
            || self.workflow.is_loading_project
            || self.history.is_loading
            || self.history.deleting.is_some()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn scroll_canvas_up(&mut self, lines: u16) {
        self.canvas_scroll = self.canvas_scroll.saturating_sub(lines);
    }

    pub fn scroll_canvas_down(&mut self, lines: u16) {
        self.canvas_scroll = self
            .canvas_scroll
            .saturating_add(lines)
            .min(self.canvas_max_scroll);
    }

    fn update_workflow(&mut self, f: impl FnOnce(WorkflowState) -> WorkflowState) {
        let workflow = std::mem::take(&mut self.workflow);
        self.workflow = f(workflow);
    }

    fn update_workflow_with<R>(
        &mut self,
        f: impl FnOnce(WorkflowState) -> (WorkflowState, R),
    ) -> R {
        let workflow = std::mem::take(&mut self.workflow);
        let (workflow, out) = f(workflow);
        self.workflow = workflow;
        out
    }

    fn update_history(&mut self, f: impl FnOnce(HistoryState) -> HistoryState) {
        let history = std::mem::take(&mut self.history);
        self.history = f(history);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::App;
    use crate::adapters::{InMemoryCredentials, MockHttpClient};
    use crate::api::ApiClient;
    use crate::config::StudioConfig;

    pub const BASE: &str = "http://test.local";

    pub fn app_with(http: &MockHttpClient) -> App {
        let client = ApiClient::new(Arc::new(http.clone()), Arc::new(InMemoryCredentials::new()))
            .with_base_url(BASE);
        App::new(client, &StudioConfig::new())
    }

    /// Wait for the next spawned-task result and apply it.
    pub async fn pump(app: &mut App) {
        let rx = app.message_rx.as_mut().unwrap();
        let msg = rx.recv().await.unwrap();
        app.handle_message(msg);
    }
}
