//! Message handling for the App.

use tracing::{debug, info};

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::GenerationFinished { token, result } => {
                debug!(%token, ok = result.is_ok(), "Generation finished");
                let had_project = self.workflow.project.clone();
                self.update_workflow(|w| w.complete_generate(token, result));
                if self.workflow.project != had_project {
                    self.canvas_scroll = 0;
                }
            }
            AppMessage::ProjectLoaded { token, result } => {
                debug!(%token, ok = result.is_ok(), "Project loaded");
                self.update_workflow(|w| w.complete_project_load(token, result));
            }
            AppMessage::HistoryLoaded { token, result } => {
                self.update_history(|h| h.complete_load(token, result));
            }
            AppMessage::HistoryItemDeleted { id, result } => {
                if result.is_ok() {
                    info!(id = %id, "History item delete finished");
                }
                self.update_history(|h| h.complete_delete(&id, result));
            }
        }
    }
}
