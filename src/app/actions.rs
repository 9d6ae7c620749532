//! Network actions for the App.
//!
//! Each action updates state synchronously, then runs the request on a
//! spawned task that reports back through [`AppMessage`].

use tracing::{debug, warn};

use crate::api::ApiResponse;
use crate::state::{GenerateCommand, ProjectLoadCommand};

use super::{App, AppMessage, Focus, Screen};

impl App {
    /// Validate the form and start a generation in the background.
    pub fn submit_generation(&mut self) {
        if self.workflow.is_generating {
            debug!("Generation already running");
            return;
        }

        let command = self.update_workflow_with(|w| w.begin_generate());
        let Some(GenerateCommand { token, request }) = command else {
            return;
        };

        let service = self.generation_service.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = service.generate(request).await.map(ApiResponse::into_data);
            let _ = tx.send(AppMessage::GenerationFinished { token, result });
        });
    }

    /// Open an existing generation on the Create screen, or clear the
    /// loaded project when `id` is `None`.
    pub fn open_project(&mut self, id: Option<&str>) {
        self.screen = Screen::Create;
        self.focus = Focus::Canvas;
        self.canvas_scroll = 0;

        let command = self.update_workflow_with(|w| w.begin_project_load(id));
        let Some(ProjectLoadCommand { token, id }) = command else {
            return;
        };

        let service = self.history_service.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = service
                .get_project_details(&id)
                .await
                .map(ApiResponse::into_data);
            let _ = tx.send(AppMessage::ProjectLoaded { token, result });
        });
    }

    /// Fetch the history list in the background.
    pub fn refresh_history(&mut self) {
        let history = std::mem::take(&mut self.history);
        let (history, token) = history.begin_load();
        self.history = history;

        let service = self.history_service.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = service.get_history().await.map(ApiResponse::into_data);
            let _ = tx.send(AppMessage::HistoryLoaded { token, result });
        });
    }

    /// Delete the selected history item on the server; the local list is
    /// updated when the result arrives.
    pub fn delete_selected_history_item(&mut self) {
        if let Some(pending) = &self.history.deleting {
            warn!(id = %pending, "Delete already in flight");
            return;
        }
        let Some(id) = self.history.selected_item().map(|item| item.id.clone()) else {
            return;
        };

        self.update_history(|h| h.begin_delete(id.clone()));

        let service = self.history_service.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = service
                .delete_history_item(&id)
                .await
                .map(ApiResponse::into_data);
            let _ = tx.send(AppMessage::HistoryItemDeleted { id, result });
        });
    }

    /// Open the item under the history cursor.
    pub fn open_selected_history_item(&mut self) {
        let Some(id) = self.history.selected_item().map(|item| item.id.clone()) else {
            return;
        };
        self.open_project(Some(&id));
    }

    /// Switch screens.
    ///
    /// Leaving Create discards the workflow, so results still in flight for
    /// it are dropped. Entering History reloads the list.
    pub fn navigate_to(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        if self.screen == Screen::Create {
            self.update_workflow(|w| w.close());
            self.canvas_scroll = 0;
        }
        self.screen = screen;
        match screen {
            Screen::Create => self.focus = Focus::ContentTypes,
            Screen::History => self.refresh_history(),
        }
    }
}
