//! History screen state.

use tracing::debug;

use super::request_token::{RequestFence, RequestToken};
use crate::error::ApiError;
use crate::models::{DeleteResponse, HistoryItem};

pub const DELETE_FAILED: &str = "Failed to delete item";

/// The history list with its loading and selection state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    pub items: Vec<HistoryItem>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected: usize,
    /// Id of the item whose delete is in flight
    pub deleting: Option<String>,
    fence: RequestFence,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start fetching the list. Supersedes any fetch still in flight.
    pub fn begin_load(mut self) -> (Self, RequestToken) {
        self.is_loading = true;
        self.error = None;
        let token = self.fence.issue();
        (self, token)
    }

    pub fn complete_load(
        mut self,
        token: RequestToken,
        result: Result<Vec<HistoryItem>, ApiError>,
    ) -> Self {
        if !self.fence.is_current(token) {
            debug!(%token, "Dropping stale history result");
            return self;
        }

        self.is_loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.clamp_selection();
            }
            Err(err) => self.error = Some(err.user_message()),
        }
        self
    }

    /// Remove exactly the item with `id`, keeping the selection in range.
    pub fn remove(mut self, id: &str) -> Self {
        self.items.retain(|item| item.id != id);
        self.clamp_selection();
        self
    }

    pub fn begin_delete(mut self, id: impl Into<String>) -> Self {
        self.deleting = Some(id.into());
        self.error = None;
        self
    }

    /// Apply a delete outcome. The item leaves the list unless the call
    /// failed or the server explicitly refused.
    pub fn complete_delete(mut self, id: &str, result: Result<DeleteResponse, ApiError>) -> Self {
        if self.deleting.as_deref() == Some(id) {
            self.deleting = None;
        }
        match result {
            Ok(response) if response.is_rejected() => {
                self.error = Some(DELETE_FAILED.to_string());
                self
            }
            Ok(_) => self.remove(id),
            Err(err) => {
                self.error = Some(err.user_message());
                self
            }
        }
    }

    pub fn selected_item(&self) -> Option<&HistoryItem> {
        self.items.get(self.selected)
    }

    pub fn select_next(mut self) -> Self {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
        self
    }

    pub fn select_prev(mut self) -> Self {
        self.selected = self.selected.saturating_sub(1);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.is_loading && self.error.is_none()
    }

    fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.items.len() {
            self.selected = self.items.len() - 1;
        }
    }
}
