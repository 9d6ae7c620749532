//! AppMessage enum for async communication within the application.

use crate::error::ApiError;
use crate::models::{DeleteResponse, GenerationResponse, HistoryItem};
use crate::state::RequestToken;

/// Results of spawned network calls, delivered back to the UI task
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A generation request finished
    GenerationFinished {
        token: RequestToken,
        result: Result<GenerationResponse, ApiError>,
    },
    /// An existing generation was fetched for the Create screen
    ProjectLoaded {
        token: RequestToken,
        result: Result<HistoryItem, ApiError>,
    },
    /// The history list was fetched
    HistoryLoaded {
        token: RequestToken,
        result: Result<Vec<HistoryItem>, ApiError>,
    },
    /// A history item delete finished
    HistoryItemDeleted {
        id: String,
        result: Result<DeleteResponse, ApiError>,
    },
}
