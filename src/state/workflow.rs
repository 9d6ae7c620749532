//! Create-workflow state.
//!
//! [`WorkflowState`] is a plain value owned by the app. Every action consumes
//! the state and returns the next one. Network work is split into a `begin_*`
//! step that validates and issues a [`RequestToken`], and a `complete_*` step
//! that applies the result only if its token is still current.

use tracing::{debug, warn};

use super::request_token::{RequestFence, RequestToken};
use crate::error::ApiError;
use crate::models::{
    ContentType, GenerationRequest, GenerationResponse, GenerationStatus, HistoryItem,
    InputFormat, LoadedProject,
};
use crate::services::{GenerationService, HistoryService};

pub const ENTER_TEXT: &str = "Please enter some text";
pub const ENTER_URL: &str = "Please enter a URL";
pub const FILE_UPLOAD_NOT_IMPLEMENTED: &str = "File upload is not implemented yet";
pub const GENERATION_FAILED: &str = "Content generation failed. Please try again.";
pub const PROJECT_LOAD_FAILED: &str = "Failed to load project";

/// Synchronous edits to the workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowAction {
    SetContentType(ContentType),
    SetInputText(String),
    SetInputUrl(String),
    SetActiveTab(InputFormat),
    SetError(String),
    ClearError,
    ResetForm,
}

/// A generation the caller must run, tagged for fencing.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateCommand {
    pub token: RequestToken,
    pub request: GenerationRequest,
}

/// A project fetch the caller must run, tagged for fencing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLoadCommand {
    pub token: RequestToken,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub selected_content_type: ContentType,
    pub input_text: String,
    pub input_url: String,
    pub active_tab: InputFormat,
    pub is_generating: bool,
    pub error: Option<String>,
    /// The generation shown on the canvas
    pub project: Option<LoadedProject>,
    pub is_loading_project: bool,
    pub project_error: Option<String>,
    /// Status of the last applied generation response
    pub last_status: Option<GenerationStatus>,
    generation_fence: RequestFence,
    project_fence: RequestFence,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            selected_content_type: ContentType::KeyPoints,
            input_text: String::new(),
            input_url: String::new(),
            active_tab: InputFormat::Text,
            is_generating: false,
            error: None,
            project: None,
            is_loading_project: false,
            project_error: None,
            last_status: None,
            generation_fence: RequestFence::new(),
            project_fence: RequestFence::new(),
        }
    }
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, action: WorkflowAction) -> Self {
        match action {
            WorkflowAction::SetContentType(content_type) => self.set_content_type(content_type),
            WorkflowAction::SetInputText(text) => self.set_input_text(text),
            WorkflowAction::SetInputUrl(url) => self.set_input_url(url),
            WorkflowAction::SetActiveTab(tab) => self.set_active_tab(tab),
            WorkflowAction::SetError(message) => self.set_error(message),
            WorkflowAction::ClearError => self.clear_error(),
            WorkflowAction::ResetForm => self.reset_form(),
        }
    }

    pub fn set_content_type(mut self, content_type: ContentType) -> Self {
        self.selected_content_type = content_type;
        self
    }

    pub fn set_input_text(mut self, text: impl Into<String>) -> Self {
        self.input_text = text.into();
        self
    }

    pub fn set_input_url(mut self, url: impl Into<String>) -> Self {
        self.input_url = url.into();
        self
    }

    pub fn set_active_tab(mut self, tab: InputFormat) -> Self {
        self.active_tab = tab;
        self
    }

    pub fn set_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn clear_error(mut self) -> Self {
        self.error = None;
        self
    }

    /// Clear the inputs and error and return to the Text tab.
    ///
    /// The content type and the loaded project survive a reset.
    pub fn reset_form(mut self) -> Self {
        self.input_text.clear();
        self.input_url.clear();
        self.active_tab = InputFormat::Text;
        self.error = None;
        self
    }

    /// Discard the workflow when navigating away.
    ///
    /// Everything returns to its initial value except the request fences,
    /// which are advanced so in-flight completions are dropped on arrival.
    pub fn close(self) -> Self {
        let mut generation_fence = self.generation_fence;
        let mut project_fence = self.project_fence;
        generation_fence.invalidate();
        project_fence.invalidate();
        Self {
            generation_fence,
            project_fence,
            ..Self::default()
        }
    }

    /// Text in the input field of the active tab.
    pub fn active_input(&self) -> &str {
        match self.active_tab {
            InputFormat::Text => &self.input_text,
            InputFormat::Url => &self.input_url,
            InputFormat::File => "",
        }
    }

    /// Validate the form and start a generation.
    ///
    /// Returns the command to execute, or `None` with `error` set when the
    /// form is incomplete. A new command supersedes any generation still in
    /// flight.
    pub fn begin_generate(mut self) -> (Self, Option<GenerateCommand>) {
        let tab = self.active_tab;
        let request = match tab {
            InputFormat::Url if self.input_url.trim().is_empty() => {
                return (self.set_error(ENTER_URL), None);
            }
            InputFormat::Text if self.input_text.trim().is_empty() => {
                return (self.set_error(ENTER_TEXT), None);
            }
            InputFormat::File => {
                return (self.set_error(FILE_UPLOAD_NOT_IMPLEMENTED), None);
            }
            InputFormat::Url => {
                GenerationRequest::url(self.selected_content_type, self.input_url.trim())
            }
            InputFormat::Text => {
                GenerationRequest::text(self.selected_content_type, self.input_text.clone())
            }
        };

        self.is_generating = true;
        self.error = None;
        self.last_status = None;
        let token = self.generation_fence.issue();
        debug!(%token, format = %request.input_format(), "Generation started");
        (self, Some(GenerateCommand { token, request }))
    }

    /// Apply the outcome of the generation identified by `token`.
    pub fn complete_generate(
        mut self,
        token: RequestToken,
        result: Result<GenerationResponse, ApiError>,
    ) -> Self {
        if !self.generation_fence.is_current(token) {
            debug!(%token, "Dropping stale generation result");
            return self;
        }

        self.is_generating = false;
        match result {
            Ok(response) => {
                self.last_status = Some(response.status);
                match response.status {
                    GenerationStatus::Completed => {
                        self.project = Some(LoadedProject::from(response));
                        self.project_error = None;
                    }
                    GenerationStatus::Processing => {
                        debug!(id = %response.id, "Generation still processing; not polling");
                    }
                    GenerationStatus::Failed => {
                        self.error = Some(GENERATION_FAILED.to_string());
                    }
                }
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
        self
    }

    /// Run a whole generation: validate, call the service, apply the result.
    pub async fn handle_generate(self, service: &GenerationService) -> Self {
        let (state, command) = self.begin_generate();
        let Some(command) = command else {
            return state;
        };
        let result = service.generate(command.request).await.map(|r| r.data);
        state.complete_generate(command.token, result)
    }

    /// Start loading an existing generation, or clear project data when `id`
    /// is `None`.
    pub fn begin_project_load(mut self, id: Option<&str>) -> (Self, Option<ProjectLoadCommand>) {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            self.project_fence.invalidate();
            self.project = None;
            self.is_loading_project = false;
            self.project_error = None;
            return (self, None);
        };

        self.is_loading_project = true;
        self.project_error = None;
        let token = self.project_fence.issue();
        debug!(%token, id, "Project load started");
        let command = ProjectLoadCommand {
            token,
            id: id.to_string(),
        };
        (self, Some(command))
    }

    /// Apply a fetched project, overwriting the form from it.
    pub fn complete_project_load(
        mut self,
        token: RequestToken,
        result: Result<HistoryItem, ApiError>,
    ) -> Self {
        if !self.project_fence.is_current(token) {
            debug!(%token, "Dropping stale project result");
            return self;
        }

        self.is_loading_project = false;
        match result {
            Ok(item) => {
                match item.content_type() {
                    Some(content_type) => self.selected_content_type = content_type,
                    None => warn!(
                        content_type = %item.content_type,
                        "Project has an unknown content type; keeping current selection"
                    ),
                }
                self.input_text = item.input.clone();
                self.input_url = item.input_url.clone();
                self.active_tab = if item.input_url.is_empty() {
                    InputFormat::Text
                } else {
                    InputFormat::Url
                };
                self.project_error = None;
                self.project = Some(LoadedProject::from(item));
            }
            Err(err) => {
                let message = err.user_message();
                self.project_error = Some(if message.is_empty() {
                    PROJECT_LOAD_FAILED.to_string()
                } else {
                    message
                });
            }
        }
        self
    }

    /// Run a whole project load through the history service.
    pub async fn load_project(self, id: Option<&str>, service: &HistoryService) -> Self {
        let (state, command) = self.begin_project_load(id);
        let Some(command) = command else {
            return state;
        };
        let result = service
            .get_project_details(&command.id)
            .await
            .map(|r| r.data);
        state.complete_project_load(command.token, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationOutput;

    fn response(status: GenerationStatus, result: Option<&str>) -> GenerationResponse {
        GenerationResponse {
            id: "g1".to_string(),
            content_type: ContentType::KeyPoints,
            status,
            result: result.map(str::to_string),
            result_url: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = WorkflowState::new();
        assert_eq!(state.selected_content_type, ContentType::KeyPoints);
        assert_eq!(state.active_tab, InputFormat::Text);
        assert!(!state.is_generating);
        assert!(state.error.is_none());
        assert!(state.project.is_none());
    }

    #[test]
    fn test_actions() {
        let state = WorkflowState::new()
            .apply(WorkflowAction::SetContentType(ContentType::FlashCards))
            .apply(WorkflowAction::SetInputText("hello".to_string()))
            .apply(WorkflowAction::SetInputUrl("https://a".to_string()))
            .apply(WorkflowAction::SetActiveTab(InputFormat::Url))
            .apply(WorkflowAction::SetError("oops".to_string()));

        assert_eq!(state.selected_content_type, ContentType::FlashCards);
        assert_eq!(state.input_text, "hello");
        assert_eq!(state.active_input(), "https://a");
        assert_eq!(state.error.as_deref(), Some("oops"));

        let state = state.apply(WorkflowAction::ClearError);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_reset_form_keeps_type_and_project() {
        let (state, command) = WorkflowState::new()
            .set_content_type(ContentType::ConceptMap)
            .set_input_text("x")
            .begin_generate();
        let state = state
            .complete_generate(
                command.unwrap().token,
                Ok(response(GenerationStatus::Completed, Some("done"))),
            )
            .set_active_tab(InputFormat::Url)
            .set_input_url("https://a")
            .set_error("err")
            .apply(WorkflowAction::ResetForm);

        assert_eq!(state.input_text, "");
        assert_eq!(state.input_url, "");
        assert_eq!(state.active_tab, InputFormat::Text);
        assert!(state.error.is_none());
        assert_eq!(state.selected_content_type, ContentType::ConceptMap);
        assert!(state.project.is_some());
    }

    #[test]
    fn test_blank_inputs_are_rejected() {
        let (state, command) = WorkflowState::new().set_input_text("   ").begin_generate();
        assert!(command.is_none());
        assert_eq!(state.error.as_deref(), Some(ENTER_TEXT));
        assert!(!state.is_generating);

        let (state, command) = WorkflowState::new()
            .set_active_tab(InputFormat::Url)
            .set_input_text("has text")
            .begin_generate();
        assert!(command.is_none());
        assert_eq!(state.error.as_deref(), Some(ENTER_URL));
    }

    #[test]
    fn test_file_tab_is_rejected() {
        let (state, command) = WorkflowState::new()
            .set_active_tab(InputFormat::File)
            .set_input_text("text")
            .begin_generate();
        assert!(command.is_none());
        assert_eq!(state.error.as_deref(), Some(FILE_UPLOAD_NOT_IMPLEMENTED));
    }

    #[test]
    fn test_begin_generate_builds_request() {
        let (state, command) = WorkflowState::new()
            .set_content_type(ContentType::SmartSummary)
            .set_active_tab(InputFormat::Url)
            .set_input_url("  https://example.com ")
            .set_error("old")
            .begin_generate();

        let command = command.unwrap();
        assert!(state.is_generating);
        assert!(state.error.is_none());
        assert_eq!(
            command.request,
            GenerationRequest::url(ContentType::SmartSummary, "https://example.com")
        );
    }

    #[test]
    fn test_completed_sets_project() {
        let (state, command) = WorkflowState::new().set_input_text("x").begin_generate();
        let state = state.complete_generate(
            command.unwrap().token,
            Ok(response(GenerationStatus::Completed, Some("ABC"))),
        );

        assert!(!state.is_generating);
        assert!(state.error.is_none());
        let project = state.project.unwrap();
        assert_eq!(project.output, Some(GenerationOutput::Text("ABC".to_string())));
        assert_eq!(state.last_status, Some(GenerationStatus::Completed));
    }

    #[test]
    fn test_processing_is_recorded_without_error() {
        let (state, command) = WorkflowState::new().set_input_text("x").begin_generate();
        let state = state.complete_generate(
            command.unwrap().token,
            Ok(response(GenerationStatus::Processing, None)),
        );

        assert!(!state.is_generating);
        assert!(state.error.is_none());
        assert!(state.project.is_none());
        assert_eq!(state.last_status, Some(GenerationStatus::Processing));
    }

    #[test]
    fn test_failed_status_sets_error() {
        let (state, command) = WorkflowState::new().set_input_text("x").begin_generate();
        let state = state.complete_generate(
            command.unwrap().token,
            Ok(response(GenerationStatus::Failed, None)),
        );
        assert!(!state.is_generating);
        assert_eq!(state.error.as_deref(), Some(GENERATION_FAILED));
    }

    #[test]
    fn test_error_result_sets_message() {
        let (state, command) = WorkflowState::new().set_input_text("x").begin_generate();
        let state = state.complete_generate(command.unwrap().token, Err(ApiError::http(500, "boom")));
        assert!(!state.is_generating);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let (state, first) = WorkflowState::new().set_input_text("one").begin_generate();
        let (state, second) = state.set_input_text("two").begin_generate();

        let state = state.complete_generate(
            first.unwrap().token,
            Ok(response(GenerationStatus::Completed, Some("stale"))),
        );
        assert!(state.is_generating);
        assert!(state.project.is_none());

        let state = state.complete_generate(
            second.unwrap().token,
            Ok(response(GenerationStatus::Completed, Some("fresh"))),
        );
        assert_eq!(state.project.unwrap().result_text(), Some("fresh"));
    }

    #[test]
    fn test_project_load_rehydrates_form() {
        let (state, command) = WorkflowState::new()
            .set_input_text("draft")
            .begin_project_load(Some("p1"));
        assert!(state.is_loading_project);
        let command = command.unwrap();
        assert_eq!(command.id, "p1");

        let item = HistoryItem {
            id: "p1".to_string(),
            content_type: "concept-map".to_string(),
            input: String::new(),
            input_url: "https://example.com".to_string(),
            result: "map".to_string(),
            ..Default::default()
        };
        let state = state.complete_project_load(command.token, Ok(item));

        assert!(!state.is_loading_project);
        assert_eq!(state.selected_content_type, ContentType::ConceptMap);
        assert_eq!(state.active_tab, InputFormat::Url);
        assert_eq!(state.input_url, "https://example.com");
        assert_eq!(state.input_text, "");
        assert_eq!(state.project.unwrap().result_text(), Some("map"));
    }

    #[test]
    fn test_project_load_unknown_type_keeps_selection() {
        let (state, command) = WorkflowState::new()
            .set_content_type(ContentType::FlashCards)
            .begin_project_load(Some("p1"));
        let item = HistoryItem {
            id: "p1".to_string(),
            content_type: "summary".to_string(),
            input: "text".to_string(),
            ..Default::default()
        };
        let state = state.complete_project_load(command.unwrap().token, Ok(item));
        assert_eq!(state.selected_content_type, ContentType::FlashCards);
        assert_eq!(state.active_tab, InputFormat::Text);
        assert_eq!(state.input_text, "text");
    }

    #[test]
    fn test_project_load_error() {
        let (state, command) = WorkflowState::new().begin_project_load(Some("p1"));
        let token = command.unwrap().token;
        let state = state.clone().complete_project_load(token, Err(ApiError::http(404, "")));
        assert_eq!(state.project_error.as_deref(), Some(PROJECT_LOAD_FAILED));
        assert!(!state.is_loading_project);

        let (state, command) = state.begin_project_load(Some("p2"));
        let state = state.complete_project_load(
            command.unwrap().token,
            Err(ApiError::http(404, "Project not found")),
        );
        assert_eq!(state.project_error.as_deref(), Some("Project not found"));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_close_resets_and_fences() {
        let (state, command) = WorkflowState::new()
            .set_content_type(ContentType::FlashCards)
            .set_input_text("x")
            .begin_generate();
        let state = state.close();
        assert_eq!(state.selected_content_type, ContentType::KeyPoints);
        assert!(!state.is_generating);
        assert_eq!(state.input_text, "");

        let state = state.complete_generate(
            command.unwrap().token,
            Ok(response(GenerationStatus::Completed, Some("late"))),
        );
        assert!(state.project.is_none());
    }

    #[test]
    fn test_open_without_id_clears_project_and_fences() {
        let (state, command) = WorkflowState::new().begin_project_load(Some("p1"));
        let (state, none) = state.begin_project_load(None);
        assert!(none.is_none());
        assert!(!state.is_loading_project);

        let item = HistoryItem {
            id: "p1".to_string(),
            ..Default::default()
        };
        let state = state.complete_project_load(command.unwrap().token, Ok(item));
        assert!(state.project.is_none());
    }
}
