//! Application state
//!
//! - [`WorkflowState`]: the create workflow (form, generation, loaded project)
//! - [`HistoryState`]: the history list
//! - [`RequestFence`]: drops completions of superseded requests

pub mod history;
pub mod request_token;
pub mod workflow;

pub use history::HistoryState;
pub use request_token::{RequestFence, RequestToken};
pub use workflow::{GenerateCommand, ProjectLoadCommand, WorkflowAction, WorkflowState};
