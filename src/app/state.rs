// ABOUTME: Application state for the TUI - one wizard instance plus shell concerns
// (help overlay, status line, queued storage work)

use crate::components::wizard::{AssessmentWizard, StepViews, WizardStep};
use crate::config::AppConfig;
use crate::models::InsertAssessment;
use crate::storage::{AssessmentStore, StorageError};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Work that touches the store and runs between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncAction {
    SubmitAssessment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line message shown under the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub wizard: AssessmentWizard,
    pub views: StepViews,
    pub help_visible: bool,
    pub should_quit: bool,
    pub status: Option<StatusMessage>,
    pub pending_async_action: Option<AsyncAction>,
    /// Id of the assessment last stored from this session, if any
    pub submitted_id: Option<Uuid>,
    /// Answers as they were when `submitted_id` was stored
    pub submitted_answers: Option<InsertAssessment>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            help_visible: config.ui.show_help_on_start,
            ..Self::default()
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Queue submission of the current answers. Only the preliminary step offers it.
    pub fn request_submit(&mut self) {
        if self.wizard.step() != WizardStep::Preliminary {
            return;
        }
        // Unchanged answers are not stored twice; edited answers are a new submission
        if let Some(id) = self.submitted_id {
            if self.submitted_answers.as_ref() == Some(&self.wizard.to_insert_assessment()) {
                self.status = Some(StatusMessage::info(format!(
                    "Already submitted as {}",
                    &id.to_string()[..8]
                )));
                return;
            }
        }
        self.status = Some(StatusMessage::info("Submitting assessment..."));
        self.pending_async_action = Some(AsyncAction::SubmitAssessment);
    }
}

pub struct App {
    pub state: AppState,
    store: Arc<dyn AssessmentStore>,
}

impl App {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self {
            state: AppState::new(),
            store,
        }
    }

    pub fn with_config(store: Arc<dyn AssessmentStore>, config: &AppConfig) -> Self {
        Self {
            state: AppState::with_config(config),
            store,
        }
    }

    /// Run the queued action, if any, and report the outcome on the status line
    pub async fn process_async_action(&mut self) {
        let Some(action) = self.state.pending_async_action.take() else {
            return;
        };

        match action {
            AsyncAction::SubmitAssessment => {
                let insert = self.state.wizard.to_insert_assessment();
                let snapshot = insert.clone();
                let store = Arc::clone(&self.store);
                let result = tokio::task::spawn_blocking(move || store.insert_assessment(insert)).await;

                self.state.status = Some(match result {
                    Ok(Ok(row)) => {
                        info!("Assessment {} submitted", row.id);
                        self.state.submitted_id = Some(row.id);
                        self.state.submitted_answers = Some(snapshot);
                        StatusMessage::success(format!(
                            "Assessment saved as {} - press Enter to continue",
                            row.short_id()
                        ))
                    }
                    Ok(Err(StorageError::Validation(errors))) => {
                        warn!("Assessment rejected: {}", errors);
                        StatusMessage::error(format!("Cannot submit: {errors}"))
                    }
                    Ok(Err(e)) => {
                        error!("Failed to store assessment: {}", e);
                        StatusMessage::error(format!("Failed to save assessment: {e}"))
                    }
                    Err(e) => {
                        error!("Submission task failed: {}", e);
                        StatusMessage::error("Failed to save assessment")
                    }
                });
            }
        }
    }
}
