// ABOUTME: Behavioral tests for submitting from the TUI and the CLI
// Drives App::process_async_action against real and mocked stores

use crate::fixtures::{complete_answers, TestStore};
use mockall::mock;
use sos2a::app::{App, AppEvent, EventHandler, StatusKind};
use sos2a::cli::assess;
use sos2a::models::{
    Assessment, EarlyAccessSubmission, FormPatch, InsertAssessment, InsertEarlyAccessSubmission,
};
use sos2a::storage::{AssessmentStore, StorageError};
use std::sync::Arc;

mock! {
    pub Store {}

    impl AssessmentStore for Store {
        fn insert_assessment(&self, insert: InsertAssessment) -> Result<Assessment, StorageError>;
        fn list_assessments(&self) -> Result<Vec<Assessment>, StorageError>;
        fn get_assessment(&self, id_or_prefix: &str) -> Result<Assessment, StorageError>;
        fn insert_early_access(
            &self,
            insert: InsertEarlyAccessSubmission,
        ) -> Result<EarlyAccessSubmission, StorageError>;
        fn list_early_access(&self) -> Result<Vec<EarlyAccessSubmission>, StorageError>;
    }
}

fn app_on_report(store: Arc<dyn AssessmentStore>) -> App {
    let mut app = App::new(store);
    for patch in complete_answers() {
        app.state.wizard.patch(patch);
    }
    app.state.wizard.advance();
    app.state.wizard.advance();
    app
}

#[tokio::test]
async fn test_submit_from_report_step_stores_the_answers() {
    let fixture = TestStore::new();
    let mut app = app_on_report(fixture.store.clone());

    EventHandler::process_event(AppEvent::Submit, &mut app.state);
    app.process_async_action().await;

    let rows = fixture.store.list_assessments().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].data.business_name, "Acme Retail");
    assert_eq!(app.state.submitted_id, Some(rows[0].id));

    let status = app.state.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Success);
    assert!(status.text.contains(&rows[0].short_id()));
    assert!(app.state.pending_async_action.is_none());
}

#[tokio::test]
async fn test_second_submit_is_not_stored_twice() {
    let fixture = TestStore::new();
    let mut app = app_on_report(fixture.store.clone());

    EventHandler::process_event(AppEvent::Submit, &mut app.state);
    app.process_async_action().await;
    EventHandler::process_event(AppEvent::Submit, &mut app.state);
    app.process_async_action().await;

    assert_eq!(fixture.store.list_assessments().unwrap().len(), 1);
    assert!(app.state.status.unwrap().text.starts_with("Already submitted"));
}

#[tokio::test]
async fn test_edited_answers_can_be_submitted_again() {
    let fixture = TestStore::new();
    let mut app = app_on_report(fixture.store.clone());

    EventHandler::process_event(AppEvent::Submit, &mut app.state);
    app.process_async_action().await;
    let first_id = app.state.submitted_id.unwrap();

    EventHandler::process_event(AppEvent::PreviousStep, &mut app.state);
    EventHandler::process_event(AppEvent::PreviousStep, &mut app.state);
    app.state.wizard.patch(FormPatch::business_name("Globex"));
    EventHandler::process_event(AppEvent::NextStep, &mut app.state);
    EventHandler::process_event(AppEvent::NextStep, &mut app.state);
    assert_eq!(app.state.wizard.current_step(), 3);

    EventHandler::process_event(AppEvent::Submit, &mut app.state);
    assert!(app.state.pending_async_action.is_some());
    app.process_async_action().await;

    let rows = fixture.store.list_assessments().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].data.business_name, "Globex");
    assert_ne!(app.state.submitted_id, Some(first_id));
    assert_eq!(app.state.submitted_id, Some(rows[1].id));
    assert_eq!(app.state.status.clone().unwrap().kind, StatusKind::Success);

    // the edited answers are now the stored ones
    EventHandler::process_event(AppEvent::Submit, &mut app.state);
    assert!(app.state.pending_async_action.is_none());
    assert!(app.state.status.unwrap().text.starts_with("Already submitted"));
}

#[tokio::test]
async fn test_store_failure_is_reported_on_the_status_line() {
    let mut store = MockStore::new();
    store.expect_insert_assessment().times(1).returning(|_| {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only data directory",
        )))
    });

    let mut app = app_on_report(Arc::new(store));
    EventHandler::process_event(AppEvent::Submit, &mut app.state);
    app.process_async_action().await;

    let status = app.state.status.clone().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("read-only data directory"));
    assert!(app.state.submitted_id.is_none());
    // the wizard stays where it was
    assert_eq!(app.state.wizard.current_step(), 3);
}

#[tokio::test]
async fn test_validation_failure_names_the_fields() {
    let mut store = MockStore::new();
    store.expect_insert_assessment().times(1).returning(|insert| {
        insert.validate()?;
        unreachable!("incomplete answers must not validate")
    });

    let mut app = App::new(Arc::new(store));
    app.state.wizard.advance();
    app.state.wizard.advance();
    EventHandler::process_event(AppEvent::Submit, &mut app.state);
    app.process_async_action().await;

    let status = app.state.status.unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.starts_with("Cannot submit"));
    assert!(status.text.contains("businessName"));
}

#[tokio::test]
async fn test_no_action_means_no_store_calls() {
    let store = MockStore::new();
    let mut app = App::new(Arc::new(store));
    app.process_async_action().await;
    assert!(app.state.status.is_none());
}

#[tokio::test]
async fn test_cli_assess_round_trip() {
    let fixture = TestStore::new();
    let answers = fixture.dir.path().join("answers.json");
    std::fs::write(
        &answers,
        r#"{
            "businessName": "Globex",
            "industry": "Manufacturing",
            "employeeCount": "201-500",
            "primaryConcerns": ["Ransomware"],
            "contactInfo": {"name": "Hank", "email": "hank@globex.com", "phone": "555-0111"}
        }"#,
    )
    .unwrap();

    let patch = assess::load_answers(&answers).unwrap();
    let wizard = assess::run_wizard(patch);
    let row = assess::submit(fixture.store.clone(), &wizard).await.unwrap();

    let stored = fixture.store.get_assessment(&row.id.to_string()).unwrap();
    assert_eq!(stored.data.business_name, "Globex");
    assert_eq!(stored.data.primary_concerns, vec!["Ransomware".to_string()]);
}
