// ABOUTME: Behavioral tests for the JSON file store
// Verifies rows survive reopening, validation gates writes, and id prefixes resolve

use crate::fixtures::{complete_answers, early_access_request, TestStore};
use pretty_assertions::assert_eq;
use sos2a::components::wizard::AssessmentWizard;
use sos2a::models::SubmissionStatus;
use sos2a::storage::{AssessmentStore, JsonFileStore, StorageError};

fn answered_wizard() -> AssessmentWizard {
    let mut wizard = AssessmentWizard::new();
    for patch in complete_answers() {
        wizard.patch(patch);
    }
    wizard
}

#[test]
fn test_rows_survive_reopening_the_store() {
    let fixture = TestStore::new();
    let stored = fixture
        .store
        .insert_assessment(answered_wizard().to_insert_assessment())
        .unwrap();

    let reopened = JsonFileStore::new(fixture.data_dir());
    let rows = reopened.list_assessments().unwrap();

    assert_eq!(rows, vec![stored]);
}

#[test]
fn test_table_file_is_a_camel_case_json_array() {
    let fixture = TestStore::new();
    fixture
        .store
        .insert_assessment(answered_wizard().to_insert_assessment())
        .unwrap();

    let raw = std::fs::read_to_string(fixture.data_dir().join("assessments.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let row = &value.as_array().unwrap()[0];

    assert_eq!(row["businessName"], "Acme Retail");
    assert_eq!(row["contactInfo"]["name"], "Ada");
    assert_eq!(row["reportType"], "preliminary");
    assert!(row["id"].is_string());
    assert!(row["createdAt"].is_string());
}

#[test]
fn test_validation_failure_leaves_no_file() {
    let fixture = TestStore::new();
    let wizard = AssessmentWizard::new();

    let err = fixture
        .store
        .insert_assessment(wizard.to_insert_assessment())
        .unwrap_err();

    match err {
        StorageError::Validation(errors) => {
            assert!(errors.has_field("businessName"));
            assert!(errors.has_field("contactInfo.email"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(!fixture.data_dir().join("assessments.json").exists());
}

#[test]
fn test_lookup_by_id_prefix() {
    let fixture = TestStore::new();
    let stored = fixture
        .store
        .insert_assessment(answered_wizard().to_insert_assessment())
        .unwrap();

    let found = fixture.store.get_assessment(&stored.short_id()).unwrap();
    assert_eq!(found.id, stored.id);

    let upper = stored.short_id().to_uppercase();
    assert_eq!(fixture.store.get_assessment(&upper).unwrap().id, stored.id);

    assert!(matches!(
        fixture.store.get_assessment("zzzz"),
        Err(StorageError::NotFound(_))
    ));
}

#[test]
fn test_early_access_rows_start_pending() {
    let fixture = TestStore::new();
    fixture.store.insert_early_access(early_access_request("Navy")).unwrap();
    fixture.store.insert_early_access(early_access_request("Army")).unwrap();

    let rows = fixture.store.list_early_access().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.status == SubmissionStatus::Pending));
    assert_eq!(rows[1].data.company, "Army");
}

#[test]
fn test_early_access_validation() {
    let fixture = TestStore::new();
    let mut request = early_access_request("Navy");
    request.email = "grace".to_string();
    request.interested_in.clear();

    let err = fixture.store.insert_early_access(request).unwrap_err();
    let StorageError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors.has_field("email"));
    assert!(errors.has_field("interestedIn"));
}
