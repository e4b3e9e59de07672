// ABOUTME: Shared test fixtures and utilities for behavioral tests
//
// Provides:
// - TestStore: JsonFileStore in a temporary directory
// - complete_answers(): a patch that passes every validation rule

use sos2a::models::{ContactInfo, FormPatch, InsertEarlyAccessSubmission};
use sos2a::storage::JsonFileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A file store rooted in a temporary directory that lives as long as the fixture
pub struct TestStore {
    pub dir: TempDir,
    pub store: Arc<JsonFileStore>,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(JsonFileStore::new(dir.path().join("data")));
        Self { dir, store }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }
}

/// Answers that satisfy both the questionnaire and the assessment schema
pub fn complete_answers() -> Vec<FormPatch> {
    vec![
        FormPatch::business_name("Acme Retail"),
        FormPatch::industry("Retail"),
        FormPatch::employee_count("11-50"),
        FormPatch::security_measures(vec!["Firewall".to_string(), "Antivirus".to_string()]),
        FormPatch::contact_info(ContactInfo::new("Ada", "ada@acme.io", "555-0100")),
    ]
}

pub fn early_access_request(company: &str) -> InsertEarlyAccessSubmission {
    InsertEarlyAccessSubmission {
        full_name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        company: company.to_string(),
        phone: "555-0199".to_string(),
        company_size: "51-200".to_string(),
        industry: "Government".to_string(),
        interested_in: vec!["SOS2A".to_string()],
        investment_level: None,
        additional_info: None,
    }
}
