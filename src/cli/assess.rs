// ABOUTME: CLI assess command - drive the wizard from a JSON answers file
//
// The answers file is a FormPatch: any subset of the questionnaire keys in
// camelCase. Unknown keys are rejected so typos don't silently drop answers.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::util::open_store;
use super::{AssessArgs, OutputFormat};
use crate::components::wizard::{AssessmentWizard, PreliminaryReport, WizardStep};
use crate::config::AppConfig;
use crate::models::{Assessment, FormPatch};
use crate::storage::AssessmentStore;

/// JSON output structure for the assess command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessOutput {
    pub report: PreliminaryReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<Uuid>,
}

/// Execute the assess command
pub async fn execute(args: AssessArgs, format: OutputFormat, config: &AppConfig) -> Result<()> {
    let patch = load_answers(&args.answers)?;
    let wizard = run_wizard(patch);
    let report = PreliminaryReport::from_form(wizard.form_data());

    let assessment_id = if args.submit {
        let store: Arc<dyn AssessmentStore> = Arc::new(open_store(config)?);
        Some(submit(store, &wizard).await?.id)
    } else {
        None
    };

    match format {
        OutputFormat::Json => {
            let output = AssessOutput { report, assessment_id };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            print!("{}", report.to_text());
            if let Some(id) = assessment_id {
                println!();
                println!("Assessment submitted: {id}");
            }
        }
    }

    Ok(())
}

/// Read and parse an answers file
pub fn load_answers(path: &Path) -> Result<FormPatch> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid answers in {}", path.display()))
}

/// Apply the answers to a fresh wizard and walk it to the preliminary report
pub fn run_wizard(patch: FormPatch) -> AssessmentWizard {
    let mut wizard = AssessmentWizard::new();
    wizard.patch(patch);
    while wizard.step() != WizardStep::Preliminary {
        wizard.advance();
    }
    wizard
}

/// Validate and store the wizard's answers
pub async fn submit(store: Arc<dyn AssessmentStore>, wizard: &AssessmentWizard) -> Result<Assessment> {
    let insert = wizard.to_insert_assessment();
    let row = tokio::task::spawn_blocking(move || store.insert_assessment(insert))
        .await
        .context("Submission task failed")?
        .context("Failed to submit assessment")?;
    info!("Assessment {} submitted from CLI", row.id);
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, StorageError};
    use tempfile::TempDir;

    const ANSWERS: &str = r#"{
        "businessName": "Acme",
        "industry": "Retail",
        "employeeCount": "11-50",
        "securityMeasures": ["Firewall"],
        "contactInfo": {"name": "Ada", "email": "ada@acme.io", "phone": "555-0100"}
    }"#;

    #[test]
    fn test_load_answers_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.json");
        fs::write(&path, r#"{"businessName": "Acme", "budget": 10}"#).unwrap();

        let err = load_answers(&path).unwrap_err();
        assert!(format!("{err:#}").contains("budget"));
    }

    #[test]
    fn test_load_answers_missing_file() {
        let err = load_answers(Path::new("/nonexistent/answers.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read answers"));
    }

    #[test]
    fn test_run_wizard_stops_at_preliminary() {
        let patch: FormPatch = serde_json::from_str(ANSWERS).unwrap();
        let wizard = run_wizard(patch);
        assert_eq!(wizard.step(), WizardStep::Preliminary);
        assert_eq!(wizard.form_data().business_name, "Acme");
    }

    #[tokio::test]
    async fn test_submit_stores_row() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path()));
        let patch: FormPatch = serde_json::from_str(ANSWERS).unwrap();
        let wizard = run_wizard(patch);

        let row = submit(store.clone(), &wizard).await.unwrap();
        assert_eq!(store.list_assessments().unwrap()[0].id, row.id);
    }

    #[tokio::test]
    async fn test_submit_rejects_incomplete_answers() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileStore::new(dir.path()));
        let wizard = run_wizard(FormPatch::business_name("Acme"));

        let err = submit(store, &wizard).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::Validation(_))
        ));
    }
}
