// ABOUTME: CLI list and show commands - browse stored assessments
//
// list: one row per assessment (or early-access request with --early-access)
// show: full detail for one assessment found by id or id prefix

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::util::{open_store, truncate};
use super::{ListArgs, OutputFormat, ShowArgs};
use crate::components::wizard::PreliminaryReport;
use crate::config::AppConfig;
use crate::models::{Assessment, EarlyAccessSubmission, ReportType, Sos2aFormData, SubmissionStatus};
use crate::storage::AssessmentStore;

/// An assessment as displayed in the list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub id: String,
    pub business_name: String,
    pub industry: String,
    pub report_type: ReportType,
    pub created_at: DateTime<Utc>,
}

impl AssessmentSummary {
    #[must_use]
    pub fn from_row(row: &Assessment) -> Self {
        Self {
            id: row.id.to_string(),
            business_name: row.data.business_name.clone(),
            industry: row.data.industry.clone(),
            report_type: row.data.report_type,
            created_at: row.created_at,
        }
    }
}

/// An early-access request as displayed in the list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyAccessSummary {
    pub id: String,
    pub full_name: String,
    pub company: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

impl EarlyAccessSummary {
    #[must_use]
    pub fn from_row(row: &EarlyAccessSubmission) -> Self {
        Self {
            id: row.id.to_string(),
            full_name: row.data.full_name.clone(),
            company: row.data.company.clone(),
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Execute the list command
#[allow(clippy::unused_async)] // Async for consistency with other CLI commands
pub async fn execute(args: ListArgs, format: OutputFormat, config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;

    if args.early_access {
        let rows = list_early_access(&store)?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            OutputFormat::Text => output_early_access_text(&rows),
        }
    } else {
        let rows = list_assessments(&store)?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            OutputFormat::Text => output_assessments_text(&rows),
        }
    }

    Ok(())
}

/// Stored assessments, newest first
pub fn list_assessments(store: &dyn AssessmentStore) -> Result<Vec<AssessmentSummary>> {
    let mut rows: Vec<AssessmentSummary> = store
        .list_assessments()
        .context("Failed to load assessments")?
        .iter()
        .map(AssessmentSummary::from_row)
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(rows)
}

/// Stored early-access requests, newest first
pub fn list_early_access(store: &dyn AssessmentStore) -> Result<Vec<EarlyAccessSummary>> {
    let mut rows: Vec<EarlyAccessSummary> = store
        .list_early_access()
        .context("Failed to load early-access requests")?
        .iter()
        .map(EarlyAccessSummary::from_row)
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(rows)
}

fn output_assessments_text(rows: &[AssessmentSummary]) {
    if rows.is_empty() {
        println!("No assessments found. Run 'sos2a' to start one.");
        return;
    }

    println!("{:<10} {:<30} {:<22} {:<12} CREATED", "ID", "BUSINESS", "INDUSTRY", "REPORT");
    println!("{}", "-".repeat(100));

    for row in rows {
        println!(
            "{:<10} {:<30} {:<22} {:<12} {}",
            &row.id[..8],
            truncate(&row.business_name, 30),
            truncate(&row.industry, 22),
            row.report_type.as_str(),
            row.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}

fn output_early_access_text(rows: &[EarlyAccessSummary]) {
    if rows.is_empty() {
        println!("No early-access requests found.");
        return;
    }

    println!("{:<10} {:<25} {:<25} {:<10} CREATED", "ID", "NAME", "COMPANY", "STATUS");
    println!("{}", "-".repeat(90));

    for row in rows {
        println!(
            "{:<10} {:<25} {:<25} {:<10} {}",
            &row.id[..8],
            truncate(&row.full_name, 25),
            truncate(&row.company, 25),
            row.status.as_str(),
            row.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}

/// Execute the show command
#[allow(clippy::unused_async)]
pub async fn show(args: ShowArgs, format: OutputFormat, config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    let row = store
        .get_assessment(&args.id)
        .with_context(|| format!("Could not find assessment '{}'", args.id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&row)?),
        OutputFormat::Text => {
            println!("Assessment {}", row.id);
            println!("Created:    {}", row.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
            println!();
            let form = Sos2aFormData::from(&row.data);
            print!("{}", PreliminaryReport::from_form(&form).to_text());
        }
    }

    Ok(())
}
