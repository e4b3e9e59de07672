// ABOUTME: CLI early-access command - validate and store an early-access request

use anyhow::{Context, Result};
use std::sync::Arc;

use super::util::open_store;
use super::{EarlyAccessArgs, OutputFormat};
use crate::config::AppConfig;
use crate::models::InsertEarlyAccessSubmission;
use crate::storage::AssessmentStore;

impl From<EarlyAccessArgs> for InsertEarlyAccessSubmission {
    fn from(args: EarlyAccessArgs) -> Self {
        let trim = |s: String| s.trim().to_string();
        Self {
            full_name: trim(args.name),
            email: trim(args.email),
            company: trim(args.company),
            phone: trim(args.phone),
            company_size: trim(args.company_size),
            industry: trim(args.industry),
            interested_in: args
                .interested_in
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            investment_level: args.investment_level,
            additional_info: args.additional_info,
        }
    }
}

/// Execute the early-access command
pub async fn execute(args: EarlyAccessArgs, format: OutputFormat, config: &AppConfig) -> Result<()> {
    let store: Arc<dyn AssessmentStore> = Arc::new(open_store(config)?);
    let insert = InsertEarlyAccessSubmission::from(args);

    let row = tokio::task::spawn_blocking(move || store.insert_early_access(insert))
        .await
        .context("Early-access task failed")?
        .context("Failed to record early-access request")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&row)?),
        OutputFormat::Text => {
            println!("Thanks {}, your early-access request was recorded.", row.data.full_name);
            println!("Reference: {}", &row.id.to_string()[..8]);
        }
    }

    Ok(())
}
