// ABOUTME: CLI argument parsing and command routing for sos2a
//
// Provides command-line interface for:
// - Running an assessment from a JSON answers file (assess)
// - Browsing stored assessments (list, show)
// - Requesting early access (early-access)
// - Launching TUI (tui, default)

pub mod assess;
pub mod early_access;
pub mod list;
pub mod util;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// SOS²A security assessment - questionnaire, matrix and preliminary report
#[derive(Parser)]
#[command(name = "sos2a")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI wizard (default if no command given)
    Tui,

    /// Build a preliminary report from a JSON answers file
    Assess(AssessArgs),

    /// List stored assessments
    List(ListArgs),

    /// Show one stored assessment
    Show(ShowArgs),

    /// Request early access
    EarlyAccess(EarlyAccessArgs),
}

/// Arguments for the assess command
#[derive(clap::Args)]
pub struct AssessArgs {
    /// JSON file with questionnaire answers (camelCase keys, unknown keys rejected)
    #[arg(long)]
    pub answers: PathBuf,

    /// Validate and store the assessment after printing the report
    #[arg(long)]
    pub submit: bool,
}

/// Arguments for the list command
#[derive(clap::Args)]
pub struct ListArgs {
    /// List early-access requests instead of assessments
    #[arg(long)]
    pub early_access: bool,
}

/// Arguments for the show command
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Assessment ID (full or unambiguous prefix)
    pub id: String,
}

/// Arguments for the early-access command
#[derive(clap::Args, Debug)]
pub struct EarlyAccessArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub company: String,

    #[arg(long)]
    pub phone: String,

    /// Company size (e.g. 11-50)
    #[arg(long)]
    pub company_size: String,

    #[arg(long)]
    pub industry: String,

    /// Products of interest (comma separated or repeated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub interested_in: Vec<String>,

    #[arg(long)]
    pub investment_level: Option<String>,

    #[arg(long)]
    pub additional_info: Option<String>,
}
