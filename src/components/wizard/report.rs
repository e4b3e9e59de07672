// ABOUTME: Read-only report content for steps 3 and 4
// The preliminary report restates the answers; the comprehensive report is static copy

use super::matrix::{self, MaturityLevel};
use crate::models::{ReportType, Sos2aFormData};
use serde::Serialize;
use std::fmt::Write as _;

/// Shown on step 4. The comprehensive report needs six months of monitoring
/// that happens outside this tool, so there is nothing to compute here.
pub const COMPREHENSIVE_NOTICE: &[&str] = &[
    "The comprehensive report is a quantitative analysis built after",
    "six months of continuous monitoring of your environment.",
    "",
    "It adds a RASBITA score (Risk Assessment Score by Impact and",
    "Threat Analysis) and a cost/benefit view of recommended controls.",
    "",
    "Monitoring is arranged with our team once your preliminary",
    "assessment has been submitted. No action is needed in this tool.",
];

const NOT_PROVIDED: &str = "(not provided)";

/// Snapshot of the answers arranged for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreliminaryReport {
    pub business_name: String,
    pub industry: String,
    pub employee_count: String,
    pub contact: String,
    pub security_measures: Vec<String>,
    pub primary_concerns: Vec<String>,
    pub matrix: Vec<(String, MaturityLevel)>,
    /// Domains rated `None` in the matrix
    pub uncovered_domains: Vec<String>,
    pub report_type: ReportType,
}

fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}

impl PreliminaryReport {
    pub fn from_form(form: &Sos2aFormData) -> Self {
        let contact = &form.contact_info;
        let contact = [contact.name.as_str(), contact.email.as_str(), contact.phone.as_str()]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" · ");

        let matrix: Vec<(String, MaturityLevel)> = if form.matrix_data.is_some() {
            matrix::ratings(form)
                .into_iter()
                .map(|(domain, level)| (domain.to_string(), level))
                .collect()
        } else {
            Vec::new()
        };
        let uncovered_domains = matrix
            .iter()
            .filter(|(_, level)| *level == MaturityLevel::None)
            .map(|(domain, _)| domain.clone())
            .collect();

        Self {
            business_name: or_placeholder(&form.business_name),
            industry: or_placeholder(&form.industry),
            employee_count: or_placeholder(&form.employee_count),
            contact: or_placeholder(&contact),
            security_measures: form.security_measures.clone(),
            primary_concerns: form.primary_concerns.clone(),
            matrix,
            uncovered_domains,
            report_type: form.report_type,
        }
    }

    /// Plain-text rendering used by the CLI
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "SOS²A {} report", self.report_type);
        let _ = writeln!(out, "==========================");
        let _ = writeln!(out, "Business:   {}", self.business_name);
        let _ = writeln!(out, "Industry:   {}", self.industry);
        let _ = writeln!(out, "Employees:  {}", self.employee_count);
        let _ = writeln!(out, "Contact:    {}", self.contact);
        let _ = writeln!(out);

        let _ = writeln!(out, "Security measures in place:");
        write_list(&mut out, &self.security_measures);
        let _ = writeln!(out, "Primary concerns:");
        write_list(&mut out, &self.primary_concerns);

        if !self.matrix.is_empty() {
            let _ = writeln!(out, "Control maturity:");
            for (domain, level) in &self.matrix {
                let _ = writeln!(out, "  {:<26} {}", domain, level.label());
            }
        }
        if !self.uncovered_domains.is_empty() {
            let _ = writeln!(out, "Controls not yet in place:");
            write_list(&mut out, &self.uncovered_domains);
        }
        out
    }
}

fn write_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        let _ = writeln!(out, "  {NOT_PROVIDED}");
    }
    for item in items {
        let _ = writeln!(out, "  • {item}");
    }
}
