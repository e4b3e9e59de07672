// ABOUTME: Matrix step view (step 2) - security domains rated by maturity level
// The ratings are stored in the form as an opaque JSON object keyed by domain

use super::state::AssessmentWizard;
use crate::models::{FormPatch, Sos2aFormData};
use serde::{Deserialize, Serialize};

pub const SECURITY_DOMAINS: &[&str] = &[
    "Access Control",
    "Data Protection",
    "Network Security",
    "Endpoint Security",
    "Incident Response",
    "Compliance & Governance",
    "Security Awareness",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityLevel {
    #[default]
    None,
    Basic,
    Managed,
    Optimized,
}

impl MaturityLevel {
    pub fn all() -> &'static [MaturityLevel] {
        &[Self::None, Self::Basic, Self::Managed, Self::Optimized]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Basic => "Basic",
            Self::Managed => "Managed",
            Self::Optimized => "Optimized",
        }
    }

    fn index(self) -> usize {
        Self::all().iter().position(|l| *l == self).unwrap_or(0)
    }

    /// Neighbouring level, clamped at both ends
    pub fn step_by(self, delta: isize) -> Self {
        let last = Self::all().len() - 1;
        let idx = self.index().saturating_add_signed(delta).min(last);
        Self::all()[idx]
    }
}

/// Ratings per domain, in `SECURITY_DOMAINS` order. Unknown or missing
/// entries read as `None`.
pub fn ratings(form: &Sos2aFormData) -> Vec<(&'static str, MaturityLevel)> {
    let object = form.matrix_data.as_ref().and_then(|v| v.as_object());
    SECURITY_DOMAINS
        .iter()
        .map(|domain| {
            let level = object
                .and_then(|o| o.get(*domain))
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default();
            (*domain, level)
        })
        .collect()
}

fn ratings_to_value(ratings: &[(&'static str, MaturityLevel)]) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = ratings
        .iter()
        .map(|(domain, level)| {
            (
                (*domain).to_string(),
                serde_json::Value::String(level.label().to_lowercase()),
            )
        })
        .collect();
    serde_json::Value::Object(map)
}

/// Local state of the matrix view
#[derive(Debug, Clone, Default)]
pub struct MatrixView {
    pub selected_row: usize,
}

impl MatrixView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_row + 1 < SECURITY_DOMAINS.len() {
            self.selected_row += 1;
        }
    }

    /// Raise or lower the selected domain's level and patch the whole matrix
    pub fn adjust_level(&mut self, wizard: &mut AssessmentWizard, delta: isize) {
        let mut current = ratings(wizard.form_data());
        if let Some(entry) = current.get_mut(self.selected_row) {
            entry.1 = entry.1.step_by(delta);
        }
        wizard.patch(FormPatch::matrix_data(Some(ratings_to_value(&current))));
    }
}
