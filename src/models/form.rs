// ABOUTME: Form data accumulated by the assessment wizard and the typed partial used to update it
// Patches merge shallowly: a present key overwrites, an absent key is left alone

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which report the assessment is meant to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Qualitative report built straight from the questionnaire
    #[default]
    Preliminary,
    /// Quantitative report that follows six months of monitoring
    Comprehensive,
}

impl ReportType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preliminary => "preliminary",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact details of the person requesting the assessment.
///
/// Keys missing from incoming JSON default to empty strings, so a patch
/// carrying `{"name": "B"}` yields a contact with no email or phone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Everything the wizard has collected so far
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sos2aFormData {
    pub business_name: String,
    pub industry: String,
    pub employee_count: String,
    pub security_measures: Vec<String>,
    pub primary_concerns: Vec<String>,
    pub contact_info: ContactInfo,
    /// Opaque payload produced by the matrix step
    pub matrix_data: Option<serde_json::Value>,
    pub report_type: ReportType,
}

impl Sos2aFormData {
    /// Shallow-merge a patch into this record.
    ///
    /// Nested values (`contact_info`, `matrix_data`) are replaced as a whole.
    pub fn apply(&mut self, patch: FormPatch) {
        let FormPatch {
            business_name,
            industry,
            employee_count,
            security_measures,
            primary_concerns,
            contact_info,
            matrix_data,
            report_type,
        } = patch;

        if let Some(value) = business_name {
            self.business_name = value;
        }
        if let Some(value) = industry {
            self.industry = value;
        }
        if let Some(value) = employee_count {
            self.employee_count = value;
        }
        if let Some(value) = security_measures {
            self.security_measures = value;
        }
        if let Some(value) = primary_concerns {
            self.primary_concerns = value;
        }
        if let Some(value) = contact_info {
            self.contact_info = value;
        }
        if let Some(value) = matrix_data {
            self.matrix_data = value;
        }
        if let Some(value) = report_type {
            self.report_type = value;
        }
    }
}

/// A partial `Sos2aFormData`. Unknown keys are rejected when parsed from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_measures: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_concerns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    /// `Some(None)` clears the matrix; JSON `null` maps onto it
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub matrix_data: Option<Option<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<ReportType>,
}

/// Distinguish an explicit `null` from a missing key
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl FormPatch {
    pub fn business_name(value: impl Into<String>) -> Self {
        Self {
            business_name: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn industry(value: impl Into<String>) -> Self {
        Self {
            industry: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn employee_count(value: impl Into<String>) -> Self {
        Self {
            employee_count: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn security_measures(value: Vec<String>) -> Self {
        Self {
            security_measures: Some(value),
            ..Self::default()
        }
    }

    pub fn primary_concerns(value: Vec<String>) -> Self {
        Self {
            primary_concerns: Some(value),
            ..Self::default()
        }
    }

    pub fn contact_info(value: ContactInfo) -> Self {
        Self {
            contact_info: Some(value),
            ..Self::default()
        }
    }

    pub fn matrix_data(value: Option<serde_json::Value>) -> Self {
        Self {
            matrix_data: Some(value),
            ..Self::default()
        }
    }

    /// Names of the keys this patch carries, for logging
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.business_name.is_some() {
            keys.push("businessName");
        }
        if self.industry.is_some() {
            keys.push("industry");
        }
        if self.employee_count.is_some() {
            keys.push("employeeCount");
        }
        if self.security_measures.is_some() {
            keys.push("securityMeasures");
        }
        if self.primary_concerns.is_some() {
            keys.push("primaryConcerns");
        }
        if self.contact_info.is_some() {
            keys.push("contactInfo");
        }
        if self.matrix_data.is_some() {
            keys.push("matrixData");
        }
        if self.report_type.is_some() {
            keys.push("reportType");
        }
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}
