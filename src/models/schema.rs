// ABOUTME: Persistence entities (users, assessments, early-access submissions, RASBITA reports)
// Each row has an Insert* shape that is validated before a store accepts it

use super::form::{ContactInfo, ReportType, Sos2aFormData};
use super::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_USERNAME_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InsertUser {
    pub username: String,
}

impl InsertUser {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("username", &self.username);
        errors.max_len("username", &self.username, MAX_USERNAME_LEN);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_insert(insert: InsertUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: insert.username,
            created_at: Utc::now(),
        }
    }
}

/// Payload written when an assessment is submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAssessment {
    pub business_name: String,
    pub industry: String,
    pub employee_count: String,
    #[serde(default)]
    pub security_measures: Vec<String>,
    #[serde(default)]
    pub primary_concerns: Vec<String>,
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub report_type: ReportType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix_data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<serde_json::Value>,
}

fn trimmed(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.trim().to_string()).collect()
}

/// Free-text answers are stored trimmed; validation also ignores surrounding whitespace
impl From<&Sos2aFormData> for InsertAssessment {
    fn from(data: &Sos2aFormData) -> Self {
        let contact = &data.contact_info;
        Self {
            business_name: data.business_name.trim().to_string(),
            industry: data.industry.trim().to_string(),
            employee_count: data.employee_count.trim().to_string(),
            security_measures: trimmed(&data.security_measures),
            primary_concerns: trimmed(&data.primary_concerns),
            contact_info: ContactInfo::new(contact.name.trim(), contact.email.trim(), contact.phone.trim()),
            report_type: data.report_type,
            matrix_data: data.matrix_data.clone(),
            findings: None,
            recommendations: None,
        }
    }
}

impl From<&InsertAssessment> for Sos2aFormData {
    fn from(insert: &InsertAssessment) -> Self {
        Self {
            business_name: insert.business_name.clone(),
            industry: insert.industry.clone(),
            employee_count: insert.employee_count.clone(),
            security_measures: insert.security_measures.clone(),
            primary_concerns: insert.primary_concerns.clone(),
            contact_info: insert.contact_info.clone(),
            matrix_data: insert.matrix_data.clone(),
            report_type: insert.report_type,
        }
    }
}

impl InsertAssessment {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("businessName", &self.business_name);
        errors.require("industry", &self.industry);
        errors.require("employeeCount", &self.employee_count);
        for (idx, measure) in self.security_measures.iter().enumerate() {
            errors.require(&format!("securityMeasures[{idx}]"), measure);
        }
        for (idx, concern) in self.primary_concerns.iter().enumerate() {
            errors.require(&format!("primaryConcerns[{idx}]"), concern);
        }
        errors.require("contactInfo.name", &self.contact_info.name);
        errors.require_email("contactInfo.email", &self.contact_info.email);
        errors.require("contactInfo.phone", &self.contact_info.phone);
        errors.into_result()
    }
}

/// A stored assessment row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: InsertAssessment,
    pub created_at: DateTime<Utc>,
}

impl Assessment {
    pub fn from_insert(data: InsertAssessment) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            created_at: Utc::now(),
        }
    }

    /// First eight characters of the id, as shown in listings
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}

/// Review status of an early-access request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Contacted,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertEarlyAccessSubmission {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub company_size: String,
    pub industry: String,
    pub interested_in: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl InsertEarlyAccessSubmission {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("fullName", &self.full_name);
        errors.require_email("email", &self.email);
        errors.require("company", &self.company);
        errors.require("phone", &self.phone);
        errors.require("companySize", &self.company_size);
        errors.require("industry", &self.industry);
        errors.require_items("interestedIn", &self.interested_in);
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyAccessSubmission {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: InsertEarlyAccessSubmission,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

impl EarlyAccessSubmission {
    pub fn from_insert(data: InsertEarlyAccessSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

pub const MAX_RISK_SCORE: u8 = 100;

/// RASBITA report as supplied by an external scorer; no scoring happens here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertRasbitaReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub title: String,
    pub business_name: String,
    pub overall_risk_score: u8,
    pub categories: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<serde_json::Value>,
}

impl InsertRasbitaReport {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("title", &self.title);
        errors.require("businessName", &self.business_name);
        if self.overall_risk_score > MAX_RISK_SCORE {
            errors.add("overallRiskScore", format!("must be between 0 and {MAX_RISK_SCORE}"));
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasbitaReport {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: InsertRasbitaReport,
    pub created_at: DateTime<Utc>,
}

impl RasbitaReport {
    pub fn from_insert(data: InsertRasbitaReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn complete_form() -> Sos2aFormData {
        Sos2aFormData {
            business_name: "Acme Co".to_string(),
            industry: "Retail".to_string(),
            employee_count: "11-50".to_string(),
            security_measures: vec!["Firewall".to_string()],
            primary_concerns: vec!["Ransomware".to_string()],
            contact_info: ContactInfo::new("Ada", "ada@acme.io", "555-0100"),
            matrix_data: Some(json!({"Access Control": "basic"})),
            report_type: ReportType::Preliminary,
        }
    }

    #[test]
    fn test_assessment_payload_shape() {
        let insert = InsertAssessment::from(&complete_form());
        let value = serde_json::to_value(&insert).unwrap();
        assert_eq!(
            value,
            json!({
                "businessName": "Acme Co",
                "industry": "Retail",
                "employeeCount": "11-50",
                "securityMeasures": ["Firewall"],
                "primaryConcerns": ["Ransomware"],
                "contactInfo": {"name": "Ada", "email": "ada@acme.io", "phone": "555-0100"},
                "reportType": "preliminary",
                "matrixData": {"Access Control": "basic"}
            })
        );
        assert!(insert.validate().is_ok());
    }

    #[test]
    fn test_assessment_payload_is_trimmed() {
        let mut form = complete_form();
        form.business_name = "  Acme Co ".to_string();
        form.contact_info = ContactInfo::new(" Ada", "  ada@acme.io  ", "555-0100 ");
        form.security_measures = vec![" Firewall ".to_string()];

        let insert = InsertAssessment::from(&form);
        assert_eq!(insert.business_name, "Acme Co");
        assert_eq!(insert.contact_info, ContactInfo::new("Ada", "ada@acme.io", "555-0100"));
        assert_eq!(insert.security_measures, vec!["Firewall".to_string()]);
        assert!(insert.validate().is_ok());
    }

    #[test]
    fn test_empty_form_fails_validation() {
        let insert = InsertAssessment::from(&Sos2aFormData::default());
        let errors = insert.validate().unwrap_err();
        for field in [
            "businessName",
            "industry",
            "employeeCount",
            "contactInfo.name",
            "contactInfo.email",
            "contactInfo.phone",
        ] {
            assert!(errors.has_field(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = complete_form();
        form.contact_info.email = "ada-at-acme".to_string();
        let errors = InsertAssessment::from(&form).validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("contactInfo.email"));
    }

    #[test]
    fn test_blank_list_entry_rejected() {
        let mut form = complete_form();
        form.security_measures.push("  ".to_string());
        let errors = InsertAssessment::from(&form).validate().unwrap_err();
        assert!(errors.has_field("securityMeasures[1]"));
    }

    #[test]
    fn test_stored_assessment_flattens_payload() {
        let row = Assessment::from_insert(InsertAssessment::from(&complete_form()));
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["businessName"], json!("Acme Co"));
        assert!(value.get("id").is_some());
        assert!(value.get("createdAt").is_some());

        let back: Assessment = serde_json::from_value(value).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_early_access_validation() {
        let mut insert = InsertEarlyAccessSubmission {
            full_name: "Grace".to_string(),
            email: "grace@navy.mil".to_string(),
            company: "Navy".to_string(),
            phone: "555".to_string(),
            company_size: "1000+".to_string(),
            industry: "Government".to_string(),
            interested_in: vec!["SOS2A".to_string()],
            investment_level: None,
            additional_info: None,
        };
        assert!(insert.validate().is_ok());

        insert.interested_in.clear();
        insert.email = "grace".to_string();
        let errors = insert.validate().unwrap_err();
        assert!(errors.has_field("interestedIn"));
        assert!(errors.has_field("email"));

        let row = EarlyAccessSubmission::from_insert(insert);
        assert_eq!(row.status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_rasbita_score_range() {
        let mut insert = InsertRasbitaReport {
            user_id: None,
            title: "Q3".to_string(),
            business_name: "Acme".to_string(),
            overall_risk_score: 42,
            categories: json!({}),
            findings: None,
            recommendations: None,
        };
        assert!(insert.validate().is_ok());
        insert.overall_risk_score = 101;
        assert!(insert.validate().unwrap_err().has_field("overallRiskScore"));
        assert_eq!(RasbitaReport::from_insert(insert).data.title, "Q3");
    }

    #[test]
    fn test_user_validation() {
        assert!(InsertUser { username: "ada".to_string() }.validate().is_ok());
        assert!(InsertUser { username: String::new() }.validate().is_err());
        let long = "x".repeat(MAX_USERNAME_LEN + 1);
        assert!(InsertUser { username: long }.validate().is_err());
        assert_eq!(
            User::from_insert(InsertUser { username: "ada".to_string() }).username,
            "ada"
        );
    }
}
