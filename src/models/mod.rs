// ABOUTME: Core data models for SOS²A assessments: wizard form data, patches, and persisted rows

pub mod form;
pub mod schema;
pub mod validation;

pub use form::{ContactInfo, FormPatch, ReportType, Sos2aFormData};
pub use schema::{
    Assessment, EarlyAccessSubmission, InsertAssessment, InsertEarlyAccessSubmission,
    InsertRasbitaReport, InsertUser, RasbitaReport, SubmissionStatus, User,
};
pub use validation::{is_valid_email, FieldError, ValidationErrors};
