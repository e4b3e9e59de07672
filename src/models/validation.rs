// ABOUTME: Field-level validation shared by the insert schemas and the questionnaire view
// Collects every violated field instead of stopping at the first

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

lazy_static! {
    // local@domain.tld, no whitespace, at least one dot in the domain part
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$").unwrap();
}

/// Whether `value` is a syntactically valid email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors found while validating one payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("{}", format_errors(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn format_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// First message recorded for `field`
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Require a non-blank string
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "is required");
        }
    }

    /// Require a syntactically valid email
    pub fn require_email(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "is required");
        } else if !is_valid_email(value) {
            self.add(field, "must be a valid email address");
        }
    }

    /// Require a non-empty list
    pub fn require_items<T>(&mut self, field: &str, value: &[T]) {
        if value.is_empty() {
            self.add(field, "must contain at least one entry");
        }
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("must be at most {max} characters"));
        }
    }

    /// `Ok(())` when nothing was recorded, `Err(self)` otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(is_valid_email("  padded@example.com  "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("no-tld@example"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("space in@example.com"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut errors = ValidationErrors::new();
        errors.require("businessName", "  ");
        errors.require_email("contactInfo.email", "nope");
        errors.require_items::<String>("interestedIn", &[]);

        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.message_for("contactInfo.email"),
            Some("must be a valid email address")
        );
        let rendered = errors.to_string();
        assert!(rendered.contains("businessName: is required"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_is_ok() {
        let mut errors = ValidationErrors::new();
        errors.require("industry", "Retail");
        errors.max_len("industry", "Retail", 10);
        assert!(errors.into_result().is_ok());
    }
}
