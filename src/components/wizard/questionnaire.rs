// ABOUTME: Questionnaire step view (step 1)
// Owns focus and cursor state; every edit is pushed into the wizard as a patch

use super::state::AssessmentWizard;
use crate::models::{ContactInfo, FormPatch, Sos2aFormData, ValidationErrors};

pub const INDUSTRIES: &[&str] = &[
    "Healthcare",
    "Finance",
    "Retail",
    "Manufacturing",
    "Education",
    "Government",
    "Technology",
    "Other",
];

pub const EMPLOYEE_COUNTS: &[&str] = &["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];

pub const SECURITY_MEASURES: &[&str] = &[
    "Firewall",
    "Antivirus / EDR",
    "Multi-factor authentication",
    "Data encryption",
    "Regular backups",
    "Security awareness training",
    "Incident response plan",
    "Vulnerability scanning",
];

pub const PRIMARY_CONCERNS: &[&str] = &[
    "Ransomware",
    "Phishing",
    "Data breach",
    "Insider threats",
    "Regulatory compliance",
    "Cloud security",
    "Third-party risk",
    "Downtime",
];

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    SingleChoice(&'static [&'static str]),
    MultiChoice(&'static [&'static str]),
}

/// Fields of the questionnaire, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    BusinessName,
    Industry,
    EmployeeCount,
    SecurityMeasures,
    PrimaryConcerns,
    ContactName,
    ContactEmail,
    ContactPhone,
}

impl QuestionField {
    pub fn all() -> &'static [QuestionField] {
        &[
            Self::BusinessName,
            Self::Industry,
            Self::EmployeeCount,
            Self::SecurityMeasures,
            Self::PrimaryConcerns,
            Self::ContactName,
            Self::ContactEmail,
            Self::ContactPhone,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BusinessName => "Business name",
            Self::Industry => "Industry",
            Self::EmployeeCount => "Employees",
            Self::SecurityMeasures => "Security measures",
            Self::PrimaryConcerns => "Primary concerns",
            Self::ContactName => "Contact name",
            Self::ContactEmail => "Contact email",
            Self::ContactPhone => "Contact phone",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Industry => FieldKind::SingleChoice(INDUSTRIES),
            Self::EmployeeCount => FieldKind::SingleChoice(EMPLOYEE_COUNTS),
            Self::SecurityMeasures => FieldKind::MultiChoice(SECURITY_MEASURES),
            Self::PrimaryConcerns => FieldKind::MultiChoice(PRIMARY_CONCERNS),
            Self::BusinessName | Self::ContactName | Self::ContactEmail | Self::ContactPhone => {
                FieldKind::Text
            }
        }
    }

    /// Key used for this field in validation errors
    pub fn error_key(&self) -> &'static str {
        match self {
            Self::BusinessName => "businessName",
            Self::Industry => "industry",
            Self::EmployeeCount => "employeeCount",
            Self::SecurityMeasures => "securityMeasures",
            Self::PrimaryConcerns => "primaryConcerns",
            Self::ContactName => "contactInfo.name",
            Self::ContactEmail => "contactInfo.email",
            Self::ContactPhone => "contactInfo.phone",
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind() == FieldKind::Text
    }

    /// Current text value of a text field
    pub fn text_value<'a>(&self, form: &'a Sos2aFormData) -> &'a str {
        match self {
            Self::BusinessName => &form.business_name,
            Self::ContactName => &form.contact_info.name,
            Self::ContactEmail => &form.contact_info.email,
            Self::ContactPhone => &form.contact_info.phone,
            Self::Industry => &form.industry,
            Self::EmployeeCount => &form.employee_count,
            Self::SecurityMeasures | Self::PrimaryConcerns => "",
        }
    }

    /// Whether `option` is currently selected for a choice field
    pub fn is_selected(&self, form: &Sos2aFormData, option: &str) -> bool {
        match self {
            Self::Industry => form.industry == option,
            Self::EmployeeCount => form.employee_count == option,
            Self::SecurityMeasures => form.security_measures.iter().any(|m| m == option),
            Self::PrimaryConcerns => form.primary_concerns.iter().any(|c| c == option),
            _ => false,
        }
    }

    /// Patch replacing this text field's value
    fn text_patch(&self, form: &Sos2aFormData, value: String) -> FormPatch {
        let contact = &form.contact_info;
        match self {
            Self::BusinessName => FormPatch::business_name(value),
            Self::ContactName => {
                FormPatch::contact_info(ContactInfo { name: value, ..contact.clone() })
            }
            Self::ContactEmail => {
                FormPatch::contact_info(ContactInfo { email: value, ..contact.clone() })
            }
            Self::ContactPhone => {
                FormPatch::contact_info(ContactInfo { phone: value, ..contact.clone() })
            }
            Self::Industry => FormPatch::industry(value),
            Self::EmployeeCount => FormPatch::employee_count(value),
            Self::SecurityMeasures | Self::PrimaryConcerns => FormPatch::default(),
        }
    }
}

/// Field-level checks run before the questionnaire lets the wizard advance
pub fn validate_questionnaire(form: &Sos2aFormData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require("businessName", &form.business_name);
    errors.require("industry", &form.industry);
    errors.require("employeeCount", &form.employee_count);
    errors.require("contactInfo.name", &form.contact_info.name);
    errors.require_email("contactInfo.email", &form.contact_info.email);
    errors.into_result()
}

/// Local state of the questionnaire view
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireView {
    /// Index into `QuestionField::all()`
    pub focus: usize,
    /// Highlighted option in the focused choice field
    pub option_cursor: usize,
    /// Character position in the focused text field
    pub cursor_position: usize,
    /// Error message to display
    pub error_message: Option<String>,
}

impl QuestionnaireView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_field(&self) -> QuestionField {
        let fields = QuestionField::all();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn is_editing_text(&self) -> bool {
        self.focused_field().is_text()
    }

    pub fn next_field(&mut self, form: &Sos2aFormData) {
        self.focus = (self.focus + 1) % QuestionField::all().len();
        self.reset_cursors(form);
    }

    pub fn previous_field(&mut self, form: &Sos2aFormData) {
        let len = QuestionField::all().len();
        self.focus = (self.focus + len - 1) % len;
        self.reset_cursors(form);
    }

    pub fn focus_field(&mut self, field: QuestionField, form: &Sos2aFormData) {
        if let Some(idx) = QuestionField::all().iter().position(|f| *f == field) {
            self.focus = idx;
            self.reset_cursors(form);
        }
    }

    fn reset_cursors(&mut self, form: &Sos2aFormData) {
        let field = self.focused_field();
        self.cursor_position = field.text_value(form).chars().count();
        self.option_cursor = match field.kind() {
            FieldKind::SingleChoice(options) => options
                .iter()
                .position(|o| field.is_selected(form, o))
                .unwrap_or(0),
            _ => 0,
        };
    }

    /// Handle text input character
    pub fn input_char(&mut self, wizard: &mut AssessmentWizard, c: char) {
        let field = self.focused_field();
        if !field.is_text() {
            return;
        }
        let mut chars: Vec<char> = field.text_value(wizard.form_data()).chars().collect();
        let pos = self.cursor_position.min(chars.len());
        chars.insert(pos, c);
        self.cursor_position = pos + 1;
        let patch = field.text_patch(wizard.form_data(), chars.into_iter().collect());
        wizard.patch(patch);
        self.error_message = None;
    }

    /// Handle backspace
    pub fn backspace(&mut self, wizard: &mut AssessmentWizard) {
        let field = self.focused_field();
        if !field.is_text() || self.cursor_position == 0 {
            return;
        }
        let mut chars: Vec<char> = field.text_value(wizard.form_data()).chars().collect();
        let pos = self.cursor_position.min(chars.len());
        if pos == 0 {
            return;
        }
        chars.remove(pos - 1);
        self.cursor_position = pos - 1;
        let patch = field.text_patch(wizard.form_data(), chars.into_iter().collect());
        wizard.patch(patch);
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self, form: &Sos2aFormData) {
        let len = self.focused_field().text_value(form).chars().count();
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }

    pub fn option_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    pub fn option_down(&mut self) {
        let count = match self.focused_field().kind() {
            FieldKind::SingleChoice(options) | FieldKind::MultiChoice(options) => options.len(),
            FieldKind::Text => 0,
        };
        if self.option_cursor + 1 < count {
            self.option_cursor += 1;
        }
    }

    /// Select (single choice) or toggle (multi choice) the highlighted option
    pub fn toggle_option(&mut self, wizard: &mut AssessmentWizard) {
        let field = self.focused_field();
        let patch = match field.kind() {
            FieldKind::Text => return,
            FieldKind::SingleChoice(options) => {
                let Some(option) = options.get(self.option_cursor) else {
                    return;
                };
                field.text_patch(wizard.form_data(), (*option).to_string())
            }
            FieldKind::MultiChoice(options) => {
                let Some(option) = options.get(self.option_cursor) else {
                    return;
                };
                let form = wizard.form_data();
                let was_selected = field.is_selected(form, option);
                // keep catalogue order regardless of toggle order
                let selected: Vec<String> = options
                    .iter()
                    .filter(|o| {
                        if **o == *option {
                            !was_selected
                        } else {
                            field.is_selected(form, o)
                        }
                    })
                    .map(|o| (*o).to_string())
                    .collect();
                if field == QuestionField::SecurityMeasures {
                    FormPatch::security_measures(selected)
                } else {
                    FormPatch::primary_concerns(selected)
                }
            }
        };
        wizard.patch(patch);
        self.error_message = None;
    }

    /// Validate and advance. On failure the wizard is untouched and the
    /// first offending field gets focus.
    pub fn try_advance(&mut self, wizard: &mut AssessmentWizard) -> bool {
        match validate_questionnaire(wizard.form_data()) {
            Ok(()) => {
                self.error_message = None;
                wizard.advance();
                true
            }
            Err(errors) => {
                if let Some(first) = errors.errors.first() {
                    self.error_message = Some(first.to_string());
                    if let Some(field) = QuestionField::all()
                        .iter()
                        .find(|f| f.error_key() == first.field)
                    {
                        self.focus_field(*field, wizard.form_data());
                    }
                }
                false
            }
        }
    }
}
