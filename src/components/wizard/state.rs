// ABOUTME: State machine for the SOS²A assessment wizard
// Tracks the current step and the form data accumulated across steps

use crate::models::{FormPatch, InsertAssessment, Sos2aFormData};
use tracing::debug;

/// Steps in the assessment wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Questionnaire,
    Matrix,
    Preliminary,
    Comprehensive,
}

/// Which transitions a step's view is handed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTransitions {
    pub advance: bool,
    pub retreat: bool,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::Questionnaire,
            Self::Matrix,
            Self::Preliminary,
            Self::Comprehensive,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::Questionnaire => 1,
            Self::Matrix => 2,
            Self::Preliminary => 3,
            Self::Comprehensive => 4,
        }
    }

    /// Step for a 1-indexed number, clamped into range
    pub fn from_number(number: usize) -> Self {
        match number {
            0 | 1 => Self::Questionnaire,
            2 => Self::Matrix,
            3 => Self::Preliminary,
            _ => Self::Comprehensive,
        }
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        4
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Questionnaire => "Questionnaire",
            Self::Matrix => "Matrix",
            Self::Preliminary => "Preliminary Report",
            Self::Comprehensive => "Comprehensive Report",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::Questionnaire => "Tell us about your organization",
            Self::Matrix => "Rate the maturity of your security controls",
            Self::Preliminary => "Qualitative findings from your answers",
            Self::Comprehensive => "Quantitative analysis after monitoring",
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Questionnaire => Some(Self::Matrix),
            Self::Matrix => Some(Self::Preliminary),
            Self::Preliminary => Some(Self::Comprehensive),
            Self::Comprehensive => None,
        }
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Questionnaire => None,
            Self::Matrix => Some(Self::Questionnaire),
            Self::Preliminary => Some(Self::Matrix),
            Self::Comprehensive => Some(Self::Preliminary),
        }
    }

    /// The first step has no way back and the last one no way forward
    pub fn transitions(&self) -> StepTransitions {
        StepTransitions {
            advance: self.next().is_some(),
            retreat: self.previous().is_some(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

/// What the active step view gets to see and do
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub step: WizardStep,
    pub form: &'a Sos2aFormData,
    pub transitions: StepTransitions,
}

/// The assessment wizard: one step cursor, one form record, one writer
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentWizard {
    current_step: usize,
    form_data: Sos2aFormData,
}

impl AssessmentWizard {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            form_data: Sos2aFormData::default(),
        }
    }

    /// 1-indexed step cursor
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> WizardStep {
        WizardStep::from_number(self.current_step())
    }

    pub fn form_data(&self) -> &Sos2aFormData {
        &self.form_data
    }

    /// Move forward one step, saturating at the last step
    pub fn advance(&mut self) {
        let from = self.current_step();
        self.current_step = (from + 1).min(WizardStep::total());
        debug!("Wizard advance: step {} -> {}", from, self.current_step);
    }

    /// Move back one step, saturating at the first step
    pub fn retreat(&mut self) {
        let from = self.current_step();
        self.current_step = from.saturating_sub(1).max(1);
        debug!("Wizard retreat: step {} -> {}", from, self.current_step);
    }

    /// Shallow-merge `partial` into the form data
    pub fn patch(&mut self, partial: FormPatch) {
        debug!("Wizard patch on step {}: {:?}", self.current_step(), partial.keys());
        self.form_data.apply(partial);
    }

    /// Context handed to the view for the current step
    pub fn context(&self) -> StepContext<'_> {
        let step = self.step();
        StepContext {
            step,
            form: &self.form_data,
            transitions: step.transitions(),
        }
    }

    /// Check if we're on the final step
    pub fn is_final_step(&self) -> bool {
        self.step().is_terminal()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.step().transitions().retreat
    }

    /// Serialize the collected answers into the persistence payload
    pub fn to_insert_assessment(&self) -> InsertAssessment {
        InsertAssessment::from(&self.form_data)
    }
}

impl Default for AssessmentWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactInfo, ReportType};

    #[test]
    fn test_step_navigation() {
        let step = WizardStep::Questionnaire;
        assert_eq!(step.next(), Some(WizardStep::Matrix));
        assert_eq!(step.previous(), None);

        let step = WizardStep::Comprehensive;
        assert_eq!(step.next(), None);
        assert_eq!(step.previous(), Some(WizardStep::Preliminary));
    }

    #[test]
    fn test_step_numbers() {
        for (idx, step) in WizardStep::all().iter().enumerate() {
            assert_eq!(step.number(), idx + 1);
            assert_eq!(WizardStep::from_number(idx + 1), *step);
        }
        assert_eq!(WizardStep::from_number(0), WizardStep::Questionnaire);
        assert_eq!(WizardStep::from_number(9), WizardStep::Comprehensive);
        assert_eq!(WizardStep::total(), 4);
    }

    #[test]
    fn test_transitions_per_step() {
        let first = WizardStep::Questionnaire.transitions();
        assert!(first.advance && !first.retreat);

        let last = WizardStep::Comprehensive.transitions();
        assert!(!last.advance && last.retreat);

        let middle = WizardStep::Matrix.transitions();
        assert!(middle.advance && middle.retreat);
    }

    #[test]
    fn test_state_initialization() {
        let wizard = AssessmentWizard::new();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.form_data().report_type, ReportType::Preliminary);
        assert!(!wizard.can_go_back());
        assert!(!wizard.is_final_step());
    }

    #[test]
    fn test_default_matches_new() {
        let wizard = AssessmentWizard::default();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.step(), WizardStep::Questionnaire);
    }

    #[test]
    fn test_context_reflects_step() {
        let mut wizard = AssessmentWizard::new();
        wizard.patch(FormPatch::business_name("Acme"));
        wizard.advance();
        let ctx = wizard.context();
        assert_eq!(ctx.step, WizardStep::Matrix);
        assert_eq!(ctx.form.business_name, "Acme");
        assert!(ctx.transitions.retreat);
    }

    #[test]
    fn test_insert_payload_uses_form_data() {
        let mut wizard = AssessmentWizard::new();
        wizard.patch(FormPatch::contact_info(ContactInfo::new("A", "a@b.com", "1")));
        let insert = wizard.to_insert_assessment();
        assert_eq!(insert.contact_info.email, "a@b.com");
        assert!(insert.findings.is_none());
    }
}
