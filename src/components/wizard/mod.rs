// ABOUTME: SOS²A assessment wizard module
// Questionnaire -> matrix -> preliminary report -> comprehensive report placeholder

pub mod component;
pub mod matrix;
pub mod questionnaire;
pub mod report;
pub mod state;

pub use component::WizardComponent;
pub use matrix::{MatrixView, MaturityLevel};
pub use questionnaire::{QuestionField, QuestionnaireView};
pub use report::PreliminaryReport;
pub use state::{AssessmentWizard, StepContext, StepTransitions, WizardStep};

/// Local state of the step views that keep any
#[derive(Debug, Clone, Default)]
pub struct StepViews {
    pub questionnaire: QuestionnaireView,
    pub matrix: MatrixView,
}
