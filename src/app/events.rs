// ABOUTME: Event handling system for keyboard input and wizard actions
// Keys are mapped per step; only transitions the active step exposes are produced

use crate::app::AppState;
use crate::components::wizard::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Step transitions
    NextStep,
    PreviousStep,
    // Questionnaire events
    NextField,
    PreviousField,
    InputChar(char),
    Backspace,
    CursorLeft,
    CursorRight,
    OptionUp,
    OptionDown,
    ToggleOption,
    // Matrix events
    MatrixUp,
    MatrixDown,
    MatrixRaise,
    MatrixLower,
    // Preliminary report
    Submit,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1) => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Esc => return Some(AppEvent::Quit),
            KeyCode::F(1) => return Some(AppEvent::ToggleHelp),
            _ => {}
        }

        let event = match state.wizard.step() {
            WizardStep::Questionnaire => Self::handle_questionnaire_keys(key_event, state),
            WizardStep::Matrix => Self::handle_matrix_keys(key_event),
            WizardStep::Preliminary => Self::handle_report_keys(key_event),
            WizardStep::Comprehensive => Self::handle_comprehensive_keys(key_event),
        };

        // Never hand a step a transition it does not have
        let transitions = state.wizard.context().transitions;
        match event {
            Some(AppEvent::NextStep) if !transitions.advance => None,
            Some(AppEvent::PreviousStep) if !transitions.retreat => None,
            other => other,
        }
    }

    fn handle_questionnaire_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Tab => return Some(AppEvent::NextField),
            KeyCode::BackTab => return Some(AppEvent::PreviousField),
            KeyCode::Enter => return Some(AppEvent::NextStep),
            _ => {}
        }

        if state.views.questionnaire.is_editing_text() {
            match key_event.code {
                KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
                KeyCode::Backspace => Some(AppEvent::Backspace),
                KeyCode::Left => Some(AppEvent::CursorLeft),
                KeyCode::Right => Some(AppEvent::CursorRight),
                KeyCode::Down => Some(AppEvent::NextField),
                KeyCode::Up => Some(AppEvent::PreviousField),
                _ => None,
            }
        } else {
            match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::OptionUp),
                KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::OptionDown),
                KeyCode::Char(' ') | KeyCode::Char('x') => Some(AppEvent::ToggleOption),
                KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
                _ => None,
            }
        }
    }

    fn handle_matrix_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::MatrixUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::MatrixDown),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(' ') => Some(AppEvent::MatrixRaise),
            KeyCode::Char('-') => Some(AppEvent::MatrixLower),
            KeyCode::Enter | KeyCode::Right => Some(AppEvent::NextStep),
            KeyCode::Left | KeyCode::Backspace => Some(AppEvent::PreviousStep),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_report_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter | KeyCode::Right => Some(AppEvent::NextStep),
            KeyCode::Left | KeyCode::Backspace => Some(AppEvent::PreviousStep),
            KeyCode::Char('s') => Some(AppEvent::Submit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_comprehensive_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Left | KeyCode::Backspace => Some(AppEvent::PreviousStep),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing event {:?} on step {}", event, state.wizard.current_step());

        match event {
            AppEvent::Quit => return state.quit(),
            AppEvent::ToggleHelp => return state.toggle_help(),
            AppEvent::Submit => return state.request_submit(),
            _ => {}
        }

        let AppState { wizard, views, .. } = state;
        match event {
            AppEvent::NextStep => {
                if !wizard.context().transitions.advance {
                    return;
                }
                // The questionnaire owns its validation and decides whether to advance
                if wizard.step() == WizardStep::Questionnaire {
                    views.questionnaire.try_advance(wizard);
                } else {
                    wizard.advance();
                }
            }
            AppEvent::PreviousStep => {
                if wizard.context().transitions.retreat {
                    wizard.retreat();
                }
            }
            AppEvent::NextField => views.questionnaire.next_field(wizard.form_data()),
            AppEvent::PreviousField => views.questionnaire.previous_field(wizard.form_data()),
            AppEvent::InputChar(c) => views.questionnaire.input_char(wizard, c),
            AppEvent::Backspace => views.questionnaire.backspace(wizard),
            AppEvent::CursorLeft => views.questionnaire.cursor_left(),
            AppEvent::CursorRight => views.questionnaire.cursor_right(wizard.form_data()),
            AppEvent::OptionUp => views.questionnaire.option_up(),
            AppEvent::OptionDown => views.questionnaire.option_down(),
            AppEvent::ToggleOption => views.questionnaire.toggle_option(wizard),
            AppEvent::MatrixUp => views.matrix.move_up(),
            AppEvent::MatrixDown => views.matrix.move_down(),
            AppEvent::MatrixRaise => views.matrix.adjust_level(wizard, 1),
            AppEvent::MatrixLower => views.matrix.adjust_level(wizard, -1),
            AppEvent::Quit | AppEvent::ToggleHelp | AppEvent::Submit => {}
        }
    }
}
