// ABOUTME: Main layout component - wizard on top, status line underneath, help as overlay

use ratatui::{
    prelude::*,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::wizard::WizardComponent;
use super::HelpComponent;
use crate::app::{AppState, StatusKind};

const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

pub struct LayoutComponent {
    wizard: WizardComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            wizard: WizardComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.size());

        self.wizard.render(frame, chunks[0], &state.wizard, &state.views);
        self.render_status_line(frame, chunks[1], state);

        if state.help_visible {
            tracing::debug!("Rendering help overlay");
            self.help.render(frame, frame.size());
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match &state.status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => SOFT_WHITE,
                    StatusKind::Success => SELECTION_GREEN,
                    StatusKind::Error => ERROR_RED,
                };
                Line::from(Span::styled(format!(" {}", status.text), Style::default().fg(color)))
            }
            None => Line::from(""),
        };

        frame.render_widget(Paragraph::new(line).style(Style::default().bg(DARK_BG)), area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
