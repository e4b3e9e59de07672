// ABOUTME: Main assessment wizard component
// Renders the progress header, the active step view, and the navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::matrix::{self, MaturityLevel};
use super::questionnaire::{FieldKind, QuestionField};
use super::report::{PreliminaryReport, COMPREHENSIVE_NOTICE};
use super::state::{AssessmentWizard, StepContext, WizardStep};
use super::StepViews;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);
const WARNING_YELLOW: Color = Color::Rgb(220, 180, 80);

/// The main assessment wizard component
#[derive(Debug, Default)]
pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, wizard: &AssessmentWizard, views: &StepViews) {
        frame.render_widget(Clear, area);

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(10),   // Step content
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        let ctx = wizard.context();
        self.render_header(frame, layout[0], &ctx);
        self.render_step_content(frame, layout[1], &ctx, views);
        self.render_navigation(frame, layout[2], &ctx, views);
    }

    /// Render the header with step progress
    fn render_header(&self, frame: &mut Frame, area: Rect, ctx: &StepContext<'_>) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🛡 ", Style::default()),
            Span::styled(
                "SOS²A Security Assessment",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", ctx.step.description()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], ctx.step);
    }

    /// Render step progress dots
    fn render_progress(&self, frame: &mut Frame, area: Rect, current: WizardStep) {
        let steps = WizardStep::all();
        let current_idx = current.number() - 1;

        let mut spans = vec![Span::styled("  ", Style::default())];

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    fn step_block(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {title} "))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    /// Render the main step content
    fn render_step_content(&self, frame: &mut Frame, area: Rect, ctx: &StepContext<'_>, views: &StepViews) {
        match ctx.step {
            WizardStep::Questionnaire => self.render_questionnaire(frame, area, ctx, views),
            WizardStep::Matrix => self.render_matrix(frame, area, ctx, views),
            WizardStep::Preliminary => self.render_preliminary(frame, area, ctx),
            WizardStep::Comprehensive => self.render_comprehensive(frame, area),
        }
    }

    fn render_questionnaire(&self, frame: &mut Frame, area: Rect, ctx: &StepContext<'_>, views: &StepViews) {
        let block = Self::step_block(ctx.step.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let view = &views.questionnaire;
        let focused = view.focused_field();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        // Left column: every field with its current value
        let mut lines = Vec::new();
        for field in QuestionField::all() {
            let is_focused = *field == focused;
            let marker = if is_focused { "▶ " } else { "  " };
            let value = match field.kind() {
                FieldKind::MultiChoice(_) => {
                    let selected = if *field == QuestionField::SecurityMeasures {
                        &ctx.form.security_measures
                    } else {
                        &ctx.form.primary_concerns
                    };
                    format!("{} selected", selected.len())
                }
                _ => {
                    let text = field.text_value(ctx.form);
                    if is_focused && field.is_text() {
                        let mut chars: Vec<char> = text.chars().collect();
                        let pos = view.cursor_position.min(chars.len());
                        chars.insert(pos, '│');
                        chars.into_iter().collect()
                    } else {
                        text.to_string()
                    }
                }
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(GOLD)),
                Span::styled(
                    format!("{:<18}", field.label()),
                    if is_focused {
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(MUTED_GRAY)
                    },
                ),
                Span::styled(value, Style::default().fg(SOFT_WHITE)),
            ]));
        }

        if let Some(error) = &view.error_message {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("⚠ {error}"),
                Style::default().fg(ERROR_RED),
            )));
        }
        frame.render_widget(Paragraph::new(lines), columns[0]);

        // Right column: options for the focused choice field, or a hint
        let option_lines: Vec<Line> = match focused.kind() {
            FieldKind::SingleChoice(options) | FieldKind::MultiChoice(options) => options
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    let selected = focused.is_selected(ctx.form, option);
                    let check = match (focused.kind(), selected) {
                        (FieldKind::SingleChoice(_), true) => "(●) ",
                        (FieldKind::SingleChoice(_), false) => "( ) ",
                        (_, true) => "[x] ",
                        (_, false) => "[ ] ",
                    };
                    let style = if idx == view.option_cursor {
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                    } else if selected {
                        Style::default().fg(SELECTION_GREEN)
                    } else {
                        Style::default().fg(SOFT_WHITE)
                    };
                    Line::from(Span::styled(format!("{check}{option}"), style))
                })
                .collect(),
            FieldKind::Text => vec![
                Line::from(Span::styled("Type to edit this field", Style::default().fg(MUTED_GRAY))),
                Line::from(Span::styled("Tab / Shift+Tab to move between fields", Style::default().fg(MUTED_GRAY))),
            ],
        };
        frame.render_widget(Paragraph::new(option_lines), columns[1]);
    }

    fn render_matrix(&self, frame: &mut Frame, area: Rect, ctx: &StepContext<'_>, views: &StepViews) {
        let block = Self::step_block(ctx.step.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut header = vec![Span::styled(format!("  {:<26}", "Domain"), Style::default().fg(MUTED_GRAY))];
        for level in MaturityLevel::all() {
            header.push(Span::styled(format!("{:<11}", level.label()), Style::default().fg(MUTED_GRAY)));
        }
        let mut lines = vec![Line::from(header), Line::from("")];

        for (row, (domain, rating)) in matrix::ratings(ctx.form).into_iter().enumerate() {
            let is_selected = row == views.matrix.selected_row;
            let mut spans = vec![Span::styled(
                format!("{}{:<26}", if is_selected { "▶ " } else { "  " }, domain),
                if is_selected {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                },
            )];
            for level in MaturityLevel::all() {
                let (cell, style) = if *level == rating {
                    ("◉", Style::default().fg(SELECTION_GREEN))
                } else {
                    ("○", Style::default().fg(SUBDUED_BORDER))
                };
                spans.push(Span::styled(format!("{cell:<11}"), style));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓ select domain   +/- or Space change level",
            Style::default().fg(MUTED_GRAY),
        )));

        let body = Paragraph::new(lines).block(Block::default().padding(ratatui::widgets::Padding::uniform(1)));
        frame.render_widget(body, inner);
    }

    fn render_preliminary(&self, frame: &mut Frame, area: Rect, ctx: &StepContext<'_>) {
        let block = Self::step_block(ctx.step.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let report = PreliminaryReport::from_form(ctx.form);
        let label = |text: &str| Span::styled(format!("{text:<12}"), Style::default().fg(MUTED_GRAY));
        let value = |text: &str| Span::styled(text.to_string(), Style::default().fg(SOFT_WHITE));

        let mut lines = vec![
            Line::from(vec![label("Business"), value(&report.business_name)]),
            Line::from(vec![label("Industry"), value(&report.industry)]),
            Line::from(vec![label("Employees"), value(&report.employee_count)]),
            Line::from(vec![label("Contact"), value(&report.contact)]),
            Line::from(""),
        ];

        let section = |title: &str, items: &[String], lines: &mut Vec<Line<'static>>| {
            lines.push(Line::from(Span::styled(
                title.to_string(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )));
            if items.is_empty() {
                lines.push(Line::from(Span::styled("  (none listed)", Style::default().fg(MUTED_GRAY))));
            }
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled("  • ", Style::default().fg(GOLD)),
                    Span::styled(item.clone(), Style::default().fg(SOFT_WHITE)),
                ]));
            }
        };
        section("Security measures in place", &report.security_measures, &mut lines);
        section("Primary concerns", &report.primary_concerns, &mut lines);
        if !report.uncovered_domains.is_empty() {
            section("Controls not yet in place", &report.uncovered_domains, &mut lines);
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Report type: ", Style::default().fg(MUTED_GRAY)),
            Span::styled(report.report_type.to_string(), Style::default().fg(WARNING_YELLOW)),
        ]));

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(ratatui::widgets::Padding::horizontal(2)));
        frame.render_widget(body, inner);
    }

    fn render_comprehensive(&self, frame: &mut Frame, area: Rect) {
        let block = Self::step_block(WizardStep::Comprehensive.title());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Coming after monitoring",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(
            COMPREHENSIVE_NOTICE
                .iter()
                .map(|line| Line::from(Span::styled(*line, Style::default().fg(SOFT_WHITE)))),
        );

        let body = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(body, inner);
    }

    /// Render navigation footer; only the keys the step routes are offered
    fn render_navigation(&self, frame: &mut Frame, area: Rect, ctx: &StepContext<'_>, views: &StepViews) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled("  ", Style::default())];
        let hint = |key: &str, action: &str, spans: &mut Vec<Span<'static>>| {
            if spans.len() > 1 {
                spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
            }
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(key.to_string(), Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(format!(" {action}"), Style::default().fg(MUTED_GRAY)));
        };

        if ctx.transitions.retreat {
            hint("←", "Back", &mut spans);
        }
        if ctx.transitions.advance {
            hint("Enter", "Next", &mut spans);
        }
        if ctx.step == WizardStep::Preliminary {
            hint("s", "Submit", &mut spans);
        }
        // A focused text field takes '?' as input
        if ctx.step == WizardStep::Questionnaire && views.questionnaire.is_editing_text() {
            hint("F1", "Help", &mut spans);
        } else {
            hint("?", "Help", &mut spans);
        }
        if ctx.step == WizardStep::Questionnaire {
            hint("Esc", "Quit", &mut spans);
        } else {
            hint("q/Esc", "Quit", &mut spans);
        }

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}
