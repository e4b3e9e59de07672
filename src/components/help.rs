// ABOUTME: Help overlay component displaying the wizard's keyboard shortcuts

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| {
            ListItem::new(title).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        };

        let help_items = vec![
            section("Navigation:"),
            ListItem::new("  Enter/→    Next step"),
            ListItem::new("  ←/Bksp     Previous step (steps 2-4)"),
            ListItem::new(""),
            section("Questionnaire:"),
            ListItem::new("  Tab        Next field"),
            ListItem::new("  Shift+Tab  Previous field"),
            ListItem::new("  ↑/↓        Move between options"),
            ListItem::new("  Space      Select / toggle option"),
            ListItem::new(""),
            section("Security Matrix:"),
            ListItem::new("  j/↓  k/↑   Move between domains"),
            ListItem::new("  +/Space    Raise maturity level"),
            ListItem::new("  -          Lower maturity level"),
            ListItem::new(""),
            section("Preliminary Report:"),
            ListItem::new("  s          Submit assessment"),
            ListItem::new(""),
            section("General:"),
            ListItem::new("  ?/F1       Toggle this help (F1 while typing)"),
            ListItem::new("  q          Quit application (steps 2-4)"),
            ListItem::new("  Esc        Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
