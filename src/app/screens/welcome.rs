//! Welcome screen implementation
//!
//! Title, a short description of the round, and the start button.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::controller::QuizController;
use crate::app::screens::{help_bar, ACCENT};

/// Welcome screen component
#[derive(Debug, Default)]
pub struct WelcomeScreen;

impl WelcomeScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the welcome screen
    pub fn render(&self, f: &mut Frame, controller: &QuizController) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Min(6),    // Description
                Constraint::Length(3), // Start button
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_description(f, chunks[1], controller);
        self.render_start_button(f, chunks[2]);
        f.render_widget(help_bar(&[("Enter", "Start"), ("Q", "Quit")]), chunks[3]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(2), // Subtitle
            ])
            .split(area);

        let title = Paragraph::new("QuizWiz")
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("True or False Flashcards")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_description(&self, f: &mut Frame, area: Rect, controller: &QuizController) {
        let count = controller.session().len();
        let text = vec![
            Line::from(""),
            Line::from(format!("{} questions. Decide if each statement is true or false.", count)),
            Line::from(""),
            Line::from("Your score and the correct answers are shown at the end."),
        ];

        let description = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("How to play"));
        f.render_widget(description, area);
    }

    fn render_start_button(&self, f: &mut Frame, area: Rect) {
        let button_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(20),
                Constraint::Min(0),
            ])
            .split(area)[1];

        let button = Paragraph::new("Start Quiz")
            .style(Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            );
        f.render_widget(button, button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::render_to_text;
    use crate::models::default_deck;

    #[test]
    fn test_render_welcome() {
        let controller = QuizController::new(default_deck());
        let screen = WelcomeScreen::new();
        let text = render_to_text(80, 24, |f| screen.render(f, &controller));

        assert!(text.contains("QuizWiz"));
        assert!(text.contains("10 questions"));
        assert!(text.contains("Start Quiz"));
    }
}
