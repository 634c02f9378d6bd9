//! Question screen implementation
//!
//! Shows the current flashcard with progress, the True/False buttons,
//! answer feedback and, once revealed, the next button.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::controller::{ButtonTone, QuestionView, QuizController};
use crate::app::screens::{help_bar, tone_color, ACCENT};

/// Answer button currently highlighted by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerChoice {
    #[default]
    True,
    False,
}

impl AnswerChoice {
    pub fn value(&self) -> bool {
        matches!(self, Self::True)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
        }
    }

    fn other(&self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
        }
    }
}

/// Question screen component
#[derive(Debug, Default)]
pub struct QuestionScreen {
    selected: AnswerChoice,
}

impl QuestionScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> AnswerChoice {
        self.selected
    }

    /// Move the highlight to the other answer button
    pub fn toggle_selection(&mut self) {
        self.selected = self.selected.other();
    }

    /// Put the highlight back on "True" for a fresh question
    pub fn reset_selection(&mut self) {
        self.selected = AnswerChoice::True;
    }

    /// Render the question screen
    pub fn render(&self, f: &mut Frame, controller: &QuizController) {
        let size = f.size();
        let Some(card) = controller.current_card() else {
            return;
        };
        let view = controller.question_view();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress and category
                Constraint::Min(5),    // Question text
                Constraint::Length(3), // Answer buttons
                Constraint::Length(1), // Feedback
                Constraint::Length(3), // Next button
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_header(f, chunks[0], &controller.session().progress_text(), card.category);

        let question = Paragraph::new(card.question)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            );
        f.render_widget(question, chunks[1]);

        self.render_buttons(f, chunks[2], view);

        if let Some(feedback) = view.feedback {
            let line = Paragraph::new(feedback.text())
                .style(Style::default().fg(tone_color(feedback.tone())).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            f.render_widget(line, chunks[3]);
        }

        if view.next_visible {
            self.render_next_button(f, chunks[4]);
        }

        let help = if view.answers_enabled {
            help_bar(&[("←→", "Choose"), ("Enter", "Answer"), ("T/F", "True/False"), ("Q", "Quit")])
        } else if view.next_visible {
            help_bar(&[("Enter/N", "Next"), ("Q", "Quit")])
        } else {
            help_bar(&[("Q", "Quit")])
        };
        f.render_widget(help, chunks[5]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect, progress: &str, category: &str) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let category = Paragraph::new(category.to_string())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title("Category"));
        f.render_widget(category, halves[0]);

        let progress = Paragraph::new(progress.to_string())
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL).title("Progress"));
        f.render_widget(progress, halves[1]);
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect, view: &QuestionView) {
        let buttons_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(40), // Fixed width for buttons
                Constraint::Min(0),
            ])
            .split(area)[1];

        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(buttons_area);

        for (choice, tone, chunk) in [
            (AnswerChoice::True, view.true_tone, button_chunks[0]),
            (AnswerChoice::False, view.false_tone, button_chunks[1]),
        ] {
            let highlighted = view.answers_enabled && self.selected == choice;
            f.render_widget(answer_button(choice, tone, view.answers_enabled, highlighted), chunk);
        }
    }

    fn render_next_button(&self, f: &mut Frame, area: Rect) {
        let button_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(20),
                Constraint::Min(0),
            ])
            .split(area)[1];

        let button = Paragraph::new("Next →")
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

fn answer_button(
    choice: AnswerChoice,
    tone: ButtonTone,
    enabled: bool,
    highlighted: bool,
) -> Paragraph<'static> {
    let mut style = Style::default()
        .fg(Color::Black)
        .bg(tone_color(tone))
        .add_modifier(Modifier::BOLD);
    if !enabled {
        style = style.add_modifier(Modifier::DIM);
    }

    let border = if highlighted {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(choice.label())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border))
}
