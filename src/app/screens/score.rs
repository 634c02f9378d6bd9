//! Score screen implementation
//!
//! Displays the final score, the feedback tier, and the Review/Restart
//! buttons.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::controller::{QuizController, ScoreSummary};
use crate::app::screens::{help_bar, ACCENT};
use crate::quiz::FeedbackTier;

/// Available actions on the score screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    Review,
    Restart,
}

impl ScoreAction {
    /// Get all available actions
    pub fn all() -> [Self; 2] {
        [Self::Review, Self::Restart]
    }

    /// Get display text for the action
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Review => "Review Answers",
            Self::Restart => "Restart Quiz",
        }
    }
}

/// Score screen component
#[derive(Debug)]
pub struct ScoreScreen {
    selected_action: ScoreAction,
}

impl ScoreScreen {
    pub fn new() -> Self {
        Self {
            selected_action: ScoreAction::Review,
        }
    }

    pub fn selected_action(&self) -> ScoreAction {
        self.selected_action
    }

    /// Select next action
    pub fn select_next_action(&mut self) {
        let actions = ScoreAction::all();
        let current_index = actions.iter().position(|a| *a == self.selected_action).unwrap_or(0);
        self.selected_action = actions[(current_index + 1) % actions.len()];
    }

    /// Select previous action
    pub fn select_previous_action(&mut self) {
        let actions = ScoreAction::all();
        let current_index = actions.iter().position(|a| *a == self.selected_action).unwrap_or(0);
        let prev_index = if current_index == 0 { actions.len() - 1 } else { current_index - 1 };
        self.selected_action = actions[prev_index];
    }

    /// Render the score screen
    pub fn render(&self, f: &mut Frame, controller: &QuizController) {
        let size = f.size();
        let summary = controller.score_summary();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(7),    // Score and feedback
                Constraint::Length(3), // Percentage gauge
                Constraint::Length(3), // Actions
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let title = Paragraph::new("Quiz Complete")
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            );
        f.render_widget(title, chunks[0]);

        self.render_summary(f, chunks[1], &summary);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Correct"))
            .gauge_style(Style::default().fg(tier_color(summary.tier)))
            .percent(summary.percentage.min(100) as u16);
        f.render_widget(gauge, chunks[2]);

        self.render_actions(f, chunks[3]);

        f.render_widget(
            help_bar(&[("←→", "Navigate"), ("Enter", "Select"), ("V", "Review"), ("R", "Restart"), ("Q", "Quit")]),
            chunks[4],
        );
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, summary: &ScoreSummary) {
        let text = vec![
            Line::from(""),
            Line::styled(
                summary.score_text(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                summary.tier.headline(),
                Style::default().fg(tier_color(summary.tier)).add_modifier(Modifier::BOLD),
            ),
            Line::from(summary.tier.message()),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Your Score"));
        f.render_widget(paragraph, area);
    }

    fn render_actions(&self, f: &mut Frame, area: Rect) {
        let actions_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(40), // Fixed width for actions
                Constraint::Min(0),
            ])
            .split(area)[1];

        let action_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(actions_area);

        for (action, chunk) in ScoreAction::all().into_iter().zip(action_chunks.iter()) {
            let selected = action == self.selected_action;
            let style = if selected {
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let border = if selected {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(Color::White)
            };

            let button = Paragraph::new(action.display_text())
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border));
            f.render_widget(button, *chunk);
        }
    }
}

impl Default for ScoreScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn tier_color(tier: FeedbackTier) -> Color {
    match tier {
        FeedbackTier::Outstanding => Color::Green,
        FeedbackTier::Excellent => Color::LightGreen,
        FeedbackTier::GoodWork => Color::Yellow,
        FeedbackTier::KeepPracticing => Color::Magenta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::render_to_text;
    use crate::models::default_deck;

    fn finished(correct: usize) -> QuizController {
        let mut controller = QuizController::new(default_deck());
        controller.start();
        for i in 0..10 {
            let truth = controller.current_card().unwrap().answer;
            let ticket = controller.check_answer(if i < correct { truth } else { !truth }).unwrap();
            controller.reveal_next(ticket);
            controller.next_question();
        }
        controller
    }

    #[test]
    fn test_action_navigation() {
        let mut screen = ScoreScreen::new();
        assert_eq!(screen.selected_action(), ScoreAction::Review);

        screen.select_next_action();
        assert_eq!(screen.selected_action(), ScoreAction::Restart);

        screen.select_next_action();
        assert_eq!(screen.selected_action(), ScoreAction::Review); // Wraps around

        screen.select_previous_action();
        assert_eq!(screen.selected_action(), ScoreAction::Restart);
    }

    #[test]
    fn test_action_text() {
        assert_eq!(ScoreAction::Review.display_text(), "Review Answers");
        assert_eq!(ScoreAction::Restart.display_text(), "Restart Quiz");
    }

    #[test]
    fn test_render_perfect_score() {
        let controller = finished(10);
        let screen = ScoreScreen::new();
        let text = render_to_text(80, 24, |f| screen.render(f, &controller));

        assert!(text.contains("10/10"));
        assert!(text.contains("Outstanding!"));
        assert!(text.contains("You're a quiz master!"));
        assert!(text.contains("Review Answers"));
        assert!(text.contains("Restart Quiz"));
    }

    #[test]
    fn test_render_zero_score() {
        let controller = finished(0);
        let screen = ScoreScreen::new();
        let text = render_to_text(80, 24, |f| screen.render(f, &controller));

        assert!(text.contains("0/10"));
        assert!(text.contains("Keep Practicing!"));
        assert!(text.contains("You'll get better!"));
    }
}
