//! Review screen implementation
//!
//! Scrollable list of every flashcard with its correct answer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::controller::QuizController;
use crate::app::screens::{help_bar, ACCENT};
use crate::quiz::review::{ReviewEntry, REVIEW_HEADING};

/// Review screen component
#[derive(Debug, Default)]
pub struct ReviewScreen {
    scroll: u16,
}

impl ReviewScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Render the review screen
    pub fn render(&mut self, f: &mut Frame, controller: &QuizController) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Entries
                Constraint::Length(3), // Help text
            ])
            .split(size);

        let title = Paragraph::new(REVIEW_HEADING)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT)),
            );
        f.render_widget(title, chunks[0]);

        let lines: Vec<Line> = controller
            .review()
            .iter()
            .flat_map(entry_lines)
            .collect();

        let body = Paragraph::new(lines).wrap(Wrap { trim: false });

        // Clamp on wrapped rows so the last entry can always be scrolled into view
        let inner_width = chunks[1].width.saturating_sub(2);
        let inner_height = chunks[1].height.saturating_sub(2);
        let rows = u16::try_from(body.line_count(inner_width)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(rows.saturating_sub(inner_height));

        let list = body
            .scroll((self.scroll, 0))
            .block(Block::default().borders(Borders::ALL).title("Correct Answers"));
        f.render_widget(list, chunks[1]);

        f.render_widget(help_bar(&[("↑↓", "Scroll"), ("Esc", "Back"), ("Q", "Quit")]), chunks[2]);
    }
}

fn entry_lines(entry: &ReviewEntry) -> Vec<Line<'static>> {
    let answer_color = if entry.answer { Color::Green } else { Color::Red };
    vec![
        Line::from(vec![
            Span::raw(format!("{} ", entry.marker())),
            Span::styled(
                entry.category,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Q: {}", entry.question)),
        Line::styled(entry.answer_line(), Style::default().fg(answer_color)),
        Line::from(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Screen;
    use crate::models::default_deck;
    use crate::app::screens::render_to_text;

    fn reviewing() -> QuizController {
        let mut controller = QuizController::new(default_deck());
        controller.start();
        while let Some(index) = controller.screen().question_index() {
            assert!(index < 10);
            // Always answer "True" regardless of the card
            let ticket = controller.check_answer(true).unwrap();
            controller.reveal_next(ticket);
            controller.next_question();
        }
        controller.show_review_screen();
        assert_eq!(controller.screen(), Screen::Review);
        controller
    }

    #[test]
    fn test_scrolling() {
        let mut screen = ReviewScreen::new();
        screen.scroll_up();
        assert_eq!(screen.scroll(), 0);
        screen.scroll_down();
        screen.scroll_down();
        assert_eq!(screen.scroll(), 2);
        screen.scroll_up();
        assert_eq!(screen.scroll(), 1);
        screen.reset_scroll();
        assert_eq!(screen.scroll(), 0);
    }

    #[test]
    fn test_render_shows_ground_truth() {
        let controller = reviewing();
        let mut screen = ReviewScreen::new();
        let text = render_to_text(80, 50, |f| screen.render(f, &controller));

        assert!(text.contains("Q: 2 + 2 equals 4"));
        assert!(text.contains("Q: The Earth is flat"));
        // Ground truth, not the player's "True"
        assert!(text.contains("False"));
        let first = text.find("Q: 2 + 2 equals 4").unwrap();
        let flat = text.find("Q: The Earth is flat").unwrap();
        assert!(first < flat);
    }

    #[test]
    fn test_scroll_is_clamped_on_render() {
        let controller = reviewing();
        let mut screen = ReviewScreen::new();
        for _ in 0..500 {
            screen.scroll_down();
        }
        let text = render_to_text(80, 24, |f| screen.render(f, &controller));
        assert!(screen.scroll() < 500);
        assert!(text.contains("Movie Mania"));
        assert!(text.contains("1999"));
    }

    #[test]
    fn test_last_card_reachable_when_lines_wrap() {
        let controller = reviewing();
        let mut screen = ReviewScreen::new();
        for _ in 0..500 {
            screen.scroll_down();
        }
        let text = render_to_text(30, 16, |f| screen.render(f, &controller));

        // "Q: The Matrix was released in 1999" wraps at this width
        assert!(text.contains("1999"), "last question cut off:\n{}", text);
        assert!(text.contains("A: ✓ True"));
    }

    #[test]
    fn test_narrow_scroll_stops_at_last_row() {
        let controller = reviewing();
        let mut screen = ReviewScreen::new();
        for _ in 0..500 {
            screen.scroll_down();
        }
        render_to_text(30, 16, |f| screen.render(f, &controller));
        let clamped = screen.scroll();

        // Scrolling further past the end changes nothing
        screen.scroll_down();
        render_to_text(30, 16, |f| screen.render(f, &controller));
        assert_eq!(screen.scroll(), clamped);

        // 40 logical lines with 8 visible rows would clamp at 32
        assert!(clamped > 32);
    }
}
