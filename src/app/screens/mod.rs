//! TUI screen components
//!
//! One component per quiz screen. Components hold only UI selection state;
//! quiz state is read from the controller.

pub mod question;
pub mod review;
pub mod score;
pub mod welcome;

pub use question::{AnswerChoice, QuestionScreen};
pub use review::ReviewScreen;
pub use score::{ScoreAction, ScoreScreen};
pub use welcome::WelcomeScreen;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::controller::ButtonTone;

/// Highlight colour shared by all screens
pub(crate) const ACCENT: Color = Color::Cyan;

pub(crate) fn tone_color(tone: ButtonTone) -> Color {
    match tone {
        ButtonTone::Positive => Color::Green,
        ButtonTone::Negative => Color::Red,
    }
}

/// Bordered help bar listing `(key, description)` pairs
pub(crate) fn help_bar(bindings: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(bindings.len() * 2);
    for (key, description) in bindings {
        spans.push(Span::styled(
            *key,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}  ", description)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
}

/// Render a frame into an in-memory buffer and return its text, row by row
#[cfg(test)]
pub(crate) fn render_to_text<F>(width: u16, height: u16, render: F) -> String
where
    F: FnOnce(&mut ratatui::Frame),
{
    use ratatui::{backend::TestBackend, Terminal};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(render).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}
