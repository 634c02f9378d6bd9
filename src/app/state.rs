//! Screen states and keyboard mapping
//!
//! Defines the closed set of quiz screens and turns raw key events into
//! navigation actions for the active screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Quiz screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Intro screen with the start button
    #[default]
    Welcome,
    /// Flashcard at the given deck index
    Question(usize),
    /// Final score and feedback tier
    Score,
    /// Every card with its correct answer
    Review,
}

impl Screen {
    /// Question index shown on this screen, if it is a question screen
    pub fn question_index(&self) -> Option<usize> {
        match self {
            Self::Question(index) => Some(*index),
            _ => None,
        }
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace, b)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Start the quiz (s)
    Start,
    /// Answer "True" (t)
    AnswerTrue,
    /// Answer "False" (f)
    AnswerFalse,
    /// Go to the next question (n)
    Advance,
    /// Open the review (v)
    Review,
    /// Restart from the welcome screen (r)
    Restart,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

impl NavigationAction {
    /// Convert keyboard event to navigation action
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => Self::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') => Self::Down,
            KeyCode::Left | KeyCode::Char('h') => Self::Left,
            KeyCode::Right | KeyCode::Char('l') => Self::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => Self::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => {
                Self::Back
            }

            // Tab navigation
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    Self::Previous
                } else {
                    Self::Next
                }
            }
            KeyCode::BackTab => Self::Previous,

            // Quiz hotkeys
            KeyCode::Char('s') | KeyCode::Char('S') => Self::Start,
            KeyCode::Char('t') | KeyCode::Char('T') => Self::AnswerTrue,
            KeyCode::Char('f') | KeyCode::Char('F') => Self::AnswerFalse,
            KeyCode::Char('n') | KeyCode::Char('N') => Self::Advance,
            KeyCode::Char('v') | KeyCode::Char('V') => Self::Review,
            KeyCode::Char('r') | KeyCode::Char('R') => Self::Restart,

            _ => Self::None,
        }
    }
}
