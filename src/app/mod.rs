//! TUI application module
//!
//! Contains the quiz controller, the terminal user interface components,
//! screen rendering and input handling.

pub mod app;
pub mod controller;
pub mod events;
pub mod reveal;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{App, AppShell};
pub use controller::{ButtonTone, Feedback, QuestionView, QuizController, RevealTicket, ScoreSummary};
pub use events::{AppEvent, InputReader};
pub use reveal::RevealScheduler;
pub use screens::{QuestionScreen, ReviewScreen, ScoreAction, ScoreScreen, WelcomeScreen};
pub use state::{NavigationAction, Screen};
pub use tui::Tui;
