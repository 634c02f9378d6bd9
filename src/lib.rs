//! QuizWiz - true/false flashcard quiz
//!
//! A single-window terminal quiz: a fixed deck of flashcards is shown one
//! card at a time, answers are scored, and a score and review screen close
//! out the round.

use std::fmt;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod quiz;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum QuizError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::IoError(err) => write!(f, "I/O error: {}", err),
            QuizError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuizError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::IoError(err)
    }
}

impl From<toml::ser::Error> for QuizError {
    fn from(err: toml::ser::Error) -> Self {
        QuizError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for QuizWiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Error handling utilities
pub mod error {
    use super::QuizError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &QuizError) -> String {
        match error {
            QuizError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check file permissions for the config directory.".to_string()
            }
            QuizError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            QuizError::TuiError(_) => {
                "The terminal could not be driven. Run quizwiz from an interactive terminal."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "quizwiz";
pub const CONFIG_FILE: &str = "quizwiz.toml";
pub const LOG_ENV_VAR: &str = "QUIZWIZ_LOG";
