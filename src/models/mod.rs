//! Data models module
//!
//! Contains the flashcard value type and the built-in deck.

pub mod flashcard;

// Re-export commonly used types
pub use flashcard::{default_deck, Flashcard};
