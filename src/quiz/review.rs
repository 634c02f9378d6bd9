//! Review listing
//!
//! The review shows every card with its ground-truth answer, in deck order.
//! It deliberately ignores what the player answered.

use crate::models::Flashcard;

pub const REVIEW_HEADING: &str = "📚 Review Your Answers";

/// One line-group of the review screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: bool,
}

impl ReviewEntry {
    /// `True` or `False`
    pub fn answer_label(&self) -> &'static str {
        answer_label(self.answer)
    }

    /// Leading marker for the entry
    pub fn marker(&self) -> &'static str {
        if self.answer {
            "✅"
        } else {
            "❌"
        }
    }

    /// Answer line, e.g. `A: ✓ True`
    pub fn answer_line(&self) -> String {
        let check = if self.answer { "✓" } else { "✗" };
        format!("A: {} {}", check, self.answer_label())
    }
}

impl From<&Flashcard> for ReviewEntry {
    fn from(card: &Flashcard) -> Self {
        Self {
            category: card.category,
            question: card.question,
            answer: card.answer,
        }
    }
}

pub fn answer_label(answer: bool) -> &'static str {
    if answer {
        "True"
    } else {
        "False"
    }
}

/// Review entries in deck order
pub fn review_entries(deck: &[Flashcard]) -> Vec<ReviewEntry> {
    deck.iter().map(ReviewEntry::from).collect()
}
