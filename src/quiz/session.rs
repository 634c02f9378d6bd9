//! Quiz session state
//!
//! Tracks the current question, the running score and the per-question
//! `answered` latch for a single play-through.

use crate::models::Flashcard;
use crate::quiz::tier::{percentage, FeedbackTier};

/// Result of scoring a single answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Index of the question that was answered
    pub question_index: usize,
    /// What the player chose
    pub user_answer: bool,
    /// Ground truth for the question
    pub correct_answer: bool,
}

impl AnswerOutcome {
    /// Whether the player's answer matched the ground truth
    pub fn is_correct(&self) -> bool {
        self.user_answer == self.correct_answer
    }
}

/// Mutable progress through a deck
///
/// Invariants: `current_index <= deck.len()`, `score <= deck.len()`, and a
/// question contributes to `score` at most once (guarded by `answered`).
#[derive(Debug, Clone)]
pub struct QuizSession {
    deck: Vec<Flashcard>,
    current_index: usize,
    score: usize,
    answered: bool,
}

impl QuizSession {
    /// Start a fresh session over the given deck
    pub fn new(deck: Vec<Flashcard>) -> Self {
        Self {
            deck,
            current_index: 0,
            score: 0,
            answered: false,
        }
    }

    pub fn deck(&self) -> &[Flashcard] {
        &self.deck
    }

    /// Number of questions in the deck
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Whether the displayed question has already been answered
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Every question has been advanced past
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.deck.len()
    }

    /// The card at the current index, if any remain
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.deck.get(self.current_index)
    }

    /// Clear the latch for the question about to be displayed
    pub fn begin_question(&mut self) {
        self.answered = false;
    }

    /// Score an answer for the current question
    ///
    /// Returns `None` without touching any state when the question was
    /// already answered or the deck is exhausted.
    pub fn answer(&mut self, user_answer: bool) -> Option<AnswerOutcome> {
        if self.answered {
            return None;
        }
        let card = self.deck.get(self.current_index)?;
        let outcome = AnswerOutcome {
            question_index: self.current_index,
            user_answer,
            correct_answer: card.answer,
        };

        self.answered = true;
        if card.is_correct(user_answer) {
            self.score += 1;
        }
        Some(outcome)
    }

    /// Move to the next question. Returns `true` while questions remain.
    pub fn advance(&mut self) -> bool {
        if self.current_index < self.deck.len() {
            self.current_index += 1;
        }
        !self.is_finished()
    }

    /// Reset progress for a new play-through
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answered = false;
    }

    /// Integer percentage of correct answers
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.deck.len())
    }

    /// Feedback tier for the current score
    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::from_percentage(self.percentage())
    }

    /// Progress label for the current question, e.g. `Question 3/10`
    pub fn progress_text(&self) -> String {
        format!("Question {}/{}", self.current_index + 1, self.deck.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_deck;

    fn session() -> QuizSession {
        QuizSession::new(default_deck())
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.len(), 10);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert!(!s.is_answered());
        assert!(!s.is_finished());
    }

    #[test]
    fn test_correct_answer_scores_once_per_index() {
        for i in 0..10 {
            let mut s = session();
            for _ in 0..i {
                s.advance();
            }
            s.begin_question();
            let truth = s.current_card().unwrap().answer;
            let outcome = s.answer(truth).unwrap();
            assert!(outcome.is_correct());
            assert_eq!(outcome.question_index, i);
            assert_eq!(s.score(), 1);
        }
    }

    #[test]
    fn test_incorrect_answer_leaves_score() {
        for i in 0..10 {
            let mut s = session();
            for _ in 0..i {
                s.advance();
            }
            let truth = s.current_card().unwrap().answer;
            let outcome = s.answer(!truth).unwrap();
            assert!(!outcome.is_correct());
            assert_eq!(s.score(), 0);
        }
    }

    #[test]
    fn test_double_answer_ignored() {
        let mut s = session();
        assert!(s.answer(true).is_some());
        assert_eq!(s.score(), 1);

        assert!(s.answer(true).is_none());
        assert!(s.answer(false).is_none());
        assert_eq!(s.score(), 1);
        assert!(s.is_answered());
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut s = session();
        for _ in 0..9 {
            assert!(s.advance());
        }
        assert!(!s.advance());
        assert_eq!(s.current_index(), 10);
        assert!(s.is_finished());

        // Never walks past the end
        assert!(!s.advance());
        assert_eq!(s.current_index(), 10);
        assert!(s.current_card().is_none());
        assert!(s.answer(true).is_none());
    }

    #[test]
    fn test_reset() {
        let mut s = session();
        s.answer(true);
        s.advance();
        s.answer(true);
        s.reset();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.score(), 0);
        assert!(!s.is_answered());
    }

    #[test]
    fn test_texts() {
        let mut s = session();
        assert_eq!(s.progress_text(), "Question 1/10");
        s.answer(true);
        s.advance();
        assert_eq!(s.progress_text(), "Question 2/10");
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_empty_deck() {
        let mut s = QuizSession::new(Vec::new());
        assert!(s.is_empty());
        assert!(s.is_finished());
        assert!(s.answer(true).is_none());
        assert_eq!(s.percentage(), 0);
        assert_eq!(s.tier(), FeedbackTier::KeepPracticing);
    }
}
