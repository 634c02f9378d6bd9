//! Quiz controller
//!
//! Owns the quiz session and the active screen, and implements every screen
//! transition. Screens only read from the controller; all mutation goes
//! through the operations here. Operations invoked from a screen they do not
//! belong to are ignored.

use crate::app::state::Screen;
use crate::models::Flashcard;
use crate::quiz::{review_entries, AnswerOutcome, FeedbackTier, QuizSession, ReviewEntry};

/// Colour role of an answer button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    /// Green
    Positive,
    /// Red
    Negative,
}

/// Feedback line under the answer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

impl Feedback {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Correct => "Correct! 🎉",
            Self::Wrong => "Wrong! ❌",
        }
    }

    pub fn tone(&self) -> ButtonTone {
        match self {
            Self::Correct => ButtonTone::Positive,
            Self::Wrong => ButtonTone::Negative,
        }
    }
}

/// Transient state of the question screen, reset for every question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub feedback: Option<Feedback>,
    pub true_tone: ButtonTone,
    pub false_tone: ButtonTone,
    pub answers_enabled: bool,
    pub next_visible: bool,
}

impl Default for QuestionView {
    fn default() -> Self {
        Self {
            feedback: None,
            true_tone: ButtonTone::Positive,
            false_tone: ButtonTone::Negative,
            answers_enabled: true,
            next_visible: false,
        }
    }
}

impl QuestionView {
    /// Apply the display effects of a scored answer
    fn show_outcome(&mut self, outcome: &AnswerOutcome) {
        self.answers_enabled = false;

        if outcome.is_correct() {
            self.feedback = Some(Feedback::Correct);
            if outcome.user_answer {
                self.true_tone = ButtonTone::Positive;
            } else {
                self.false_tone = ButtonTone::Positive;
            }
        } else {
            self.feedback = Some(Feedback::Wrong);
            let (chosen, other) = if outcome.user_answer {
                (&mut self.true_tone, &mut self.false_tone)
            } else {
                (&mut self.false_tone, &mut self.true_tone)
            };
            *chosen = ButtonTone::Negative;
            *other = ButtonTone::Positive;
        }
    }
}

/// Pending reveal of the "next" control for one question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    pub question_index: usize,
}

/// Values shown on the score screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: FeedbackTier,
}

impl ScoreSummary {
    /// e.g. `7/10`
    pub fn score_text(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }
}

/// Screen state machine for a single quiz
#[derive(Debug)]
pub struct QuizController {
    session: QuizSession,
    screen: Screen,
    question_view: QuestionView,
    should_quit: bool,
}

impl QuizController {
    /// Create a controller on the welcome screen
    pub fn new(deck: Vec<Flashcard>) -> Self {
        Self {
            session: QuizSession::new(deck),
            screen: Screen::default(),
            question_view: QuestionView::default(),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn question_view(&self) -> &QuestionView {
        &self.question_view
    }

    /// Card on the active question screen
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.screen
            .question_index()
            .and_then(|index| self.session.deck().get(index))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Welcome -> first question
    pub fn start(&mut self) {
        if self.screen == Screen::Welcome {
            tracing::info!(questions = self.session.len(), "quiz started");
            self.show_question_screen();
        }
    }

    /// Show the current question, or the score screen once the deck is done
    pub fn show_question_screen(&mut self) {
        if self.session.is_finished() {
            self.show_score_screen();
            return;
        }

        self.question_view = QuestionView::default();
        self.session.begin_question();
        self.screen = Screen::Question(self.session.current_index());
        tracing::debug!(index = self.session.current_index(), "showing question");
    }

    /// Score the player's answer to the displayed question
    ///
    /// Returns the ticket for the delayed reveal of the "next" control, or
    /// `None` if the answer was ignored.
    pub fn check_answer(&mut self, user_answer: bool) -> Option<RevealTicket> {
        let index = self.screen.question_index()?;
        if index != self.session.current_index() {
            return None;
        }

        let outcome = self.session.answer(user_answer)?;
        self.question_view.show_outcome(&outcome);
        tracing::debug!(
            index,
            user_answer,
            correct = outcome.is_correct(),
            score = self.session.score(),
            "answer checked"
        );

        Some(RevealTicket {
            question_index: outcome.question_index,
        })
    }

    /// Apply a fired reveal timer
    ///
    /// Only applies while the ticket's question is still displayed and
    /// answered; returns whether the "next" control was revealed.
    pub fn reveal_next(&mut self, ticket: RevealTicket) -> bool {
        let still_showing = self.screen == Screen::Question(ticket.question_index)
            && self.session.current_index() == ticket.question_index
            && self.session.is_answered();

        if !still_showing {
            tracing::debug!(
                index = ticket.question_index,
                screen = ?self.screen,
                "ignoring stale reveal"
            );
            return false;
        }

        self.question_view.next_visible = true;
        true
    }

    /// Move past the answered question
    pub fn next_question(&mut self) {
        if self.screen.question_index().is_none() || !self.question_view.next_visible {
            return;
        }
        self.session.advance();
        self.show_question_screen();
    }

    /// Switch to the score screen
    pub fn show_score_screen(&mut self) {
        self.screen = Screen::Score;
        let summary = self.score_summary();
        tracing::info!(
            score = summary.score,
            total = summary.total,
            percentage = summary.percentage,
            "quiz finished"
        );
    }

    /// Score -> Review
    pub fn show_review_screen(&mut self) {
        if self.screen == Screen::Score {
            self.screen = Screen::Review;
        }
    }

    /// Review -> Score
    pub fn back_to_score(&mut self) {
        if self.screen == Screen::Review {
            self.screen = Screen::Score;
        }
    }

    /// Score -> Welcome with progress reset
    pub fn restart(&mut self) {
        if self.screen != Screen::Score {
            return;
        }
        self.session.reset();
        self.question_view = QuestionView::default();
        self.screen = Screen::default();
        tracing::info!("quiz restarted");
    }

    pub fn score_summary(&self) -> ScoreSummary {
        ScoreSummary {
            score: self.session.score(),
            total: self.session.len(),
            percentage: self.session.percentage(),
            tier: self.session.tier(),
        }
    }

    pub fn review(&self) -> Vec<ReviewEntry> {
        review_entries(self.session.deck())
    }
}
