//! Quiz domain module
//!
//! Session progress and scoring, score tiers, and the review listing.

pub mod review;
pub mod session;
pub mod tier;

pub use review::{answer_label, review_entries, ReviewEntry};
pub use session::{AnswerOutcome, QuizSession};
pub use tier::{percentage, FeedbackTier};
