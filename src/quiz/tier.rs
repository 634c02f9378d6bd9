//! Score percentage and feedback tiers

use std::fmt;

/// Integer percentage `floor(score * 100 / total)`; `0` for an empty deck
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score * 100 / total) as u32
}

/// Feedback shown on the score screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Outstanding,
    Excellent,
    GoodWork,
    KeepPracticing,
}

impl FeedbackTier {
    /// Map a percentage to its tier. First match wins.
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 90 => Self::Outstanding,
            p if p >= 75 => Self::Excellent,
            p if p >= 60 => Self::GoodWork,
            _ => Self::KeepPracticing,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding! 🏆",
            Self::Excellent => "Excellent! 🌟",
            Self::GoodWork => "Good Work! 👍",
            Self::KeepPracticing => "Keep Practicing! 💪",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Outstanding => "You're a quiz master!",
            Self::Excellent => "Great job!",
            Self::GoodWork => "Well done!",
            Self::KeepPracticing => "You'll get better!",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.headline(), self.message())
    }
}
