//! Flashcard data model
//!
//! A flashcard is an immutable true/false prompt tagged with a short
//! category label. The built-in deck is fixed and ordered; its order is the
//! presentation order and the review order.

/// A single true/false question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    /// Short category label shown above the question
    pub category: &'static str,
    /// The statement the player judges
    pub question: &'static str,
    /// Ground truth
    pub answer: bool,
}

impl Flashcard {
    /// Create a new flashcard
    pub const fn new(category: &'static str, question: &'static str, answer: bool) -> Self {
        Self {
            category,
            question,
            answer,
        }
    }

    /// Check whether the given answer matches the ground truth
    pub fn is_correct(&self, user_answer: bool) -> bool {
        self.answer == user_answer
    }
}

const DECK: [Flashcard; 10] = [
    Flashcard::new("🔢 Math Magic", "2 + 2 equals 4", true),
    Flashcard::new("🌍 World Wonders", "The capital of France is Paris", true),
    Flashcard::new("💻 Code Quest", "Kotlin is a programming language", true),
    Flashcard::new("🧪 Science Lab", "Water boils at 100°C at sea level", true),
    Flashcard::new("🌍 Planet Earth", "The Earth is flat", false),
    Flashcard::new("📜 History Hunt", "The Titanic sank in 1912", true),
    Flashcard::new("🧠 Brain Teaser", "Humans have five senses", true),
    Flashcard::new("🔢 Number Ninja", "π equals exactly 3.14", false),
    Flashcard::new("🐾 Animal Kingdom", "Penguins can fly", false),
    Flashcard::new("🎬 Movie Mania", "The Matrix was released in 1999", true),
];

/// The built-in deck, in presentation order
pub fn default_deck() -> Vec<Flashcard> {
    DECK.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_shape() {
        let deck = default_deck();
        assert_eq!(deck.len(), 10);
        assert_eq!(deck[0].question, "2 + 2 equals 4");
        assert_eq!(deck[9].category, "🎬 Movie Mania");
    }

    #[test]
    fn test_default_deck_answers() {
        let answers: Vec<bool> = default_deck().iter().map(|c| c.answer).collect();
        assert_eq!(
            answers,
            vec![true, true, true, true, false, true, true, false, false, true]
        );
    }

    #[test]
    fn test_is_correct() {
        let card = Flashcard::new("🐾 Animal Kingdom", "Penguins can fly", false);
        assert!(card.is_correct(false));
        assert!(!card.is_correct(true));
    }
}
