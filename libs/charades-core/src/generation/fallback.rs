//! Built-in questions served when generation fails.

use crate::types::QuoteQuestion;
use rand::Rng;

/// Non-empty set of pre-authored questions.
#[derive(Debug, Clone)]
pub struct FallbackPool(Vec<QuoteQuestion>);

impl Default for FallbackPool {
    fn default() -> Self {
        Self(vec![
            QuoteQuestion::new(
                "May the Force be with you",
                "Star Wars",
                "🌟💪🫵",
                Some("A galaxy far, far away"),
            ),
            QuoteQuestion::new(
                "Here's looking at you, kid",
                "Casablanca",
                "👀👶",
                Some("Classic romance in Morocco"),
            ),
            QuoteQuestion::new(
                "I'll be back",
                "The Terminator",
                "🤖🔙",
                Some("Cyborg from the future"),
            ),
            QuoteQuestion::new(
                "You can't handle the truth",
                "A Few Good Men",
                "🚫🤲💡",
                Some("Military courtroom drama"),
            ),
        ])
    }
}

impl FallbackPool {
    /// Build a custom pool. Returns `None` for an empty list.
    pub fn new(questions: Vec<QuoteQuestion>) -> Option<Self> {
        if questions.is_empty() {
            None
        } else {
            Some(Self(questions))
        }
    }

    /// Pick uniformly. Used quotes are not filtered out.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &QuoteQuestion {
        &self.0[rng.gen_range(0..self.0.len())]
    }

    pub fn questions(&self) -> &[QuoteQuestion] {
        &self.0
    }
}
