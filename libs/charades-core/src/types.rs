//! Core types for the quote charades game.

use serde::{Deserialize, Serialize};

/// One emoji-encoded movie quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteQuestion {
    pub quote: String,
    pub movie: String,
    pub emojis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl QuoteQuestion {
    pub fn new(quote: &str, movie: &str, emojis: &str, hint: Option<&str>) -> Self {
        Self {
            quote: quote.to_string(),
            movie: movie.to_string(),
            emojis: emojis.to_string(),
            hint: hint.map(str::to_string),
        }
    }

    /// Hint text, if there is a non-blank one.
    pub fn hint(&self) -> Option<&str> {
        self.hint
            .as_deref()
            .map(str::trim)
            .filter(|hint| !hint.is_empty())
    }
}

/// Quotes already presented in the current session, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedQuotes(Vec<String>);

impl UsedQuotes {
    /// Record a quote. Returns false if it was already present.
    pub fn insert(&mut self, quote: &str) -> bool {
        if self.contains(quote) {
            return false;
        }
        self.0.push(quote.to_string());
        true
    }

    pub fn contains(&self, quote: &str) -> bool {
        self.0.iter().any(|used| used == quote)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Where a served question came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOrigin {
    Generated,
    Fallback,
}

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Loading,
    AwaitingAnswer,
    AnswerRevealed,
}

impl Default for Phase {
    fn default() -> Self {
        Self::NotStarted
    }
}
