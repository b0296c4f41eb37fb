//! Answer matching for quote guesses.

/// Stand-alone words ignored when comparing reduced forms.
const FILLER_WORDS: [&str; 11] = [
    "a", "an", "the", "is", "are", "was", "were", "i", "you", "me", "my",
];

/// Shortest guess token that counts towards keyword overlap.
const MIN_KEYWORD_CHARS: usize = 3;

/// Result of comparing a guess to the canonical quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Guess equals the quote after lower-casing and trimming.
    pub exact: bool,
    /// Guess is close enough to earn points.
    pub accepted: bool,
    /// Reduced guess (for display and logging).
    pub guess_reduced: String,
    /// Reduced quote (for display and logging).
    pub quote_reduced: String,
}

/// Compare a guess to the canonical quote.
pub fn evaluate(guess: &str, quote: &str) -> MatchResult {
    let guess = guess.trim().to_lowercase();
    let quote = quote.trim().to_lowercase();
    let exact = guess == quote;

    let guess_reduced = reduce(&guess);
    let quote_reduced = reduce(&quote);

    let accepted = exact
        || guess_reduced == quote_reduced
        || quote_reduced.contains(guess_reduced.as_str())
        || guess_reduced.contains(quote_reduced.as_str())
        || keyword_overlap(&guess_reduced, &quote_reduced);

    MatchResult {
        exact,
        accepted,
        guess_reduced,
        quote_reduced,
    }
}

/// Reduce text to its comparable core.
///
/// Drops every character that is neither an ASCII word character nor
/// whitespace, removes whole filler words, and collapses whitespace. Reducing an already
/// reduced string returns it unchanged.
pub fn reduce(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .filter(|word| !is_filler(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_filler(word: &str) -> bool {
    FILLER_WORDS
        .iter()
        .any(|filler| word.eq_ignore_ascii_case(filler))
}

/// At least 60% (rounded up) of the quote's token count must be covered by
/// guess keywords that appear somewhere in the quote.
fn keyword_overlap(guess_reduced: &str, quote_reduced: &str) -> bool {
    let quote_tokens = quote_reduced.split_whitespace().count();
    if quote_tokens == 0 {
        return guess_reduced.is_empty();
    }

    let hits = guess_reduced
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS && quote_reduced.contains(word))
        .count();

    hits >= required_hits(quote_tokens)
}

/// ceil(0.6 * tokens) without floating point.
fn required_hits(tokens: usize) -> usize {
    (tokens * 3 + 4) / 5
}
