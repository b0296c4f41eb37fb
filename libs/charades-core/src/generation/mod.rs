//! Quote generation requests and the generator seam.

pub mod fallback;

use crate::error::GenerationError;
use crate::locale::{translate, Locale, TextKey};
use crate::types::{QuoteQuestion, UsedQuotes};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;

pub const GENRES: [&str; 10] = [
    "action blockbusters",
    "romantic comedies",
    "sci-fi classics",
    "superhero movies",
    "animated films",
    "thrillers",
    "adventure films",
    "dramas",
    "fantasy epics",
    "comedy classics",
];

pub const ERAS: [&str; 5] = [
    "1970s-1980s classics",
    "1990s favorites",
    "2000s hits",
    "2010s blockbusters",
    "2020s releases",
];

/// Upper bound (exclusive) of the variety seed embedded in prompts.
pub const SEED_RANGE: u32 = 10_000;

/// Text-completion service that turns a prompt into quote JSON.
#[async_trait]
pub trait QuoteGenerator: Send + Sync {
    /// Generator identifier for logs.
    fn name(&self) -> &'static str;

    /// Send the prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Inputs of one generation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub genre: &'static str,
    pub era: &'static str,
    pub seed: u32,
    pub excluded: Vec<String>,
    pub locale: Locale,
}

impl GenerationRequest {
    /// Pick genre, era and seed at random and exclude every used quote.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, used: &UsedQuotes, locale: Locale) -> Self {
        Self {
            genre: GENRES.choose(rng).copied().unwrap_or(GENRES[0]),
            era: ERAS.choose(rng).copied().unwrap_or(ERAS[0]),
            seed: rng.gen_range(0..SEED_RANGE),
            excluded: used.iter().map(str::to_string).collect(),
            locale,
        }
    }

    /// Render the completion prompt.
    pub fn prompt(&self) -> String {
        let exclude = if self.excluded.is_empty() {
            String::new()
        } else {
            format!(
                "\n\nDO NOT use any of these previously used quotes: {}",
                self.excluded.join("; ")
            )
        };

        format!(
            r#"Generate a fun quiz question that converts a famous movie quote into emojis.

Focus on: {genre} from {era}
Random seed: {seed}

Requirements:
- Choose an iconic, memorable quote from a well-known movie
- Convert it creatively into 3-8 emojis that represent the meaning or key words
- Make it challenging but solvable for movie fans
- Include popular mainstream movies that most people would recognize
- Be creative and vary your approach{exclude}

Respond with a JSON object in this exact format:
{{
  "quote": "the exact famous movie quote",
  "movie": "the movie title",
  "emojis": "the emoji representation",
  "hint": "a subtle hint about the movie or scene (not too obvious)"
}}

Your entire response MUST be a single, valid JSON object. DO NOT include any other text.

{language_prompt} {locale} language"#,
            genre = self.genre,
            era = self.era,
            seed = self.seed,
            exclude = exclude,
            language_prompt = translate(self.locale, TextKey::ClaudePrompt),
            locale = self.locale.as_str(),
        )
    }
}

/// Parse a completion into a question.
///
/// Tolerates surrounding whitespace and a Markdown code fence around the
/// JSON object; anything else that is not the expected object fails.
pub fn parse_response(text: &str) -> Result<QuoteQuestion, GenerationError> {
    let question: QuoteQuestion = serde_json::from_str(strip_code_fence(text))?;
    if question.quote.trim().is_empty() {
        return Err(GenerationError::EmptyQuote);
    }
    Ok(question)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening fence line.
    let body = body.split_once('\n').map_or("", |(_, rest)| rest);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}
