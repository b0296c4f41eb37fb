//! Shared fixtures for charades-core integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use charades_core::{GenerationError, QuoteGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator that replays a fixed script of replies, then fails.
pub struct Scripted {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl Scripted {
    pub fn new(replies: Vec<Result<String, GenerationError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteGenerator for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Unavailable("script exhausted".to_string())))
    }
}

/// JSON completion for a quote.
pub fn quote_json(quote: &str, movie: &str) -> Result<String, GenerationError> {
    Ok(serde_json::json!({
        "quote": quote,
        "movie": movie,
        "emojis": "🎬🎬🎬",
        "hint": format!("A scene from {movie}"),
    })
    .to_string())
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}
