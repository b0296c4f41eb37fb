//! Question fetching with graceful fallback.

use crate::error::GenerationError;
use crate::generation::fallback::FallbackPool;
use crate::generation::{parse_response, GenerationRequest, QuoteGenerator};
use crate::locale::Locale;
use crate::types::{QuestionOrigin, QuoteQuestion, UsedQuotes};
use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

/// Permission to fetch one question for a specific session generation.
///
/// Issued by [`GameSession::begin_fetch`](crate::session::GameSession::begin_fetch).
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub(crate) token: Uuid,
    pub(crate) used: UsedQuotes,
}

impl FetchTicket {
    pub fn token(&self) -> Uuid {
        self.token
    }

    /// Quotes to exclude from this request.
    pub fn used_quotes(&self) -> &UsedQuotes {
        &self.used
    }
}

/// A question ready to hand back to the session that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedQuestion {
    pub token: Uuid,
    pub question: QuoteQuestion,
    pub origin: QuestionOrigin,
}

/// Fetches questions from a generator and falls back to the built-in pool.
pub struct QuestionController {
    generator: Arc<dyn QuoteGenerator>,
    fallback: FallbackPool,
    locale: Locale,
}

impl QuestionController {
    pub fn new(generator: Arc<dyn QuoteGenerator>, locale: Locale) -> Self {
        Self {
            generator,
            fallback: FallbackPool::default(),
            locale,
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPool) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Fetch the question for a ticket. Never fails.
    pub async fn fetch<R: Rng + Send + ?Sized>(
        &self,
        ticket: FetchTicket,
        rng: &mut R,
    ) -> FetchedQuestion {
        let (question, origin) = self.request_next_question(&ticket.used, rng).await;
        FetchedQuestion {
            token: ticket.token,
            question,
            origin,
        }
    }

    /// Ask the generator for a fresh question, or pick a fallback if the call
    /// fails in any way.
    pub async fn request_next_question<R: Rng + Send + ?Sized>(
        &self,
        used: &UsedQuotes,
        rng: &mut R,
    ) -> (QuoteQuestion, QuestionOrigin) {
        let request = GenerationRequest::random(&mut *rng, used, self.locale);
        tracing::debug!(
            generator = self.generator.name(),
            genre = request.genre,
            era = request.era,
            seed = request.seed,
            excluded = request.excluded.len(),
            "requesting quote"
        );

        match self.generate(&request).await {
            Ok(question) => {
                tracing::info!(movie = %question.movie, "generated question");
                (question, QuestionOrigin::Generated)
            }
            Err(err) => {
                tracing::warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "quote generation failed, serving fallback"
                );
                (self.fallback.pick(rng).clone(), QuestionOrigin::Fallback)
            }
        }
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<QuoteQuestion, GenerationError> {
        let completion = self.generator.complete(&request.prompt()).await?;
        parse_response(&completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    /// Records prompts and replies with a canned completion.
    struct Canned {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(reply: Result<&str, &str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string).map_err(str::to_string),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl QuoteGenerator for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(GenerationError::Transport)
        }
    }

    #[tokio::test]
    async fn test_generated_question() {
        let generator = Canned::new(Ok(
            r#"{"quote":"Why so serious?","movie":"The Dark Knight","emojis":"🃏😐❓","hint":"Gotham"}"#,
        ));
        let controller = QuestionController::new(generator.clone(), Locale::EnUs);
        let mut used = UsedQuotes::default();
        used.insert("I'll be back");

        let (question, origin) = controller
            .request_next_question(&used, &mut StdRng::seed_from_u64(3))
            .await;

        assert_eq!(origin, QuestionOrigin::Generated);
        assert_eq!(question.quote, "Why so serious?");
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("previously used quotes: I'll be back"));
    }

    #[tokio::test]
    async fn test_transport_failure_serves_fallback() {
        let controller = QuestionController::new(Canned::new(Err("connection refused")), Locale::EnUs);

        let (question, origin) = controller
            .request_next_question(&UsedQuotes::default(), &mut StdRng::seed_from_u64(3))
            .await;

        assert_eq!(origin, QuestionOrigin::Fallback);
        assert!(FallbackPool::default().questions().contains(&question));
    }

    #[tokio::test]
    async fn test_unparseable_reply_serves_fallback() {
        let controller =
            QuestionController::new(Canned::new(Ok("I'm sorry, I can't do that")), Locale::EnUs);

        let (_, origin) = controller
            .request_next_question(&UsedQuotes::default(), &mut StdRng::seed_from_u64(3))
            .await;

        assert_eq!(origin, QuestionOrigin::Fallback);
    }

    #[tokio::test]
    async fn test_custom_fallback_pool() {
        let only = QuoteQuestion::new("Here's Johnny!", "The Shining", "🪓🚪", None);
        let controller = QuestionController::new(Canned::new(Err("offline")), Locale::EnUs)
            .with_fallback(FallbackPool::new(vec![only.clone()]).unwrap());

        let (question, _) = controller
            .request_next_question(&UsedQuotes::default(), &mut StdRng::seed_from_u64(9))
            .await;

        assert_eq!(question, only);
    }
}
