//! Core library for the movie quote charades game.
//!
//! Provides:
//! - Fuzzy answer matching between a guess and the canonical quote
//! - Streak and combo scoring
//! - Question fetching with an offline fallback pool
//! - The session state machine tying them together
//! - Localized UI strings

pub mod controller;
pub mod error;
pub mod generation;
pub mod locale;
pub mod matching;
pub mod scoring;
pub mod session;
pub mod types;

pub use controller::{FetchTicket, FetchedQuestion, QuestionController};
pub use error::{GenerationError, Result, SessionError};
pub use generation::fallback::FallbackPool;
pub use generation::{parse_response, GenerationRequest, QuoteGenerator};
pub use locale::{lookup, resolve_locale, translate, Locale, TextKey};
pub use matching::{evaluate, reduce, MatchResult};
pub use scoring::{ComboRules, Feedback, ScoreState, ScoringResult};
pub use session::{AnswerReport, GameSession};
pub use types::{Phase, QuestionOrigin, QuoteQuestion, UsedQuotes};
