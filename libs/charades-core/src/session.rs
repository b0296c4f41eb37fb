//! Game session state.
//!
//! A session moves `NotStarted -> Loading -> AwaitingAnswer -> AnswerRevealed
//! -> Loading -> ...`. Fetching is split in three steps so no borrow of the
//! session is held while the generator call is pending:
//!
//! 1. [`GameSession::begin_fetch`] enters `Loading` and hands out a ticket.
//! 2. [`QuestionController::fetch`] resolves the ticket into a question.
//! 3. [`GameSession::complete_fetch`] applies it, unless the session was
//!    reset in the meantime.

use crate::controller::{FetchTicket, FetchedQuestion, QuestionController};
use crate::error::{Result, SessionError};
use crate::matching::{evaluate, MatchResult};
use crate::scoring::{ComboRules, Feedback, ScoreState};
use crate::types::{Phase, QuestionOrigin, QuoteQuestion, UsedQuotes};
use rand::Rng;
use uuid::Uuid;

/// Outcome of one submitted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReport {
    pub result: MatchResult,
    pub feedback: Feedback,
    pub score: ScoreState,
}

/// One player's game.
#[derive(Debug, Clone)]
pub struct GameSession {
    token: Uuid,
    phase: Phase,
    score: ScoreState,
    used_quotes: UsedQuotes,
    current: Option<QuoteQuestion>,
    origin: Option<QuestionOrigin>,
    last_guess: Option<String>,
    feedback: Option<Feedback>,
    hint_visible: bool,
    rules: ComboRules,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_rules(ComboRules::default())
    }

    pub fn with_rules(rules: ComboRules) -> Self {
        Self {
            token: Uuid::new_v4(),
            phase: Phase::NotStarted,
            score: ScoreState::default(),
            used_quotes: UsedQuotes::default(),
            current: None,
            origin: None,
            last_guess: None,
            feedback: None,
            hint_visible: false,
            rules,
        }
    }

    /// Start a fresh game and request its first question.
    pub fn start(&mut self) -> FetchTicket {
        self.reset();
        self.phase = Phase::Loading;
        tracing::info!(session = %self.token, "session started");
        self.ticket()
    }

    /// Return to the title state, dropping score, history and any pending
    /// request.
    pub fn reset(&mut self) {
        *self = Self::with_rules(self.rules.clone());
    }

    /// Enter `Loading` for the next question.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket> {
        match self.phase {
            Phase::NotStarted => return Err(SessionError::NotStarted),
            Phase::Loading => return Err(SessionError::FetchInFlight),
            Phase::AwaitingAnswer | Phase::AnswerRevealed => {}
        }

        self.phase = Phase::Loading;
        self.current = None;
        self.origin = None;
        self.last_guess = None;
        self.feedback = None;
        self.hint_visible = false;
        Ok(self.ticket())
    }

    /// Present a fetched question.
    ///
    /// Generated quotes join the used set; fallback quotes do not.
    pub fn complete_fetch(&mut self, fetched: FetchedQuestion) -> Result<&QuoteQuestion> {
        if fetched.token != self.token || self.phase != Phase::Loading {
            tracing::debug!(
                session = %self.token,
                response = %fetched.token,
                "discarding stale question"
            );
            return Err(SessionError::StaleResponse);
        }

        if fetched.origin == QuestionOrigin::Generated {
            self.used_quotes.insert(&fetched.question.quote);
        }

        self.phase = Phase::AwaitingAnswer;
        self.origin = Some(fetched.origin);
        Ok(&*self.current.insert(fetched.question))
    }

    /// Fetch and present the next question in one step.
    pub async fn advance<R: Rng + Send + ?Sized>(
        &mut self,
        controller: &QuestionController,
        rng: &mut R,
    ) -> Result<&QuoteQuestion> {
        let ticket = if self.phase == Phase::NotStarted {
            self.start()
        } else {
            self.begin_fetch()?
        };
        let fetched = controller.fetch(ticket, rng).await;
        self.complete_fetch(fetched)
    }

    /// Evaluate a guess against the current question and update the score.
    pub fn submit_guess(&mut self, guess: &str) -> Result<AnswerReport> {
        if self.phase != Phase::AwaitingAnswer {
            return Err(SessionError::NotAwaitingAnswer);
        }
        let guess = guess.trim();
        if guess.is_empty() {
            return Err(SessionError::EmptyGuess);
        }
        let question = self.current.as_ref().ok_or(SessionError::NotAwaitingAnswer)?;

        let result = evaluate(guess, &question.quote);
        let scored = self.rules.score(&self.score, &result);
        tracing::debug!(
            exact = result.exact,
            accepted = result.accepted,
            streak = scored.new_state.streak,
            "answer evaluated"
        );

        self.score = scored.new_state;
        self.feedback = Some(scored.feedback);
        self.last_guess = Some(guess.to_string());
        self.phase = Phase::AnswerRevealed;

        Ok(AnswerReport {
            result,
            feedback: scored.feedback,
            score: self.score.clone(),
        })
    }

    /// Show the current question's hint, if it has one.
    pub fn reveal_hint(&mut self) -> Option<&str> {
        if !matches!(self.phase, Phase::AwaitingAnswer | Phase::AnswerRevealed) {
            return None;
        }
        let hint = self.current.as_ref()?.hint()?;
        self.hint_visible = true;
        Some(hint)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn token(&self) -> Uuid {
        self.token
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn used_quotes(&self) -> &UsedQuotes {
        &self.used_quotes
    }

    pub fn current_question(&self) -> Option<&QuoteQuestion> {
        self.current.as_ref()
    }

    pub fn current_origin(&self) -> Option<QuestionOrigin> {
        self.origin
    }

    pub fn last_guess(&self) -> Option<&str> {
        self.last_guess.as_deref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    fn ticket(&self) -> FetchTicket {
        FetchTicket {
            token: self.token,
            used: self.used_quotes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fetched(ticket: &FetchTicket, question: QuoteQuestion, origin: QuestionOrigin) -> FetchedQuestion {
        FetchedQuestion {
            token: ticket.token(),
            question,
            origin,
        }
    }

    fn terminator() -> QuoteQuestion {
        QuoteQuestion::new("I'll be back", "The Terminator", "🤖🔙", Some("Cyborg from the future"))
    }

    fn started_with(question: QuoteQuestion) -> GameSession {
        let mut session = GameSession::new();
        let ticket = session.start();
        session
            .complete_fetch(fetched(&ticket, question, QuestionOrigin::Generated))
            .unwrap();
        session
    }

    #[test]
    fn test_new_session_is_not_started() {
        let mut session = GameSession::new();
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.begin_fetch().unwrap_err(), SessionError::NotStarted);
        assert_eq!(
            session.submit_guess("I'll be back").unwrap_err(),
            SessionError::NotAwaitingAnswer
        );
    }

    #[test]
    fn test_second_fetch_while_loading_is_refused() {
        let mut session = GameSession::new();
        let _ticket = session.start();
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.begin_fetch().unwrap_err(), SessionError::FetchInFlight);
    }

    #[test]
    fn test_generated_quote_is_recorded() {
        let session = started_with(terminator());
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert!(session.used_quotes().contains("I'll be back"));
        assert_eq!(session.current_origin(), Some(QuestionOrigin::Generated));
    }

    #[test]
    fn test_fallback_quote_is_not_recorded() {
        let mut session = GameSession::new();
        let ticket = session.start();
        session
            .complete_fetch(fetched(&ticket, terminator(), QuestionOrigin::Fallback))
            .unwrap();
        assert!(session.used_quotes().is_empty());
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn test_empty_guess_changes_nothing() {
        let mut session = started_with(terminator());
        assert_eq!(session.submit_guess("   ").unwrap_err(), SessionError::EmptyGuess);
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
        assert_eq!(session.score(), &ScoreState::default());
    }

    #[test]
    fn test_submit_reveals_answer() {
        let mut session = started_with(terminator());
        let report = session.submit_guess("  I'll be back ").unwrap();

        assert!(report.result.exact);
        assert_eq!(report.feedback, Feedback::Perfect { points: 1 });
        assert_eq!(session.phase(), Phase::AnswerRevealed);
        assert_eq!(session.last_guess(), Some("I'll be back"));
        assert_eq!(session.feedback(), Some(Feedback::Perfect { points: 1 }));
        assert_eq!(
            session.submit_guess("again").unwrap_err(),
            SessionError::NotAwaitingAnswer
        );
    }

    #[test]
    fn test_next_question_clears_answer_state_but_keeps_score() {
        let mut session = started_with(terminator());
        session.reveal_hint();
        session.submit_guess("wrong answer").unwrap();

        let _ticket = session.begin_fetch().unwrap();

        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.current_question(), None);
        assert_eq!(session.feedback(), None);
        assert_eq!(session.last_guess(), None);
        assert!(!session.hint_visible());
        assert_eq!(session.score().total_questions, 1);
    }

    #[test]
    fn test_reveal_hint() {
        let mut session = started_with(terminator());
        assert!(!session.hint_visible());
        assert_eq!(session.reveal_hint(), Some("Cyborg from the future"));
        assert!(session.hint_visible());

        let mut session = started_with(QuoteQuestion::new("Rosebud", "Citizen Kane", "🌹", None));
        assert_eq!(session.reveal_hint(), None);
        assert!(!session.hint_visible());
    }

    #[test]
    fn test_stale_response_after_reset_is_discarded() {
        let mut session = started_with(terminator());
        session.submit_guess("I'll be back").unwrap();
        let ticket = session.begin_fetch().unwrap();

        session.reset();
        let late = fetched(&ticket, terminator(), QuestionOrigin::Generated);

        assert_eq!(session.complete_fetch(late).unwrap_err(), SessionError::StaleResponse);
        assert_eq!(session.phase(), Phase::NotStarted);
        assert!(session.used_quotes().is_empty());
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn test_stale_response_after_restart_is_discarded() {
        let mut session = GameSession::new();
        let old = session.start();
        let new = session.start();
        assert_ne!(old.token(), new.token());

        let late = fetched(&old, terminator(), QuestionOrigin::Generated);
        assert_eq!(session.complete_fetch(late).unwrap_err(), SessionError::StaleResponse);
        assert_eq!(session.phase(), Phase::Loading);

        session
            .complete_fetch(fetched(&new, terminator(), QuestionOrigin::Generated))
            .unwrap();
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut session = started_with(terminator());
        session.submit_guess("I'll be back").unwrap();

        session.reset();

        assert_eq!(
            session.score(),
            &ScoreState {
                score: 0,
                total_questions: 0,
                streak: 0,
                best_streak: 0,
                combo_multiplier: 1,
            }
        );
        assert!(session.used_quotes().is_empty());
        assert_eq!(session.phase(), Phase::NotStarted);
    }

    #[test]
    fn test_reset_keeps_custom_rules() {
        let mut session = GameSession::with_rules(ComboRules {
            double_at: 1,
            triple_at: 2,
        });
        session.reset();
        let ticket = session.start();
        session
            .complete_fetch(fetched(&ticket, terminator(), QuestionOrigin::Generated))
            .unwrap();
        session.submit_guess("I'll be back").unwrap();
        assert_eq!(session.score().combo_multiplier, 2);
    }
}
