//! Streak and combo scoring.
//!
//! Every accepted answer earns the multiplier that was in effect before the
//! answer. Reaching `double_at` consecutive hits raises the multiplier to 2,
//! reaching `triple_at` raises it to 3. Any miss resets streak and
//! multiplier.

use crate::locale::{translate, Locale, TextKey};
use crate::matching::MatchResult;

/// Running score of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub total_questions: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub combo_multiplier: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            total_questions: 0,
            streak: 0,
            best_streak: 0,
            combo_multiplier: 1,
        }
    }
}

impl ScoreState {
    /// Score as a percentage of evaluated questions, rounded.
    ///
    /// Multiplied points count towards the score, so this can exceed 100.
    pub fn accuracy_percent(&self) -> Option<u32> {
        if self.total_questions == 0 {
            return None;
        }
        let ratio = f64::from(self.score) / f64::from(self.total_questions);
        Some((ratio * 100.0).round() as u32)
    }

    /// Whether a combo bonus is currently in effect.
    pub fn combo_active(&self) -> bool {
        self.combo_multiplier > 1
    }
}

/// Player-facing verdict on one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Perfect { points: u32 },
    Correct { points: u32 },
    TryAgain,
}

impl Feedback {
    /// Points earned by the answer.
    pub fn points(&self) -> u32 {
        match self {
            Self::Perfect { points } | Self::Correct { points } => *points,
            Self::TryAgain => 0,
        }
    }

    /// Localized feedback line, e.g. `Perfect! +2 points`.
    pub fn render(&self, locale: Locale) -> String {
        match self {
            Self::Perfect { points } => format!(
                "{} +{} {}",
                translate(locale, TextKey::PerfectFeedback),
                points,
                translate(locale, TextKey::PointsSuffix)
            ),
            Self::Correct { points } => format!(
                "{} +{} {}",
                translate(locale, TextKey::CorrectFeedback),
                points,
                translate(locale, TextKey::PointsSuffix)
            ),
            Self::TryAgain => translate(locale, TextKey::TryAgainFeedback).to_string(),
        }
    }
}

/// Result of scoring one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringResult {
    pub new_state: ScoreState,
    pub feedback: Feedback,
}

/// Streak thresholds for the combo multiplier.
#[derive(Debug, Clone)]
pub struct ComboRules {
    pub double_at: u32,
    pub triple_at: u32,
}

impl Default for ComboRules {
    fn default() -> Self {
        Self {
            double_at: 3,
            triple_at: 5,
        }
    }
}

impl ComboRules {
    /// Calculate the next score state after an evaluated answer.
    pub fn score(&self, state: &ScoreState, result: &MatchResult) -> ScoringResult {
        let total_questions = state.total_questions + 1;

        if !result.accepted {
            return ScoringResult {
                new_state: ScoreState {
                    total_questions,
                    streak: 0,
                    combo_multiplier: 1,
                    ..state.clone()
                },
                feedback: Feedback::TryAgain,
            };
        }

        let points = state.combo_multiplier;
        let streak = state.streak + 1;

        ScoringResult {
            new_state: ScoreState {
                score: state.score + points,
                total_questions,
                streak,
                best_streak: state.best_streak.max(streak),
                combo_multiplier: self.multiplier_for(streak, state.combo_multiplier),
            },
            feedback: if result.exact {
                Feedback::Perfect { points }
            } else {
                Feedback::Correct { points }
            },
        }
    }

    /// Multiplier only ratchets upward while the streak grows.
    fn multiplier_for(&self, streak: u32, current: u32) -> u32 {
        if streak >= self.triple_at {
            3
        } else if streak >= self.double_at {
            2
        } else {
            current
        }
    }
}
