//! Quiz sessions
//!
//! A [`QuizSession`] walks a fixed list of questions. Each question goes
//! through the same cycle: select an option, submit it, look at the reveal,
//! advance. Once the last question has been revealed the session finalizes
//! into a [`QuizOutcome`] whose star tier decides how many Eco Points are
//! awarded.

use crate::catalog::Quiz;
use crate::Timings;
use app_state::AppStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Quiz error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Submit pressed with nothing selected
    #[error("Please select an answer")]
    NoSelection,

    /// Option index out of range
    #[error("Invalid option: {0}")]
    InvalidOption(usize),

    /// Quiz has no questions
    #[error("Quiz has no questions")]
    Empty,

    /// Operation not valid in the current phase
    #[error("Cannot {action} while {phase}")]
    WrongPhase {
        /// Attempted operation
        action: &'static str,
        /// Current phase name
        phase: &'static str,
    },
}

/// Result type for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Stars and points earned for a final percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarTier {
    /// Stars out of three
    pub stars: u8,
    /// Eco Points awarded
    pub points: u64,
}

impl StarTier {
    /// Tier for a percentage in `0.0..=100.0`
    ///
    /// # Example
    ///
    /// ```
    /// use app_core::quiz::StarTier;
    ///
    /// assert_eq!(StarTier::for_percentage(100.0).stars, 3);
    /// assert_eq!(StarTier::for_percentage(66.7).points, 10);
    /// assert_eq!(StarTier::for_percentage(33.3).points, 0);
    /// ```
    pub fn for_percentage(percentage: f64) -> Self {
        let (stars, points) = if percentage >= 90.0 {
            (3, 30)
        } else if percentage >= 70.0 {
            (2, 20)
        } else if percentage >= 50.0 {
            (1, 10)
        } else {
            (0, 0)
        };
        Self { stars, points }
    }
}

/// Final result of a quiz
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    /// Correct answers
    pub score: usize,
    /// Number of questions
    pub total: usize,
    /// Score as a percentage
    pub percentage: f64,
    /// Earned tier
    pub tier: StarTier,
}

impl QuizOutcome {
    fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64 * 100.0
        };
        Self {
            score,
            total,
            percentage,
            tier: StarTier::for_percentage(percentage),
        }
    }

    /// Text for the completion dialog
    pub fn summary(&self) -> String {
        format!(
            "You scored {}/{}\n⭐ {} stars earned\n🌱 +{} Eco Points",
            self.score, self.total, self.tier.stars, self.tier.points
        )
    }
}

/// Where a session is in its cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizPhase {
    /// Waiting for an answer
    Answering,
    /// Showing whether the submitted answer was right
    Revealing {
        /// Whether the answer was correct
        correct: bool,
    },
    /// All questions answered
    Finished(QuizOutcome),
}

impl QuizPhase {
    fn name(&self) -> &'static str {
        match self {
            QuizPhase::Answering => "answering",
            QuizPhase::Revealing { .. } => "revealing",
            QuizPhase::Finished(_) => "finished",
        }
    }
}

/// How an option should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Plain option
    Idle,
    /// Currently selected, not yet submitted
    Selected,
    /// Revealed as the correct answer
    Correct,
    /// Revealed as the user's wrong answer
    Incorrect,
}

/// A quiz being played
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    current: usize,
    selected: Option<usize>,
    score: usize,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start a quiz at its first question
    pub fn new(quiz: Quiz) -> Result<Self> {
        if quiz.questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            quiz,
            current: 0,
            selected: None,
            score: 0,
            phase: QuizPhase::Answering,
        })
    }

    /// The quiz being played
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Current phase
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Zero-based index of the current question
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question on screen
    pub fn current_question(&self) -> &crate::catalog::QuizQuestion {
        &self.quiz.questions[self.current]
    }

    /// Progress label, e.g. "2/3"
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.current + 1, self.quiz.questions.len())
    }

    /// Progress fraction for the bar
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.quiz.questions.len() as f64
    }

    /// Correct answers so far
    pub fn score(&self) -> usize {
        self.score
    }

    /// Pending selection
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Final outcome once finished
    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.phase {
            QuizPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Pick an option for the current question
    pub fn select_answer(&mut self, index: usize) -> Result<()> {
        self.expect_answering("select")?;
        if index >= self.current_question().options.len() {
            return Err(QuizError::InvalidOption(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Submit the pending selection, returning whether it was correct
    pub fn submit(&mut self) -> Result<bool> {
        self.expect_answering("submit")?;
        let Some(choice) = self.selected else {
            warn!(quiz = %self.quiz.id, "Submit without a selection");
            return Err(QuizError::NoSelection);
        };
        let correct = choice == self.current_question().correct;
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealing { correct };
        Ok(correct)
    }

    /// Leave the reveal, moving to the next question or finishing
    ///
    /// Returns the outcome when the quiz has just finished.
    pub fn advance(&mut self) -> Result<Option<QuizOutcome>> {
        if !matches!(self.phase, QuizPhase::Revealing { .. }) {
            return Err(QuizError::WrongPhase {
                action: "advance",
                phase: self.phase.name(),
            });
        }

        if self.current + 1 < self.quiz.questions.len() {
            self.current += 1;
            self.selected = None;
            self.phase = QuizPhase::Answering;
            return Ok(None);
        }

        let outcome = QuizOutcome::new(self.score, self.quiz.questions.len());
        self.phase = QuizPhase::Finished(outcome);
        Ok(Some(outcome))
    }

    /// Submit, wait out the reveal, then advance
    ///
    /// When this finishes the quiz the earned points go to the store and the
    /// call waits the summary delay before returning the outcome.
    pub async fn submit_and_continue(
        &mut self,
        store: &AppStore,
        timings: &Timings,
    ) -> Result<Option<QuizOutcome>> {
        self.submit()?;
        tokio::time::sleep(timings.quiz_reveal()).await;

        let Some(outcome) = self.advance()? else {
            return Ok(None);
        };

        let balance = store.award_points(outcome.tier.points);
        info!(
            quiz = %self.quiz.id,
            score = outcome.score,
            total = outcome.total,
            stars = outcome.tier.stars,
            balance,
            "Quiz completed"
        );

        tokio::time::sleep(timings.quiz_summary()).await;
        Ok(Some(outcome))
    }

    /// Rendering state of an option
    pub fn option_state(&self, index: usize) -> OptionState {
        let question = self.current_question();
        match self.phase {
            QuizPhase::Answering if self.selected == Some(index) => OptionState::Selected,
            QuizPhase::Answering => OptionState::Idle,
            _ if index == question.correct => OptionState::Correct,
            _ if self.selected == Some(index) => OptionState::Incorrect,
            _ => OptionState::Idle,
        }
    }

    /// Explanation, visible only during the reveal
    pub fn explanation(&self) -> Option<&str> {
        match self.phase {
            QuizPhase::Revealing { .. } => Some(&self.current_question().explanation),
            _ => None,
        }
    }

    fn expect_answering(&self, action: &'static str) -> Result<()> {
        match self.phase {
            QuizPhase::Answering => Ok(()),
            other => Err(QuizError::WrongPhase {
                action,
                phase: other.name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ContentCatalog, DAILY_QUIZ_ID};
    use std::time::Duration;

    fn daily_quiz() -> QuizSession {
        let catalog = ContentCatalog::builtin();
        QuizSession::new(catalog.quiz(DAILY_QUIZ_ID).unwrap().clone()).unwrap()
    }

    #[test]
    fn test_star_tiers() {
        assert_eq!(StarTier::for_percentage(90.0), StarTier { stars: 3, points: 30 });
        assert_eq!(StarTier::for_percentage(89.9), StarTier { stars: 2, points: 20 });
        assert_eq!(StarTier::for_percentage(70.0), StarTier { stars: 2, points: 20 });
        assert_eq!(StarTier::for_percentage(50.0), StarTier { stars: 1, points: 10 });
        assert_eq!(StarTier::for_percentage(49.9), StarTier { stars: 0, points: 0 });
        assert_eq!(StarTier::for_percentage(0.0), StarTier { stars: 0, points: 0 });
    }

    #[test]
    fn test_tiers_are_monotonic() {
        let mut last = 0;
        for p in 0..=100 {
            let tier = StarTier::for_percentage(p as f64);
            assert!(tier.points >= last);
            last = tier.points;
        }
    }

    #[test]
    fn test_submit_requires_selection() {
        let mut session = daily_quiz();
        assert_eq!(session.submit(), Err(QuizError::NoSelection));
        assert_eq!(QuizError::NoSelection.to_string(), "Please select an answer");
        assert_eq!(session.phase(), QuizPhase::Answering);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut session = daily_quiz();
        assert_eq!(session.select_answer(4), Err(QuizError::InvalidOption(4)));
    }

    #[test]
    fn test_full_run_scores_two_of_three() {
        let mut session = daily_quiz();

        session.select_answer(1).unwrap();
        assert!(session.submit().unwrap());
        assert!(session.explanation().is_some());
        assert_eq!(session.option_state(1), OptionState::Correct);
        assert_eq!(session.advance().unwrap(), None);
        assert_eq!(session.progress_label(), "2/3");

        session.select_answer(3).unwrap();
        assert!(!session.submit().unwrap());
        assert_eq!(session.option_state(3), OptionState::Incorrect);
        assert_eq!(session.option_state(0), OptionState::Correct);
        session.advance().unwrap();

        session.select_answer(2).unwrap();
        session.submit().unwrap();
        let outcome = session.advance().unwrap().unwrap();

        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.tier, StarTier { stars: 1, points: 10 });
        assert_eq!(session.outcome(), Some(outcome));
        assert!(outcome.summary().starts_with("You scored 2/3"));
    }

    #[test]
    fn test_cannot_select_during_reveal() {
        let mut session = daily_quiz();
        session.select_answer(0).unwrap();
        session.submit().unwrap();
        assert!(matches!(
            session.select_answer(1),
            Err(QuizError::WrongPhase { action: "select", .. })
        ));
        assert!(matches!(session.submit(), Err(QuizError::WrongPhase { .. })));
    }

    #[test]
    fn test_advance_requires_reveal() {
        let mut session = daily_quiz();
        assert!(matches!(session.advance(), Err(QuizError::WrongPhase { .. })));
    }

    #[test]
    fn test_empty_quiz_rejected() {
        let quiz = Quiz {
            id: "empty".into(),
            title: "Empty".into(),
            questions: Vec::new(),
        };
        assert_eq!(QuizSession::new(quiz).unwrap_err(), QuizError::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn test_perfect_run_awards_thirty_points() {
        let store = AppStore::new();
        let timings = Timings::default();
        let mut session = daily_quiz();

        let start = tokio::time::Instant::now();
        for answer in [1, 0, 2] {
            session.select_answer(answer).unwrap();
            let outcome = session.submit_and_continue(&store, &timings).await.unwrap();
            if session.outcome().is_none() {
                assert!(outcome.is_none());
            }
        }

        assert_eq!(session.outcome().unwrap().tier.stars, 3);
        assert_eq!(store.eco_points(), 1280);
        // Three reveals plus the summary pause
        assert!(start.elapsed() >= Duration::from_millis(7000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_run_awards_nothing() {
        let store = AppStore::new();
        let mut session = daily_quiz();
        for answer in [0, 1, 0] {
            session.select_answer(answer).unwrap();
            session
                .submit_and_continue(&store, &Timings::default())
                .await
                .unwrap();
        }
        assert_eq!(session.outcome().unwrap().score, 0);
        assert_eq!(store.eco_points(), 1250);
    }
}
