//! Learning
//!
//! Topics, today's modules, reading a module and the single-question
//! interactive quiz a module can open instead.

use crate::catalog::{Achievement, ContentCatalog, LearningModule, MODULE_QUIZ_ID};
use crate::quiz::{QuizError, QuizSession};
use crate::Timings;
use app_state::AppStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Points for a correct interactive quiz answer
pub const INTERACTIVE_QUIZ_POINTS: u64 = 15;

/// Learning error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearningError {
    /// No module with this id
    #[error("Module not found: {0}")]
    ModuleNotFound(u32),

    /// No quiz with this id
    #[error("Quiz not found: {0}")]
    QuizNotFound(String),

    /// Module already completed
    #[error("Module already completed")]
    AlreadyCompleted,

    /// Quiz flow error
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Result type for learning operations
pub type Result<T> = std::result::Result<T, LearningError>;

/// Screen a module opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleDestination {
    /// Reading screen
    Reading(u32),
    /// Interactive quiz screen
    Quiz(u32),
}

/// Where tapping a module on the dashboard leads
pub fn open_module(module: &LearningModule) -> ModuleDestination {
    if module.is_quiz() {
        ModuleDestination::Quiz(module.id)
    } else {
        ModuleDestination::Reading(module.id)
    }
}

/// Resolve a route's module parameter, defaulting to the first module
pub fn resolve_module(catalog: &ContentCatalog, id: Option<u32>) -> Result<&LearningModule> {
    match id {
        Some(id) => catalog.module(id).ok_or(LearningError::ModuleNotFound(id)),
        None => catalog.modules.first().ok_or(LearningError::ModuleNotFound(0)),
    }
}

/// Unlocked badges first, in catalog order within each group
pub fn achievements_by_status(achievements: &[Achievement]) -> (Vec<&Achievement>, Vec<&Achievement>) {
    achievements.iter().partition(|a| a.is_unlocked())
}

/// Reading screen for one module
#[derive(Debug, Clone)]
pub struct ModuleReader {
    module: LearningModule,
    bookmarked: bool,
    completed: bool,
}

impl ModuleReader {
    /// Open a module
    pub fn new(module: LearningModule) -> Self {
        Self {
            module,
            bookmarked: false,
            completed: false,
        }
    }

    /// The module on screen
    pub fn module(&self) -> &LearningModule {
        &self.module
    }

    /// Whether the module is bookmarked
    pub fn is_bookmarked(&self) -> bool {
        self.bookmarked
    }

    /// Flip the bookmark, returning the new value
    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarked = !self.bookmarked;
        self.bookmarked
    }

    /// Award the module's points; the screen closes afterwards
    pub fn complete(&mut self, store: &AppStore) -> Result<u64> {
        if self.completed {
            return Err(LearningError::AlreadyCompleted);
        }
        self.completed = true;
        let balance = store.award_points(self.module.points);
        info!(module = self.module.id, points = self.module.points, balance, "Module completed");
        Ok(balance)
    }
}

/// Result of answering the interactive quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveResult {
    /// Whether the answer was right
    pub correct: bool,
    /// Points awarded
    pub points: u64,
}

/// Single-question quiz opened from a module
#[derive(Debug, Clone)]
pub struct InteractiveQuiz {
    session: QuizSession,
    reward: u64,
}

impl InteractiveQuiz {
    /// Open the quiz a module points at
    pub fn for_module(catalog: &ContentCatalog, module: &LearningModule, reward: u64) -> Result<Self> {
        let quiz_id = module.quiz.as_deref().unwrap_or(MODULE_QUIZ_ID);
        let quiz = catalog
            .quiz(quiz_id)
            .ok_or_else(|| LearningError::QuizNotFound(quiz_id.to_string()))?;
        Ok(Self {
            session: QuizSession::new(quiz.clone())?,
            reward,
        })
    }

    /// Underlying session
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Pick an option
    pub fn select_answer(&mut self, index: usize) -> Result<()> {
        Ok(self.session.select_answer(index)?)
    }

    /// Submit, award points if right, then wait out the reveal
    ///
    /// The screen closes once this returns.
    pub async fn answer(&mut self, store: &AppStore, timings: &Timings) -> Result<InteractiveResult> {
        let correct = self.session.submit()?;
        let points = if correct { self.reward } else { 0 };
        if correct {
            let balance = store.award_points(points);
            info!(quiz = %self.session.quiz().id, points, balance, "Interactive quiz answered");
        }
        tokio::time::sleep(timings.quiz_reveal()).await;
        Ok(InteractiveResult { correct, points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_quiz_titled_modules_open_quiz() {
        let catalog = ContentCatalog::builtin();
        assert_eq!(open_module(catalog.module(1).unwrap()), ModuleDestination::Reading(1));
        assert_eq!(open_module(catalog.module(2).unwrap()), ModuleDestination::Quiz(2));

        let mut titled = catalog.module(1).unwrap().clone();
        titled.title = "Recycling Quiz".into();
        assert_eq!(open_module(&titled), ModuleDestination::Quiz(1));
    }

    #[test]
    fn test_complete_module_once() {
        let catalog = ContentCatalog::builtin();
        let store = AppStore::new();
        let mut reader = ModuleReader::new(resolve_module(&catalog, None).unwrap().clone());

        assert!(reader.toggle_bookmark());
        assert!(!reader.toggle_bookmark());

        assert_eq!(reader.complete(&store).unwrap(), 1265);
        assert_eq!(reader.complete(&store), Err(LearningError::AlreadyCompleted));
        assert_eq!(store.eco_points(), 1265);
    }

    #[test]
    fn test_unknown_module() {
        let catalog = ContentCatalog::builtin();
        assert_eq!(
            resolve_module(&catalog, Some(9)).unwrap_err(),
            LearningError::ModuleNotFound(9)
        );
    }

    #[test]
    fn test_achievement_partition() {
        let catalog = ContentCatalog::builtin();
        let (unlocked, locked) = achievements_by_status(&catalog.learning_achievements);
        assert_eq!(unlocked.len(), 2);
        assert_eq!(locked[0].title, "Climate Expert");
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_interactive_answer_awards_reward() {
        let catalog = ContentCatalog::builtin();
        let store = AppStore::new();
        let module = catalog.module(2).unwrap();
        let mut quiz = InteractiveQuiz::for_module(&catalog, module, INTERACTIVE_QUIZ_POINTS).unwrap();

        quiz.select_answer(1).unwrap();
        let start = tokio::time::Instant::now();
        let result = quiz.answer(&store, &Timings::default()).await.unwrap();

        assert_eq!(result, InteractiveResult { correct: true, points: 15 });
        assert_eq!(store.eco_points(), 1265);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_wrong_interactive_answer_awards_nothing() {
        let catalog = ContentCatalog::builtin();
        let store = AppStore::new();
        let mut quiz =
            InteractiveQuiz::for_module(&catalog, catalog.module(2).unwrap(), 15).unwrap();

        quiz.select_answer(0).unwrap();
        let result = quiz.answer(&store, &Timings::instant()).await.unwrap();
        assert!(!result.correct);
        assert_eq!(store.eco_points(), 1250);
    }

    #[tokio::test]
    async fn test_interactive_answer_requires_selection() {
        let catalog = ContentCatalog::builtin();
        let mut quiz =
            InteractiveQuiz::for_module(&catalog, catalog.module(2).unwrap(), 15).unwrap();
        let err = quiz.answer(&AppStore::new(), &Timings::instant()).await.unwrap_err();
        assert_eq!(err, LearningError::Quiz(QuizError::NoSelection));
    }
}
