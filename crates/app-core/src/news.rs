//! Lock screen and news
//!
//! The lock screen shows a clock, news and quiz cards, and quick eco tasks.
//! Pressing a card or task credits its points. Opening a news card leads to
//! the details screen where the article can be shared or saved.

use crate::catalog::{ContentCatalog, LockTask, NewsCard};
use app_state::AppStore;
use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::info;

/// Points for sharing an article
pub const SHARE_POINTS: u64 = 3;

/// News error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsError {
    /// No card with this id
    #[error("News item not found: {0}")]
    NotFound(u32),

    /// No task with this id
    #[error("Task not found: {0}")]
    TaskNotFound(u32),
}

/// Result type for news operations
pub type Result<T> = std::result::Result<T, NewsError>;

/// Lock screen clock text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    /// 24-hour time, e.g. "09:05"
    pub time: String,
    /// Long date, e.g. "Monday, January 6"
    pub date: String,
}

impl Clock {
    /// Clock for a given moment
    pub fn at(moment: NaiveDateTime) -> Self {
        Self {
            time: moment.format("%H:%M").to_string(),
            date: moment.format("%A, %B %-d").to_string(),
        }
    }

    /// Clock for the current local time
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }
}

/// The lock screen
#[derive(Debug)]
pub struct LockScreen<'a> {
    catalog: &'a ContentCatalog,
    store: AppStore,
}

impl<'a> LockScreen<'a> {
    /// Open the lock screen
    pub fn new(catalog: &'a ContentCatalog, store: AppStore) -> Self {
        Self { catalog, store }
    }

    /// News and quiz cards
    pub fn cards(&self) -> &'a [NewsCard] {
        &self.catalog.news
    }

    /// Quick eco tasks
    pub fn tasks(&self) -> &'a [LockTask] {
        &self.catalog.lock_tasks
    }

    /// Current balance for the header badge
    pub fn eco_points(&self) -> u64 {
        self.store.eco_points()
    }

    /// Credit a card's points, returning the new balance
    pub fn press_card(&self, id: u32) -> Result<u64> {
        let card = self.catalog.news_item(id).ok_or(NewsError::NotFound(id))?;
        let balance = self.store.award_points(card.points);
        info!(card = id, kind = card.kind.label(), points = card.points, balance, "Lock screen card read");
        Ok(balance)
    }

    /// Credit a task's points, returning the new balance
    pub fn press_task(&self, id: u32) -> Result<u64> {
        let task = self
            .catalog
            .lock_tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(NewsError::TaskNotFound(id))?;
        let balance = self.store.award_points(task.points);
        info!(task = id, points = task.points, balance, "Lock screen task done");
        Ok(balance)
    }
}

/// Content handed to the platform share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContent {
    /// Sheet title
    pub title: String,
    /// Message body
    pub message: String,
}

/// The news details screen
#[derive(Debug, Clone)]
pub struct NewsDetails {
    item: NewsCard,
    saved: bool,
    share_points: u64,
}

impl NewsDetails {
    /// Open a card from the catalog
    pub fn open(catalog: &ContentCatalog, id: u32, share_points: u64) -> Result<Self> {
        let item = catalog.news_item(id).ok_or(NewsError::NotFound(id))?.clone();
        Ok(Self {
            item,
            saved: false,
            share_points,
        })
    }

    /// The card on screen
    pub fn item(&self) -> &NewsCard {
        &self.item
    }

    /// Whether the article is saved
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Flip the saved flag, returning the new value
    pub fn toggle_saved(&mut self) -> bool {
        self.saved = !self.saved;
        self.saved
    }

    /// Share sheet payload
    pub fn share_content(&self) -> ShareContent {
        ShareContent {
            title: self.item.title.clone(),
            message: format!(
                "Check out this environmental news: {}\n\n{}",
                self.item.title, self.item.summary
            ),
        }
    }

    /// Record a completed share and award the share bonus
    pub fn shared(&self, store: &AppStore) -> u64 {
        let balance = store.award_points(self.share_points);
        info!(news = self.item.id, points = self.share_points, balance, "Article shared");
        balance
    }

    /// Full article body built around the summary
    pub fn full_article(&self) -> String {
        format!(
            "{}\n\n\
             This groundbreaking development represents a significant step forward in our global fight against climate change. \
             Environmental experts worldwide are closely monitoring the situation and its potential long-term impacts.\n\n\
             The initiative involves collaboration between multiple stakeholders, including government agencies, environmental \
             organizations, and local communities. This comprehensive approach ensures that all aspects of environmental \
             protection are addressed effectively.\n\n\
             Key highlights include:\n\
             • Innovative sustainable technologies\n\
             • Community engagement programs\n\
             • Long-term environmental monitoring\n\
             • Educational outreach initiatives\n\n\
             Scientists emphasize that such developments are crucial for achieving our climate goals and creating a more \
             sustainable future for generations to come. The project serves as a model for similar initiatives worldwide.\n\n\
             Local communities have responded positively to these changes, with many residents actively participating in \
             related environmental programs. This grassroots support is essential for the long-term success of any \
             environmental initiative.\n\n\
             The economic benefits are also significant, with the project expected to create numerous green jobs and \
             stimulate sustainable economic growth in the region.\n\n\
             Environmental advocates stress the importance of continued public support and engagement to ensure the success \
             of such initiatives. Every individual action contributes to the larger goal of environmental protection and \
             sustainability.",
            self.item.summary
        )
    }
}
