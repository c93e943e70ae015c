//! Content catalog
//!
//! Every piece of static content the screens render (news cards, missions,
//! eco actions, rewards, learning material, community data) lives in one
//! typed [`ContentCatalog`]. Screens take the catalog by reference, so the
//! built-in content can be swapped for another source without touching them.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog parsed but is inconsistent
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

// =============================================================================
// Shared enums
// =============================================================================

/// Mission and group challenge difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Easy
    Easy,
    /// Medium
    Medium,
    /// Hard
    Hard,
}

impl Difficulty {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Eco action skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    /// Beginner
    Beginner,
    /// Intermediate
    Intermediate,
    /// Advanced
    Advanced,
}

impl SkillLevel {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

// =============================================================================
// Lock screen
// =============================================================================

/// Kind of lock-screen card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NewsKind {
    /// Global news
    #[serde(rename = "Global News")]
    Global,
    /// Local news
    #[serde(rename = "Local News")]
    Local,
    /// Daily quiz teaser
    Quiz,
}

impl NewsKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            NewsKind::Global => "Global News",
            NewsKind::Local => "Local News",
            NewsKind::Quiz => "Quiz",
        }
    }
}

/// A lock-screen news or quiz card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsCard {
    /// Card id
    pub id: u32,
    /// Card kind
    #[serde(rename = "type")]
    pub kind: NewsKind,
    /// Headline
    pub title: String,
    /// One-line summary
    pub summary: String,
    /// Points for reading
    pub points: u64,
    /// Icon name
    pub icon: String,
    /// Accent colour
    pub color: String,
}

/// A quick eco task on the lock screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockTask {
    /// Task id
    pub id: u32,
    /// Title
    pub title: String,
    /// Skill level
    pub difficulty: SkillLevel,
    /// Points on completion
    pub points: u64,
    /// Icon name
    pub icon: String,
    /// Accent colour
    pub color: String,
}

// =============================================================================
// Missions and eco actions
// =============================================================================

/// Mission catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionCategory {
    /// Everyday habits
    #[serde(rename = "Daily Life")]
    DailyLife,
    /// Food choices
    Food,
    /// Getting around
    Transport,
}

impl MissionCategory {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            MissionCategory::DailyLife => "Daily Life",
            MissionCategory::Food => "Food",
            MissionCategory::Transport => "Transport",
        }
    }

    /// All categories in filter order
    pub fn all() -> [MissionCategory; 3] {
        [
            MissionCategory::DailyLife,
            MissionCategory::Food,
            MissionCategory::Transport,
        ]
    }
}

/// A verifiable mission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Mission id
    pub id: u32,
    /// Title
    pub title: String,
    /// What to do
    pub description: String,
    /// Points on completion
    pub points: u64,
    /// Difficulty
    pub difficulty: Difficulty,
    /// Expected time, e.g. "5 min"
    pub duration: String,
    /// Category
    pub category: MissionCategory,
    /// Icon name
    pub icon: String,
    /// Accent colour
    pub color: String,
}

/// A self-reported eco action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoAction {
    /// Action id
    pub id: u32,
    /// Title
    pub title: String,
    /// What to do
    pub description: String,
    /// Points on completion
    pub points: u64,
    /// Skill level
    pub difficulty: SkillLevel,
    /// CO2 avoided, in kilograms
    pub co2_saved_kg: f64,
    /// Icon name
    pub icon: String,
}

/// A group of eco actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCategory {
    /// Category id
    pub id: String,
    /// Title
    pub title: String,
    /// Icon name
    pub icon: String,
    /// Accent colour
    pub color: String,
    /// Actions in display order
    pub actions: Vec<EcoAction>,
}

// =============================================================================
// Rewards and impact
// =============================================================================

/// Reward category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardCategory {
    /// Physical eco products
    #[serde(rename = "Eco Products")]
    EcoProducts,
    /// Store discounts
    Discounts,
    /// Events and workshops
    Experiences,
    /// Donations to causes
    Donations,
}

impl RewardCategory {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RewardCategory::EcoProducts => "Eco Products",
            RewardCategory::Discounts => "Discounts",
            RewardCategory::Experiences => "Experiences",
            RewardCategory::Donations => "Donations",
        }
    }

    /// All categories in filter order
    pub fn all() -> [RewardCategory; 4] {
        [
            RewardCategory::EcoProducts,
            RewardCategory::Discounts,
            RewardCategory::Experiences,
            RewardCategory::Donations,
        ]
    }
}

/// A redeemable reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    /// Reward id
    pub id: u32,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Cost in Eco Points
    pub points: u64,
    /// Category
    pub category: RewardCategory,
    /// Emoji artwork
    pub image: String,
    /// Whether the reward is in stock
    pub available: bool,
}

/// Status of a past redemption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedemptionStatus {
    /// Redeemed, awaiting fulfilment
    Redeemed,
    /// On its way
    Shipped,
    /// Already used
    Used,
}

/// A past redemption shown on the rewards dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentReward {
    /// Entry id
    pub id: u32,
    /// Reward title
    pub title: String,
    /// Points spent
    pub points: u64,
    /// Relative time, e.g. "2 days ago"
    pub date: String,
    /// Fulfilment status
    pub status: RedemptionStatus,
}

/// A headline environmental impact figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactStat {
    /// Icon name
    pub icon: String,
    /// Pre-formatted value, e.g. "1,250"
    pub value: String,
    /// Unit label
    pub unit: String,
    /// Stat label
    pub label: String,
    /// Accent colour
    pub color: String,
    /// Everyday equivalent
    pub description: String,
}

/// Impact for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyImpact {
    /// Month abbreviation
    pub month: String,
    /// CO2 saved in kilograms
    pub co2_kg: f64,
    /// Water saved in litres
    pub water_liters: f64,
    /// Waste diverted in kilograms
    pub waste_kg: f64,
}

/// An achievement badge with progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Achievement id
    pub id: u32,
    /// Title
    pub title: String,
    /// What earns it
    pub description: String,
    /// Icon name
    pub icon: String,
    /// Accent colour
    pub color: String,
    /// Progress percentage (0-100)
    pub progress: u8,
}

impl Achievement {
    /// Whether the badge is earned
    pub fn is_unlocked(&self) -> bool {
        self.progress >= 100
    }
}

/// A labelled figure on a stats card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    /// Label
    pub label: String,
    /// Pre-formatted value
    pub value: String,
    /// Icon name
    pub icon: String,
}

// =============================================================================
// Learning
// =============================================================================

/// A learning topic on the intelligence tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningTopic {
    /// Topic slug
    pub id: String,
    /// Title
    pub title: String,
    /// Icon name
    pub icon: String,
    /// Accent colour
    pub color: String,
    /// Completion percentage
    pub progress: u8,
    /// Number of lessons
    pub lessons: u32,
}

/// Progress in a subject on the learning dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProgress {
    /// Subject name
    pub subject: String,
    /// Completion percentage
    pub progress: u8,
    /// Accent colour
    pub color: String,
}

/// A bite-sized learning module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningModule {
    /// Module id
    pub id: u32,
    /// Title
    pub title: String,
    /// Points on completion
    pub points: u64,
    /// Expected time, e.g. "5 min"
    pub duration: String,
    /// Reading time label
    pub read_time: String,
    /// Icon name
    pub icon: String,
    /// Accent colour
    pub color: String,
    /// Reading content
    #[serde(default)]
    pub content: String,
    /// Quiz taken instead of reading, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<String>,
}

impl LearningModule {
    /// Whether the module opens as a quiz
    pub fn is_quiz(&self) -> bool {
        self.quiz.is_some() || self.title.contains("Quiz")
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question id
    pub id: u32,
    /// Question text
    pub question: String,
    /// Answer options
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct: usize,
    /// Explanation revealed after answering
    pub explanation: String,
}

/// A quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Quiz slug
    pub id: String,
    /// Title
    pub title: String,
    /// Questions in order
    pub questions: Vec<QuizQuestion>,
}

// =============================================================================
// Community
// =============================================================================

/// A post on the social feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    /// Post id
    pub id: u64,
    /// Author name
    pub user: String,
    /// Author avatar glyph
    pub avatar: String,
    /// Relative time
    pub time: String,
    /// Body text
    pub content: String,
    /// Like count
    pub likes: u32,
    /// Comment count
    pub comments: u32,
    /// Share count
    pub shares: u32,
    /// Whether the viewer liked it
    pub liked: bool,
    /// Emoji artwork
    #[serde(default)]
    pub image: Option<String>,
}

/// An activity entry on the community hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPost {
    /// Entry id
    pub id: u32,
    /// Member name
    pub user: String,
    /// Avatar glyph
    pub avatar: String,
    /// What they did
    pub action: String,
    /// Points earned
    pub points: u64,
    /// Relative time
    pub time: String,
    /// Like count
    pub likes: u32,
    /// Comment count
    pub comments: u32,
    /// Emoji artwork
    #[serde(default)]
    pub image: Option<String>,
}

/// A community-wide challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityChallenge {
    /// Challenge id
    pub id: u32,
    /// Title
    pub title: String,
    /// Goal
    pub description: String,
    /// Number of participants
    pub participants: u32,
    /// Days remaining
    pub days_left: u32,
    /// Points for finishing
    pub reward: u64,
    /// Accent colour
    pub color: String,
    /// Icon name
    pub icon: String,
}

/// Lifecycle of a group challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GroupChallengeStatus {
    /// Running now
    #[serde(rename_all = "camelCase")]
    Active {
        /// Days remaining
        days_left: u32,
        /// Progress percentage
        progress: u8,
        /// Whether the user takes part
        joined: bool,
    },
    /// Not started yet
    #[serde(rename_all = "camelCase")]
    Upcoming {
        /// Days until start
        starts_in: u32,
    },
    /// Finished
    #[serde(rename_all = "camelCase")]
    Completed {
        /// Points the user earned
        earned_points: u64,
    },
}

/// A challenge run by a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupChallenge {
    /// Challenge id
    pub id: u32,
    /// Title
    pub title: String,
    /// Goal
    pub description: String,
    /// Number of participants
    pub participants: u32,
    /// Points for finishing
    pub reward: u64,
    /// Difficulty, when rated
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Topic, e.g. "Food"
    #[serde(default)]
    pub category: Option<String>,
    /// Lifecycle state
    #[serde(flatten)]
    pub status: GroupChallengeStatus,
}

/// How busy a group is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupActivity {
    /// Very active
    #[serde(rename = "Very Active")]
    VeryActive,
    /// Active
    Active,
    /// Moderate
    Moderate,
}

impl GroupActivity {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            GroupActivity::VeryActive => "Very Active",
            GroupActivity::Active => "Active",
            GroupActivity::Moderate => "Moderate",
        }
    }
}

/// The user's role in a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupRole {
    /// Administrator
    Admin,
    /// Moderator
    Moderator,
    /// Regular member
    Member,
}

impl GroupRole {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            GroupRole::Admin => "Admin",
            GroupRole::Moderator => "Moderator",
            GroupRole::Member => "Member",
        }
    }
}

/// The user's membership details in a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    /// Role
    pub role: GroupRole,
    /// When the user joined, relative
    pub joined: String,
    /// Latest group activity
    pub recent_activity: String,
    /// Unread messages
    pub unread_messages: u32,
}

/// A community group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Group id
    pub id: u32,
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Member count
    pub members: u32,
    /// Activity level
    pub activity: GroupActivity,
    /// Avatar glyph
    pub avatar: String,
    /// Topic, for suggested groups
    #[serde(default)]
    pub category: Option<String>,
    /// Present when the user belongs to the group
    #[serde(default)]
    pub membership: Option<Membership>,
}

/// A leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Rank, 1-based
    pub rank: u32,
    /// Member name ("You" for the viewer)
    pub name: String,
    /// Weekly points
    pub points: u64,
    /// Badge glyph
    pub badge: String,
}

/// A fellow participant on the challenge details screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Participant id
    pub id: u32,
    /// Name
    pub name: String,
    /// Avatar glyph
    pub avatar: String,
    /// Progress percentage
    pub progress: u8,
}

// =============================================================================
// Catalog
// =============================================================================

/// All static content in the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    /// Lock-screen cards
    pub news: Vec<NewsCard>,
    /// Lock-screen quick tasks
    pub lock_tasks: Vec<LockTask>,
    /// Verifiable missions
    pub missions: Vec<Mission>,
    /// Eco action categories
    pub action_categories: Vec<ActionCategory>,
    /// Redeemable rewards
    pub rewards: Vec<Reward>,
    /// Past redemptions
    pub recent_rewards: Vec<RecentReward>,
    /// Headline impact figures
    pub impact_stats: Vec<ImpactStat>,
    /// Impact per month
    pub monthly_impact: Vec<MonthlyImpact>,
    /// Impact badges
    pub impact_achievements: Vec<Achievement>,
    /// Learning topics
    pub topics: Vec<LearningTopic>,
    /// Subject progress bars
    pub subject_progress: Vec<SubjectProgress>,
    /// Today's learning modules
    pub modules: Vec<LearningModule>,
    /// Learning badges
    pub learning_achievements: Vec<Achievement>,
    /// Quizzes
    pub quizzes: Vec<Quiz>,
    /// Social feed seed posts
    pub feed_posts: Vec<FeedPost>,
    /// Community hub activity
    pub activity_posts: Vec<ActivityPost>,
    /// Community-wide challenges
    pub community_challenges: Vec<CommunityChallenge>,
    /// Group challenges
    pub group_challenges: Vec<GroupChallenge>,
    /// Groups (joined and suggested)
    pub groups: Vec<Group>,
    /// Weekly leaderboard
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Participants shown on challenge details
    pub participants: Vec<Participant>,
    /// Tips shown on challenge details
    pub challenge_tips: Vec<String>,
    /// Profile badges
    pub profile_achievements: Vec<Achievement>,
    /// Profile stats
    pub profile_stats: Vec<StatCard>,
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Quiz shown when a quiz route carries no quiz id
pub const DAILY_QUIZ_ID: &str = "daily-climate";

/// Quiz shown by modules that carry no quiz id
pub const MODULE_QUIZ_ID: &str = "renewable-energy";

impl ContentCatalog {
    /// The content shipped with the app
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Load and validate a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check ids are unique and quizzes are answerable
    pub fn validate(&self) -> Result<()> {
        fn unique<T, I>(kind: &str, ids: I) -> Result<()>
        where
            T: Eq + Hash + fmt::Display + Copy,
            I: IntoIterator<Item = T>,
        {
            let mut seen = HashSet::new();
            for id in ids {
                if !seen.insert(id) {
                    return Err(CatalogError::Invalid(format!("duplicate {} id {}", kind, id)));
                }
            }
            Ok(())
        }

        unique("mission", self.missions.iter().map(|m| m.id))?;
        unique("reward", self.rewards.iter().map(|r| r.id))?;
        unique("news", self.news.iter().map(|n| n.id))?;
        unique("module", self.modules.iter().map(|m| m.id))?;
        unique(
            "action",
            self.action_categories
                .iter()
                .flat_map(|c| c.actions.iter().map(|a| a.id)),
        )?;
        unique("lock task", self.lock_tasks.iter().map(|t| t.id))?;
        unique("feed post", self.feed_posts.iter().map(|p| p.id))?;
        unique("community challenge", self.community_challenges.iter().map(|c| c.id))?;
        unique("group challenge", self.group_challenges.iter().map(|c| c.id))?;
        unique("group", self.groups.iter().map(|g| g.id))?;
        unique("participant", self.participants.iter().map(|p| p.id))?;

        for quiz in &self.quizzes {
            if quiz.questions.is_empty() {
                return Err(CatalogError::Invalid(format!("quiz {} has no questions", quiz.id)));
            }
            for question in &quiz.questions {
                if question.correct >= question.options.len() {
                    return Err(CatalogError::Invalid(format!(
                        "quiz {} question {} has no option {}",
                        quiz.id, question.id, question.correct
                    )));
                }
            }
        }

        for module in &self.modules {
            if let Some(quiz) = &module.quiz {
                if self.quiz(quiz).is_none() {
                    return Err(CatalogError::Invalid(format!(
                        "module {} points at unknown quiz {}",
                        module.id, quiz
                    )));
                }
            }
        }

        Ok(())
    }

    /// Find a news card
    pub fn news_item(&self, id: u32) -> Option<&NewsCard> {
        self.news.iter().find(|n| n.id == id)
    }

    /// Find a mission
    pub fn mission(&self, id: u32) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    /// Find an eco action in any category
    pub fn action(&self, id: u32) -> Option<&EcoAction> {
        self.action_categories
            .iter()
            .flat_map(|c| c.actions.iter())
            .find(|a| a.id == id)
    }

    /// Find a reward
    pub fn reward(&self, id: u32) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }

    /// Find a learning module
    pub fn module(&self, id: u32) -> Option<&LearningModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Find a quiz
    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// Find a community challenge
    pub fn community_challenge(&self, id: u32) -> Option<&CommunityChallenge> {
        self.community_challenges.iter().find(|c| c.id == id)
    }

    /// Find a group
    pub fn group(&self, id: u32) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ContentCatalog::builtin();
        catalog.validate().unwrap();
        assert_eq!(catalog.news.len(), 3);
        assert_eq!(catalog.missions.len(), 3);
        assert_eq!(catalog.action_categories.len(), 3);
        assert!(catalog.quiz(DAILY_QUIZ_ID).is_some());
        assert!(catalog.quiz(MODULE_QUIZ_ID).is_some());
    }

    #[test]
    fn test_lookups() {
        let catalog = ContentCatalog::builtin();
        assert_eq!(catalog.mission(1).map(|m| m.points), Some(15));
        assert_eq!(catalog.action(5).map(|a| a.title.as_str()), Some("Bike to Work"));
        assert!(catalog.reward(999).is_none());
        assert_eq!(catalog.news_item(3).map(|n| n.kind), Some(NewsKind::Quiz));
    }

    #[test]
    fn test_json_round_trip_through_validation() {
        let catalog = ContentCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed = ContentCatalog::from_json(&json).unwrap();
        assert_eq!(parsed.missions, catalog.missions);
        assert_eq!(parsed.rewards, catalog.rewards);
        assert_eq!(parsed.quizzes, catalog.quizzes);
        assert_eq!(parsed.group_challenges, catalog.group_challenges);
        assert_eq!(parsed.groups, catalog.groups);
    }

    #[test]
    fn test_enum_labels_match_wire_names() {
        let json = serde_json::to_string(&MissionCategory::DailyLife).unwrap();
        assert_eq!(json, "\"Daily Life\"");
        let json = serde_json::to_string(&RewardCategory::EcoProducts).unwrap();
        assert_eq!(json, "\"Eco Products\"");
        let json = serde_json::to_string(&NewsKind::Global).unwrap();
        assert_eq!(json, "\"Global News\"");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = ContentCatalog::builtin();
        let copy = catalog.missions[0].clone();
        catalog.missions.push(copy);
        assert!(matches!(catalog.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_duplicate_ids_in_override_rejected() {
        let builtin = serde_json::to_value(ContentCatalog::builtin()).unwrap();
        for (key, kind) in [
            ("lockTasks", "lock task"),
            ("feedPosts", "feed post"),
            ("communityChallenges", "community challenge"),
            ("groupChallenges", "group challenge"),
            ("groups", "group"),
            ("participants", "participant"),
        ] {
            let mut json = builtin.clone();
            let items = json[key].as_array_mut().unwrap();
            let first = items[0].clone();
            items.push(first);

            let err = ContentCatalog::from_json(&json.to_string()).unwrap_err();
            assert!(
                err.to_string().contains(&format!("duplicate {} id", kind)),
                "{}: {}",
                key,
                err
            );
        }
    }

    #[test]
    fn test_out_of_range_answer_rejected() {
        let mut catalog = ContentCatalog::builtin();
        catalog.quizzes[0].questions[0].correct = 10;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("has no option 10"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            ContentCatalog::from_json("{\"news\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_module_opens_as_quiz() {
        let catalog = ContentCatalog::builtin();
        assert!(!catalog.module(1).unwrap().is_quiz());
        assert!(catalog.module(2).unwrap().is_quiz());
    }

    #[test]
    fn test_group_challenge_status_is_flattened() {
        let catalog = ContentCatalog::builtin();
        let json = serde_json::to_value(&catalog.group_challenges[0]).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["daysLeft"], 3);
    }
}
