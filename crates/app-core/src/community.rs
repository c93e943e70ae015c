//! Community
//!
//! Social feed, the community hub with its leaderboard, group challenges,
//! groups and the challenge details screen. All state here is per screen;
//! only the leaderboard reads the shared balance.

use crate::catalog::{
    ActivityPost, CommunityChallenge, ContentCatalog, FeedPost, Group, GroupChallenge,
    GroupChallengeStatus, GroupRole, LeaderboardEntry, Membership, Participant,
};
use app_state::{AppStore, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name shown for the viewer when nobody is signed in
pub const VIEWER_NAME: &str = "You";

/// Avatar for new posts when nobody is signed in
const FALLBACK_POST_AVATAR: &str = "🌱";

/// Avatar for the viewer's participant row when nobody is signed in
const FALLBACK_PARTICIPANT_AVATAR: &str = "🌟";

/// Progress shown for the viewer once they join a challenge
const JOINED_PROGRESS: u8 = 45;

/// Community error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommunityError {
    /// No post with this id
    #[error("Post not found: {0}")]
    PostNotFound(u64),

    /// No challenge with this id
    #[error("Challenge not found: {0}")]
    ChallengeNotFound(u32),

    /// No group with this id
    #[error("Group not found: {0}")]
    GroupNotFound(u32),

    /// Comment was blank
    #[error("Comment cannot be empty")]
    EmptyComment,

    /// Post was blank
    #[error("Post cannot be empty")]
    EmptyPost,

    /// Already taking part
    #[error("You're already participating in this challenge!")]
    AlreadyJoined,

    /// Challenge is upcoming or finished
    #[error("\"{0}\" is not open for joining")]
    ChallengeClosed(String),

    /// Already a member of the group
    #[error("You are already a member of {0}")]
    AlreadyMember(String),

    /// Not a member of the group
    #[error("You are not a member of {0}")]
    NotMember(String),
}

/// Result type for community operations
pub type Result<T> = std::result::Result<T, CommunityError>;

fn viewer_name(user: Option<&User>) -> String {
    user.map(|u| u.name.clone())
        .unwrap_or_else(|| VIEWER_NAME.to_string())
}

// =============================================================================
// Social feed
// =============================================================================

/// A comment on a feed post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Author name
    pub user: String,
    /// Trimmed text
    pub text: String,
}

/// The social feed screen
#[derive(Debug, Clone)]
pub struct SocialFeed {
    posts: Vec<FeedPost>,
    comments: HashMap<u64, Vec<Comment>>,
    next_id: u64,
}

impl SocialFeed {
    /// Seed the feed from the catalog
    pub fn new(catalog: &ContentCatalog) -> Self {
        let posts = catalog.feed_posts.clone();
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            posts,
            comments: HashMap::new(),
            next_id,
        }
    }

    /// Posts, newest first
    pub fn posts(&self) -> &[FeedPost] {
        &self.posts
    }

    /// Find a post
    pub fn post(&self, id: u64) -> Option<&FeedPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn post_mut(&mut self, id: u64) -> Result<&mut FeedPost> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CommunityError::PostNotFound(id))
    }

    /// Flip the like on a post, returning the new like count
    pub fn toggle_like(&mut self, id: u64) -> Result<u32> {
        let post = self.post_mut(id)?;
        if post.liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes = post.likes.saturating_add(1);
        }
        post.liked = !post.liked;
        debug!(post = id, liked = post.liked, likes = post.likes, "Like toggled");
        Ok(post.likes)
    }

    /// Comments added to a post on this screen
    pub fn comments(&self, id: u64) -> &[Comment] {
        self.comments.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Add a comment; blank text is rejected
    pub fn add_comment(&mut self, id: u64, text: &str, user: Option<&User>) -> Result<&Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CommunityError::EmptyComment);
        }
        let post = self.post_mut(id)?;
        post.comments = post.comments.saturating_add(1);

        let thread = self.comments.entry(id).or_default();
        thread.push(Comment {
            user: viewer_name(user),
            text: text.to_string(),
        });
        Ok(&thread[thread.len() - 1])
    }

    /// Publish a new post at the top of the feed
    pub fn create_post(&mut self, text: &str, user: Option<&User>) -> Result<&FeedPost> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CommunityError::EmptyPost);
        }
        let post = FeedPost {
            id: self.next_id,
            user: viewer_name(user),
            avatar: user
                .map(|u| u.avatar.clone())
                .unwrap_or_else(|| FALLBACK_POST_AVATAR.to_string()),
            time: "now".into(),
            content: text.to_string(),
            likes: 0,
            comments: 0,
            shares: 0,
            liked: false,
            image: None,
        };
        self.next_id += 1;
        info!(post = post.id, "Post created");
        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }

    /// Share a post, returning the acknowledgement
    pub fn share(&self, id: u64) -> Result<&'static str> {
        self.post(id).ok_or(CommunityError::PostNotFound(id))?;
        Ok("Post shared successfully!")
    }
}

// =============================================================================
// Community hub
// =============================================================================

/// Tabs on the community hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HubTab {
    /// Activity feed
    #[default]
    Feed,
    /// Community challenges
    Challenges,
    /// Weekly leaderboard
    Leaderboard,
}

/// The community hub screen
#[derive(Debug)]
pub struct CommunityHub<'a> {
    catalog: &'a ContentCatalog,
    store: AppStore,
    tab: HubTab,
}

impl<'a> CommunityHub<'a> {
    /// Open the hub on the feed tab
    pub fn new(catalog: &'a ContentCatalog, store: AppStore) -> Self {
        Self {
            catalog,
            store,
            tab: HubTab::default(),
        }
    }

    /// Selected tab
    pub fn tab(&self) -> HubTab {
        self.tab
    }

    /// Switch tab
    pub fn select_tab(&mut self, tab: HubTab) {
        self.tab = tab;
    }

    /// Member activity
    pub fn posts(&self) -> &'a [ActivityPost] {
        &self.catalog.activity_posts
    }

    /// Running challenges
    pub fn challenges(&self) -> &'a [CommunityChallenge] {
        &self.catalog.community_challenges
    }

    /// Weekly leaderboard with the viewer's row read from the balance
    ///
    /// Rows are re-ranked by points after the viewer's score is updated.
    /// Badges belong to positions, so each row takes the badge seeded for
    /// its new rank.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let balance = self.store.eco_points();
        let mut seeded: Vec<&LeaderboardEntry> = self.catalog.leaderboard.iter().collect();
        seeded.sort_by_key(|row| row.rank);
        let badges: Vec<String> = seeded.into_iter().map(|row| row.badge.clone()).collect();

        let mut rows: Vec<LeaderboardEntry> = self
            .catalog
            .leaderboard
            .iter()
            .cloned()
            .map(|mut row| {
                if row.name == VIEWER_NAME {
                    row.points = balance;
                }
                row
            })
            .collect();
        rows.sort_by(|a, b| b.points.cmp(&a.points));
        for (i, row) in rows.iter_mut().enumerate() {
            row.rank = i as u32 + 1;
            if let Some(badge) = badges.get(i) {
                row.badge = badge.clone();
            }
        }
        rows
    }
}

// =============================================================================
// Group challenges
// =============================================================================

/// Tabs on the group challenges screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChallengeTab {
    /// Running now
    #[default]
    Active,
    /// Starting soon
    Upcoming,
    /// Finished
    Completed,
}

impl ChallengeTab {
    /// Whether a challenge belongs in this tab
    pub fn contains(&self, challenge: &GroupChallenge) -> bool {
        matches!(
            (self, &challenge.status),
            (ChallengeTab::Active, GroupChallengeStatus::Active { .. })
                | (ChallengeTab::Upcoming, GroupChallengeStatus::Upcoming { .. })
                | (ChallengeTab::Completed, GroupChallengeStatus::Completed { .. })
        )
    }
}

/// The group challenges screen
#[derive(Debug, Clone)]
pub struct GroupChallengeBoard {
    challenges: Vec<GroupChallenge>,
    tab: ChallengeTab,
}

impl GroupChallengeBoard {
    /// Seed from the catalog on the active tab
    pub fn new(catalog: &ContentCatalog) -> Self {
        Self {
            challenges: catalog.group_challenges.clone(),
            tab: ChallengeTab::default(),
        }
    }

    /// Switch tab
    pub fn select_tab(&mut self, tab: ChallengeTab) {
        self.tab = tab;
    }

    /// Challenges on the selected tab
    pub fn visible(&self) -> Vec<&GroupChallenge> {
        self.challenges.iter().filter(|c| self.tab.contains(c)).collect()
    }

    /// Find a challenge
    pub fn challenge(&self, id: u32) -> Option<&GroupChallenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Confirmation prompt shown before joining
    pub fn confirm_prompt(challenge: &GroupChallenge) -> String {
        format!("Are you sure you want to join \"{}\"?", challenge.title)
    }

    /// Join an active challenge
    pub fn join(&mut self, id: u32) -> Result<&GroupChallenge> {
        let challenge = self
            .challenges
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CommunityError::ChallengeNotFound(id))?;

        match &mut challenge.status {
            GroupChallengeStatus::Active { joined: true, .. } => {
                warn!(challenge = id, "Challenge already joined");
                Err(CommunityError::AlreadyJoined)
            }
            GroupChallengeStatus::Active { joined, .. } => {
                *joined = true;
                challenge.participants = challenge.participants.saturating_add(1);
                info!(challenge = id, "Group challenge joined");
                Ok(challenge)
            }
            _ => Err(CommunityError::ChallengeClosed(challenge.title.clone())),
        }
    }
}

// =============================================================================
// Groups
// =============================================================================

/// Actions on a joined group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupAction {
    /// Open group messages
    Message,
    /// Open group settings
    Settings,
    /// Leave the group
    Leave,
}

/// The my-groups screen
#[derive(Debug, Clone)]
pub struct MyGroups {
    groups: Vec<Group>,
}

impl MyGroups {
    /// Seed from the catalog
    pub fn new(catalog: &ContentCatalog) -> Self {
        Self {
            groups: catalog.groups.clone(),
        }
    }

    /// Groups the user belongs to
    pub fn joined(&self) -> Vec<&Group> {
        self.groups.iter().filter(|g| g.membership.is_some()).collect()
    }

    /// Groups suggested to the user
    pub fn suggested(&self) -> Vec<&Group> {
        self.groups.iter().filter(|g| g.membership.is_none()).collect()
    }

    /// Total unread messages across joined groups
    pub fn unread_total(&self) -> u32 {
        self.groups
            .iter()
            .filter_map(|g| g.membership.as_ref())
            .map(|m| m.unread_messages)
            .sum()
    }

    fn group_mut(&mut self, id: u32) -> Result<&mut Group> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(CommunityError::GroupNotFound(id))
    }

    /// Join a suggested group, returning the success message
    pub fn join(&mut self, id: u32) -> Result<String> {
        let group = self.group_mut(id)?;
        if group.membership.is_some() {
            return Err(CommunityError::AlreadyMember(group.name.clone()));
        }
        group.membership = Some(Membership {
            role: GroupRole::Member,
            joined: "just now".into(),
            recent_activity: String::new(),
            unread_messages: 0,
        });
        group.members = group.members.saturating_add(1);
        info!(group = id, "Group joined");
        Ok(format!("You have joined {}!", group.name))
    }

    /// Run an action on a joined group, returning the message to show
    pub fn act(&mut self, id: u32, action: GroupAction) -> Result<String> {
        let group = self.group_mut(id)?;
        if group.membership.is_none() {
            return Err(CommunityError::NotMember(group.name.clone()));
        }
        match action {
            GroupAction::Message => Ok(format!("Opening messages for {}", group.name)),
            GroupAction::Settings => Ok(format!("Group settings for {}", group.name)),
            GroupAction::Leave => {
                group.membership = None;
                group.members = group.members.saturating_sub(1);
                info!(group = id, "Group left");
                Ok(format!("You have left {}", group.name))
            }
        }
    }
}

// =============================================================================
// Challenge details
// =============================================================================

/// The challenge details screen
#[derive(Debug, Clone)]
pub struct ChallengeDetails {
    challenge: CommunityChallenge,
    joined: bool,
}

impl ChallengeDetails {
    /// Open a community challenge
    pub fn open(catalog: &ContentCatalog, id: u32) -> Result<Self> {
        let challenge = catalog
            .community_challenge(id)
            .ok_or(CommunityError::ChallengeNotFound(id))?
            .clone();
        Ok(Self {
            challenge,
            joined: false,
        })
    }

    /// The challenge on screen
    pub fn challenge(&self) -> &CommunityChallenge {
        &self.challenge
    }

    /// Whether the viewer joined
    pub fn is_joined(&self) -> bool {
        self.joined
    }

    /// Join once, returning the success message
    pub fn join(&mut self) -> Result<String> {
        if self.joined {
            return Err(CommunityError::AlreadyJoined);
        }
        self.joined = true;
        info!(challenge = self.challenge.id, "Challenge joined");
        Ok(format!(
            "You've successfully joined \"{}\". Good luck achieving your eco goals!",
            self.challenge.title
        ))
    }

    /// Other participants followed by the viewer
    pub fn participants(&self, catalog: &ContentCatalog, user: Option<&User>) -> Vec<Participant> {
        let mut rows = catalog.participants.clone();
        let next_id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        rows.push(Participant {
            id: next_id,
            name: VIEWER_NAME.into(),
            avatar: user
                .map(|u| u.avatar.clone())
                .unwrap_or_else(|| FALLBACK_PARTICIPANT_AVATAR.to_string()),
            progress: if self.joined { JOINED_PROGRESS } else { 0 },
        });
        rows
    }

    /// Tips for taking part
    pub fn tips<'c>(&self, catalog: &'c ContentCatalog) -> &'c [String] {
        &catalog.challenge_tips
    }
}
