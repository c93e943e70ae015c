//! Session user model
//!
//! The signed-in user lives only in memory for the lifetime of the session.
//! There is no backend behind it: login and sign-up build a [`User`] locally
//! and hand it to the store.

use serde::{Deserialize, Serialize};

/// Default avatar glyph for new accounts
pub const DEFAULT_AVATAR: &str = "🌱";

/// Level label shown when the user record carries none
pub const DEFAULT_LEVEL: &str = "Eco Beginner";

/// Greeting name used when nobody is signed in
pub const GUEST_NAME: &str = "Guest";

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Local identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar glyph (an emoji)
    pub avatar: String,
    /// Level label, e.g. "Eco Beginner"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Consecutive active days
    #[serde(default)]
    pub streak: u32,
    /// Starting balance carried by the login payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco_points: Option<u64>,
}

impl User {
    /// Create a user with the default avatar and no level or balance
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: DEFAULT_AVATAR.to_string(),
            level: None,
            streak: 0,
            eco_points: None,
        }
    }

    /// Set the level label
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Set the streak count
    pub fn with_streak(mut self, streak: u32) -> Self {
        self.streak = streak;
        self
    }

    /// Set the starting balance
    pub fn with_eco_points(mut self, points: u64) -> Self {
        self.eco_points = Some(points);
        self
    }

    /// Level label, falling back to [`DEFAULT_LEVEL`]
    pub fn level_label(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LEVEL)
    }
}

/// Name to greet on the home screen
pub fn display_name(user: Option<&User>) -> &str {
    user.map(|u| u.name.as_str()).unwrap_or(GUEST_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("1", "alice", "alice@example.com");
        assert_eq!(user.avatar, DEFAULT_AVATAR);
        assert_eq!(user.level_label(), "Eco Beginner");
        assert_eq!(user.streak, 0);
        assert!(user.eco_points.is_none());
    }

    #[test]
    fn test_builder_helpers() {
        let user = User::new("1", "alice", "alice@example.com")
            .with_level("Eco Warrior")
            .with_streak(7)
            .with_eco_points(100);
        assert_eq!(user.level_label(), "Eco Warrior");
        assert_eq!(user.streak, 7);
        assert_eq!(user.eco_points, Some(100));
    }

    #[test]
    fn test_display_name() {
        let user = User::new("1", "alice", "alice@example.com");
        assert_eq!(display_name(Some(&user)), "alice");
        assert_eq!(display_name(None), "Guest");
    }

    #[test]
    fn test_user_serialization_uses_camel_case() {
        let user = User::new("1", "alice", "alice@example.com").with_eco_points(100);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"ecoPoints\":100"));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
