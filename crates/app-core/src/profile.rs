//! Profile and settings
//!
//! The profile screen edits the display name, swaps the avatar for a picked
//! photo, lists stats and achievements, and signs out. The settings screen
//! binds dark mode to the store and keeps its other switches locally.

use crate::catalog::{Achievement, ContentCatalog, StatCard};
use crate::media::{self, MediaError, Photo, PhotoPicker, PhotoSource, PickOptions};
use app_state::session::DEFAULT_AVATAR;
use app_state::AppStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Shown after saving the profile
pub const PROFILE_SAVED: &str = "Profile updated successfully!";

/// Logout confirmation prompt
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

/// Clear-data confirmation prompt
pub const CLEAR_DATA_PROMPT: &str = "Are you sure? This action cannot be undone.";

/// App version shown in settings
pub const APP_VERSION: &str = "1.0.0";

/// Support address shown in settings
pub const SUPPORT_EMAIL: &str = "support@ecostep.app";

/// Profile error types
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Nobody is signed in
    #[error("Not signed in")]
    NotSignedIn,

    /// Name is blank
    #[error("Name cannot be empty")]
    EmptyName,

    /// Not in edit mode
    #[error("Profile is not being edited")]
    NotEditing,

    /// Photo picking failed
    #[error(transparent)]
    Photo(#[from] MediaError),
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;

/// What the avatar slot shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    /// A picked photo
    Photo(String),
    /// The user's emoji glyph
    Glyph(String),
}

/// The profile screen
#[derive(Debug)]
pub struct ProfileScreen {
    store: AppStore,
    editing: bool,
    edited_name: String,
    avatar_uri: Option<String>,
}

impl ProfileScreen {
    /// Open the profile for the signed-in user
    pub fn open(store: AppStore) -> Self {
        let edited_name = store.user().map(|u| u.name).unwrap_or_default();
        Self {
            store,
            editing: false,
            edited_name,
            avatar_uri: None,
        }
    }

    /// Whether the name field is editable
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Name in the edit field
    pub fn edited_name(&self) -> &str {
        &self.edited_name
    }

    /// Enter edit mode
    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    /// Type into the name field
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.edited_name = name.into();
    }

    /// Leave edit mode and write the name to the store
    pub fn save(&mut self) -> Result<&'static str> {
        if !self.editing {
            return Err(ProfileError::NotEditing);
        }
        if !self.store.is_authenticated() {
            return Err(ProfileError::NotSignedIn);
        }
        let name = self.edited_name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        self.store.rename_user(name);
        self.editing = false;
        info!(name, "Profile saved");
        Ok(PROFILE_SAVED)
    }

    /// Current avatar, preferring a picked photo over the glyph
    pub fn avatar(&self) -> Avatar {
        match &self.avatar_uri {
            Some(uri) => Avatar::Photo(uri.clone()),
            None => Avatar::Glyph(
                self.store
                    .user()
                    .map(|u| u.avatar)
                    .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            ),
        }
    }

    /// Pick a square photo and use it as the avatar
    ///
    /// The previous avatar stays if permission is denied or the user cancels.
    pub async fn change_avatar(&mut self, picker: &dyn PhotoPicker, source: PhotoSource) -> Result<Photo> {
        let photo = media::pick_photo(picker, source, PickOptions::default()).await?;
        self.avatar_uri = Some(photo.uri.clone());
        info!(%source, "Avatar changed");
        Ok(photo)
    }

    /// "Your Impact" stat cards
    pub fn stats<'a>(&self, catalog: &'a ContentCatalog) -> &'a [StatCard] {
        &catalog.profile_stats
    }

    /// Earned badges
    pub fn achievements<'a>(&self, catalog: &'a ContentCatalog) -> &'a [Achievement] {
        &catalog.profile_achievements
    }

    /// Sign out after the user confirmed [`LOGOUT_PROMPT`]
    pub fn logout(&self) {
        if !self.store.is_authenticated() {
            warn!("Logout without a signed-in user");
        }
        self.store.logout();
    }
}

/// A switch on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Toggle {
    /// Theme, bound to the store
    DarkMode,
    /// Daily eco-tips and reminders
    PushNotifications,
    /// Location-based tips
    LocationServices,
    /// Cross-device sync
    DataSync,
    /// Progress backup
    AutoBackup,
}

/// A row that opens an informational dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    /// Reminder time picker
    ReminderTime,
    /// Help and FAQ
    Help,
    /// Contact support
    ContactSupport,
    /// Store rating
    RateApp,
    /// Terms of service
    Terms,
    /// Privacy policy
    Privacy,
}

impl Link {
    /// Dialog title and body
    pub fn dialog(self) -> (&'static str, String) {
        match self {
            Link::ReminderTime => ("Coming Soon", "Time picker will be available in next update".into()),
            Link::Help => ("Help", "Help section coming soon!".into()),
            Link::ContactSupport => ("Contact", format!("Email: {}", SUPPORT_EMAIL)),
            Link::RateApp => ("Thank you!", "Rating feature coming soon!".into()),
            Link::Terms => ("Terms", "Terms of service coming soon!".into()),
            Link::Privacy => ("Privacy", "Privacy policy coming soon!".into()),
        }
    }
}

/// Kind of settings row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// On/off switch with its current value
    Switch(Toggle, bool),
    /// Opens a dialog
    Navigation(Link),
    /// Read-only text
    Info,
}

/// One settings row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingItem {
    /// Icon name
    pub icon: &'static str,
    /// Row title
    pub title: &'static str,
    /// Row subtitle
    pub subtitle: &'static str,
    /// Row behaviour
    pub kind: SettingKind,
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingSection {
    /// Section heading
    pub title: &'static str,
    /// Rows
    pub items: Vec<SettingItem>,
}

/// The settings screen
#[derive(Debug)]
pub struct Settings {
    store: AppStore,
    notifications: bool,
    location_services: bool,
    data_sync: bool,
    auto_backup: bool,
}

impl Settings {
    /// Open settings with the default switch positions
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            notifications: true,
            location_services: false,
            data_sync: true,
            auto_backup: false,
        }
    }

    /// Current value of a switch
    pub fn value(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::DarkMode => self.store.is_dark_mode(),
            Toggle::PushNotifications => self.notifications,
            Toggle::LocationServices => self.location_services,
            Toggle::DataSync => self.data_sync,
            Toggle::AutoBackup => self.auto_backup,
        }
    }

    /// Flip a switch, returning the new value
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let value = match toggle {
            Toggle::DarkMode => return self.store.toggle_theme(),
            Toggle::PushNotifications => &mut self.notifications,
            Toggle::LocationServices => &mut self.location_services,
            Toggle::DataSync => &mut self.data_sync,
            Toggle::AutoBackup => &mut self.auto_backup,
        };
        *value = !*value;
        *value
    }

    /// Clear local data after the user confirmed [`CLEAR_DATA_PROMPT`]
    ///
    /// Local switches return to their defaults. Dark mode and the session
    /// live in the store and are kept.
    pub fn clear_data(&mut self) -> &'static str {
        *self = Self::new(self.store.clone());
        info!("Local data cleared");
        "Data cleared!"
    }

    /// Rows grouped the way the screen shows them
    pub fn sections(&self) -> Vec<SettingSection> {
        let switch = |icon: &'static str, title: &'static str, subtitle: &'static str, toggle: Toggle| SettingItem {
            icon,
            title,
            subtitle,
            kind: SettingKind::Switch(toggle, self.value(toggle)),
        };
        let link = |icon: &'static str, title: &'static str, subtitle: &'static str, link: Link| SettingItem {
            icon,
            title,
            subtitle,
            kind: SettingKind::Navigation(link),
        };

        vec![
            SettingSection {
                title: "Appearance",
                items: vec![switch("moon", "Dark Mode", "Switch between light and dark theme", Toggle::DarkMode)],
            },
            SettingSection {
                title: "Notifications",
                items: vec![
                    switch(
                        "notifications",
                        "Push Notifications",
                        "Receive daily eco-tips and reminders",
                        Toggle::PushNotifications,
                    ),
                    link("time", "Reminder Time", "Set daily reminder time", Link::ReminderTime),
                ],
            },
            SettingSection {
                title: "Privacy & Data",
                items: vec![
                    switch("location", "Location Services", "Enable location-based eco-tips", Toggle::LocationServices),
                    switch("sync", "Data Sync", "Sync data across devices", Toggle::DataSync),
                    switch("cloud-upload", "Auto Backup", "Automatically backup your progress", Toggle::AutoBackup),
                ],
            },
            SettingSection {
                title: "Support",
                items: vec![
                    link("help-circle", "Help & FAQ", "Get help and find answers", Link::Help),
                    link("mail", "Contact Support", "Get in touch with our team", Link::ContactSupport),
                    link("star", "Rate App", "Rate us on the app store", Link::RateApp),
                ],
            },
            SettingSection {
                title: "About",
                items: vec![
                    SettingItem {
                        icon: "information-circle",
                        title: "App Version",
                        subtitle: APP_VERSION,
                        kind: SettingKind::Info,
                    },
                    link("document-text", "Terms of Service", "Read our terms and conditions", Link::Terms),
                    link("shield-checkmark", "Privacy Policy", "Learn how we protect your data", Link::Privacy),
                ],
            },
        ]
    }
}
