//! EcoStep application shell
//!
//! Wires the shared store, the content catalog and the navigation state
//! together and hands out the screen models. Everything runs headless; a
//! rendering layer only has to read state from here and forward user input.

#![warn(missing_docs)]

use anyhow::Context;
use app_core::auth::AuthService;
use app_core::learning::ModuleDestination;
use app_core::missions::{MissionService, NextStep};
use app_core::{ContentCatalog, Timings};
use app_state::{AppState, AppStore};
use app_ui::navigation::{NavigationState, NavigationTab, Route};
use app_ui::theme::{get_theme, Theme, ThemeName};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use app_core;
pub use app_state;
pub use app_ui;

/// Application configuration
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Balance before anyone signs in
    pub initial_eco_points: u64,
    /// Start in dark mode
    pub dark_mode: bool,
    /// Bonus for sharing a news article
    pub news_share_points: u64,
    /// Reward for a correct interactive quiz answer
    pub interactive_quiz_points: u64,
    /// Simulated delays
    pub timings: Timings,
    /// JSON file replacing the built-in catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_eco_points: app_state::DEFAULT_ECO_POINTS,
            dark_mode: true,
            news_share_points: app_core::news::SHARE_POINTS,
            interactive_quiz_points: app_core::learning::INTERACTIVE_QUIZ_POINTS,
            timings: Timings::default(),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Parse a JSON config
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse EcoStep config")
    }

    /// Read a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn load_catalog(&self) -> anyhow::Result<ContentCatalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(ContentCatalog::builtin());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = ContentCatalog::from_json(&json)
            .with_context(|| format!("Invalid catalog file {}", path.display()))?;
        info!(path = %path.display(), "Loaded catalog override");
        Ok(catalog)
    }
}

/// Install a fmt subscriber filtered by `RUST_LOG`, defaulting to `ecostep=info`
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ecostep=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// The running application
#[derive(Debug)]
pub struct EcoStepApp {
    config: AppConfig,
    store: AppStore,
    catalog: ContentCatalog,
    navigation: NavigationState,
}

impl EcoStepApp {
    /// Build an app from a config, loading the catalog override if set
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = config.load_catalog()?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Build an app around an explicit catalog
    pub fn with_catalog(config: AppConfig, catalog: ContentCatalog) -> Self {
        let store = AppStore::with_state(AppState::new(config.initial_eco_points, config.dark_mode));
        info!(
            eco_points = config.initial_eco_points,
            dark_mode = config.dark_mode,
            "EcoStep started"
        );
        Self {
            config,
            store,
            catalog,
            navigation: NavigationState::new(),
        }
    }

    /// Build an app from a JSON config file
    pub fn from_config_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = AppConfig::from_file(path)?;
        Self::new(config)
    }

    /// Configuration in use
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared store handle
    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Content catalog
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Navigation state
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Visible screen
    pub fn current_route(&self) -> Route {
        self.navigation.current_route()
    }

    /// Theme matching the store's dark-mode flag
    pub fn theme(&self) -> Theme {
        get_theme(ThemeName::from_dark_mode(self.store.is_dark_mode()))
    }

    /// Open a screen
    ///
    /// Screens that show the user's own record send a signed-out user to
    /// Login instead. Returns the route actually opened.
    pub fn navigate(&mut self, route: Route) -> Route {
        let target = if route.requires_auth() && !self.store.is_authenticated() {
            info!(requested = route.name(), "Sign-in required");
            Route::Login
        } else {
            route
        };
        debug!(route = target.name(), "Navigate");
        self.navigation.navigate(target.clone());
        target
    }

    /// Go back one screen
    pub fn go_back(&mut self) -> bool {
        self.navigation.go_back()
    }

    /// Select a tab
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        self.navigation.switch_tab(tab);
    }

    /// Open a path such as `/missions/3/verify`
    pub fn open_path(&mut self, path: &str) -> Route {
        let route = app_ui::navigation::Router::new().match_path(path);
        self.navigate(route)
    }

    /// Auth flows bound to this app's store
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.store.clone(), self.config.timings.clone())
    }

    /// Mission flow with the simulated camera and verifier
    pub fn missions(&self) -> MissionService {
        MissionService::simulated(self.store.clone(), &self.config.timings)
    }

    /// After login or sign-up the app lands on the Home tab
    pub fn finish_sign_in(&mut self) {
        self.navigation.reset_to(Route::Home);
    }

    /// After the reset email is sent the user returns to Login
    pub fn finish_password_reset(&mut self) {
        self.navigate(Route::Login);
    }

    /// Sign out and leave any screen that needs a user
    pub fn logout(&mut self) {
        self.store.logout();
        if self.current_route().requires_auth() {
            self.navigation.go_back();
        }
    }

    /// Follow the completion screen's choice
    pub fn continue_after_mission(&mut self, step: NextStep) -> Route {
        let route = match step {
            NextStep::Share => Route::SocialFeed,
            NextStep::NextMission => Route::MissionCatalog,
        };
        self.navigate(route)
    }

    /// Open a module from the learning dashboard
    pub fn open_module(&mut self, destination: ModuleDestination) -> Route {
        let route = match destination {
            ModuleDestination::Reading(id) => Route::LearningModule { module: Some(id) },
            ModuleDestination::Quiz(id) => Route::InteractiveQuiz { module: Some(id) },
        };
        self.navigate(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.initial_eco_points, 1250);
        assert!(config.dark_mode);
        assert_eq!(config.news_share_points, 3);
        assert_eq!(config.interactive_quiz_points, 15);
        assert_eq!(config.timings.auth_ms, 1500);
    }

    #[test]
    fn test_partial_config() {
        let config =
            AppConfig::from_json_str(r#"{"darkMode": false, "timings": {"quizRevealMs": 10}}"#).unwrap();
        assert!(!config.dark_mode);
        assert_eq!(config.timings.quiz_reveal_ms, 10);
        assert_eq!(config.timings.quiz_summary_ms, 1000);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        assert!(AppConfig::from_json_str("{\"initialEcoPoints\": -1}").is_err());
    }

    #[test]
    fn test_app_starts_on_lock_screen() {
        let app = EcoStepApp::new(AppConfig::default()).unwrap();
        assert_eq!(app.current_route(), Route::EcoLockScreen);
        assert_eq!(app.store().eco_points(), 1250);
        assert!(app.theme().is_dark());
    }

    #[test]
    fn test_profile_redirects_to_login() {
        let mut app = EcoStepApp::new(AppConfig::default()).unwrap();
        assert_eq!(app.navigate(Route::Profile), Route::Login);
        assert_eq!(app.current_route(), Route::Login);
    }

    #[test]
    fn test_mission_and_module_destinations() {
        let mut app = EcoStepApp::new(AppConfig::default()).unwrap();
        assert_eq!(app.continue_after_mission(NextStep::Share), Route::SocialFeed);
        assert_eq!(app.continue_after_mission(NextStep::NextMission), Route::MissionCatalog);
        assert_eq!(
            app.open_module(ModuleDestination::Quiz(2)),
            Route::InteractiveQuiz { module: Some(2) }
        );
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..AppConfig::default()
        };
        let err = EcoStepApp::new(config).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
