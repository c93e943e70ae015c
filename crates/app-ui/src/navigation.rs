//! Navigation system for EcoStep
//!
//! This module provides the route graph of the app:
//! - Route definitions with their parameters and deep-link paths
//! - Tab navigation (Home, Intelligence, Action, Rewards, Community)
//! - A root stack that holds the lock screen, the tab container, detail
//!   screens and the auth screens
//!
//! Screens receive catalog ids as parameters instead of whole records; the
//! screen models look the records up in the content catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Tab roots
    /// Home tab
    Home,
    /// Eco Intelligence tab
    Intelligence,
    /// Eco Action tab
    Action,
    /// Eco Rewards tab
    Rewards,
    /// Eco Community tab
    Community,

    // Root stack
    /// Lock-screen news cards (initial screen)
    EcoLockScreen,
    /// Container for the tab navigator
    MainTabs,
    /// User profile
    Profile,
    /// App settings
    Settings,
    /// Multi-question quiz
    Quiz {
        /// Quiz to run (the daily quiz when absent)
        #[serde(skip_serializing_if = "Option::is_none")]
        quiz: Option<String>,
    },
    /// Challenge details
    ChallengeDetails {
        /// Challenge id
        challenge: u32,
    },
    /// News article
    NewsDetails {
        /// News card id
        news_item: u32,
    },

    // Intelligence
    /// Learning progress and today's modules
    LearningDashboard,
    /// Single-question module quiz
    InteractiveQuiz {
        /// Module that launched the quiz
        #[serde(skip_serializing_if = "Option::is_none")]
        module: Option<u32>,
    },
    /// Reading module
    LearningModule {
        /// Module id
        #[serde(skip_serializing_if = "Option::is_none")]
        module: Option<u32>,
    },

    // Action
    /// Mission catalog
    MissionCatalog,
    /// Evidence capture for a mission
    ActionVerification {
        /// Mission id
        #[serde(skip_serializing_if = "Option::is_none")]
        mission: Option<u32>,
    },
    /// Mission completion celebration
    MissionComplete {
        /// Mission id
        #[serde(skip_serializing_if = "Option::is_none")]
        mission: Option<u32>,
    },

    // Rewards
    /// Rewards overview
    RewardsDashboard,
    /// Rewards marketplace
    RewardMarketplace,
    /// Environmental impact report
    EnvironmentalImpact,

    // Community
    /// Social feed
    SocialFeed,
    /// Group challenges
    GroupChallenges,
    /// User groups
    MyGroups,

    // Auth
    /// Login screen
    Login,
    /// Sign-up screen
    SignUp,
    /// Password reset screen
    ForgotPassword,

    // Error
    /// Not found
    NotFound,
}

impl Default for Route {
    fn default() -> Self {
        Route::EcoLockScreen
    }
}

impl Route {
    /// Screen name as registered with the navigator
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Intelligence => "Intelligence",
            Route::Action => "Action",
            Route::Rewards => "Rewards",
            Route::Community => "Community",
            Route::EcoLockScreen => "EcoLockScreen",
            Route::MainTabs => "MainTabs",
            Route::Profile => "Profile",
            Route::Settings => "Settings",
            Route::Quiz { .. } => "Quiz",
            Route::ChallengeDetails { .. } => "ChallengeDetails",
            Route::NewsDetails { .. } => "NewsDetails",
            Route::LearningDashboard => "LearningDashboard",
            Route::InteractiveQuiz { .. } => "InteractiveQuiz",
            Route::LearningModule { .. } => "LearningModule",
            Route::MissionCatalog => "MissionCatalog",
            Route::ActionVerification { .. } => "ActionVerification",
            Route::MissionComplete { .. } => "MissionComplete",
            Route::RewardsDashboard => "RewardsDashboard",
            Route::RewardMarketplace => "RewardMarketplace",
            Route::EnvironmentalImpact => "EnvironmentalImpact",
            Route::SocialFeed => "SocialFeed",
            Route::GroupChallenges => "GroupChallenges",
            Route::MyGroups => "MyGroups",
            Route::Login => "Login",
            Route::SignUp => "SignUp",
            Route::ForgotPassword => "ForgotPassword",
            Route::NotFound => "NotFound",
        }
    }

    /// The tab this route is the root of, if any
    pub fn tab(&self) -> Option<NavigationTab> {
        match self {
            Route::Home => Some(NavigationTab::Home),
            Route::Intelligence => Some(NavigationTab::Intelligence),
            Route::Action => Some(NavigationTab::Action),
            Route::Rewards => Some(NavigationTab::Rewards),
            Route::Community => Some(NavigationTab::Community),
            _ => None,
        }
    }

    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Intelligence => "/intelligence".to_string(),
            Route::Action => "/action".to_string(),
            Route::Rewards => "/rewards".to_string(),
            Route::Community => "/community".to_string(),
            Route::EcoLockScreen => "/lock".to_string(),
            Route::MainTabs => "/tabs".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Quiz { quiz } => match quiz {
                Some(quiz) => format!("/quiz/{}", urlencoding::encode(quiz)),
                None => "/quiz".to_string(),
            },
            Route::ChallengeDetails { challenge } => format!("/challenges/{}", challenge),
            Route::NewsDetails { news_item } => format!("/news/{}", news_item),
            Route::LearningDashboard => "/learning".to_string(),
            Route::InteractiveQuiz { module } => match module {
                Some(id) => format!("/learning/modules/{}/quiz", id),
                None => "/learning/quiz".to_string(),
            },
            Route::LearningModule { module } => match module {
                Some(id) => format!("/learning/modules/{}", id),
                None => "/learning/modules".to_string(),
            },
            Route::MissionCatalog => "/missions".to_string(),
            Route::ActionVerification { mission } => match mission {
                Some(id) => format!("/missions/{}/verify", id),
                None => "/missions/verify".to_string(),
            },
            Route::MissionComplete { mission } => match mission {
                Some(id) => format!("/missions/{}/complete", id),
                None => "/missions/complete".to_string(),
            },
            Route::RewardsDashboard => "/rewards/dashboard".to_string(),
            Route::RewardMarketplace => "/rewards/marketplace".to_string(),
            Route::EnvironmentalImpact => "/rewards/impact".to_string(),
            Route::SocialFeed => "/community/feed".to_string(),
            Route::GroupChallenges => "/community/challenges".to_string(),
            Route::MyGroups => "/community/groups".to_string(),
            Route::Login => "/login".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Check if this route shows the signed-in user's own record
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Profile)
    }

    /// Whether this route belongs to the auth flow
    pub fn is_auth_screen(&self) -> bool {
        matches!(self, Route::Login | Route::SignUp | Route::ForgotPassword)
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Intelligence => "Eco Intelligence",
            Route::Action => "Eco Actions",
            Route::Rewards => "Eco Rewards",
            Route::Community => "Eco Community",
            Route::EcoLockScreen => "EcoStep",
            Route::MainTabs => "EcoStep",
            Route::Profile => "Profile",
            Route::Settings => "Settings",
            Route::Quiz { .. } => "Quiz",
            Route::ChallengeDetails { .. } => "Challenge",
            Route::NewsDetails { .. } => "News",
            Route::LearningDashboard => "Learning Dashboard",
            Route::InteractiveQuiz { .. } => "Quiz",
            Route::LearningModule { .. } => "Learning Module",
            Route::MissionCatalog => "Mission Catalog",
            Route::ActionVerification { .. } => "Verify Action",
            Route::MissionComplete { .. } => "Mission Complete",
            Route::RewardsDashboard => "Rewards",
            Route::RewardMarketplace => "Marketplace",
            Route::EnvironmentalImpact => "Environmental Impact",
            Route::SocialFeed => "Social Feed",
            Route::GroupChallenges => "Group Challenges",
            Route::MyGroups => "My Groups",
            Route::Login => "Log In",
            Route::SignUp => "Sign Up",
            Route::ForgotPassword => "Forgot Password",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home tab
    #[default]
    Home,
    /// Learning and quizzes
    Intelligence,
    /// Missions and eco actions
    Action,
    /// Rewards and impact
    Rewards,
    /// Social features
    Community,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Intelligence => Route::Intelligence,
            NavigationTab::Action => Route::Action,
            NavigationTab::Rewards => Route::Rewards,
            NavigationTab::Community => Route::Community,
        }
    }

    /// Get icon name for this tab
    pub fn icon(&self, focused: bool) -> &'static str {
        match (self, focused) {
            (NavigationTab::Home, true) => "home",
            (NavigationTab::Home, false) => "home-outline",
            (NavigationTab::Intelligence, true) => "bulb",
            (NavigationTab::Intelligence, false) => "bulb-outline",
            (NavigationTab::Action, true) => "leaf",
            (NavigationTab::Action, false) => "leaf-outline",
            (NavigationTab::Rewards, true) => "trophy",
            (NavigationTab::Rewards, false) => "trophy-outline",
            (NavigationTab::Community, true) => "people",
            (NavigationTab::Community, false) => "people-outline",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Intelligence => "Intelligence",
            NavigationTab::Action => "Action",
            NavigationTab::Rewards => "Rewards",
            NavigationTab::Community => "Community",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 5] {
        [
            NavigationTab::Home,
            NavigationTab::Intelligence,
            NavigationTab::Action,
            NavigationTab::Rewards,
            NavigationTab::Community,
        ]
    }
}

/// A shortcut card on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeSection {
    /// Card title
    pub title: &'static str,
    /// Icon name
    pub icon: &'static str,
    /// Tab opened by the card
    pub tab: NavigationTab,
}

/// Shortcut cards on the home screen, in display order
pub fn home_sections() -> [HomeSection; 4] {
    [
        HomeSection {
            title: "Eco Intelligence",
            icon: "bulb",
            tab: NavigationTab::Intelligence,
        },
        HomeSection {
            title: "Eco Actions",
            icon: "leaf",
            tab: NavigationTab::Action,
        },
        HomeSection {
            title: "Eco Rewards",
            icon: "trophy",
            tab: NavigationTab::Rewards,
        },
        HomeSection {
            title: "Eco Community",
            icon: "people",
            tab: NavigationTab::Community,
        },
    ]
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// A stack of screens; never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
    /// Top entry, kept apart so the stack can never be empty
    top: StackEntry,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: Vec::new(),
            top: StackEntry::new(root),
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.top, StackEntry::new(route));
        self.entries.push(previous);
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        match self.entries.pop() {
            Some(entry) => {
                self.top = entry;
                true
            }
            None => false,
        }
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        if !self.entries.is_empty() {
            let mut below = std::mem::take(&mut self.entries);
            self.top = below.swap_remove(0);
        }
    }

    /// Pop back to the topmost entry with the given screen name
    ///
    /// The entry's params are replaced by `route`. Returns false when no
    /// entry has that name.
    pub fn pop_to(&mut self, route: Route) -> bool {
        if self.top.route.name() == route.name() {
            self.top.route = route;
            return true;
        }

        match self
            .entries
            .iter()
            .rposition(|entry| entry.route.name() == route.name())
        {
            Some(index) => {
                self.entries.truncate(index + 1);
                self.pop();
                self.top.route = route;
                true
            }
            None => false,
        }
    }

    /// Replace the top route
    pub fn replace(&mut self, route: Route) {
        self.top = StackEntry::new(route);
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.top.route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        &self.top
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len() + 1
    }

    /// Routes from bottom to top
    pub fn routes(&self) -> Vec<&Route> {
        self.entries
            .iter()
            .map(|entry| &entry.route)
            .chain(std::iter::once(&self.top.route))
            .collect()
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.entries.clear();
        self.top = StackEntry::new(route);
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
    /// None (instant)
    None,
}

/// Pending navigation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingNavigation {
    /// Target route
    pub route: Route,
    /// Animation type
    pub animation: NavigationAnimation,
}

/// Complete navigation state
///
/// The root stack holds screens; when its top is [`Route::MainTabs`] the
/// visible screen is the active tab's root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Root stack
    pub stack: NavigationStack,
    /// Tab selected inside MainTabs
    pub active_tab: NavigationTab,
    /// Pending navigation (for animations)
    #[serde(skip)]
    pub pending: Option<PendingNavigation>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: NavigationStack::new(Route::EcoLockScreen),
            active_tab: NavigationTab::Home,
            pending: None,
        }
    }
}

impl NavigationState {
    /// Create a new navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the visible route
    pub fn current_route(&self) -> Route {
        match self.stack.current() {
            Route::MainTabs => self.active_tab.root_route(),
            route => route.clone(),
        }
    }

    /// Navigate to a route
    ///
    /// Tab roots switch the tab inside MainTabs. A screen already on the
    /// stack is returned to with new params; anything else is pushed.
    pub fn navigate(&mut self, route: Route) {
        if let Some(tab) = route.tab() {
            if !self.stack.pop_to(Route::MainTabs) {
                self.stack.push(Route::MainTabs);
            }
            self.active_tab = tab;
            self.pending = Some(PendingNavigation {
                route,
                animation: NavigationAnimation::None,
            });
            return;
        }

        let animation = if self.stack.pop_to(route.clone()) {
            NavigationAnimation::Pop
        } else {
            self.stack.push(route.clone());
            NavigationAnimation::Push
        };
        self.pending = Some(PendingNavigation { route, animation });
    }

    /// Push a route even if the same screen is already on the stack
    pub fn push(&mut self, route: Route) {
        self.pending = Some(PendingNavigation {
            route: route.clone(),
            animation: NavigationAnimation::Push,
        });
        self.stack.push(route);
    }

    /// Go back
    pub fn go_back(&mut self) -> bool {
        if self.stack.pop() {
            self.pending = Some(PendingNavigation {
                route: self.current_route(),
                animation: NavigationAnimation::Pop,
            });
            true
        } else {
            false
        }
    }

    /// Switch to a tab, entering MainTabs if needed
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        self.navigate(tab.root_route());
    }

    /// Replace the whole stack with a single route
    pub fn reset_to(&mut self, route: Route) {
        match route.tab() {
            Some(tab) => {
                self.stack.reset(Route::MainTabs);
                self.active_tab = tab;
            }
            None => self.stack.reset(route.clone()),
        }
        self.pending = Some(PendingNavigation {
            route,
            animation: NavigationAnimation::None,
        });
    }

    /// Complete the pending navigation
    pub fn complete_navigation(&mut self) {
        self.pending = None;
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    /// Reset entire navigation state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

fn id_param(params: &RouteParams, name: &str) -> Option<u32> {
    params.get(name)?.parse().ok()
}

/// URL Router for parsing deep-link paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        // Tabs
        router.add_route("/", |_| Some(Route::Home));
        router.add_route("/intelligence", |_| Some(Route::Intelligence));
        router.add_route("/action", |_| Some(Route::Action));
        router.add_route("/rewards", |_| Some(Route::Rewards));
        router.add_route("/community", |_| Some(Route::Community));

        // Root stack
        router.add_route("/lock", |_| Some(Route::EcoLockScreen));
        router.add_route("/tabs", |_| Some(Route::MainTabs));
        router.add_route("/profile", |_| Some(Route::Profile));
        router.add_route("/settings", |_| Some(Route::Settings));
        router.add_route("/quiz", |_| Some(Route::Quiz { quiz: None }));
        router.add_route("/quiz/:quiz", |params| {
            Some(Route::Quiz {
                quiz: Some(params.get("quiz")?.clone()),
            })
        });
        router.add_route("/challenges/:id", |params| {
            Some(Route::ChallengeDetails {
                challenge: id_param(&params, "id")?,
            })
        });
        router.add_route("/news/:id", |params| {
            Some(Route::NewsDetails {
                news_item: id_param(&params, "id")?,
            })
        });

        // Intelligence
        router.add_route("/learning", |_| Some(Route::LearningDashboard));
        router.add_route("/learning/quiz", |_| Some(Route::InteractiveQuiz { module: None }));
        router.add_route("/learning/modules", |_| Some(Route::LearningModule { module: None }));
        router.add_route("/learning/modules/:id", |params| {
            Some(Route::LearningModule {
                module: Some(id_param(&params, "id")?),
            })
        });
        router.add_route("/learning/modules/:id/quiz", |params| {
            Some(Route::InteractiveQuiz {
                module: Some(id_param(&params, "id")?),
            })
        });

        // Action
        router.add_route("/missions", |_| Some(Route::MissionCatalog));
        router.add_route("/missions/verify", |_| {
            Some(Route::ActionVerification { mission: None })
        });
        router.add_route("/missions/complete", |_| Some(Route::MissionComplete { mission: None }));
        router.add_route("/missions/:id/verify", |params| {
            Some(Route::ActionVerification {
                mission: Some(id_param(&params, "id")?),
            })
        });
        router.add_route("/missions/:id/complete", |params| {
            Some(Route::MissionComplete {
                mission: Some(id_param(&params, "id")?),
            })
        });

        // Rewards
        router.add_route("/rewards/dashboard", |_| Some(Route::RewardsDashboard));
        router.add_route("/rewards/marketplace", |_| Some(Route::RewardMarketplace));
        router.add_route("/rewards/impact", |_| Some(Route::EnvironmentalImpact));

        // Community
        router.add_route("/community/feed", |_| Some(Route::SocialFeed));
        router.add_route("/community/challenges", |_| Some(Route::GroupChallenges));
        router.add_route("/community/groups", |_| Some(Route::MyGroups));

        // Auth
        router.add_route("/login", |_| Some(Route::Login));
        router.add_route("/signup", |_| Some(Route::SignUp));
        router.add_route("/forgot-password", |_| Some(Route::ForgotPassword));

        router
    }

    /// Add a route pattern
    fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(name) = s.strip_prefix(':') {
                    PatternSegment::Param(name.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = match path.split_once('?') {
            Some((pathname, query)) => (pathname, Some(query)),
            None => (path, None),
        };

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = self.match_pattern(&pattern.segments, &path_segments, query) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        Route::NotFound
    }

    /// Match a pattern against path segments
    fn match_pattern(
        &self,
        pattern: &[PatternSegment],
        path: &[&str],
        query: Option<&str>,
    ) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), urlencoding::decode(actual).ok()?.into_owned());
                }
            }
        }

        self.parse_query(query, &mut params);

        Some(params)
    }

    /// Parse query string into params
    fn parse_query(&self, query: Option<&str>, params: &mut RouteParams) {
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params.insert(key.to_string(), decoded.into_owned());
                    }
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::RewardMarketplace.to_path(), "/rewards/marketplace");
        assert_eq!(
            Route::ActionVerification { mission: Some(3) }.to_path(),
            "/missions/3/verify"
        );
        assert_eq!(Route::Quiz { quiz: None }.to_path(), "/quiz");
    }

    #[test]
    fn test_route_requires_auth() {
        assert!(Route::Profile.requires_auth());
        assert!(!Route::Home.requires_auth());
        assert!(!Route::Settings.requires_auth());
    }

    #[test]
    fn test_router_round_trips_every_path_shape() {
        let router = Router::new();
        let routes = [
            Route::Home,
            Route::Community,
            Route::EcoLockScreen,
            Route::Quiz {
                quiz: Some("daily-climate".to_string()),
            },
            Route::ChallengeDetails { challenge: 2 },
            Route::NewsDetails { news_item: 1 },
            Route::InteractiveQuiz { module: Some(2) },
            Route::LearningModule { module: None },
            Route::MissionComplete { mission: Some(1) },
            Route::ForgotPassword,
        ];
        for route in routes {
            assert_eq!(router.match_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_router_rejects_bad_ids() {
        let router = Router::new();
        assert_eq!(router.match_path("/news/abc"), Route::NotFound);
        assert_eq!(router.match_path("/nonexistent/path"), Route::NotFound);
    }

    #[test]
    fn test_router_decodes_params() {
        let router = Router::new();
        assert_eq!(
            router.match_path("/quiz/energy%20week?ref=lock"),
            Route::Quiz {
                quiz: Some("energy week".to_string())
            }
        );
    }

    #[test]
    fn test_tab_icons() {
        assert_eq!(NavigationTab::Action.icon(true), "leaf");
        assert_eq!(NavigationTab::Action.icon(false), "leaf-outline");
        assert_eq!(NavigationTab::all().len(), 5);
    }

    #[test]
    fn test_home_sections_map_to_tabs() {
        let tabs: Vec<_> = home_sections().iter().map(|s| s.tab).collect();
        assert_eq!(&tabs[..], &NavigationTab::all()[1..]);
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::EcoLockScreen);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(Route::Settings);
        assert_eq!(stack.depth(), 2);
        assert_eq!(*stack.current(), Route::Settings);

        assert!(stack.pop());
        assert_eq!(*stack.current(), Route::EcoLockScreen);

        // Can't pop past root
        assert!(!stack.pop());
    }

    #[test]
    fn test_navigation_stack_pop_to() {
        let mut stack = NavigationStack::new(Route::MainTabs);
        stack.push(Route::MissionCatalog);
        stack.push(Route::ActionVerification { mission: Some(1) });
        stack.push(Route::MissionComplete { mission: Some(1) });

        assert!(stack.pop_to(Route::MissionCatalog));
        assert_eq!(stack.depth(), 2);
        assert_eq!(*stack.current(), Route::MissionCatalog);
        assert!(!stack.pop_to(Route::SocialFeed));
    }

    #[test]
    fn test_navigation_stack_pop_to_root() {
        let mut stack = NavigationStack::new(Route::MainTabs);
        stack.push(Route::Settings);
        stack.push(Route::Profile);
        stack.pop_to_root();
        assert_eq!(stack.depth(), 1);
        assert_eq!(*stack.current(), Route::MainTabs);
    }

    #[test]
    fn test_navigation_state_default() {
        let state = NavigationState::new();
        assert_eq!(state.current_route(), Route::EcoLockScreen);
        assert!(!state.can_go_back());
    }

    #[test]
    fn test_navigate_to_tab_enters_main_tabs() {
        let mut state = NavigationState::new();
        state.navigate(Route::Rewards);
        assert_eq!(state.current_route(), Route::Rewards);
        assert_eq!(state.stack.depth(), 2);

        state.navigate(Route::Settings);
        state.navigate(Route::Home);
        // Returns to the existing MainTabs entry instead of stacking another
        assert_eq!(state.stack.depth(), 2);
        assert_eq!(state.current_route(), Route::Home);
    }

    #[test]
    fn test_navigate_returns_to_existing_screen() {
        let mut state = NavigationState::new();
        state.navigate(Route::MissionCatalog);
        state.navigate(Route::ActionVerification { mission: Some(2) });
        state.navigate(Route::MissionComplete { mission: Some(2) });
        state.navigate(Route::MissionCatalog);

        assert_eq!(state.current_route(), Route::MissionCatalog);
        assert_eq!(state.stack.depth(), 2);
        assert_eq!(
            state.pending.as_ref().map(|p| p.animation),
            Some(NavigationAnimation::Pop)
        );
    }

    #[test]
    fn test_go_back() {
        let mut state = NavigationState::new();
        state.navigate(Route::Settings);
        assert!(state.go_back());
        assert_eq!(state.current_route(), Route::EcoLockScreen);
        assert!(!state.go_back());
    }

    #[test]
    fn test_reset_to() {
        let mut state = NavigationState::new();
        state.navigate(Route::Settings);
        state.reset_to(Route::Login);
        assert_eq!(state.current_route(), Route::Login);
        assert!(!state.can_go_back());

        state.reset_to(Route::Community);
        assert_eq!(state.current_route(), Route::Community);
        assert_eq!(state.active_tab, NavigationTab::Community);
    }

    #[test]
    fn test_route_serialization() {
        let route = Route::NewsDetails { news_item: 2 };
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"route":"NewsDetails","params":{"news_item":2}}"#);
        let parsed: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, parsed);
    }

    #[test]
    fn test_navigation_state_serialization() {
        let mut state = NavigationState::new();
        state.navigate(Route::Intelligence);
        let json = serde_json::to_string(&state).unwrap();
        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.active_tab, NavigationTab::Intelligence);
        assert_eq!(parsed.current_route(), Route::Intelligence);
    }

    #[test]
    fn test_route_title() {
        assert_eq!(Route::Home.title(), "Home");
        assert_eq!(Route::RewardMarketplace.title(), "Marketplace");
        assert_eq!(Route::Login.title(), "Log In");
    }
}
