//! Application state store
//!
//! A single store holds the signed-in user, the theme flag and the Eco Points
//! balance. Every change goes through a typed [`Action`] and the pure
//! [`reduce`] function, so each mutation is traceable: it is logged, recorded
//! in a bounded action log and broadcast to subscribers.
//!
//! The balance is overwritten by absolute value ([`Action::SetEcoPoints`]).
//! Screens compute `current + delta` themselves, which [`AppStore::award_points`]
//! packages up for convenience.

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

use crate::session::User;

/// Balance given to a fresh store and to logins without a balance
pub const DEFAULT_ECO_POINTS: u64 = 1250;

/// Number of dispatched actions kept in the action log
pub const MAX_HISTORY: usize = 256;

/// Snapshot of the shared application state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Signed-in user, if any
    pub user: Option<User>,
    /// Whether a login is in progress
    pub is_loading: bool,
    /// Dark theme flag
    pub is_dark_mode: bool,
    /// Eco Points balance
    pub eco_points: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: false,
            is_dark_mode: true,
            eco_points: DEFAULT_ECO_POINTS,
        }
    }
}

impl AppState {
    /// Create a state with a custom starting balance and theme
    pub fn new(eco_points: u64, is_dark_mode: bool) -> Self {
        Self {
            eco_points,
            is_dark_mode,
            ..Self::default()
        }
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// A state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// Store the user and take the balance from the payload
    Login(User),
    /// Clear the user and zero the balance
    Logout,
    /// Flip the theme flag
    ToggleTheme,
    /// Overwrite the balance
    SetEcoPoints(u64),
    /// Set the loading flag
    SetLoading(bool),
    /// Change the signed-in user's display name
    RenameUser(String),
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login(_) => "login",
            Action::Logout => "logout",
            Action::ToggleTheme => "toggle_theme",
            Action::SetEcoPoints(_) => "set_eco_points",
            Action::SetLoading(_) => "set_loading",
            Action::RenameUser(_) => "rename_user",
        }
    }
}

/// Apply an action to a state, producing the next state
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::Login(user) => {
            // A zero balance on the payload counts as absent
            next.eco_points = user
                .eco_points
                .filter(|points| *points > 0)
                .unwrap_or(DEFAULT_ECO_POINTS);
            next.user = Some(user.clone());
        }
        Action::Logout => {
            next.user = None;
            next.eco_points = 0;
        }
        Action::ToggleTheme => {
            next.is_dark_mode = !state.is_dark_mode;
        }
        Action::SetEcoPoints(points) => {
            next.eco_points = *points;
        }
        Action::SetLoading(loading) => {
            next.is_loading = *loading;
        }
        Action::RenameUser(name) => {
            if let Some(user) = next.user.as_mut() {
                user.name = name.clone();
            }
        }
    }
    next
}

/// Changes broadcast to store subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A user signed in
    LoggedIn(User),
    /// The user signed out
    LoggedOut,
    /// Theme flag changed (true = dark)
    ThemeChanged(bool),
    /// Balance changed
    PointsChanged {
        /// Balance before the action
        previous: u64,
        /// Balance after the action
        current: u64,
    },
    /// Loading flag changed
    LoadingChanged(bool),
    /// User record changed without a sign-in
    UserUpdated(User),
}

/// One entry of the action log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Monotonic dispatch number, starting at 1
    pub sequence: u64,
    /// The dispatched action
    pub action: Action,
}

struct StoreInner {
    state: RwLock<AppState>,
    history: Mutex<VecDeque<ActionRecord>>,
    sequence: Mutex<u64>,
    points_tx: watch::Sender<u64>,
    events_tx: broadcast::Sender<StoreEvent>,
}

/// Shared application state container
///
/// Cloning an `AppStore` yields another handle onto the same state.
///
/// # Example
///
/// ```
/// use app_state::store::{AppStore, DEFAULT_ECO_POINTS};
///
/// let store = AppStore::new();
/// assert_eq!(store.eco_points(), DEFAULT_ECO_POINTS);
///
/// store.award_points(15);
/// assert_eq!(store.eco_points(), 1265);
///
/// assert!(!store.toggle_theme());
/// ```
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<StoreInner>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &*self.inner.state.read())
            .finish()
    }
}

impl AppStore {
    /// Create a store with the default state
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store seeded with a state
    pub fn with_state(state: AppState) -> Self {
        let (points_tx, _) = watch::channel(state.eco_points);
        let (events_tx, _) = broadcast::channel(64);

        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                history: Mutex::new(VecDeque::new()),
                sequence: Mutex::new(0),
                points_tx,
                events_tx,
            }),
        }
    }

    /// Apply an action and return the resulting state
    pub fn dispatch(&self, action: Action) -> AppState {
        let (previous, next) = {
            let mut state = self.inner.state.write();
            let previous = state.clone();
            *state = reduce(&previous, &action);
            (previous, state.clone())
        };

        tracing::debug!(action = action.name(), eco_points = next.eco_points, "dispatch");
        self.record(action);
        self.notify(&previous, &next);

        next
    }

    fn record(&self, action: Action) {
        let sequence = {
            let mut seq = self.inner.sequence.lock();
            *seq += 1;
            *seq
        };

        let mut history = self.inner.history.lock();
        if history.len() == MAX_HISTORY {
            history.pop_front();
        }
        history.push_back(ActionRecord { sequence, action });
    }

    fn notify(&self, previous: &AppState, next: &AppState) {
        let tx = &self.inner.events_tx;

        if previous.user != next.user {
            let _ = match (&previous.user, &next.user) {
                (_, None) => tx.send(StoreEvent::LoggedOut),
                (None, Some(user)) => tx.send(StoreEvent::LoggedIn(user.clone())),
                (Some(old), Some(user)) if old.id != user.id => {
                    tx.send(StoreEvent::LoggedIn(user.clone()))
                }
                (Some(_), Some(user)) => tx.send(StoreEvent::UserUpdated(user.clone())),
            };
        }

        if previous.is_dark_mode != next.is_dark_mode {
            let _ = tx.send(StoreEvent::ThemeChanged(next.is_dark_mode));
        }

        if previous.is_loading != next.is_loading {
            let _ = tx.send(StoreEvent::LoadingChanged(next.is_loading));
        }

        if previous.eco_points != next.eco_points {
            self.inner.points_tx.send_replace(next.eco_points);
            let _ = tx.send(StoreEvent::PointsChanged {
                previous: previous.eco_points,
                current: next.eco_points,
            });
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Signed-in user
    pub fn user(&self) -> Option<User> {
        self.inner.state.read().user.clone()
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().is_authenticated()
    }

    /// Current balance
    pub fn eco_points(&self) -> u64 {
        self.inner.state.read().eco_points
    }

    /// Dark theme flag
    pub fn is_dark_mode(&self) -> bool {
        self.inner.state.read().is_dark_mode
    }

    /// Loading flag
    pub fn is_loading(&self) -> bool {
        self.inner.state.read().is_loading
    }

    /// Sign a user in
    pub fn login(&self, user: User) -> AppState {
        tracing::info!(user = %user.name, "logging in user");
        self.dispatch(Action::Login(user))
    }

    /// Sign the user out
    pub fn logout(&self) -> AppState {
        tracing::info!("logging out user");
        self.dispatch(Action::Logout)
    }

    /// Flip the theme and return the new flag
    pub fn toggle_theme(&self) -> bool {
        let state = self.dispatch(Action::ToggleTheme);
        tracing::info!(
            theme = if state.is_dark_mode { "dark" } else { "light" },
            "theme toggled"
        );
        state.is_dark_mode
    }

    /// Overwrite the balance
    pub fn update_eco_points(&self, points: u64) -> u64 {
        self.dispatch(Action::SetEcoPoints(points)).eco_points
    }

    /// Add to the balance, computing `current + delta` like the screens do
    pub fn award_points(&self, delta: u64) -> u64 {
        let next = self.eco_points().saturating_add(delta);
        self.update_eco_points(next)
    }

    /// Set the loading flag
    pub fn set_loading(&self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    /// Rename the signed-in user; a no-op when signed out
    pub fn rename_user(&self, name: impl Into<String>) -> AppState {
        self.dispatch(Action::RenameUser(name.into()))
    }

    /// Subscribe to store events
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events_tx.subscribe()
    }

    /// Watch the balance
    pub fn watch_points(&self) -> watch::Receiver<u64> {
        self.inner.points_tx.subscribe()
    }

    /// Dispatched actions, oldest first
    pub fn history(&self) -> Vec<ActionRecord> {
        self.inner.history.lock().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new("1", "alice", "alice@example.com")
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(state.user.is_none());
        assert!(!state.is_loading);
        assert!(state.is_dark_mode);
        assert_eq!(state.eco_points, 1250);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_reduce_login_uses_payload_points() {
        let state = reduce(&AppState::default(), &Action::Login(alice().with_eco_points(100)));
        assert_eq!(state.eco_points, 100);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("alice"));
    }

    #[test]
    fn test_reduce_login_defaults_points() {
        let mut start = AppState::default();
        start.eco_points = 7;

        let state = reduce(&start, &Action::Login(alice()));
        assert_eq!(state.eco_points, DEFAULT_ECO_POINTS);

        let state = reduce(&start, &Action::Login(alice().with_eco_points(0)));
        assert_eq!(state.eco_points, DEFAULT_ECO_POINTS);
    }

    #[test]
    fn test_reduce_logout_clears_everything() {
        let logged_in = reduce(&AppState::default(), &Action::Login(alice()));
        let state = reduce(&logged_in, &Action::Logout);
        assert!(state.user.is_none());
        assert_eq!(state.eco_points, 0);

        // Logging out twice is harmless
        let again = reduce(&state, &Action::Logout);
        assert_eq!(again, state);
    }

    #[test]
    fn test_reduce_is_pure() {
        let start = AppState::default();
        let _ = reduce(&start, &Action::SetEcoPoints(5));
        assert_eq!(start.eco_points, DEFAULT_ECO_POINTS);
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let store = AppStore::new();
        assert!(!store.toggle_theme());
        assert!(store.toggle_theme());
        assert!(store.is_dark_mode());
    }

    #[test]
    fn test_update_eco_points_overwrites() {
        let store = AppStore::new();
        assert_eq!(store.update_eco_points(42), 42);
        assert_eq!(store.eco_points(), 42);
    }

    #[test]
    fn test_award_points_accumulates() {
        let store = AppStore::new();
        for points in [15, 25, 50] {
            store.award_points(points);
        }
        assert_eq!(store.eco_points(), 1250 + 15 + 25 + 50);
    }

    #[test]
    fn test_rename_user() {
        let store = AppStore::new();
        store.rename_user("ghost");
        assert!(store.user().is_none());

        store.login(alice());
        store.rename_user("Alice G.");
        assert_eq!(store.user().map(|u| u.name), Some("Alice G.".to_string()));
    }

    #[test]
    fn test_history_records_actions_in_order() {
        let store = AppStore::new();
        store.toggle_theme();
        store.update_eco_points(10);

        let history = store.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sequence, 1);
        assert_eq!(history[0].action, Action::ToggleTheme);
        assert_eq!(history[1].action, Action::SetEcoPoints(10));
    }

    #[test]
    fn test_history_is_bounded() {
        let store = AppStore::new();
        for i in 0..(MAX_HISTORY as u64 + 10) {
            store.update_eco_points(i);
        }
        let history = store.history();
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history[0].sequence, 11);
    }

    #[test]
    fn test_clones_share_state() {
        let store = AppStore::new();
        let other = store.clone();
        other.update_eco_points(1);
        assert_eq!(store.eco_points(), 1);
    }

    #[tokio::test]
    async fn test_events_are_broadcast() {
        let store = AppStore::new();
        let mut rx = store.subscribe();

        store.login(alice().with_eco_points(100));
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::LoggedIn(alice().with_eco_points(100)));
        assert_eq!(
            rx.recv().await.unwrap(),
            StoreEvent::PointsChanged {
                previous: 1250,
                current: 100
            }
        );

        store.toggle_theme();
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::ThemeChanged(false));

        store.logout();
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::LoggedOut);
    }

    #[tokio::test]
    async fn test_unchanged_points_do_not_notify() {
        let store = AppStore::new();
        let mut points = store.watch_points();

        store.update_eco_points(DEFAULT_ECO_POINTS);
        assert!(!points.has_changed().unwrap());

        store.update_eco_points(9);
        assert!(points.has_changed().unwrap());
        assert_eq!(*points.borrow_and_update(), 9);
    }
}
