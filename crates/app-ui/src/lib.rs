//! User interface layer for EcoStep
//!
//! This crate holds the parts of the UI that are independent of any
//! rendering toolkit: the route graph and the theme.
//!
//! # Modules
//!
//! - [`navigation`] - Routes, tabs, the root stack and deep-link matching
//! - [`theme`] - Light and dark palettes plus badge colour tables
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{NavigationState, NavigationTab, Route};
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let mut nav = NavigationState::new();
//! assert_eq!(nav.current_route(), Route::EcoLockScreen);
//!
//! nav.switch_tab(NavigationTab::Rewards);
//! assert_eq!(nav.current_route(), Route::Rewards);
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert_eq!(theme.tab_tint(true), "#4ade80");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod theme;

// Re-export commonly used types
pub use theme::{dark_theme, get_theme, light_theme, Gradient, Theme, ThemeName, ThemeState};

pub use navigation::{
    home_sections, HomeSection, NavigationAnimation, NavigationStack, NavigationState, NavigationTab,
    PendingNavigation, Route, RouteParams, Router, StackEntry,
};
