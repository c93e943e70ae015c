//! Theme provider for EcoStep
//!
//! Two themes are supported, both driven by the store's dark-mode flag:
//! - Light: pale slate backgrounds with white cards
//! - Dark: deep slate backgrounds with charcoal cards (the default)
//!
//! Besides the palettes this module holds the colour tables screens use for
//! difficulty badges, group activity and roles, and quiz answer options.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//! assert_eq!(theme.colors.tab_active, "#4ade80");
//! ```

use app_core::catalog::{Difficulty, GroupActivity, GroupRole, SkillLevel};
use app_core::quiz::OptionState;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Append a two-digit alpha suffix, e.g. `#10b981` at 0x20 -> `#10b98120`
///
/// Badges tint their background with the accent colour this way.
pub fn with_alpha(hex: &str, alpha: u8) -> Option<String> {
    parse_hex_color(hex)?;
    Some(format!("#{}{:02x}", &hex.trim_start_matches('#')[..6], alpha))
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Fixed accent colours shared by both themes
pub mod brand {
    /// Active tab tint and section icons
    pub const ACTIVE_TINT: &str = "#4ade80";
    /// Success, easy and points accents
    pub const EMERALD: &str = "#10b981";
    /// Bright green for easy group challenges and very active groups
    pub const GREEN: &str = "#22c55e";
    /// Medium difficulty, stars
    pub const AMBER: &str = "#f59e0b";
    /// Hard difficulty, errors, admins
    pub const RED: &str = "#ef4444";
    /// Selections and moderators
    pub const BLUE: &str = "#3b82f6";
    /// Neutral fallback
    pub const GRAY: &str = "#6b7280";
}

// =============================================================================
// Gradients
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A linear gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Spread colours evenly from 0.0 to 1.0
    pub fn even(colors: &[&str]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self {
            stops: colors
                .iter()
                .enumerate()
                .map(|(i, color)| GradientStop {
                    position: i as f32 / last,
                    color: color.to_string(),
                })
                .collect(),
        }
    }

    /// Colours without positions
    pub fn colors(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.color.as_str()).collect()
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    Light,
    /// Dark theme
    #[default]
    Dark,
}

impl ThemeName {
    /// Theme for a dark-mode flag
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            ThemeName::Dark
        } else {
            ThemeName::Light
        }
    }

    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Semantic colours for one theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Solid screen background
    pub background: Color,
    /// Headings and body text
    pub text: Color,
    /// Secondary text
    pub text_muted: Color,
    /// Long-form article text
    pub text_article: Color,
    /// Tab bar background
    pub tab_bar: Color,
    /// Tab bar top border
    pub tab_border: Color,
    /// Active tab tint
    pub tab_active: Color,
    /// Inactive tab tint
    pub tab_inactive: Color,
    /// Saved/bookmarked button fill
    pub saved: Color,
}

/// Gradients for one theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeGradients {
    /// Full-screen background
    pub background: Gradient,
    /// Cards and list rows
    pub card: Gradient,
    /// Auth screens background
    pub auth: Gradient,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic colours
    pub colors: ThemeColors,
    /// Gradients
    pub gradients: ThemeGradients,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }

    /// Tab icon tint
    pub fn tab_tint(&self, focused: bool) -> &str {
        if focused {
            &self.colors.tab_active
        } else {
            &self.colors.tab_inactive
        }
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            background: "#f8fafc".into(),
            text: "#1f2937".into(),
            text_muted: "#6b7280".into(),
            text_article: "#4b5563".into(),
            tab_bar: "#ffffff".into(),
            tab_border: "#e5e7eb".into(),
            tab_active: brand::ACTIVE_TINT.into(),
            tab_inactive: "#9ca3af".into(),
            saved: "#d1fae5".into(),
        },
        gradients: ThemeGradients {
            background: Gradient::even(&["#f8fafc", "#e2e8f0", "#cbd5e1"]),
            card: Gradient::even(&["#ffffff", "#f1f5f9"]),
            auth: Gradient::even(&["#f0f9ff", "#e0f2fe"]),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            background: "#0f172a".into(),
            text: "#ffffff".into(),
            text_muted: "#9ca3af".into(),
            text_article: "#d1d5db".into(),
            tab_bar: "#111827".into(),
            tab_border: "#374151".into(),
            tab_active: brand::ACTIVE_TINT.into(),
            tab_inactive: "#6b7280".into(),
            saved: "#064e3b".into(),
        },
        gradients: ThemeGradients {
            background: Gradient::even(&["#0f172a", "#1e293b", "#334155"]),
            card: Gradient::even(&["#374151", "#1f2937"]),
            auth: Gradient::even(&["#0f172a", "#1e293b"]),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Theme provider state
///
/// Persists as its theme name alone; the palette is rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThemeName", into = "ThemeName")]
pub struct ThemeState {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current theme
    pub theme: Theme,
}

impl From<ThemeName> for ThemeState {
    fn from(name: ThemeName) -> Self {
        Self::new(name)
    }
}

impl From<ThemeState> for ThemeName {
    fn from(state: ThemeState) -> Self {
        state.theme_name
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Dark)
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self {
            theme_name,
            theme: get_theme(theme_name),
        }
    }

    /// Follow the store's dark-mode flag
    pub fn sync_dark_mode(&mut self, dark: bool) {
        let name = ThemeName::from_dark_mode(dark);
        if name != self.theme_name {
            self.theme_name = name;
            self.theme = get_theme(name);
        }
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }
}

// =============================================================================
// Colour Tables
// =============================================================================

/// Mission difficulty badge
pub fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => brand::EMERALD,
        Difficulty::Medium => brand::AMBER,
        Difficulty::Hard => brand::RED,
    }
}

/// Group challenge difficulty badge; easy uses the brighter green
pub fn group_difficulty_color(difficulty: Option<Difficulty>) -> &'static str {
    match difficulty {
        Some(Difficulty::Easy) => brand::GREEN,
        Some(other) => difficulty_color(other),
        None => brand::GRAY,
    }
}

/// Eco action skill badge
pub fn skill_color(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Beginner => brand::EMERALD,
        SkillLevel::Intermediate => brand::AMBER,
        SkillLevel::Advanced => brand::RED,
    }
}

/// Group activity badge
pub fn activity_color(activity: GroupActivity) -> &'static str {
    match activity {
        GroupActivity::VeryActive => brand::GREEN,
        GroupActivity::Active => brand::EMERALD,
        GroupActivity::Moderate => brand::AMBER,
    }
}

/// Group role badge
pub fn role_color(role: GroupRole) -> &'static str {
    match role {
        GroupRole::Admin => brand::RED,
        GroupRole::Moderator => brand::BLUE,
        GroupRole::Member => brand::GRAY,
    }
}

/// Quiz answer option fill; idle options use the card gradient
pub fn option_gradient(state: OptionState, theme: &Theme) -> Gradient {
    match state {
        OptionState::Correct => Gradient::even(&[brand::EMERALD, "#059669"]),
        OptionState::Incorrect => Gradient::even(&[brand::RED, "#dc2626"]),
        OptionState::Selected => Gradient::even(&[brand::BLUE, "#2563eb"]),
        OptionState::Idle => theme.gradients.card.clone(),
    }
}

/// Quiz submit button fill
pub fn submit_gradient(has_selection: bool) -> Gradient {
    if has_selection {
        Gradient::even(&[brand::EMERALD, "#059669"])
    } else {
        Gradient::even(&[brand::GRAY, "#4b5563"])
    }
}

/// Star colour on the quiz summary
pub fn star_color(filled: bool) -> &'static str {
    if filled {
        brand::AMBER
    } else {
        brand::GRAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#4ade80"), Some((74, 222, 128)));
        assert_eq!(parse_hex_color("10b981"), Some((16, 185, 129)));
        assert_eq!(parse_hex_color("#FF"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(74, 222, 128), "#4ADE80");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#10b981", 0x20).as_deref(), Some("#10b98120"));
        assert_eq!(with_alpha("nope", 0x20), None);
    }

    // ==========================================================================
    // Theme Tests
    // ==========================================================================

    #[test]
    fn test_theme_name_round_trip() {
        assert_eq!(ThemeName::Dark.to_string(), "Dark");
        assert_eq!("LIGHT".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert!("dim".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::default(), ThemeName::Dark);
        assert_eq!(ThemeName::from_dark_mode(false).color_scheme(), "light");
    }

    #[test]
    fn test_palettes() {
        let dark = dark_theme();
        assert!(dark.is_dark());
        assert_eq!(dark.gradients.background.colors(), ["#0f172a", "#1e293b", "#334155"]);
        assert_eq!(dark.tab_tint(false), "#6b7280");

        let light = light_theme();
        assert!(!light.is_dark());
        assert_eq!(light.gradients.card.colors(), ["#ffffff", "#f1f5f9"]);
        assert_eq!(light.tab_tint(true), "#4ade80");
        assert_eq!(light.colors.tab_inactive, "#9ca3af");
    }

    #[test]
    fn test_gradient_positions() {
        let gradient = Gradient::even(&["#000000", "#111111", "#222222"]);
        let positions: Vec<f32> = gradient.stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, [0.0, 0.5, 1.0]);
        assert_eq!(Gradient::even(&["#000000"]).stops[0].position, 0.0);
    }

    #[test]
    fn test_theme_state_follows_store_flag() {
        let mut state = ThemeState::default();
        assert!(state.current_theme().is_dark());

        state.sync_dark_mode(false);
        assert_eq!(state.theme_name, ThemeName::Light);
        assert!(!state.current_theme().is_dark());
    }

    #[test]
    fn test_theme_state_restores_light_palette() {
        let state = ThemeState::new(ThemeName::Light);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"light\"");

        let restored: ThemeState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        assert!(!restored.current_theme().is_dark());
    }

    // ==========================================================================
    // Colour Table Tests
    // ==========================================================================

    #[test]
    fn test_badge_tables() {
        assert_eq!(difficulty_color(Difficulty::Easy), "#10b981");
        assert_eq!(group_difficulty_color(Some(Difficulty::Easy)), "#22c55e");
        assert_eq!(group_difficulty_color(Some(Difficulty::Hard)), "#ef4444");
        assert_eq!(group_difficulty_color(None), "#6b7280");
        assert_eq!(skill_color(SkillLevel::Intermediate), "#f59e0b");
        assert_eq!(activity_color(GroupActivity::VeryActive), "#22c55e");
        assert_eq!(role_color(GroupRole::Moderator), "#3b82f6");
    }

    #[test]
    fn test_option_gradients() {
        let theme = dark_theme();
        assert_eq!(option_gradient(OptionState::Correct, &theme).colors(), ["#10b981", "#059669"]);
        assert_eq!(option_gradient(OptionState::Selected, &theme).colors(), ["#3b82f6", "#2563eb"]);
        assert_eq!(option_gradient(OptionState::Idle, &theme), theme.gradients.card);
        assert_eq!(submit_gradient(false).colors(), ["#6b7280", "#4b5563"]);
        assert_eq!(star_color(true), "#f59e0b");
    }
}
