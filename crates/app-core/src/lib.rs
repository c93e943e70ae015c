//! Core application logic for EcoStep
//!
//! This crate contains the headless screen models: missions, quizzes,
//! rewards, learning, news, community, auth and profile. Each model reads
//! content from a [`ContentCatalog`] and moves Eco Points through the shared
//! [`app_state::AppStore`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod actions;
pub mod auth;
pub mod catalog;
pub mod community;
pub mod learning;
pub mod media;
pub mod missions;
pub mod news;
pub mod profile;
pub mod quiz;
pub mod rewards;

pub use catalog::{CatalogError, ContentCatalog};

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays used by the simulated flows, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    /// How long a quiz answer stays revealed
    pub quiz_reveal_ms: u64,
    /// Pause before the quiz results dialog
    pub quiz_summary_ms: u64,
    /// Simulated photo verification
    pub verification_ms: u64,
    /// Simulated login and sign-up round trip
    pub auth_ms: u64,
    /// Simulated reset email
    pub password_reset_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            quiz_reveal_ms: 2000,
            quiz_summary_ms: 1000,
            verification_ms: 1000,
            auth_ms: 1500,
            password_reset_ms: 1500,
        }
    }
}

impl Timings {
    /// All delays zero
    pub fn instant() -> Self {
        Self {
            quiz_reveal_ms: 0,
            quiz_summary_ms: 0,
            verification_ms: 0,
            auth_ms: 0,
            password_reset_ms: 0,
        }
    }

    /// Quiz reveal delay
    pub fn quiz_reveal(&self) -> Duration {
        Duration::from_millis(self.quiz_reveal_ms)
    }

    /// Quiz summary delay
    pub fn quiz_summary(&self) -> Duration {
        Duration::from_millis(self.quiz_summary_ms)
    }

    /// Verification delay
    pub fn verification(&self) -> Duration {
        Duration::from_millis(self.verification_ms)
    }

    /// Auth delay
    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }

    /// Password reset delay
    pub fn password_reset(&self) -> Duration {
        Duration::from_millis(self.password_reset_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_timings_fall_back_to_defaults() {
        let timings: Timings = serde_json::from_str(r#"{"quizRevealMs": 10}"#).unwrap();
        assert_eq!(timings.quiz_reveal(), Duration::from_millis(10));
        assert_eq!(timings.auth(), Duration::from_millis(1500));
    }
}
