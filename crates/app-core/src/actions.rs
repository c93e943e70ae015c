//! Eco actions
//!
//! Self-reported actions grouped into categories. Each action can be
//! completed once per screen session; completing it awards its points.

use crate::catalog::{ActionCategory, ContentCatalog, EcoAction};
use app_state::AppStore;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

/// Eco action error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No action with this id
    #[error("Action not found: {0}")]
    NotFound(u32),

    /// Action already completed
    #[error("You have already completed \"{0}\"")]
    AlreadyCompleted(String),
}

/// Result type for eco action operations
pub type Result<T> = std::result::Result<T, ActionError>;

/// Confirmation after completing an action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCompleted {
    /// Completed action
    pub action_id: u32,
    /// Points awarded
    pub points: u64,
    /// CO2 avoided, in kilograms
    pub co2_saved_kg: f64,
    /// Balance afterwards
    pub balance: u64,
}

impl ActionCompleted {
    /// Text for the success dialog
    pub fn message(&self) -> String {
        format!(
            "You earned {} Eco Points and saved {} kg of CO2!",
            self.points, self.co2_saved_kg
        )
    }
}

/// The eco actions screen
#[derive(Debug)]
pub struct EcoActionBoard<'a> {
    catalog: &'a ContentCatalog,
    store: AppStore,
    completed: HashSet<u32>,
}

impl<'a> EcoActionBoard<'a> {
    /// Open the board with nothing completed
    pub fn new(catalog: &'a ContentCatalog, store: AppStore) -> Self {
        Self {
            catalog,
            store,
            completed: HashSet::new(),
        }
    }

    /// Categories in display order
    pub fn categories(&self) -> &'a [ActionCategory] {
        &self.catalog.action_categories
    }

    /// Whether an action is done
    pub fn is_completed(&self, action_id: u32) -> bool {
        self.completed.contains(&action_id)
    }

    /// Number of completed actions
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// CO2 saved by everything completed so far
    pub fn co2_saved_kg(&self) -> f64 {
        self.completed
            .iter()
            .filter_map(|id| self.catalog.action(*id))
            .map(|a| a.co2_saved_kg)
            .sum()
    }

    /// Complete an action and award its points
    pub fn complete(&mut self, action_id: u32) -> Result<ActionCompleted> {
        let action: &EcoAction = self
            .catalog
            .action(action_id)
            .ok_or(ActionError::NotFound(action_id))?;

        if !self.completed.insert(action_id) {
            warn!(action = action_id, "Action already completed");
            return Err(ActionError::AlreadyCompleted(action.title.clone()));
        }

        let balance = self.store.award_points(action.points);
        info!(action = action_id, points = action.points, balance, "Eco action completed");

        Ok(ActionCompleted {
            action_id,
            points: action.points,
            co2_saved_kg: action.co2_saved_kg,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_awards_points_once() {
        let catalog = ContentCatalog::builtin();
        let store = AppStore::new();
        let mut board = EcoActionBoard::new(&catalog, store.clone());

        let done = board.complete(1).unwrap();
        assert_eq!(done.points, 15);
        assert_eq!(done.balance, 1265);
        assert!(board.is_completed(1));
        assert_eq!(done.message(), "You earned 15 Eco Points and saved 0.5 kg of CO2!");

        let err = board.complete(1).unwrap_err();
        assert_eq!(
            err,
            ActionError::AlreadyCompleted("Use Reusable Water Bottle".into())
        );
        assert_eq!(store.eco_points(), 1265);
    }

    #[test]
    fn test_unknown_action() {
        let catalog = ContentCatalog::builtin();
        let mut board = EcoActionBoard::new(&catalog, AppStore::new());
        assert_eq!(board.complete(99), Err(ActionError::NotFound(99)));
        assert_eq!(board.completed_count(), 0);
    }

    #[test]
    fn test_balance_is_initial_plus_sum() {
        let catalog = ContentCatalog::builtin();
        let store = AppStore::new();
        let mut board = EcoActionBoard::new(&catalog, store.clone());

        let ids = [4, 5, 9];
        let expected: u64 = ids.iter().map(|id| catalog.action(*id).unwrap().points).sum();
        for id in ids {
            board.complete(id).unwrap();
        }

        assert_eq!(store.eco_points(), 1250 + expected);
        assert!((board.co2_saved_kg() - (2.3 + 3.1 + 1.2)).abs() < 1e-9);
    }

    #[test]
    fn test_categories() {
        let catalog = ContentCatalog::builtin();
        let board = EcoActionBoard::new(&catalog, AppStore::new());
        let titles: Vec<_> = board.categories().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Daily Life", "Transportation", "Consumption"]);
    }
}
