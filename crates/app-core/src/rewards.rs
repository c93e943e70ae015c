//! Rewards
//!
//! Marketplace filtering, redemption against the Eco Points balance, the
//! rewards dashboard and the environmental impact summary.

use crate::catalog::{
    ContentCatalog, MonthlyImpact, RecentReward, Reward, RewardCategory,
};
use app_state::AppStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

/// Redemption error types
///
/// The display text is what the user sees in the rejection dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedeemError {
    /// No reward with this id
    #[error("Reward not found: {0}")]
    NotFound(u32),

    /// Out of stock
    #[error("This reward is currently unavailable.")]
    Unavailable,

    /// Balance below cost
    #[error("You need {shortfall} more points to redeem this reward.")]
    InsufficientPoints {
        /// Reward cost
        cost: u64,
        /// Balance at the time of the attempt
        balance: u64,
        /// Points still missing
        shortfall: u64,
    },

    /// Already redeemed on this screen
    #[error("\"{0}\" has already been redeemed.")]
    AlreadyRedeemed(String),
}

impl RedeemError {
    /// Dialog title for the rejection
    pub fn title(&self) -> &'static str {
        match self {
            RedeemError::NotFound(_) => "Not Found",
            RedeemError::Unavailable => "Out of Stock",
            RedeemError::InsufficientPoints { .. } => "Insufficient Points",
            RedeemError::AlreadyRedeemed(_) => "Already Redeemed",
        }
    }
}

/// Result type for redemption operations
pub type Result<T> = std::result::Result<T, RedeemError>;

/// Marketplace filter chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RewardFilter {
    /// Everything
    #[default]
    All,
    /// A single category
    Category(RewardCategory),
}

impl RewardFilter {
    /// Chips in display order
    pub fn chips() -> Vec<RewardFilter> {
        std::iter::once(RewardFilter::All)
            .chain(RewardCategory::all().into_iter().map(RewardFilter::Category))
            .collect()
    }

    /// Chip label
    pub fn label(&self) -> &'static str {
        match self {
            RewardFilter::All => "All",
            RewardFilter::Category(category) => category.label(),
        }
    }
}

/// Rewards passing a filter, in catalog order
pub fn filter_rewards(catalog: &ContentCatalog, filter: RewardFilter) -> Vec<&Reward> {
    catalog
        .rewards
        .iter()
        .filter(|r| match filter {
            RewardFilter::All => true,
            RewardFilter::Category(category) => r.category == category,
        })
        .collect()
}

/// Rewards grouped by category for the rewards tab
#[derive(Debug, Clone, PartialEq)]
pub struct RewardSection<'a> {
    /// Category
    pub category: RewardCategory,
    /// Section icon
    pub icon: &'static str,
    /// Rewards in catalog order
    pub rewards: Vec<&'a Reward>,
}

/// Non-empty sections in category order
pub fn reward_sections(catalog: &ContentCatalog) -> Vec<RewardSection<'_>> {
    RewardCategory::all()
        .into_iter()
        .map(|category| RewardSection {
            category,
            icon: match category {
                RewardCategory::EcoProducts => "leaf",
                RewardCategory::Discounts => "pricetag",
                RewardCategory::Experiences => "compass",
                RewardCategory::Donations => "heart",
            },
            rewards: filter_rewards(catalog, RewardFilter::Category(category)),
        })
        .filter(|section| !section.rewards.is_empty())
        .collect()
}

/// A successful redemption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    /// Redeemed reward
    pub reward_id: u32,
    /// Points spent
    pub cost: u64,
    /// Balance afterwards
    pub balance: u64,
    /// Success dialog text
    pub message: String,
}

/// Tracks what has been redeemed on one rewards screen
///
/// The ledger lives as long as the screen; opening the screen again starts
/// with an empty ledger.
#[derive(Debug)]
pub struct RedemptionLedger {
    store: AppStore,
    redeemed: HashSet<u32>,
}

impl RedemptionLedger {
    /// Empty ledger over the store
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            redeemed: HashSet::new(),
        }
    }

    /// Whether a reward has been redeemed here
    pub fn is_redeemed(&self, reward_id: u32) -> bool {
        self.redeemed.contains(&reward_id)
    }

    /// Number of redemptions
    pub fn len(&self) -> usize {
        self.redeemed.len()
    }

    /// Whether nothing has been redeemed
    pub fn is_empty(&self) -> bool {
        self.redeemed.is_empty()
    }

    /// Whether the current balance covers the reward
    pub fn can_afford(&self, reward: &Reward) -> bool {
        self.store.eco_points() >= reward.points
    }

    /// Confirmation prompt shown before redeeming
    pub fn confirm_prompt(reward: &Reward) -> String {
        format!(
            "Are you sure you want to redeem \"{}\" for {} points?",
            reward.title, reward.points
        )
    }

    /// Check every guard without changing anything
    pub fn check(&self, reward: &Reward) -> Result<()> {
        if !reward.available {
            return Err(RedeemError::Unavailable);
        }
        if self.is_redeemed(reward.id) {
            return Err(RedeemError::AlreadyRedeemed(reward.title.clone()));
        }
        let balance = self.store.eco_points();
        if balance < reward.points {
            return Err(RedeemError::InsufficientPoints {
                cost: reward.points,
                balance,
                shortfall: reward.points - balance,
            });
        }
        Ok(())
    }

    /// Spend points on a reward and mark it redeemed
    pub fn redeem(&mut self, reward: &Reward) -> Result<Redemption> {
        if let Err(err) = self.check(reward) {
            warn!(reward = reward.id, error = %err, "Redemption rejected");
            return Err(err);
        }

        let balance = self.store.eco_points() - reward.points;
        self.store.update_eco_points(balance);
        self.redeemed.insert(reward.id);
        info!(reward = reward.id, cost = reward.points, balance, "Reward redeemed");

        Ok(Redemption {
            reward_id: reward.id,
            cost: reward.points,
            balance,
            message: format!("{} has been redeemed!", reward.title),
        })
    }

    /// Look a reward up in the catalog and redeem it
    pub fn redeem_by_id(&mut self, catalog: &ContentCatalog, reward_id: u32) -> Result<Redemption> {
        let reward = catalog.reward(reward_id).ok_or(RedeemError::NotFound(reward_id))?;
        self.redeem(reward)
    }
}

/// A tile on the rewards dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    /// Label
    pub label: String,
    /// Pre-formatted value
    pub value: String,
    /// Icon name
    pub icon: String,
    /// Accent colour
    pub color: String,
}

/// Dashboard tiles, with the total read live from the store
pub fn dashboard_stats(store: &AppStore) -> Vec<DashboardStat> {
    let tile = |label: &str, value: String, icon: &str, color: &str| DashboardStat {
        label: label.into(),
        value,
        icon: icon.into(),
        color: color.into(),
    };
    vec![
        tile("Total Points", store.eco_points().to_string(), "trophy", "#10b981"),
        tile("Redeemed", "850".into(), "gift", "#3b82f6"),
        tile("CO2 Saved", "45kg".into(), "leaf", "#22c55e"),
        tile("Rank", "#127".into(), "medal", "#f59e0b"),
    ]
}

/// Recent redemptions for the dashboard
pub fn recent_rewards(catalog: &ContentCatalog) -> &[RecentReward] {
    &catalog.recent_rewards
}

/// Totals over the monthly impact chart
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactTotals {
    /// CO2 saved in kilograms
    pub co2_kg: f64,
    /// Water saved in litres
    pub water_liters: f64,
    /// Waste diverted in kilograms
    pub waste_kg: f64,
}

impl ImpactTotals {
    /// Sum the months
    pub fn from_months(months: &[MonthlyImpact]) -> Self {
        months.iter().fold(Self::default(), |acc, m| Self {
            co2_kg: acc.co2_kg + m.co2_kg,
            water_liters: acc.water_liters + m.water_liters,
            waste_kg: acc.waste_kg + m.waste_kg,
        })
    }
}

/// CO2 bar height for each month, relative to the best month
pub fn co2_bar_heights(months: &[MonthlyImpact]) -> Vec<(String, f64)> {
    let max = months.iter().map(|m| m.co2_kg).fold(0.0_f64, f64::max);
    months
        .iter()
        .map(|m| {
            let height = if max > 0.0 { m.co2_kg / max } else { 0.0 };
            (m.month.clone(), height)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::AppState;

    fn reward(id: u32, points: u64, available: bool) -> Reward {
        Reward {
            id,
            title: format!("Reward {}", id),
            description: String::new(),
            points,
            category: RewardCategory::EcoProducts,
            image: "🎁".into(),
            available,
        }
    }

    #[test]
    fn test_insufficient_points_rejected_without_change() {
        let store = AppStore::with_state(AppState::new(1265, true));
        let mut ledger = RedemptionLedger::new(store.clone());

        let err = ledger.redeem(&reward(1, 1300, true)).unwrap_err();
        assert_eq!(
            err,
            RedeemError::InsufficientPoints {
                cost: 1300,
                balance: 1265,
                shortfall: 35
            }
        );
        assert_eq!(err.to_string(), "You need 35 more points to redeem this reward.");
        assert_eq!(store.eco_points(), 1265);
        assert!(!ledger.is_redeemed(1));
    }

    #[test]
    fn test_unavailable_checked_before_balance() {
        let store = AppStore::with_state(AppState::new(0, true));
        let mut ledger = RedemptionLedger::new(store.clone());

        let err = ledger.redeem(&reward(6, 150, false)).unwrap_err();
        assert_eq!(err, RedeemError::Unavailable);
        assert_eq!(err.title(), "Out of Stock");
        assert_eq!(err.to_string(), "This reward is currently unavailable.");
        assert_eq!(store.eco_points(), 0);
    }

    #[test]
    fn test_successful_redemption() {
        let store = AppStore::new();
        let mut ledger = RedemptionLedger::new(store.clone());
        let catalog = ContentCatalog::builtin();

        let redemption = ledger.redeem_by_id(&catalog, 1).unwrap();
        assert_eq!(redemption.cost, 300);
        assert_eq!(redemption.balance, 950);
        assert_eq!(redemption.message, "Bamboo Water Bottle has been redeemed!");
        assert_eq!(store.eco_points(), 950);
        assert!(ledger.is_redeemed(1));

        assert_eq!(
            ledger.redeem_by_id(&catalog, 1),
            Err(RedeemError::AlreadyRedeemed("Bamboo Water Bottle".into()))
        );
        assert_eq!(store.eco_points(), 950);
    }

    #[test]
    fn test_exact_balance_is_enough() {
        let store = AppStore::with_state(AppState::new(500, true));
        let mut ledger = RedemptionLedger::new(store.clone());
        assert!(ledger.can_afford(&reward(2, 500, true)));
        ledger.redeem(&reward(2, 500, true)).unwrap();
        assert_eq!(store.eco_points(), 0);
    }

    #[test]
    fn test_confirm_prompt() {
        let catalog = ContentCatalog::builtin();
        assert_eq!(
            RedemptionLedger::confirm_prompt(catalog.reward(3).unwrap()),
            "Are you sure you want to redeem \"20% Off Organic Store\" for 200 points?"
        );
    }

    #[test]
    fn test_unknown_reward() {
        let catalog = ContentCatalog::builtin();
        let mut ledger = RedemptionLedger::new(AppStore::new());
        assert_eq!(ledger.redeem_by_id(&catalog, 77), Err(RedeemError::NotFound(77)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_marketplace_filter() {
        let catalog = ContentCatalog::builtin();
        let labels: Vec<_> = RewardFilter::chips().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Eco Products", "Discounts", "Experiences", "Donations"]
        );

        let discounts = filter_rewards(&catalog, RewardFilter::Category(RewardCategory::Discounts));
        assert_eq!(discounts.len(), 1);
        assert_eq!(discounts[0].title, "20% Off Organic Store");
        assert_eq!(filter_rewards(&catalog, RewardFilter::All).len(), catalog.rewards.len());
    }

    #[test]
    fn test_sections_cover_every_reward() {
        let catalog = ContentCatalog::builtin();
        let sections = reward_sections(&catalog);
        let total: usize = sections.iter().map(|s| s.rewards.len()).sum();
        assert_eq!(total, catalog.rewards.len());
        assert_eq!(sections[0].category, RewardCategory::EcoProducts);
    }

    #[test]
    fn test_dashboard_total_is_live() {
        let store = AppStore::new();
        assert_eq!(dashboard_stats(&store)[0].value, "1250");
        store.award_points(10);
        assert_eq!(dashboard_stats(&store)[0].value, "1260");
        assert_eq!(dashboard_stats(&store)[3].value, "#127");
    }

    #[test]
    fn test_impact_totals() {
        let catalog = ContentCatalog::builtin();
        let totals = ImpactTotals::from_months(&catalog.monthly_impact);
        assert!((totals.co2_kg - 45.2).abs() < 1e-9);
        assert!((totals.water_liters - 1250.0).abs() < 1e-9);
        assert!((totals.waste_kg - 12.8).abs() < 1e-9);

        let bars = co2_bar_heights(&catalog.monthly_impact);
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[3], ("Apr".to_string(), 1.0));
    }
}
