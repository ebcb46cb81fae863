use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// An owned possession. Purchase price and upkeep are frozen at the moment of
/// purchase; later catalog changes never retroactively reprice an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: String,
    pub purchase_price: i64,
    pub weekly_upkeep: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashHistory {
    pub week: Vec<u32>,
    pub cash: Vec<i64>,
}

/// The player's finances. Cash is signed: running far enough below zero is the
/// bankruptcy trigger. Income and expenses are recomputed from scratch every
/// week rather than accumulated.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wealth {
    pub cash: i64,
    pub income: i64,
    pub expenses: i64,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub history: CashHistory,
}

impl Default for Wealth {
    fn default() -> Self {
        Self {
            cash: 2000,
            income: 0,
            expenses: 50,
            assets: Vec::new(),
            history: CashHistory::default(),
        }
    }
}

impl Wealth {
    pub fn owns(&self, asset_id: &str) -> bool {
        self.assets.iter().any(|a| a.id == asset_id)
    }

    pub fn upkeep_total(&self) -> i64 {
        self.assets.iter().map(|a| a.weekly_upkeep).sum()
    }

    /// Store this week's totals and settle them against the balance.
    pub fn settle_week(&mut self, income: i64, base_expenses: i64) {
        self.income = income;
        self.expenses = base_expenses + self.upkeep_total();
        self.cash += self.income - self.expenses;
    }

    pub fn record_history(&mut self, week: u32) {
        self.history.week.push(week);
        self.history.cash.push(self.cash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, upkeep: i64) -> Asset {
        Asset {
            id: id.to_string(),
            name: id.to_string(),
            category: "Vehicles".to_string(),
            purchase_price: 1000,
            weekly_upkeep: upkeep,
        }
    }

    #[test]
    fn settle_week_recomputes_rather_than_accumulates() {
        let mut wealth = Wealth::default();
        wealth.assets.push(asset("car", 150));
        wealth.settle_week(1000, 50);
        assert_eq!(wealth.income, 1000);
        assert_eq!(wealth.expenses, 200);
        assert_eq!(wealth.cash, 2800);

        wealth.settle_week(0, 50);
        assert_eq!(wealth.income, 0);
        assert_eq!(wealth.expenses, 200);
        assert_eq!(wealth.cash, 2600);
    }

    #[test]
    fn cash_may_go_negative() {
        let mut wealth = Wealth {
            cash: 20,
            ..Default::default()
        };
        wealth.settle_week(0, 50);
        assert_eq!(wealth.cash, -30);
    }
}
