use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Externalized tuning constants. Everything here is balance data, not
/// structure: the defaults reproduce the shipped behavior exactly, and a JSON
/// override file can reshape the economy without touching code.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Flat cost of living added to every week's expenses.
    pub base_expenses: i64,
    pub starting_cash: i64,
    /// Bankruptcy triggers strictly below this balance.
    pub bankruptcy_floor: i64,
    /// On-set action slots per role per week.
    pub weekly_role_action_cap: u32,
    /// How many NPCs the round-robin window advances each week.
    pub npc_window: usize,
    /// Independent weekly chance per significant relationship of an NPC
    /// starting a conversation.
    pub proactive_dm_chance: f64,
    pub award_period_weeks: u32,
    /// Bounded length of each relationship's memory log.
    pub memory_cap: usize,

    // On-set actions
    pub practice_performance: i32,
    pub develop_performance: i32,
    pub develop_happiness_cost: i32,
    pub publicity_success_chance: f64,

    // Quitting a role
    pub quit_reputation_penalty: i32,
    pub quit_happiness_penalty: i32,
    pub quit_relationship_penalty: i32,

    // Passive weekly drift
    pub weekly_health_decay: i32,
    pub single_happiness_decay: i32,

    // Dating and partnership
    pub date_cost: i64,
    pub dating_refresh_cost: i64,
    pub fancy_date_cost: i64,
    pub partner_action_cap: u32,
    pub breakup_happiness_penalty: i32,
    pub chemistry_match_threshold: i32,
    pub chemistry_neutral_threshold: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_expenses: 50,
            starting_cash: 100_000,
            bankruptcy_floor: -5_000,
            weekly_role_action_cap: 6,
            npc_window: 5,
            proactive_dm_chance: 0.05,
            award_period_weeks: 52,
            memory_cap: 5,
            practice_performance: 5,
            develop_performance: 8,
            develop_happiness_cost: 3,
            publicity_success_chance: 0.75,
            quit_reputation_penalty: 25,
            quit_happiness_penalty: 15,
            quit_relationship_penalty: 25,
            weekly_health_decay: 1,
            single_happiness_decay: 1,
            date_cost: 200,
            dating_refresh_cost: 500,
            fancy_date_cost: 500,
            partner_action_cap: 1,
            breakup_happiness_penalty: 25,
            chemistry_match_threshold: 65,
            chemistry_neutral_threshold: 30,
        }
    }
}

/// Load a tuning override, falling back to defaults on any failure.
pub fn load_tuning(path: impl AsRef<Path>) -> Tuning {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("failed to parse tuning from {}: {}", path.display(), err);
                Tuning::default()
            }
        },
        Err(err) => {
            log::warn!("failed to read tuning from {}: {}", path.display(), err);
            Tuning::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_shipped_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.base_expenses, 50);
        assert_eq!(tuning.weekly_role_action_cap, 6);
        assert_eq!(tuning.npc_window, 5);
        assert_eq!(tuning.bankruptcy_floor, -5_000);
        assert!((tuning.proactive_dm_chance - 0.05).abs() < 1e-12);
        assert_eq!(tuning.memory_cap, 5);
    }

    #[test]
    fn partial_override_backfills_from_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"base_expenses": 75}"#).unwrap();
        assert_eq!(tuning.base_expenses, 75);
        assert_eq!(tuning.weekly_role_action_cap, 6);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tuning = load_tuning("/nonexistent/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }
}
