use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// A uniform stat-delta record. Catalog entries (activities, shop boosts,
/// backgrounds) and scripted outcomes all reduce to one of these and flow
/// through [`PlayerStats::apply`], so clamping happens in exactly one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEffects {
    pub health: i32,
    pub happiness: i32,
    pub fame: i32,
    pub reputation: i32,
    pub acting_skill: i32,
}

/// Per-metric trend ledgers backing the stats charts. One sample per metric is
/// appended every week; the vectors stay the same length forever.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatHistory {
    pub week: Vec<u32>,
    pub fame: Vec<i32>,
    pub acting_skill: Vec<i32>,
    pub happiness: Vec<i32>,
    pub health: Vec<i32>,
    pub reputation: Vec<i32>,
}

impl StatHistory {
    pub fn len(&self) -> usize {
        self.week.len()
    }

    pub fn is_empty(&self) -> bool {
        self.week.is_empty()
    }
}

/// The player's core attributes. Health, happiness, and reputation live in
/// [0, 100]; fame and acting skill are floored at zero but open-ended above.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: i32,
    pub happiness: i32,
    pub acting_skill: i32,
    pub fame: i32,
    pub reputation: i32,
    #[serde(default)]
    pub history: StatHistory,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 100,
            happiness: 70,
            acting_skill: 10,
            fame: 5,
            reputation: 50,
            history: StatHistory::default(),
        }
    }
}

impl PlayerStats {
    /// Apply a delta record, clamping each metric at the point of mutation.
    pub fn apply(&mut self, effects: &StatEffects) {
        self.adjust_health(effects.health);
        self.adjust_happiness(effects.happiness);
        self.adjust_reputation(effects.reputation);
        self.adjust_fame(effects.fame);
        self.adjust_acting_skill(effects.acting_skill);
    }

    pub fn adjust_health(&mut self, delta: i32) {
        self.health = (self.health + delta).clamp(0, 100);
    }

    pub fn adjust_happiness(&mut self, delta: i32) {
        self.happiness = (self.happiness + delta).clamp(0, 100);
    }

    pub fn adjust_reputation(&mut self, delta: i32) {
        self.reputation = (self.reputation + delta).clamp(0, 100);
    }

    pub fn adjust_fame(&mut self, delta: i32) {
        self.fame = (self.fame + delta).max(0);
    }

    pub fn adjust_acting_skill(&mut self, delta: i32) {
        self.acting_skill = (self.acting_skill + delta).max(0);
    }

    /// Append this week's sample to every trend ledger.
    pub fn record_history(&mut self, week: u32) {
        self.history.week.push(week);
        self.history.fame.push(self.fame);
        self.history.acting_skill.push(self.acting_skill);
        self.history.happiness.push(self.happiness);
        self.history.health.push(self.health);
        self.history.reputation.push(self.reputation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_stats_clamp_both_directions() {
        let mut stats = PlayerStats::default();
        stats.apply(&StatEffects {
            health: 500,
            happiness: -500,
            reputation: 500,
            ..Default::default()
        });
        assert_eq!(stats.health, 100);
        assert_eq!(stats.happiness, 0);
        assert_eq!(stats.reputation, 100);
    }

    #[test]
    fn fame_and_skill_are_open_ended_but_non_negative() {
        let mut stats = PlayerStats::default();
        stats.adjust_fame(200);
        assert_eq!(stats.fame, 205);
        stats.adjust_fame(-1000);
        assert_eq!(stats.fame, 0);
        stats.adjust_acting_skill(150);
        assert_eq!(stats.acting_skill, 160);
    }

    #[test]
    fn history_ledgers_stay_parallel() {
        let mut stats = PlayerStats::default();
        stats.record_history(1);
        stats.adjust_fame(3);
        stats.record_history(2);
        assert_eq!(stats.history.len(), 2);
        assert_eq!(stats.history.week, vec![1, 2]);
        assert_eq!(stats.history.fame, vec![5, 8]);
        assert_eq!(stats.history.health.len(), stats.history.reputation.len());
    }
}
