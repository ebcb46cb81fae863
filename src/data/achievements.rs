use crate::simulation::career::{Career, RoleTier};
use crate::simulation::social::SocialState;
use crate::simulation::stats::PlayerStats;
use crate::simulation::wealth::Wealth;

/// Data-driven achievement gate. Conditions are tagged variants evaluated
/// against live state, not closures, so the catalog stays inspectable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    CompletedRoles(usize),
    CompletedLeadRole,
    CashAtLeast(i64),
    AnyNomination,
    AnyAwardWin,
    FameAtLeast(i32),
    PropertyWorthAtLeast(i64),
    FollowersAtLeast(u64),
}

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: Condition,
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_role",
        name: "The Beginning",
        description: "Complete your very first professional role.",
        condition: Condition::CompletedRoles(1),
    },
    Achievement {
        id: "first_lead",
        name: "Leading Star",
        description: "Land and complete your first leading role.",
        condition: Condition::CompletedLeadRole,
    },
    Achievement {
        id: "millionaire",
        name: "Millionaire",
        description: "Have over $1,000,000 cash in the bank.",
        condition: Condition::CashAtLeast(1_000_000),
    },
    Achievement {
        id: "award_nomination",
        name: "Recognized Talent",
        description: "Receive your first nomination for a Galaxy Award.",
        condition: Condition::AnyNomination,
    },
    Achievement {
        id: "award_win",
        name: "Award Winner",
        description: "Win a prestigious Galaxy Award.",
        condition: Condition::AnyAwardWin,
    },
    Achievement {
        id: "a_lister",
        name: "A-Lister",
        description: "Achieve a fame level of 80 or higher.",
        condition: Condition::FameAtLeast(80),
    },
    Achievement {
        id: "property_owner",
        name: "Real Estate Mogul",
        description: "Own a property worth over $1,000,000.",
        condition: Condition::PropertyWorthAtLeast(1_000_000),
    },
    Achievement {
        id: "superstar",
        name: "Superstar",
        description: "Have over 1,000,000 followers on HGram.",
        condition: Condition::FollowersAtLeast(1_000_000),
    },
];

pub fn by_id(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

pub fn is_met(
    condition: Condition,
    career: &Career,
    wealth: &Wealth,
    stats: &PlayerStats,
    social: &SocialState,
) -> bool {
    match condition {
        Condition::CompletedRoles(count) => career.completed_roles.len() >= count,
        Condition::CompletedLeadRole => career
            .completed_roles
            .iter()
            .any(|r| r.tier == RoleTier::Lead),
        Condition::CashAtLeast(amount) => wealth.cash >= amount,
        Condition::AnyNomination => !career.awards.is_empty(),
        Condition::AnyAwardWin => career.awards.iter().any(|a| a.won),
        Condition::FameAtLeast(level) => stats.fame >= level,
        Condition::PropertyWorthAtLeast(amount) => wealth
            .assets
            .iter()
            .any(|a| a.category == "Real Estate" && a.purchase_price >= amount),
        Condition::FollowersAtLeast(count) => social.followers >= count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_and_fame_gates_trip_at_their_thresholds() {
        let career = Career::default();
        let social = SocialState::default();
        let mut wealth = Wealth::default();
        let mut stats = PlayerStats::default();

        assert!(!is_met(Condition::CashAtLeast(1_000_000), &career, &wealth, &stats, &social));
        wealth.cash = 1_000_000;
        assert!(is_met(Condition::CashAtLeast(1_000_000), &career, &wealth, &stats, &social));

        stats.fame = 79;
        assert!(!is_met(Condition::FameAtLeast(80), &career, &wealth, &stats, &social));
        stats.fame = 80;
        assert!(is_met(Condition::FameAtLeast(80), &career, &wealth, &stats, &social));
    }

    #[test]
    fn property_gate_only_counts_real_estate() {
        let career = Career::default();
        let social = SocialState::default();
        let stats = PlayerStats::default();
        let mut wealth = Wealth::default();
        wealth.assets.push(crate::simulation::wealth::Asset {
            id: "yacht".to_string(),
            name: "Super Yacht".to_string(),
            category: "Luxury Goods".to_string(),
            purchase_price: 15_000_000,
            weekly_upkeep: 18_000,
        });
        assert!(!is_met(
            Condition::PropertyWorthAtLeast(1_000_000),
            &career,
            &wealth,
            &stats,
            &social
        ));
    }
}
