use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::narrative::DateOutcome;
use crate::simulation::journal::Journal;
use crate::simulation::social::SocialState;
use crate::simulation::stats::PlayerStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatingPreference {
    Male,
    Female,
    #[default]
    Everyone,
}

impl fmt::Display for DatingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DatingPreference::Male => "Male",
            DatingPreference::Female => "Female",
            DatingPreference::Everyone => "Everyone",
        };
        write!(f, "{}", label)
    }
}

/// A candidate surfaced by the matchmaking pool. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatingProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub profession: String,
    pub bio: String,
}

/// The current romantic partner. The score here lives in [0, 100]; unlike
/// colleague relationships there is no rival end of the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub profile: DatingProfile,
    pub score: i32,
    pub weeks_together: u32,
    #[serde(default)]
    pub weekly_actions_taken: u32,
}

/// How a resolved first date lands. The chemistry thresholds split the result
/// into a new relationship, a polite nothing, or a bad evening.
pub fn apply_first_date(
    outcome: &DateOutcome,
    profile: DatingProfile,
    social: &mut SocialState,
    stats: &mut PlayerStats,
    journal: &mut Journal,
    week: u32,
) {
    journal.record(week, outcome.summary.clone());

    if outcome.chemistry > 65 {
        let name = profile.name.clone();
        social.partner = Some(Partner {
            profile,
            score: 50 + (outcome.chemistry - 65) / 2,
            weeks_together: 1,
            weekly_actions_taken: 0,
        });
        stats.adjust_happiness(15);
        journal.record(
            week,
            format!("The date was a huge success! You and {} are now dating.", name),
        );
    } else if outcome.chemistry > 30 {
        stats.adjust_happiness(5);
        journal.record(
            week,
            format!(
                "The date with {} was fine, but the spark wasn't really there.",
                profile.name
            ),
        );
    } else {
        stats.adjust_happiness(-5);
        journal.record(
            week,
            format!("The date with {} was a bit of a disaster.", profile.name),
        );
    }
}

/// Weekly partner upkeep: reset the action budget, age the relationship, walk
/// the score one step, and feed happiness back outside the comfortable band.
/// Without a partner the week just grinds happiness down instead.
pub fn weekly_partner_tick(
    social: &mut SocialState,
    stats: &mut PlayerStats,
    rng: &mut impl Rng,
    single_happiness_decay: i32,
) {
    match social.partner.as_mut() {
        Some(partner) => {
            partner.weekly_actions_taken = 0;
            partner.weeks_together += 1;
            let drift = if rng.gen::<f64>() > 0.5 { 1 } else { -1 };
            partner.score = (partner.score + drift).clamp(0, 100);

            if partner.score > 70 {
                stats.adjust_happiness(3);
            } else if partner.score < 30 {
                stats.adjust_happiness(-3);
            }
        }
        None => stats.adjust_happiness(-single_happiness_decay),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(name: &str) -> DatingProfile {
        DatingProfile {
            id: "profile_1".to_string(),
            name: name.to_string(),
            age: 24,
            gender: "Female".to_string(),
            profession: "Architect".to_string(),
            bio: "Building things, climbing things.".to_string(),
        }
    }

    fn outcome(chemistry: i32) -> DateOutcome {
        DateOutcome {
            summary: "The date happened.".to_string(),
            chemistry,
        }
    }

    #[test]
    fn high_chemistry_starts_a_relationship() {
        let mut social = SocialState::default();
        let mut stats = PlayerStats::default();
        let mut journal = Journal::default();
        apply_first_date(&outcome(85), profile("Dana"), &mut social, &mut stats, &mut journal, 4);
        let partner = social.partner.expect("should be dating");
        assert_eq!(partner.score, 60);
        assert_eq!(partner.weeks_together, 1);
        assert_eq!(stats.happiness, 85);
    }

    #[test]
    fn middling_chemistry_leaves_player_single() {
        let mut social = SocialState::default();
        let mut stats = PlayerStats::default();
        let mut journal = Journal::default();
        apply_first_date(&outcome(50), profile("Dana"), &mut social, &mut stats, &mut journal, 4);
        assert!(social.partner.is_none());
        assert_eq!(stats.happiness, 75);
    }

    #[test]
    fn bad_chemistry_stings() {
        let mut social = SocialState::default();
        let mut stats = PlayerStats::default();
        let mut journal = Journal::default();
        apply_first_date(&outcome(10), profile("Dana"), &mut social, &mut stats, &mut journal, 4);
        assert!(social.partner.is_none());
        assert_eq!(stats.happiness, 65);
    }

    #[test]
    fn partner_tick_resets_actions_and_walks_score() {
        let mut social = SocialState::default();
        let mut stats = PlayerStats::default();
        social.partner = Some(Partner {
            profile: profile("Dana"),
            score: 50,
            weeks_together: 1,
            weekly_actions_taken: 1,
        });
        let mut rng = StdRng::seed_from_u64(1);
        weekly_partner_tick(&mut social, &mut stats, &mut rng, 1);
        let partner = social.partner.as_ref().unwrap();
        assert_eq!(partner.weekly_actions_taken, 0);
        assert_eq!(partner.weeks_together, 2);
        assert!((49..=51).contains(&partner.score));
    }

    #[test]
    fn single_week_erodes_happiness() {
        let mut social = SocialState::default();
        let mut stats = PlayerStats::default();
        let mut rng = StdRng::seed_from_u64(1);
        weekly_partner_tick(&mut social, &mut stats, &mut rng, 1);
        assert_eq!(stats.happiness, 69);
    }
}
