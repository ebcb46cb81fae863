use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content::names;
use crate::simulation::career::{AwardRecord, Career, ProjectType, RoleTier};
use crate::simulation::dating::DatingProfile;
use crate::simulation::journal::Journal;
use crate::simulation::npcs::NpcPool;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;

pub const BEST_LEAD_PERFORMANCE: &str = "Best Lead Performance";

/// Typed payload for a delayed action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventPayload {
    AwardCeremony { year: u32 },
    FirstDate { profile: DatingProfile },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub weeks_left: u32,
    pub payload: EventPayload,
}

/// A flat countdown queue, drained once per week. Not a priority structure;
/// event volume stays tiny.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvents(pub Vec<ScheduledEvent>);

impl ScheduledEvents {
    pub fn schedule(&mut self, weeks_left: u32, payload: EventPayload) {
        self.0.push(ScheduledEvent { weeks_left, payload });
    }

    /// Remove and return every event due this week (countdown at or below 1).
    pub fn take_due(&mut self) -> Vec<ScheduledEvent> {
        let mut due = Vec::new();
        let mut remaining = Vec::new();
        for event in self.0.drain(..) {
            if event.weeks_left <= 1 {
                due.push(event);
            } else {
                remaining.push(event);
            }
        }
        self.0 = remaining;
        due
    }

    /// Countdown step for everything still queued, including events scheduled
    /// by this week's handlers.
    pub fn tick(&mut self) {
        for event in &mut self.0 {
            event.weeks_left -= 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Nominee {
    pub name: String,
    pub project: String,
    pub score: f64,
    pub is_player: bool,
}

/// Score this year's field for the lead-performance award. Player entries come
/// from lead film roles completed within the last cycle; the rest of the slate
/// is filled with four of the most famous working actors. Top five by score,
/// best first.
pub fn nominate(
    career: &Career,
    stats: &PlayerStats,
    pool: &NpcPool,
    clock: &GameClock,
    player_name: &str,
    rng: &mut impl Rng,
) -> Vec<Nominee> {
    let mut nominees = Vec::new();
    let cutoff = clock.week.saturating_sub(52);
    for role in career.completed_roles.iter().filter(|role| {
        role.week_completed > cutoff
            && role.tier == RoleTier::Lead
            && role.project_type == ProjectType::Film
    }) {
        let performance = role.final_performance_score as f64;
        let box_office = (role.box_office_gross as f64 / 1_000_000.0) * 0.1;
        let fame = stats.fame as f64 * 0.2;
        nominees.push(Nominee {
            name: player_name.to_string(),
            project: role.title.clone(),
            score: performance + box_office + fame,
            is_player: true,
        });
    }

    let mut top: Vec<_> = pool.actors().collect();
    top.sort_by_key(|npc| std::cmp::Reverse(npc.fame));
    top.truncate(10);
    if !top.is_empty() {
        for i in 0..4 {
            let npc = top[i % top.len()];
            nominees.push(Nominee {
                name: npc.name.clone(),
                project: names::random_title(rng),
                score: 60.0 + rng.gen::<f64>() * 40.0 + npc.fame as f64 * 0.3,
                is_player: false,
            });
        }
    }

    nominees.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    nominees.truncate(5);
    nominees
}

/// Resolve an award night: build the field, crown the top score, apply the
/// player's fame/reputation effects, log every player nomination, and requeue
/// the next ceremony a full cycle out.
#[allow(clippy::too_many_arguments)]
pub fn run_award_ceremony(
    year: u32,
    period_weeks: u32,
    career: &mut Career,
    stats: &mut PlayerStats,
    pool: &NpcPool,
    clock: &GameClock,
    events: &mut ScheduledEvents,
    journal: &mut Journal,
    player_name: &str,
    rng: &mut impl Rng,
) {
    journal.record(clock.week, format!("It's time for the {} Galaxy Awards!", year));

    let nominees = nominate(career, stats, pool, clock, player_name, rng);
    if let Some(winner) = nominees.first().cloned() {
        let player_nominated = nominees.iter().any(|n| n.is_player);
        for nominee in nominees.iter().filter(|n| n.is_player) {
            career.awards.push(AwardRecord {
                year,
                award: BEST_LEAD_PERFORMANCE.to_string(),
                project: nominee.project.clone(),
                won: winner.is_player,
            });
        }

        if winner.is_player {
            stats.adjust_fame(20);
            stats.adjust_reputation(15);
            journal.record(
                clock.week,
                format!(
                    "You won the Galaxy Award for {}! Your fame and reputation soar.",
                    BEST_LEAD_PERFORMANCE
                ),
            );
        } else if player_nominated {
            stats.adjust_reputation(5);
            journal.record(
                clock.week,
                "You were nominated for a Galaxy Award, boosting your reputation.",
            );
        } else {
            journal.record(clock.week, "You watched the Galaxy Awards from home this year.");
        }
    }

    events.schedule(period_weeks, EventPayload::AwardCeremony { year: year + 1 });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::career::{CompletedRole, Genre};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lead_film(title: &str, week_completed: u32, performance: i32, gross: i64) -> CompletedRole {
        CompletedRole {
            title: title.to_string(),
            character_name: "TBD".to_string(),
            year: 18,
            week_completed,
            fame_gained: 10,
            reputation_gained: 5,
            genre: Genre::Drama,
            project_type: ProjectType::Film,
            tier: RoleTier::Lead,
            director: "Someone".to_string(),
            cast: Vec::new(),
            box_office_gross: gross,
            player_cut: 0,
            box_office: None,
            final_performance_score: performance,
        }
    }

    #[test]
    fn countdown_queue_fires_and_requeues() {
        let mut events = ScheduledEvents::default();
        events.schedule(2, EventPayload::AwardCeremony { year: 18 });
        assert!(events.take_due().is_empty());
        events.tick();
        let due = events.take_due();
        assert_eq!(due.len(), 1);
        assert!(events.0.is_empty());
    }

    #[test]
    fn nomination_scoring_matches_the_stated_formula() {
        let mut rng = StdRng::seed_from_u64(6);
        let pool = NpcPool::populate(&mut rng);
        let mut career = Career::default();
        career
            .completed_roles
            .push(lead_film("Eternal Gambit", 60, 90, 500_000_000));
        let stats = PlayerStats {
            fame: 50,
            ..Default::default()
        };
        let clock = GameClock { week: 70, age: 19 };

        let nominees = nominate(&career, &stats, &pool, &clock, "Starry 500", &mut rng);
        let player = nominees
            .iter()
            .find(|n| n.is_player)
            .expect("player should make a 150-point field");
        // 90 performance + 50 box-office points + 10 fame points.
        assert!((player.score - 150.0).abs() < 1e-9);
        assert!(nominees.len() <= 5);
    }

    #[test]
    fn stale_and_non_lead_roles_are_ineligible() {
        let mut rng = StdRng::seed_from_u64(6);
        let pool = NpcPool::populate(&mut rng);
        let mut career = Career::default();
        career.completed_roles.push(lead_film("Old Glory", 5, 99, 1));
        let mut supporting = lead_film("Side Part", 60, 99, 1_000_000_000);
        supporting.tier = RoleTier::Supporting;
        career.completed_roles.push(supporting);
        let stats = PlayerStats::default();
        let clock = GameClock { week: 70, age: 19 };

        let nominees = nominate(&career, &stats, &pool, &clock, "Starry 500", &mut rng);
        assert!(nominees.iter().all(|n| !n.is_player));
    }

    #[test]
    fn ceremony_records_player_nominations_and_reschedules() {
        let mut rng = StdRng::seed_from_u64(6);
        let pool = NpcPool::populate(&mut rng);
        let mut career = Career::default();
        career
            .completed_roles
            .push(lead_film("Eternal Gambit", 60, 0, 2_000_000_000));
        let mut stats = PlayerStats {
            fame: 300,
            ..Default::default()
        };
        let clock = GameClock { week: 70, age: 19 };
        let mut events = ScheduledEvents::default();
        let mut journal = Journal::default();

        run_award_ceremony(
            18, 52, &mut career, &mut stats, &pool, &clock, &mut events, &mut journal,
            "Starry 500", &mut rng,
        );
        // A 260+ score cannot lose to the NPC ceiling of 130.
        assert_eq!(career.awards.len(), 1);
        assert!(career.awards[0].won);
        assert_eq!(stats.fame, 320);
        assert_eq!(events.0.len(), 1);
        assert!(matches!(
            events.0[0].payload,
            EventPayload::AwardCeremony { year: 19 }
        ));
    }
}
