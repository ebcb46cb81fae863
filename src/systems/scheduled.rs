use bevy_ecs::prelude::*;

use crate::core::ecs::GameRng;
use crate::data::tuning::Tuning;
use crate::narrative::{DateContext, Narrator};
use crate::simulation::career::Career;
use crate::simulation::dating::apply_first_date;
use crate::simulation::events::{run_award_ceremony, EventPayload, ScheduledEvents};
use crate::simulation::journal::Journal;
use crate::simulation::npcs::NpcPool;
use crate::simulation::profile::PlayerProfile;
use crate::simulation::social::SocialState;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;

/// System: fires every due scheduled event, then steps the countdowns.
/// Runs before the calendar advances, so events land at the top of the week
/// they were aimed at.
#[allow(clippy::too_many_arguments)]
pub fn drain_scheduled_events_system(
    mut events: ResMut<ScheduledEvents>,
    mut career: ResMut<Career>,
    mut stats: ResMut<PlayerStats>,
    mut social: ResMut<SocialState>,
    pool: Res<NpcPool>,
    clock: Res<GameClock>,
    profile: Res<PlayerProfile>,
    mut journal: ResMut<Journal>,
    mut narrator: ResMut<Narrator>,
    mut rng: ResMut<GameRng>,
    tuning: Res<Tuning>,
) {
    for event in events.take_due() {
        match event.payload {
            EventPayload::AwardCeremony { year } => {
                run_award_ceremony(
                    year,
                    tuning.award_period_weeks,
                    &mut career,
                    &mut stats,
                    &pool,
                    &clock,
                    &mut events,
                    &mut journal,
                    &profile.name,
                    &mut rng.0,
                );
            }
            EventPayload::FirstDate {
                profile: date_profile,
            } => {
                journal.record(
                    clock.week,
                    format!("You went on your date with {}.", date_profile.name),
                );
                let context = DateContext {
                    player_name: profile.name.clone(),
                    profile: date_profile.clone(),
                };
                match narrator.0.date_outcome(&context) {
                    Ok(outcome) => apply_first_date(
                        &outcome,
                        date_profile,
                        &mut social,
                        &mut stats,
                        &mut journal,
                        clock.week,
                    ),
                    Err(err) => {
                        log::warn!("date outcome generation failed: {}", err);
                        journal.record(
                            clock.week,
                            "The date was... memorable. For all the wrong reasons.",
                        );
                    }
                }
            }
        }
    }
    events.tick();
}
