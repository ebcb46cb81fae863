use bevy_ecs::prelude::*;
use bevy_ecs::schedule::SystemSet;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::tuning::Tuning;
use crate::narrative::{NarrativeGenerator, Narrator};
use crate::simulation::career::Career;
use crate::simulation::events::ScheduledEvents;
use crate::simulation::journal::Journal;
use crate::simulation::npcs::NpcPool;
use crate::simulation::profile::PlayerProfile;
use crate::simulation::session::{GameStatus, WeeklyLedger};
use crate::simulation::social::SocialState;
use crate::simulation::stardb::StarDb;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::Wealth;
use crate::systems::achievements::achievements_system;
use crate::systems::calendar::advance_calendar_system;
use crate::systems::career::{
    regenerate_auditions_system, resolve_auditions_system, tick_roles_system,
};
use crate::systems::finance::{agent_commission_system, finance_totals_system};
use crate::systems::game_over::game_over_system;
use crate::systems::npcs::npc_progression_system;
use crate::systems::scheduled::drain_scheduled_events_system;
use crate::systems::social::proactive_dm_system;
use crate::systems::stardb::sync_stardb_system;
use crate::systems::stats::{history_system, passive_drift_system};

/// The single random source behind every draw the simulation makes.
/// Deterministic given the game seed.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Canonical weekly ordering for the simulation.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum WeekSet {
    Events,
    Career,
    Finance,
    Wellbeing,
    World,
    Checks,
}

/// Build the ECS world with baseline resources.
pub fn create_world(
    seed: u64,
    narrator: Box<dyn NarrativeGenerator + Send + Sync>,
    tuning: Tuning,
) -> World {
    let mut world = World::new();
    world.insert_resource(GameClock::default());
    world.insert_resource(PlayerProfile::default());
    world.insert_resource(PlayerStats::default());
    world.insert_resource(Wealth::default());
    world.insert_resource(Career::default());
    world.insert_resource(SocialState::default());
    world.insert_resource(NpcPool::default());
    world.insert_resource(ScheduledEvents::default());
    world.insert_resource(StarDb::default());
    world.insert_resource(Journal::default());
    world.insert_resource(WeeklyLedger::default());
    world.insert_resource(GameStatus::default());
    world.insert_resource(tuning);
    world.insert_resource(GameRng::from_seed(seed));
    world.insert_resource(Narrator(narrator));
    world
}

/// Build the weekly schedule in the canonical order. The chain matters:
/// commission comes after income is known, achievements after every stat
/// mutation, the game-over check after finances and health have settled, and
/// a finished run generates no fresh auditions.
pub fn create_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.configure_sets(
        (
            WeekSet::Events,
            WeekSet::Career,
            WeekSet::Finance,
            WeekSet::Wellbeing,
            WeekSet::World,
            WeekSet::Checks,
        )
            .chain(),
    );

    schedule.add_systems((
        (drain_scheduled_events_system, advance_calendar_system)
            .chain()
            .in_set(WeekSet::Events),
        (tick_roles_system, resolve_auditions_system)
            .chain()
            .in_set(WeekSet::Career),
        (agent_commission_system, finance_totals_system)
            .chain()
            .in_set(WeekSet::Finance),
        (passive_drift_system, history_system)
            .chain()
            .in_set(WeekSet::Wellbeing),
        (
            npc_progression_system,
            proactive_dm_system,
            sync_stardb_system,
        )
            .chain()
            .in_set(WeekSet::World),
        (
            achievements_system,
            game_over_system,
            regenerate_auditions_system,
        )
            .chain()
            .in_set(WeekSet::Checks),
    ));

    schedule
}
