use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::simulation::career::Career;
use crate::simulation::events::ScheduledEvents;
use crate::simulation::journal::Journal;
use crate::simulation::npcs::NpcPool;
use crate::simulation::profile::PlayerProfile;
use crate::simulation::session::GameStatus;
use crate::simulation::social::SocialState;
use crate::simulation::stardb::StarDb;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::Wealth;

fn default_save_version() -> u32 {
    1
}

/// Save state capturing the full aggregate. Fields added after the first
/// release default on load, so older saves keep working instead of being
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    #[serde(default = "default_save_version")]
    pub version: u32,
    pub seed: u64,
    pub clock: GameClock,
    pub profile: PlayerProfile,
    pub stats: PlayerStats,
    pub wealth: Wealth,
    #[serde(default)]
    pub career: Career,
    #[serde(default)]
    pub social: SocialState,
    #[serde(default)]
    pub npcs: NpcPool,
    #[serde(default)]
    pub scheduled_events: ScheduledEvents,
    #[serde(default)]
    pub stardb: StarDb,
    #[serde(default)]
    pub journal: Journal,
    #[serde(default)]
    pub status: GameStatus,
}

/// Extract a serializable snapshot of the world.
pub fn extract_state_from_world(world: &World, seed: u64) -> SaveState {
    SaveState {
        version: default_save_version(),
        seed,
        clock: world.resource::<GameClock>().clone(),
        profile: world.resource::<PlayerProfile>().clone(),
        stats: world.resource::<PlayerStats>().clone(),
        wealth: world.resource::<Wealth>().clone(),
        career: world.resource::<Career>().clone(),
        social: world.resource::<SocialState>().clone(),
        npcs: world.resource::<NpcPool>().clone(),
        scheduled_events: world.resource::<ScheduledEvents>().clone(),
        stardb: world.resource::<StarDb>().clone(),
        journal: world.resource::<Journal>().clone(),
        status: *world.resource::<GameStatus>(),
    }
}

/// Replace the world's aggregate resources with a loaded snapshot.
pub fn apply_state_to_world(world: &mut World, state: SaveState) {
    world.insert_resource(state.clock);
    world.insert_resource(state.profile);
    world.insert_resource(state.stats);
    world.insert_resource(state.wealth);
    world.insert_resource(state.career);
    world.insert_resource(state.social);
    world.insert_resource(state.npcs);
    world.insert_resource(state.scheduled_events);
    world.insert_resource(state.stardb);
    world.insert_resource(state.journal);
    world.insert_resource(state.status);
}

/// Patch gaps left by saves from before certain features existed rather than
/// rejecting them.
pub fn backfill_state(state: &mut SaveState, rng: &mut impl Rng) {
    if state.npcs.npcs.is_empty() {
        state.npcs = NpcPool::populate(rng);
    }
    for npc in &mut state.npcs.npcs {
        if npc.acting_skill == 0 {
            npc.acting_skill = 10 + rng.gen_range(0..60);
        }
    }
}

pub fn save_state_to_json(state: &SaveState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}

pub fn load_state_from_json(data: &str) -> serde_json::Result<SaveState> {
    serde_json::from_str(data)
}

pub fn save_state_to_path<P: AsRef<Path>>(state: &SaveState, path: P) -> std::io::Result<()> {
    let json = save_state_to_json(state)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    fs::write(path, json)
}

pub fn load_state_from_path<P: AsRef<Path>>(path: P) -> std::io::Result<SaveState> {
    let data = fs::read_to_string(path)?;
    load_state_from_json(&data)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_state() -> SaveState {
        let mut rng = StdRng::seed_from_u64(21);
        let mut state = SaveState {
            version: 1,
            seed: 21,
            clock: GameClock { week: 30, age: 18 },
            profile: PlayerProfile::default(),
            stats: PlayerStats::default(),
            wealth: Wealth::default(),
            career: Career::default(),
            social: SocialState::default(),
            npcs: NpcPool::populate(&mut rng),
            scheduled_events: ScheduledEvents::default(),
            stardb: StarDb::default(),
            journal: Journal::default(),
            status: GameStatus::default(),
        };
        state.journal.record(30, "a week happened");
        state.stats.record_history(30);
        state.wealth.record_history(30);
        state
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let state = sample_state();
        let json = save_state_to_json(&state).unwrap();
        let loaded = load_state_from_json(&json).unwrap();
        assert_eq!(state, loaded);
    }

    #[test]
    fn missing_sections_default_instead_of_failing() {
        let json = r#"{
            "seed": 7,
            "clock": {"week": 5, "age": 18},
            "profile": {"name": "Starry 1", "gender": "Female", "birthplace": "London, UK", "handle": "starry_1"},
            "stats": {"health": 90, "happiness": 60, "acting_skill": 12, "fame": 8, "reputation": 50},
            "wealth": {"cash": 5000, "income": 0, "expenses": 50}
        }"#;
        let loaded = load_state_from_json(json).unwrap();
        assert_eq!(loaded.version, 1);
        assert!(loaded.career.current_roles.is_empty());
        assert!(loaded.npcs.npcs.is_empty());
        assert_eq!(loaded.social.followers, 1500);
    }

    #[test]
    fn backfill_repopulates_an_empty_roster() {
        let json = r#"{
            "seed": 7,
            "clock": {"week": 5, "age": 18},
            "profile": {"name": "Starry 1", "gender": "Female", "birthplace": "London, UK", "handle": "starry_1"},
            "stats": {"health": 90, "happiness": 60, "acting_skill": 12, "fame": 8, "reputation": 50},
            "wealth": {"cash": 5000, "income": 0, "expenses": 50}
        }"#;
        let mut loaded = load_state_from_json(json).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        backfill_state(&mut loaded, &mut rng);
        assert!(!loaded.npcs.npcs.is_empty());
        assert!(loaded.npcs.npcs.iter().all(|n| n.acting_skill >= 10));
    }
}
