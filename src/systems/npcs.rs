use bevy_ecs::prelude::*;

use crate::core::ecs::GameRng;
use crate::data::tuning::Tuning;
use crate::simulation::npcs::{advance_npcs, NpcPool};
use crate::simulation::social::SocialState;
use crate::simulation::stardb::StarDb;
use crate::simulation::time::GameClock;

/// System: background career progression for a small round-robin window of
/// the NPC roster.
pub fn npc_progression_system(
    mut pool: ResMut<NpcPool>,
    clock: Res<GameClock>,
    mut stardb: ResMut<StarDb>,
    mut social: ResMut<SocialState>,
    tuning: Res<Tuning>,
    mut rng: ResMut<GameRng>,
) {
    advance_npcs(
        &mut pool,
        &clock,
        &mut stardb,
        &mut social,
        &mut rng.0,
        tuning.npc_window,
    );
}
