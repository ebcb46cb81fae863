use bevy_ecs::prelude::*;

use crate::core::ecs::GameRng;
use crate::data::tuning::Tuning;
use crate::narrative::Narrator;
use crate::simulation::career::Career;
use crate::simulation::npcs::NpcPool;
use crate::simulation::profile::PlayerProfile;
use crate::simulation::social::{run_proactive_dms, SocialState};
use crate::simulation::time::GameClock;

/// System: NPCs occasionally reach out on their own. Failures in the
/// narrative backend just mean a quiet week.
#[allow(clippy::too_many_arguments)]
pub fn proactive_dm_system(
    mut social: ResMut<SocialState>,
    pool: Res<NpcPool>,
    career: Res<Career>,
    profile: Res<PlayerProfile>,
    clock: Res<GameClock>,
    mut narrator: ResMut<Narrator>,
    tuning: Res<Tuning>,
    mut rng: ResMut<GameRng>,
) {
    run_proactive_dms(
        &mut social,
        &pool,
        &career,
        &profile.name,
        &clock,
        narrator.0.as_mut(),
        &mut rng.0,
        tuning.proactive_dm_chance,
    );
}
