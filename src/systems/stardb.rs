use bevy_ecs::prelude::*;

use crate::data::achievements;
use crate::simulation::career::Career;
use crate::simulation::profile::PlayerProfile;
use crate::simulation::stardb::{AchievementNote, StarDb};
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;

/// System: keep the player's public database page in sync with live state.
pub fn sync_stardb_system(
    mut stardb: ResMut<StarDb>,
    profile: Res<PlayerProfile>,
    stats: Res<PlayerStats>,
    clock: Res<GameClock>,
    career: Res<Career>,
) {
    let notes: Vec<AchievementNote> = profile
        .achievements
        .iter()
        .filter_map(|id| achievements::by_id(id))
        .map(|achievement| AchievementNote {
            year: clock.age,
            text: achievement.name.to_string(),
        })
        .collect();
    stardb.upsert_player(&profile, &stats, &clock, &career, notes);
}
