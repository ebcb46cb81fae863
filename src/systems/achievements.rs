use bevy_ecs::prelude::*;

use crate::data::achievements::{is_met, ACHIEVEMENTS};
use crate::simulation::career::Career;
use crate::simulation::journal::Journal;
use crate::simulation::profile::PlayerProfile;
use crate::simulation::social::SocialState;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::Wealth;

/// System: grant any newly earned achievements. Runs after every stat
/// mutation of the week so conditions see final values.
pub fn achievements_system(
    mut profile: ResMut<PlayerProfile>,
    career: Res<Career>,
    wealth: Res<Wealth>,
    stats: Res<PlayerStats>,
    social: Res<SocialState>,
    clock: Res<GameClock>,
    mut journal: ResMut<Journal>,
) {
    for achievement in ACHIEVEMENTS {
        if profile.has_achievement(achievement.id) {
            continue;
        }
        if is_met(achievement.condition, &career, &wealth, &stats, &social) {
            profile.achievements.push(achievement.id.to_string());
            journal.record(
                clock.week,
                format!("Achievement Unlocked: {}.", achievement.name),
            );
        }
    }
}
