use bevy_ecs::prelude::*;

use crate::data::tuning::Tuning;
use crate::simulation::journal::Journal;
use crate::simulation::session::{GameOverReason, GameStatus};
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::Wealth;

/// System: evaluate the terminal conditions after finances and health have
/// settled, but before next week's content is generated.
pub fn game_over_system(
    mut status: ResMut<GameStatus>,
    stats: Res<PlayerStats>,
    wealth: Res<Wealth>,
    tuning: Res<Tuning>,
    clock: Res<GameClock>,
    mut journal: ResMut<Journal>,
) {
    if status.is_over() {
        return;
    }
    let reason = if stats.health <= 0 {
        Some(GameOverReason::HealthExhausted)
    } else if wealth.cash < tuning.bankruptcy_floor {
        Some(GameOverReason::Bankrupt)
    } else {
        None
    };
    if let Some(reason) = reason {
        *status = GameStatus::Over { reason };
        journal.record(clock.week, reason.message());
    }
}
