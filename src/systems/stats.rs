use bevy_ecs::prelude::*;

use crate::core::ecs::GameRng;
use crate::data::tuning::Tuning;
use crate::simulation::dating::weekly_partner_tick;
use crate::simulation::social::SocialState;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::Wealth;

/// System: the slow grind of time. Health ticks down, and the partner (or
/// the lack of one) feeds back into happiness.
pub fn passive_drift_system(
    mut stats: ResMut<PlayerStats>,
    mut social: ResMut<SocialState>,
    tuning: Res<Tuning>,
    mut rng: ResMut<GameRng>,
) {
    stats.adjust_health(-tuning.weekly_health_decay);
    weekly_partner_tick(
        &mut social,
        &mut stats,
        &mut rng.0,
        tuning.single_happiness_decay,
    );
}

/// System: append this week's sample to every trend ledger.
pub fn history_system(
    mut stats: ResMut<PlayerStats>,
    mut wealth: ResMut<Wealth>,
    clock: Res<GameClock>,
) {
    stats.record_history(clock.week);
    wealth.record_history(clock.week);
}
