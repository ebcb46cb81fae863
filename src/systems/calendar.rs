use bevy_ecs::prelude::*;

use crate::simulation::journal::Journal;
use crate::simulation::session::WeeklyLedger;
use crate::simulation::time::GameClock;

/// System: steps the clock one week and clears the weekly scratch totals.
pub fn advance_calendar_system(
    mut clock: ResMut<GameClock>,
    mut ledger: ResMut<WeeklyLedger>,
    mut journal: ResMut<Journal>,
) {
    ledger.reset();
    if clock.advance() {
        journal.record(
            clock.week,
            format!("Happy Birthday! You are now {}.", clock.age),
        );
    }
}
