use bevy_ecs::prelude::*;

use crate::data::tuning::Tuning;
use crate::simulation::career::Career;
use crate::simulation::journal::Journal;
use crate::simulation::session::WeeklyLedger;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::Wealth;

/// System: the agent's cut comes off the top of role income, after the week's
/// pay is known and before the totals are stored.
pub fn agent_commission_system(
    career: Res<Career>,
    mut ledger: ResMut<WeeklyLedger>,
    clock: Res<GameClock>,
    mut journal: ResMut<Journal>,
) {
    if let Some(agent) = &career.agent {
        let commission = (ledger.income as f64 * agent.commission).round() as i64;
        ledger.income -= commission;
        journal.record(
            clock.week,
            format!("{} took a ${} commission.", agent.name, commission),
        );
    }
}

/// System: store this week's income/expense totals and settle the balance.
pub fn finance_totals_system(
    mut wealth: ResMut<Wealth>,
    ledger: Res<WeeklyLedger>,
    tuning: Res<Tuning>,
) {
    wealth.settle_week(ledger.income, tuning.base_expenses);
}
