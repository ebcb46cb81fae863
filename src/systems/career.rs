use bevy_ecs::prelude::*;

use crate::core::ecs::GameRng;
use crate::data::agents;
use crate::narrative::Narrator;
use crate::simulation::career::{
    finish_role, generate_auditions, resolve_applied_auditions, Career,
};
use crate::simulation::journal::Journal;
use crate::simulation::npcs::NpcPool;
use crate::simulation::session::{GameStatus, WeeklyLedger};
use crate::simulation::social::{RelationshipStatus, SocialState};
use crate::simulation::stardb::StarDb;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::Wealth;

/// System: the weekly pass over every live role. Resets the action budget,
/// applies cast morale, accrues pay into the ledger, counts the clock down,
/// and resolves any role that just wrapped. Finished roles are detached one
/// at a time (back to front) so several can wrap in the same week without
/// index churn.
#[allow(clippy::too_many_arguments)]
pub fn tick_roles_system(
    mut career: ResMut<Career>,
    mut stats: ResMut<PlayerStats>,
    mut wealth: ResMut<Wealth>,
    social: Res<SocialState>,
    pool: Res<NpcPool>,
    clock: Res<GameClock>,
    mut stardb: ResMut<StarDb>,
    mut ledger: ResMut<WeeklyLedger>,
    mut journal: ResMut<Journal>,
    mut narrator: ResMut<Narrator>,
    mut rng: ResMut<GameRng>,
) {
    let mut finished = Vec::new();
    for (index, role) in career.current_roles.iter_mut().enumerate() {
        role.weekly_actions_taken = 0;

        // A week on set with friends lifts the mood; rivals grind it down.
        for npc_id in &role.cast {
            match social.relationship(npc_id).map(|r| r.status) {
                Some(RelationshipStatus::Friend) => stats.adjust_happiness(1),
                Some(RelationshipStatus::Rival) => stats.adjust_happiness(-1),
                _ => {}
            }
        }

        ledger.income += role.weekly_pay;
        role.weeks_left -= 1;
        if role.weeks_left <= 0 {
            finished.push(index);
        }
    }

    for index in finished.into_iter().rev() {
        let role = career.current_roles.remove(index);
        ledger.completions += 1;
        finish_role(
            role,
            &mut career,
            &mut stats,
            &mut wealth,
            &mut stardb,
            &pool,
            &clock,
            &mut journal,
            narrator.0.as_mut(),
            &mut rng.0,
        );
    }
}

/// System: resolves every applied audition, then clears the applied set.
pub fn resolve_auditions_system(
    mut career: ResMut<Career>,
    stats: Res<PlayerStats>,
    mut social: ResMut<SocialState>,
    pool: Res<NpcPool>,
    clock: Res<GameClock>,
    mut journal: ResMut<Journal>,
    mut rng: ResMut<GameRng>,
) {
    resolve_applied_auditions(
        &mut career,
        &stats,
        &mut social,
        &pool,
        &clock,
        &mut journal,
        &mut rng.0,
    );
}

/// System: replaces the audition board for next week. A finished run gets no
/// new opportunities.
pub fn regenerate_auditions_system(
    mut career: ResMut<Career>,
    stats: Res<PlayerStats>,
    clock: Res<GameClock>,
    pool: Res<NpcPool>,
    status: Res<GameStatus>,
    mut rng: ResMut<GameRng>,
) {
    if status.is_over() {
        return;
    }
    let agent_skill = career
        .agent
        .as_ref()
        .and_then(|contract| agents::by_name(&contract.name))
        .map(|profile| profile.skill);
    generate_auditions(&mut career, &stats, &clock, &pool, agent_skill, &mut rng.0);
}
