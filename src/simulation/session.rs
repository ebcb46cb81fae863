use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Why a run ended. Terminal conditions are defined end states, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    HealthExhausted,
    Bankrupt,
}

impl GameOverReason {
    pub fn message(self) -> &'static str {
        match self {
            GameOverReason::HealthExhausted => "Your health ran out.",
            GameOverReason::Bankrupt => "You went bankrupt.",
        }
    }
}

/// Whether the run is still accepting turns. Once over, no further week
/// advancement is accepted and no new content is generated.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    Over {
        reason: GameOverReason,
    },
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }

    pub fn reason(self) -> Option<GameOverReason> {
        match self {
            GameStatus::Running => None,
            GameStatus::Over { reason } => Some(reason),
        }
    }
}

/// Scratch totals for the week in flight: role income accrues here before the
/// agent's cut and the final settlement, and completions are counted so the
/// facade knows when a checkpoint save is due. Reset at the top of each week.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WeeklyLedger {
    pub income: i64,
    pub completions: u32,
}

impl WeeklyLedger {
    pub fn reset(&mut self) {
        *self = WeeklyLedger::default();
    }
}
