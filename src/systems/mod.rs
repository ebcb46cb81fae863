pub mod achievements;
pub mod calendar;
pub mod career;
pub mod finance;
pub mod game_over;
pub mod npcs;
pub mod scheduled;
pub mod social;
pub mod stardb;
pub mod stats;
