pub mod achievements;
pub mod activities;
pub mod agents;
pub mod backgrounds;
pub mod shop;
pub mod tuning;
