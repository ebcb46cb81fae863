use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// The player-visible event feed, newest first. This is game state, not
/// diagnostics: it round-trips through saves and backs the dashboard.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal(pub Vec<String>);

impl Journal {
    pub fn record(&mut self, week: u32, message: impl Into<String>) {
        self.0.insert(0, format!("W{}: {}", week, message.into()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn latest(&self, count: usize) -> &[String] {
        &self.0[..count.min(self.0.len())]
    }
}
