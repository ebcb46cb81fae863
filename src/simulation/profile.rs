use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::simulation::dating::DatingPreference;

/// Who the player is. Identity fields feed narrative context and the public
/// database; achievements are ids into the static catalog.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub gender: String,
    pub birthplace: String,
    pub handle: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub dating_preference: DatingPreference,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            gender: "Non-binary".to_string(),
            birthplace: "Los Angeles, USA".to_string(),
            handle: "new_star".to_string(),
            background: String::new(),
            dating_preference: DatingPreference::Everyone,
            achievements: Vec::new(),
        }
    }
}

impl PlayerProfile {
    /// Country part of the birthplace, for the public database entry.
    pub fn nationality(&self) -> &str {
        self.birthplace.split(", ").nth(1).unwrap_or("USA")
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nationality_comes_from_birthplace() {
        let mut profile = PlayerProfile::default();
        assert_eq!(profile.nationality(), "USA");
        profile.birthplace = "London, UK".to_string();
        assert_eq!(profile.nationality(), "UK");
        profile.birthplace = "Atlantis".to_string();
        assert_eq!(profile.nationality(), "USA");
    }
}
