use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::simulation::career::{
    AwardRecord, BudgetCategory, Career, Genre, PLAYER_ACTOR_ID,
};
use crate::simulation::npcs::{NpcPool, Profession};
use crate::simulation::profile::PlayerProfile;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastCredit {
    pub actor_id: String,
    pub character_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementNote {
    pub year: u32,
    pub text: String,
}

/// A public-facing actor page. NPC entries are created once at world
/// population; the player's entry is upserted every week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDbActor {
    pub id: String,
    pub name: String,
    pub is_player: bool,
    pub age: u32,
    pub nationality: String,
    pub popularity_rating: i32,
    #[serde(default)]
    pub filmography: Vec<String>,
    #[serde(default)]
    pub awards: Vec<AwardRecord>,
    #[serde(default)]
    pub achievements: Vec<AchievementNote>,
}

/// A public-facing project page. Appended on completion, never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDbProject {
    pub id: String,
    pub title: String,
    pub year: u32,
    pub genre: Genre,
    pub director: String,
    pub cast: Vec<CastCredit>,
    pub box_office: String,
    pub budget: i64,
    pub worldwide_gross: i64,
    pub rating: f64,
    pub audience_rating: f64,
    #[serde(default)]
    pub reviews: Vec<String>,
    pub budget_category: BudgetCategory,
    pub audience_reception: String,
}

/// The denormalized movie database the rest of the world reads.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarDb {
    pub actors: Vec<StarDbActor>,
    pub projects: Vec<StarDbProject>,
}

impl StarDb {
    pub fn actor(&self, id: &str) -> Option<&StarDbActor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: &str) -> Option<&mut StarDbActor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&StarDbProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Create one entry per actor NPC. Called once at world population.
    pub fn populate_from_pool(&mut self, pool: &NpcPool, rng: &mut impl Rng) {
        self.actors = pool
            .npcs
            .iter()
            .filter(|npc| npc.profession == Profession::Actor)
            .map(|npc| StarDbActor {
                id: npc.id.clone(),
                name: npc.name.clone(),
                is_player: false,
                age: 25 + rng.gen_range(0..20),
                nationality: "USA".to_string(),
                popularity_rating: npc.fame,
                filmography: Vec::new(),
                awards: Vec::new(),
                achievements: Vec::new(),
            })
            .collect();
    }

    /// Back-catalog filler so the database is not empty on day one.
    pub fn seed_projects(&mut self, pool: &NpcPool, current_age: u32) {
        let director = pool
            .directors()
            .next()
            .map(|npc| npc.name.clone())
            .unwrap_or_else(|| "N/A".to_string());
        let titles = [
            "Midnight Echo",
            "Crimson Legacy",
            "Starlight Gambit",
            "Forgotten Voyage",
        ];
        for (i, title) in titles.iter().enumerate() {
            self.projects.push(StarDbProject {
                id: format!("proj_{}", i),
                title: (*title).to_string(),
                year: current_age.saturating_sub(2),
                genre: Genre::Drama,
                director: director.clone(),
                cast: Vec::new(),
                box_office: "Moderate Success".to_string(),
                budget: 50_000_000,
                worldwide_gross: 150_000_000,
                rating: 7.5 + i as f64,
                audience_rating: 8.0 + i as f64,
                reviews: Vec::new(),
                budget_category: BudgetCategory::MidBudget,
                audience_reception: "Well-Received".to_string(),
            });
        }
    }

    /// Keep the player's page in sync with live state. Creates the entry on
    /// first call, then overwrites the mutable fields; filmography grows by
    /// joining completed roles to published projects on title + year.
    pub fn upsert_player(
        &mut self,
        profile: &PlayerProfile,
        stats: &PlayerStats,
        clock: &GameClock,
        career: &Career,
        achievement_notes: Vec<AchievementNote>,
    ) {
        // Join before the mutable borrow of the actor entry.
        let mut new_project_ids = Vec::new();
        for role in &career.completed_roles {
            if let Some(project) = self
                .projects
                .iter()
                .find(|p| p.title == role.title && p.year == role.year)
            {
                new_project_ids.push(project.id.clone());
            }
        }

        if self.actor(PLAYER_ACTOR_ID).is_none() {
            self.actors.push(StarDbActor {
                id: PLAYER_ACTOR_ID.to_string(),
                name: profile.name.clone(),
                is_player: true,
                age: clock.age,
                nationality: profile.nationality().to_string(),
                popularity_rating: stats.fame,
                filmography: Vec::new(),
                awards: Vec::new(),
                achievements: Vec::new(),
            });
        }
        let entry = self
            .actor_mut(PLAYER_ACTOR_ID)
            .expect("player entry exists after upsert");
        entry.name = profile.name.clone();
        entry.age = clock.age;
        entry.popularity_rating = stats.fame;
        entry.awards = career.awards.clone();
        entry.achievements = achievement_notes;
        for id in new_project_ids {
            if !entry.filmography.contains(&id) {
                entry.filmography.push(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::npcs::NpcPool;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn player_entry_is_single_and_upserted() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = NpcPool::populate(&mut rng);
        let mut db = StarDb::default();
        let profile = PlayerProfile::default();
        let mut stats = PlayerStats::default();
        let clock = GameClock::default();
        let career = Career::default();

        db.upsert_player(&profile, &stats, &clock, &career, Vec::new());
        stats.fame = 42;
        db.upsert_player(&profile, &stats, &clock, &career, Vec::new());

        let players: Vec<_> = db.actors.iter().filter(|a| a.is_player).collect();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].popularity_rating, 42);
        assert_eq!(pool.npcs.len(), crate::content::names::NPC_NAMES.len());
    }

    #[test]
    fn pool_population_covers_every_actor_once() {
        let mut rng = StdRng::seed_from_u64(9);
        let pool = NpcPool::populate(&mut rng);
        let mut db = StarDb::default();
        db.populate_from_pool(&pool, &mut rng);
        let actor_count = pool
            .npcs
            .iter()
            .filter(|n| n.profession == Profession::Actor)
            .count();
        assert_eq!(db.actors.len(), actor_count);
        db.seed_projects(&pool, 18);
        assert_eq!(db.projects.len(), 4);
        assert_eq!(db.projects[0].year, 16);
    }
}
