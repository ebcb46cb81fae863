use bevy_ecs::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::names;
use crate::simulation::career::Genre;
use crate::simulation::social::{Post, PostCategory, PostKind, SocialState};
use crate::simulation::stardb::{CastCredit, StarDb, StarDbProject};
use crate::simulation::time::GameClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profession {
    Actor,
    Director,
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Profession::Actor => "Actor",
            Profession::Director => "Director",
        };
        write!(f, "{}", label)
    }
}

/// Fixed at creation; flavors every generated interaction with this NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    Friendly,
    Ambitious,
    Diva,
    MethodActor,
    Professional,
    Insecure,
    Jokester,
}

impl Personality {
    pub const ALL: [Personality; 7] = [
        Personality::Friendly,
        Personality::Ambitious,
        Personality::Diva,
        Personality::MethodActor,
        Personality::Professional,
        Personality::Insecure,
        Personality::Jokester,
    ];
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Personality::Friendly => "Friendly",
            Personality::Ambitious => "Ambitious",
            Personality::Diva => "Diva",
            Personality::MethodActor => "Method Actor",
            Personality::Professional => "Professional",
            Personality::Insecure => "Insecure",
            Personality::Jokester => "Jokester",
        };
        write!(f, "{}", label)
    }
}

/// A non-player industry figure. Ids are stable for the game's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: String,
    pub name: String,
    pub profession: Profession,
    pub personality: Personality,
    pub fame: i32,
    pub acting_skill: i32,
    #[serde(default)]
    pub current_project_weeks_left: u32,
}

/// The world's fixed roster, created once at game start and never grown or
/// shrunk afterwards. Ordering is stable so the weekly round-robin window is
/// predictable.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NpcPool {
    pub npcs: Vec<Npc>,
}

impl NpcPool {
    /// Build the roster from the name list, one NPC per name, roughly 70%
    /// actors to 30% directors.
    pub fn populate(rng: &mut impl Rng) -> Self {
        let mut names_pool: Vec<&str> = names::NPC_NAMES.to_vec();
        names_pool.shuffle(rng);
        let npcs = names_pool
            .into_iter()
            .enumerate()
            .map(|(i, name)| Npc {
                id: format!("npc_{}", i),
                name: name.to_string(),
                profession: if rng.gen::<f64>() > 0.3 {
                    Profession::Actor
                } else {
                    Profession::Director
                },
                personality: Personality::ALL[rng.gen_range(0..Personality::ALL.len())],
                fame: 10 + rng.gen_range(0..70),
                acting_skill: 10 + rng.gen_range(0..60),
                current_project_weeks_left: 0,
            })
            .collect();
        Self { npcs }
    }

    pub fn get(&self, id: &str) -> Option<&Npc> {
        self.npcs.iter().find(|n| n.id == id)
    }

    pub fn directors(&self) -> impl Iterator<Item = &Npc> {
        self.npcs
            .iter()
            .filter(|n| n.profession == Profession::Director)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Npc> {
        self.npcs
            .iter()
            .filter(|n| n.profession == Profession::Actor)
    }
}

/// Hiring chance per idle week, from fame and craft. Tops out at 50%.
pub fn hiring_chance(fame: i32, acting_skill: i32) -> f64 {
    fame as f64 / 4.0 + acting_skill as f64 / 4.0
}

/// Advance a small window of the roster. Only `window` NPCs are touched per
/// week, selected round-robin by `(week + i) % pool_size`, trading fidelity
/// for bounded per-turn cost.
pub fn advance_npcs(
    pool: &mut NpcPool,
    clock: &GameClock,
    stardb: &mut StarDb,
    social: &mut SocialState,
    rng: &mut impl Rng,
    window: usize,
) {
    if pool.npcs.is_empty() {
        return;
    }
    for i in 0..window {
        let index = (clock.week as usize + i) % pool.npcs.len();
        if pool.npcs[index].profession != Profession::Actor {
            continue;
        }

        if pool.npcs[index].current_project_weeks_left > 0 {
            let npc = &mut pool.npcs[index];
            npc.current_project_weeks_left -= 1;
            if npc.current_project_weeks_left == 0 {
                let gain = 2 + rng.gen_range(0..5);
                npc.fame = (npc.fame + gain).min(100);
                let (id, fame) = (npc.id.clone(), npc.fame);
                if let Some(entry) = stardb.actor_mut(&id) {
                    entry.popularity_rating = fame;
                }
            }
        } else {
            let chance = hiring_chance(pool.npcs[index].fame, pool.npcs[index].acting_skill);
            if rng.gen::<f64>() * 100.0 < chance {
                start_npc_project(pool, index, clock, stardb, social, rng);
            }
        }
    }
}

fn start_npc_project(
    pool: &mut NpcPool,
    index: usize,
    clock: &GameClock,
    stardb: &mut StarDb,
    social: &mut SocialState,
    rng: &mut impl Rng,
) {
    let (npc_id, npc_name) = {
        let npc = &pool.npcs[index];
        (npc.id.clone(), npc.name.clone())
    };
    let director = pool
        .npcs
        .iter()
        .find(|n| n.profession == Profession::Director && n.id != npc_id)
        .map(|n| n.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    pool.npcs[index].current_project_weeks_left = 6 + rng.gen_range(0..10);
    let title = names::random_title(rng);

    let project = StarDbProject {
        id: format!("proj_npc_{}_{}", clock.week, npc_id),
        title: title.clone(),
        year: clock.age,
        genre: Genre::random(rng),
        director,
        cast: vec![CastCredit {
            actor_id: npc_id.clone(),
            character_name: "Lead".to_string(),
        }],
        box_office: "Moderate Success".to_string(),
        budget: 20_000_000,
        worldwide_gross: 100_000_000,
        rating: 6.0 + rng.gen::<f64>() * 3.0,
        audience_rating: 6.0 + rng.gen::<f64>() * 3.0,
        reviews: vec!["A solid performance by the cast.".to_string()],
        budget_category: crate::simulation::career::BudgetCategory::MidBudget,
        audience_reception: "Well-Received".to_string(),
    };
    if let Some(entry) = stardb.actor_mut(&npc_id) {
        entry.filmography.push(project.id.clone());
    }
    stardb.projects.push(project);

    // Occasionally the trades pick the casting up.
    if rng.gen::<f64>() < 0.25 {
        social.feed.insert(
            0,
            Post {
                id: format!("post_news_{}_{}", clock.week, npc_id),
                week: clock.week,
                age: clock.age,
                author: "Casting Weekly".to_string(),
                author_handle: "castingweekly".to_string(),
                kind: PostKind::News,
                category: PostCategory::Promo,
                image_description: format!("A headshot of actor {}.", npc_name),
                caption: format!(
                    "BREAKING: {} has been cast in the upcoming film \"{}\". \
                     A huge get for the rising star! #casting #newmovie #hollywoodascent",
                    npc_name, title
                ),
                likes: rng.gen_range(0..10_000),
                comments: rng.gen_range(0..800),
                shares: rng.gen_range(0..200),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn roster_uses_each_name_once() {
        let mut rng = StdRng::seed_from_u64(4);
        let pool = NpcPool::populate(&mut rng);
        assert_eq!(pool.npcs.len(), names::NPC_NAMES.len());
        let mut seen: Vec<&str> = pool.npcs.iter().map(|n| n.name.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), pool.npcs.len());
    }

    #[test]
    fn hiring_chance_tops_out_at_fifty() {
        assert!(hiring_chance(100, 100) <= 50.0);
        assert!((hiring_chance(40, 20) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn window_advances_mid_project_countdowns() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut pool = NpcPool::populate(&mut rng);
        let mut stardb = StarDb::default();
        stardb.populate_from_pool(&pool, &mut rng);
        let mut social = SocialState::default();
        let clock = GameClock { week: 10, age: 18 };

        // Put the whole window mid-project so the countdown branch is taken.
        let size = pool.npcs.len();
        for i in 0..5 {
            let index = (10 + i) % size;
            pool.npcs[index].current_project_weeks_left = 3;
        }
        advance_npcs(&mut pool, &clock, &mut stardb, &mut social, &mut rng, 5);
        for i in 0..5 {
            let index = (10 + i) % size;
            let npc = &pool.npcs[index];
            if npc.profession == Profession::Actor {
                assert_eq!(npc.current_project_weeks_left, 2);
            } else {
                assert_eq!(npc.current_project_weeks_left, 3);
            }
        }
    }

    #[test]
    fn round_robin_window_rotates_with_week() {
        let size = 25usize;
        let mut touched = std::collections::HashSet::new();
        for week in 0..size {
            for i in 0..5 {
                touched.insert((week + i) % size);
            }
        }
        assert_eq!(touched.len(), size);
    }
}
