use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::names;
use crate::data::tuning::Tuning;
use crate::narrative::{FanReviewContext, NarrativeGenerator};
use crate::simulation::journal::Journal;
use crate::simulation::npcs::{NpcPool, Profession};
use crate::simulation::social::SocialState;
use crate::simulation::stardb::{CastCredit, StarDb, StarDbProject};
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::Wealth;

pub const PLAYER_ACTOR_ID: &str = "player";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Romance,
    Horror,
    SciFi,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Romance,
        Genre::Horror,
        Genre::SciFi,
    ];

    pub fn random(rng: &mut impl Rng) -> Genre {
        Genre::ALL[rng.gen_range(0..Genre::ALL.len())]
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Romance => "Romance",
            Genre::Horror => "Horror",
            Genre::SciFi => "Sci-Fi",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    Film,
    TvShow,
    Theater,
    Commercial,
}

impl ProjectType {
    /// The kinds of project that show up on the audition board.
    pub const AUDITION_TYPES: [ProjectType; 3] =
        [ProjectType::Film, ProjectType::TvShow, ProjectType::Commercial];
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectType::Film => "Film",
            ProjectType::TvShow => "TV Show",
            ProjectType::Theater => "Theater",
            ProjectType::Commercial => "Commercial",
        };
        write!(f, "{}", label)
    }
}

/// Role tiers ordered best-first; the tier index feeds the pay and difficulty
/// formulas directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleTier {
    Lead,
    Supporting,
    Minor,
    Extra,
}

impl RoleTier {
    pub fn from_index(index: usize) -> RoleTier {
        match index {
            0 => RoleTier::Lead,
            1 => RoleTier::Supporting,
            2 => RoleTier::Minor,
            _ => RoleTier::Extra,
        }
    }

    /// How many co-star slots a role of this tier puts on the cast list,
    /// besides the director.
    pub fn coworker_count(self) -> usize {
        match self {
            RoleTier::Lead => 3,
            RoleTier::Supporting => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoleTier::Lead => "Lead",
            RoleTier::Supporting => "Supporting",
            RoleTier::Minor => "Minor",
            RoleTier::Extra => "Extra",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamePotential {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetCategory {
    Indie,
    MidBudget,
    Blockbuster,
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetCategory::Indie => "Indie",
            BudgetCategory::MidBudget => "Mid-Budget",
            BudgetCategory::Blockbuster => "Blockbuster",
        };
        write!(f, "{}", label)
    }
}

/// Outcome bucket for a finished film, derived purely from the profit ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxOfficeTier {
    LegendaryHit,
    BlockbusterSuccess,
    SolidHit,
    BrokeEven,
    Bomb,
}

impl fmt::Display for BoxOfficeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BoxOfficeTier::LegendaryHit => "Legendary Hit",
            BoxOfficeTier::BlockbusterSuccess => "Blockbuster Success",
            BoxOfficeTier::SolidHit => "Solid Hit",
            BoxOfficeTier::BrokeEven => "Broke Even",
            BoxOfficeTier::Bomb => "Box Office Bomb",
        };
        write!(f, "{}", label)
    }
}

/// A one-week job offer. Regenerated wholesale every week; immutable once
/// generated and referenced by id while the player may still apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audition {
    pub id: String,
    pub title: String,
    pub project_type: ProjectType,
    pub tier: RoleTier,
    pub director: String,
    pub director_id: String,
    pub genre: Genre,
    pub weekly_pay: i64,
    pub fame_potential: FamePotential,
    pub difficulty: i32,
    pub weeks: u32,
    pub description: String,
    pub budget_category: BudgetCategory,
    pub backend_points: f64,
}

/// An in-progress job. Contract terms are fixed at acceptance; the progress
/// fields mutate weekly until the countdown runs out or the player quits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentRole {
    pub title: String,
    pub character_name: String,
    pub tier: RoleTier,
    pub project_type: ProjectType,
    pub genre: Genre,
    pub weekly_pay: i64,
    pub weeks_left: i32,
    pub initial_weeks: u32,
    pub project_popularity: i32,
    pub performance_score: i32,
    /// NPC ids, director first.
    pub cast: Vec<String>,
    pub weekly_actions_taken: u32,
    pub backend_points: f64,
    pub budget_category: BudgetCategory,
}

/// Immutable record of a finished job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedRole {
    pub title: String,
    pub character_name: String,
    pub year: u32,
    pub week_completed: u32,
    pub fame_gained: i32,
    pub reputation_gained: i32,
    pub genre: Genre,
    pub project_type: ProjectType,
    pub tier: RoleTier,
    pub director: String,
    pub cast: Vec<String>,
    pub box_office_gross: i64,
    pub player_cut: i64,
    pub box_office: Option<BoxOfficeTier>,
    pub final_performance_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentContract {
    pub name: String,
    pub commission: f64,
    pub relationship_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardRecord {
    pub year: u32,
    pub award: String,
    pub project: String,
    pub won: bool,
}

/// Everything career-shaped: live roles, the week's audition board, the
/// player's agent, and the permanent completed/award ledgers.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub current_roles: Vec<CurrentRole>,
    #[serde(default)]
    pub completed_roles: Vec<CompletedRole>,
    #[serde(default)]
    pub available_auditions: Vec<Audition>,
    #[serde(default)]
    pub applied_auditions: Vec<String>,
    #[serde(default)]
    pub agent: Option<AgentContract>,
    #[serde(default)]
    pub awards: Vec<AwardRecord>,
}

impl Career {
    pub fn audition(&self, id: &str) -> Option<&Audition> {
        self.available_auditions.iter().find(|a| a.id == id)
    }

    pub fn has_applied(&self, id: &str) -> bool {
        self.applied_auditions.iter().any(|a| a == id)
    }
}

/// Size of next week's audition pool. Monotone in both agent skill and fame.
pub fn audition_pool_size(fame: i32, agent_skill: Option<i32>, rng: &mut impl Rng) -> usize {
    let agent_bonus = agent_skill.map(|s| s as f64 / 25.0).unwrap_or(0.0);
    let fame_bonus = fame as f64 / 20.0;
    (2.0 + rng.gen::<f64>() * 3.0 + agent_bonus + fame_bonus).floor() as usize
}

pub fn budget_category_for_fame(fame: i32) -> BudgetCategory {
    if fame > 70 {
        BudgetCategory::Blockbuster
    } else if fame > 30 {
        BudgetCategory::MidBudget
    } else {
        BudgetCategory::Indie
    }
}

/// Backend profit-share points. Only lead film roles carry any, and only on
/// projects with a real budget behind them.
pub fn draw_backend_points(
    tier: RoleTier,
    project_type: ProjectType,
    category: BudgetCategory,
    rng: &mut impl Rng,
) -> f64 {
    if tier != RoleTier::Lead || project_type != ProjectType::Film {
        return 0.0;
    }
    match category {
        BudgetCategory::Blockbuster => 0.03 + rng.gen::<f64>() * 0.04,
        BudgetCategory::MidBudget => 0.01 + rng.gen::<f64>() * 0.02,
        BudgetCategory::Indie => 0.0,
    }
}

/// Regenerate the audition board. The previous week's unapplied offers are
/// discarded wholesale.
pub fn generate_auditions(
    career: &mut Career,
    stats: &PlayerStats,
    clock: &GameClock,
    pool: &NpcPool,
    agent_skill: Option<i32>,
    rng: &mut impl Rng,
) {
    career.available_auditions.clear();
    let count = audition_pool_size(stats.fame, agent_skill, rng);
    let directors: Vec<&crate::simulation::npcs::Npc> = pool.directors().collect();
    if directors.is_empty() {
        return;
    }

    for i in 0..count {
        let director = directors[rng.gen_range(0..directors.len())];
        let genre = Genre::random(rng);
        let project_type =
            ProjectType::AUDITION_TYPES[rng.gen_range(0..ProjectType::AUDITION_TYPES.len())];
        let title = names::random_title(rng);

        let tier_index = (3 - (stats.fame as f64 / 25.0 + rng.gen::<f64>() * 2.0).floor() as i32)
            .max(0) as usize;
        let tier = RoleTier::from_index(tier_index);

        let base_pay = (4 - tier_index as i64) * 200 + stats.fame as i64 * 10;
        let base_difficulty =
            10 + (3 - tier_index as i32) * 15 + clock.age as i32 - 18;
        let budget_category = budget_category_for_fame(stats.fame);
        let backend_points = draw_backend_points(tier, project_type, budget_category, rng);
        let fame_potential = if tier_index < 2 {
            FamePotential::High
        } else if tier_index < 3 {
            FamePotential::Medium
        } else {
            FamePotential::Low
        };

        career.available_auditions.push(Audition {
            id: format!("aud_{}_{}", clock.week, i),
            title,
            project_type,
            tier,
            director: director.name.clone(),
            director_id: director.id.clone(),
            genre,
            weekly_pay: base_pay + rng.gen_range(0..100),
            fame_potential,
            difficulty: (base_difficulty as f64 + (rng.gen::<f64>() - 0.5) * 10.0).floor() as i32,
            weeks: 4 + rng.gen_range(0..8),
            description: format!(
                "A promising {} {} {}.",
                budget_category, genre, project_type
            ),
            budget_category,
            backend_points,
        });
    }
}

/// Audition success score: compared against a uniform roll in [0, 100), so any
/// value above 100 is a certain success.
pub fn success_chance(acting_skill: i32, difficulty: i32, fame: i32) -> f64 {
    (acting_skill - difficulty) as f64 + fame as f64 / 2.0 + 50.0
}

/// Assemble the cast list for a landed role: director first, then 1-3 actor
/// NPCs by tier. Anyone the player has not met yet gets a fresh acquaintance
/// relationship.
pub fn build_cast(
    audition: &Audition,
    pool: &NpcPool,
    social: &mut SocialState,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut cast = vec![audition.director_id.clone()];

    let mut candidates: Vec<&str> = pool
        .npcs
        .iter()
        .filter(|n| n.profession == Profession::Actor && n.id != audition.director_id)
        .map(|n| n.id.as_str())
        .collect();
    for _ in 0..audition.tier.coworker_count() {
        if candidates.is_empty() {
            break;
        }
        let picked = candidates.remove(rng.gen_range(0..candidates.len()));
        cast.push(picked.to_string());
    }

    for npc_id in &cast {
        let initial = rng.gen_range(0..20);
        social.ensure_relationship(npc_id, initial);
    }

    cast
}

/// Resolve every audition the player applied to. The applied set is cleared
/// afterwards regardless of individual outcomes; there is no retry.
pub fn resolve_applied_auditions(
    career: &mut Career,
    stats: &PlayerStats,
    social: &mut SocialState,
    pool: &NpcPool,
    clock: &GameClock,
    journal: &mut Journal,
    rng: &mut impl Rng,
) {
    let applied = std::mem::take(&mut career.applied_auditions);
    for audition_id in applied {
        let Some(audition) = career.audition(&audition_id).cloned() else {
            continue;
        };
        let chance = success_chance(stats.acting_skill, audition.difficulty, stats.fame);
        if rng.gen::<f64>() * 100.0 < chance {
            journal.record(
                clock.week,
                format!("You got the {} role in \"{}\"!", audition.tier, audition.title),
            );
            let cast = build_cast(&audition, pool, social, rng);
            career.current_roles.push(CurrentRole {
                title: audition.title.clone(),
                character_name: "TBD".to_string(),
                tier: audition.tier,
                project_type: audition.project_type,
                genre: audition.genre,
                weekly_pay: audition.weekly_pay,
                weeks_left: audition.weeks as i32,
                initial_weeks: audition.weeks,
                project_popularity: 30 + rng.gen_range(0..20),
                performance_score: 50,
                cast,
                weekly_actions_taken: 0,
                backend_points: audition.backend_points,
                budget_category: audition.budget_category,
            });
        } else {
            journal.record(
                clock.week,
                format!("You didn't get the role in \"{}\".", audition.title),
            );
        }
    }
}

pub fn draw_budget(category: BudgetCategory, rng: &mut impl Rng) -> i64 {
    match category {
        BudgetCategory::Indie => 500_000 + (rng.gen::<f64>() * 4_500_000.0) as i64,
        BudgetCategory::MidBudget => 10_000_000 + (rng.gen::<f64>() * 65_000_000.0) as i64,
        BudgetCategory::Blockbuster => 100_000_000 + (rng.gen::<f64>() * 200_000_000.0) as i64,
    }
}

/// Weighted quality score in [0, ~1]: 40% performance, 40% popularity, 20%
/// player fame (fame above 100 pushes the score past 1, deliberately).
pub fn combined_quality(performance: i32, popularity: i32, fame: i32) -> f64 {
    (performance as f64 / 100.0) * 0.4
        + (popularity as f64 / 100.0) * 0.4
        + (fame as f64 / 100.0) * 0.2
}

/// Gross multiplier over budget, floored so even a disaster earns something.
pub fn gross_multiplier(combined: f64, random_factor: f64) -> f64 {
    (combined * 5.0 * random_factor).max(0.1)
}

pub fn outcome_tier(profit_ratio: f64) -> BoxOfficeTier {
    if profit_ratio > 5.0 {
        BoxOfficeTier::LegendaryHit
    } else if profit_ratio > 3.0 {
        BoxOfficeTier::BlockbusterSuccess
    } else if profit_ratio > 1.5 {
        BoxOfficeTier::SolidHit
    } else if profit_ratio > 0.8 {
        BoxOfficeTier::BrokeEven
    } else {
        BoxOfficeTier::Bomb
    }
}

/// Fame and reputation rewards per outcome tier, monotonically decreasing.
/// A bomb costs reputation.
pub fn tier_rewards(tier: BoxOfficeTier, rng: &mut impl Rng) -> (i32, i32) {
    match tier {
        BoxOfficeTier::LegendaryHit => (20 + rng.gen_range(0..10), 10),
        BoxOfficeTier::BlockbusterSuccess => (15 + rng.gen_range(0..5), 5),
        BoxOfficeTier::SolidHit => (8 + rng.gen_range(0..4), 2),
        BoxOfficeTier::BrokeEven => (2 + rng.gen_range(0..2), 0),
        BoxOfficeTier::Bomb => (1, -10),
    }
}

/// Reward formula for TV work, which has no box-office run.
pub fn non_film_rewards(popularity: i32, performance: i32) -> (i32, i32) {
    let fame = (popularity as f64 / 10.0 + performance as f64 / 20.0).round() as i32;
    let reputation = ((performance - 50) as f64 / 10.0).round() as i32;
    (fame, reputation)
}

fn rating_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Finish a role whose countdown ran out: resolve its box-office run, pay out
/// the backend share, publish a database entry (films and TV), and append the
/// immutable completed record. The role itself must already be detached from
/// the live list.
#[allow(clippy::too_many_arguments)]
pub fn finish_role(
    finished: CurrentRole,
    career: &mut Career,
    stats: &mut PlayerStats,
    wealth: &mut Wealth,
    stardb: &mut StarDb,
    pool: &NpcPool,
    clock: &GameClock,
    journal: &mut Journal,
    narrator: &mut dyn NarrativeGenerator,
    rng: &mut impl Rng,
) {
    let mut fame_gained = 0;
    let mut reputation_gained = 0;
    let mut box_office_gross = 0i64;
    let mut player_cut = 0i64;
    let mut box_office = None;
    let mut budget = 0i64;
    let director = finished
        .cast
        .first()
        .and_then(|id| pool.get(id))
        .map(|npc| npc.name.clone())
        .unwrap_or_else(|| "N/A".to_string());

    let publishes_entry = matches!(
        finished.project_type,
        ProjectType::Film | ProjectType::TvShow
    );

    if publishes_entry {
        if finished.project_type == ProjectType::Film {
            budget = draw_budget(finished.budget_category, rng);
            let combined = combined_quality(
                finished.performance_score,
                finished.project_popularity,
                stats.fame,
            );
            let random_factor = 0.5 + rng.gen::<f64>();
            let multiplier = gross_multiplier(combined, random_factor);
            box_office_gross = (budget as f64 * multiplier).round() as i64;
            player_cut = (box_office_gross as f64 * finished.backend_points).round() as i64;
            wealth.cash += player_cut;

            let tier = outcome_tier(box_office_gross as f64 / budget as f64);
            let (fame, reputation) = tier_rewards(tier, rng);
            fame_gained = fame;
            reputation_gained = reputation;
            box_office = Some(tier);

            journal.record(
                clock.week,
                format!(
                    "\"{}\" was a {}, grossing ${}.",
                    finished.title, tier, box_office_gross
                ),
            );
            if player_cut > 0 {
                journal.record(
                    clock.week,
                    format!("Your backend deal earned you ${}!", player_cut),
                );
            }
        } else {
            let (fame, reputation) =
                non_film_rewards(finished.project_popularity, finished.performance_score);
            fame_gained = fame;
            reputation_gained = reputation;
            journal.record(
                clock.week,
                format!(
                    "You finished your role in \"{}\"! You gained {} fame.",
                    finished.title, fame_gained
                ),
            );
        }

        let mut cast = vec![CastCredit {
            actor_id: PLAYER_ACTOR_ID.to_string(),
            character_name: finished.character_name.clone(),
        }];
        // Skip the director at index 0; everyone after is on-screen talent.
        for npc_id in finished.cast.iter().skip(1) {
            let character_name = if pool.get(npc_id).is_some() {
                "Supporting"
            } else {
                "Unknown"
            };
            cast.push(CastCredit {
                actor_id: npc_id.clone(),
                character_name: character_name.to_string(),
            });
        }

        let outcome_label = box_office
            .map(|t| t.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let mut entry = StarDbProject {
            id: format!("proj_{}_{}", clock.week, stardb.projects.len()),
            title: finished.title.clone(),
            year: clock.age,
            genre: finished.genre,
            director: director.clone(),
            cast,
            box_office: outcome_label.clone(),
            budget,
            worldwide_gross: box_office_gross,
            rating: rating_one_decimal(5.0 + (finished.performance_score as f64 / 100.0) * 4.5),
            audience_rating: rating_one_decimal(
                4.0 + (finished.project_popularity as f64 / 100.0) * 5.5,
            ),
            reviews: Vec::new(),
            budget_category: finished.budget_category,
            audience_reception: "TBD".to_string(),
        };

        // Fan reviews come from the narrative generator; a failure degrades to
        // an empty list and never blocks the rest of the week.
        match narrator.fan_reviews(&FanReviewContext {
            title: entry.title.clone(),
            genre: entry.genre,
            outcome: outcome_label,
        }) {
            Ok(reviews) => entry.reviews = reviews,
            Err(err) => log::warn!("fan review generation failed: {}", err),
        }
        stardb.projects.push(entry);
    } else {
        journal.record(
            clock.week,
            format!("You finished your role in \"{}\".", finished.title),
        );
    }

    stats.adjust_fame(fame_gained);
    stats.adjust_reputation(reputation_gained);

    career.completed_roles.push(CompletedRole {
        title: finished.title,
        character_name: finished.character_name,
        year: clock.age,
        week_completed: clock.week,
        fame_gained,
        reputation_gained,
        genre: finished.genre,
        project_type: finished.project_type,
        tier: finished.tier,
        director,
        cast: finished.cast,
        box_office_gross,
        player_cut,
        box_office,
        final_performance_score: finished.performance_score,
    });
}

/// On-set actions the player may spend weekly action slots on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    Practice,
    Develop,
    Publicity,
}

/// Apply a role action. Caller has already checked the weekly cap; this
/// consumes the slot and returns the journal line.
pub fn apply_role_action(
    role: &mut CurrentRole,
    action: RoleAction,
    stats: &mut PlayerStats,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> String {
    role.weekly_actions_taken += 1;
    match action {
        RoleAction::Practice => {
            role.performance_score =
                (role.performance_score + tuning.practice_performance).min(100);
            format!("You rehearsed your lines for \"{}\".", role.title)
        }
        RoleAction::Develop => {
            role.performance_score =
                (role.performance_score + tuning.develop_performance).min(100);
            stats.adjust_happiness(-tuning.develop_happiness_cost);
            "You spent time doing immersive prep for your role.".to_string()
        }
        RoleAction::Publicity => {
            if rng.gen::<f64>() < tuning.publicity_success_chance {
                role.project_popularity = (role.project_popularity + 10).min(100);
                stats.adjust_fame(1);
                format!(
                    "A publicity stunt for \"{}\" went well, boosting its popularity.",
                    role.title
                )
            } else {
                stats.adjust_reputation(-10);
                "Your publicity stunt was poorly received, hurting your reputation.".to_string()
            }
        }
    }
}

/// Walk off a project. No completed record is written; reputation, happiness,
/// and every cast relationship take the hit.
pub fn quit_role(
    career: &mut Career,
    index: usize,
    stats: &mut PlayerStats,
    social: &mut SocialState,
    tuning: &Tuning,
) -> CurrentRole {
    let role = career.current_roles.remove(index);
    for npc_id in &role.cast {
        if let Some(rel) = social.relationship_mut(npc_id) {
            rel.shift(-tuning.quit_relationship_penalty);
            rel.remember(
                format!("Quit the project '{}' abruptly.", role.title),
                tuning.memory_cap,
            );
        }
    }
    stats.adjust_reputation(-tuning.quit_reputation_penalty);
    stats.adjust_happiness(-tuning.quit_happiness_penalty);
    role
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn outcome_tier_boundaries_are_exclusive() {
        assert_eq!(outcome_tier(5.01), BoxOfficeTier::LegendaryHit);
        assert_eq!(outcome_tier(5.0), BoxOfficeTier::BlockbusterSuccess);
        assert_eq!(outcome_tier(3.0), BoxOfficeTier::SolidHit);
        assert_eq!(outcome_tier(1.5), BoxOfficeTier::BrokeEven);
        assert_eq!(outcome_tier(0.8), BoxOfficeTier::Bomb);
        assert_eq!(outcome_tier(0.0), BoxOfficeTier::Bomb);
    }

    #[test]
    fn gross_multiplier_is_floored() {
        assert_eq!(gross_multiplier(0.0, 0.5), 0.1);
        let unfloored = gross_multiplier(0.8, 1.0);
        assert!((unfloored - 4.0).abs() < 1e-9);
    }

    #[test]
    fn combined_quality_uses_stated_weights() {
        let score = combined_quality(100, 100, 100);
        assert!((score - 1.0).abs() < 1e-9);
        let score = combined_quality(50, 50, 0);
        assert!((score - 0.4).abs() < 1e-9);
    }

    #[test]
    fn skilled_famous_player_cannot_fail_an_easy_audition() {
        // Chance 50 - 10 + 25 + 50 = 115, above any roll in [0, 100).
        assert!(success_chance(50, 10, 50) > 100.0);
    }

    #[test]
    fn pool_size_has_floor_and_grows_with_backing() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            assert!(audition_pool_size(0, None, &mut rng) >= 2);
        }
        // Same draw sequence, more agent skill, never fewer slots.
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let without = audition_pool_size(40, None, &mut a);
            let with = audition_pool_size(40, Some(85), &mut b);
            assert!(with >= without);
        }
    }

    #[test]
    fn backend_points_only_for_lead_film_with_budget() {
        let mut rng = StdRng::seed_from_u64(3);
        let pts = draw_backend_points(
            RoleTier::Lead,
            ProjectType::Film,
            BudgetCategory::Blockbuster,
            &mut rng,
        );
        assert!((0.03..=0.07).contains(&pts));
        let pts = draw_backend_points(
            RoleTier::Lead,
            ProjectType::Film,
            BudgetCategory::MidBudget,
            &mut rng,
        );
        assert!((0.01..=0.03).contains(&pts));
        assert_eq!(
            draw_backend_points(
                RoleTier::Supporting,
                ProjectType::Film,
                BudgetCategory::Blockbuster,
                &mut rng
            ),
            0.0
        );
        assert_eq!(
            draw_backend_points(
                RoleTier::Lead,
                ProjectType::TvShow,
                BudgetCategory::Blockbuster,
                &mut rng
            ),
            0.0
        );
        assert_eq!(
            draw_backend_points(
                RoleTier::Lead,
                ProjectType::Film,
                BudgetCategory::Indie,
                &mut rng
            ),
            0.0
        );
    }

    #[test]
    fn non_film_rewards_scale_with_showing() {
        assert_eq!(non_film_rewards(100, 100), (15, 5));
        assert_eq!(non_film_rewards(0, 50), (3, 0));
    }

    #[test]
    fn tier_rewards_decrease_monotonically() {
        let mut rng = StdRng::seed_from_u64(5);
        let legendary = tier_rewards(BoxOfficeTier::LegendaryHit, &mut rng);
        let bomb = tier_rewards(BoxOfficeTier::Bomb, &mut rng);
        assert!(legendary.0 >= 20 && legendary.1 == 10);
        assert_eq!(bomb, (1, -10));
    }
}
