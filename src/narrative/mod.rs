//! The narrative-generation boundary. The engine hands a generator structured
//! facts and receives structured text back; it never composes prompts and
//! never depends on a call succeeding. Every call site falls back to a
//! deterministic default on error, so a dead backend degrades the flavor, not
//! the simulation.

use bevy_ecs::prelude::*;
use thiserror::Error;

use crate::simulation::career::{Genre, ProjectType, RoleTier};
use crate::simulation::dating::{DatingPreference, DatingProfile};
use crate::simulation::npcs::Personality;
use crate::simulation::social::{PostCategory, RelationshipStatus};

/// Errors a generator backend may surface. The engine treats every variant the
/// same way: log, fall back, move on.
#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("narrative backend unavailable: {0}")]
    Unavailable(String),
    #[error("narrative response malformed: {0}")]
    Malformed(String),
}

// --- Context payloads (structured facts only) ---

#[derive(Debug, Clone)]
pub struct FanReviewContext {
    pub title: String,
    pub genre: Genre,
    pub outcome: String,
}

#[derive(Debug, Clone)]
pub struct ProactiveDmContext {
    pub npc_name: String,
    pub personality: Personality,
    pub player_name: String,
    pub status: RelationshipStatus,
    pub score: i32,
    pub recent_project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DmReplyContext {
    pub npc_name: String,
    pub personality: Personality,
    pub player_name: String,
    pub status: RelationshipStatus,
    pub score: i32,
    /// The last few lines of the conversation, oldest first.
    pub history: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatingPoolContext {
    pub player_name: String,
    pub player_age: u32,
    pub preference: DatingPreference,
}

/// A generated dating profile, before the engine assigns it an id.
#[derive(Debug, Clone)]
pub struct ProfileSeed {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub profession: String,
    pub bio: String,
}

#[derive(Debug, Clone)]
pub struct DateContext {
    pub player_name: String,
    pub profile: DatingProfile,
}

#[derive(Debug, Clone)]
pub struct DateOutcome {
    pub summary: String,
    /// 0-100; the engine's thresholds turn this into a match or a miss.
    pub chemistry: i32,
}

#[derive(Debug, Clone)]
pub struct SceneContext {
    pub player_name: String,
    pub npc_name: String,
    pub profession: String,
    pub personality: Personality,
    pub title: String,
    pub genre: Genre,
    pub project_type: ProjectType,
    pub tier: RoleTier,
    pub status: RelationshipStatus,
    pub score: i32,
    /// Recent shared history, newest first.
    pub memory: Vec<String>,
}

/// Stat deltas attached to an interaction choice. Applied through the same
/// clamped paths as every other effect.
#[derive(Debug, Clone, Default)]
pub struct ChoiceOutcome {
    pub relationship_change: i32,
    pub log_message: String,
    pub happiness: i32,
    pub reputation: i32,
    pub performance: i32,
}

#[derive(Debug, Clone)]
pub struct InteractionChoice {
    pub text: String,
    pub outcome: ChoiceOutcome,
}

#[derive(Debug, Clone)]
pub struct InteractionScene {
    pub scenario: String,
    pub choices: Vec<InteractionChoice>,
}

#[derive(Debug, Clone)]
pub struct PartnerTalkContext {
    pub player_name: String,
    pub partner_name: String,
    pub partner_age: u32,
    pub profession: String,
    pub weeks_together: u32,
    pub score: i32,
}

#[derive(Debug, Clone)]
pub struct PartnerTalk {
    pub scenario: String,
    /// Expected in roughly [-15, 20].
    pub relationship_change: i32,
}

#[derive(Debug, Clone)]
pub struct PostContext {
    pub player_name: String,
    pub handle: String,
    pub age: u32,
    pub fame: i32,
    pub category: PostCategory,
    pub current_project: Option<String>,
    pub last_project: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PostContent {
    pub image_description: String,
    pub caption: String,
}

/// The capability the engine calls out to. Implementations may block; the
/// engine issues at most one call at a time and applies results synchronously.
pub trait NarrativeGenerator {
    fn fan_reviews(&mut self, context: &FanReviewContext) -> Result<Vec<String>, NarrativeError>;
    fn proactive_message(&mut self, context: &ProactiveDmContext)
        -> Result<String, NarrativeError>;
    fn dm_reply(&mut self, context: &DmReplyContext) -> Result<String, NarrativeError>;
    fn dating_profiles(
        &mut self,
        context: &DatingPoolContext,
    ) -> Result<Vec<ProfileSeed>, NarrativeError>;
    fn date_outcome(&mut self, context: &DateContext) -> Result<DateOutcome, NarrativeError>;
    fn interaction_scene(
        &mut self,
        context: &SceneContext,
    ) -> Result<InteractionScene, NarrativeError>;
    fn partner_talk(&mut self, context: &PartnerTalkContext)
        -> Result<PartnerTalk, NarrativeError>;
    fn feed_post(&mut self, context: &PostContext) -> Result<PostContent, NarrativeError>;
}

/// Resource wrapper so systems can reach the generator.
#[derive(Resource)]
pub struct Narrator(pub Box<dyn NarrativeGenerator + Send + Sync>);

mod canned;
pub use canned::{CannedNarrator, NullNarrator};
