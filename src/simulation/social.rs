use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::narrative::{NarrativeGenerator, ProactiveDmContext};
use crate::simulation::career::Career;
use crate::simulation::dating::{DatingProfile, Partner};
use crate::simulation::npcs::NpcPool;
use crate::simulation::time::GameClock;

/// Relationship tier, always re-derived from the score after any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipStatus {
    Acquaintance,
    Friend,
    Rival,
}

impl fmt::Display for RelationshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RelationshipStatus::Acquaintance => "Acquaintance",
            RelationshipStatus::Friend => "Friend",
            RelationshipStatus::Rival => "Rival",
        };
        write!(f, "{}", label)
    }
}

pub fn derive_status(score: i32) -> RelationshipStatus {
    if score > 50 {
        RelationshipStatus::Friend
    } else if score < -50 {
        RelationshipStatus::Rival
    } else {
        RelationshipStatus::Acquaintance
    }
}

/// One per NPC the player has interacted with, created lazily on first
/// contact. The memory log feeds narrative context and stays newest-first,
/// capped at a handful of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub npc_id: String,
    pub score: i32,
    pub status: RelationshipStatus,
    #[serde(default)]
    pub memory: Vec<String>,
}

impl Relationship {
    pub fn new(npc_id: impl Into<String>, score: i32) -> Self {
        let score = score.clamp(-100, 100);
        Self {
            npc_id: npc_id.into(),
            score,
            status: derive_status(score),
            memory: Vec::new(),
        }
    }

    /// Shift the score and re-derive the status tier in the same breath.
    pub fn shift(&mut self, delta: i32) {
        self.score = (self.score + delta).clamp(-100, 100);
        self.status = derive_status(self.score);
    }

    pub fn remember(&mut self, entry: String, cap: usize) {
        self.memory.insert(0, entry);
        self.memory.truncate(cap);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostKind {
    Player,
    Npc,
    Brand,
    News,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostCategory {
    BehindTheScenes,
    RedCarpet,
    Vacation,
    Training,
    Personal,
    Promo,
}

impl PostCategory {
    pub const ALL: [PostCategory; 6] = [
        PostCategory::Promo,
        PostCategory::BehindTheScenes,
        PostCategory::Vacation,
        PostCategory::Personal,
        PostCategory::Training,
        PostCategory::RedCarpet,
    ];
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PostCategory::BehindTheScenes => "Behind The Scenes",
            PostCategory::RedCarpet => "Red Carpet Look",
            PostCategory::Vacation => "Luxury Vacation",
            PostCategory::Training => "Training Montage",
            PostCategory::Personal => "Personal Life",
            PostCategory::Promo => "Promote Project",
        };
        write!(f, "{}", label)
    }
}

/// A feed entry on the in-game social network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub week: u32,
    pub age: u32,
    pub author: String,
    pub author_handle: String,
    pub kind: PostKind,
    pub category: PostCategory,
    pub image_description: String,
    pub caption: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmMessage {
    pub from_player: bool,
    pub week: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmThread {
    pub npc_id: String,
    pub messages: Vec<DmMessage>,
    pub is_read: bool,
}

/// Everything social-shaped: colleague relationships, the romantic partner,
/// the dating pool, the feed, and direct messages.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialState {
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub partner: Option<Partner>,
    #[serde(default)]
    pub dating_pool: Vec<DatingProfile>,
    #[serde(default)]
    pub feed: Vec<Post>,
    #[serde(default)]
    pub dms: Vec<DmThread>,
    pub followers: u64,
    #[serde(default)]
    pub has_unread_dms: bool,
}

impl Default for SocialState {
    fn default() -> Self {
        Self {
            relationships: Vec::new(),
            partner: None,
            dating_pool: Vec::new(),
            feed: Vec::new(),
            dms: Vec::new(),
            followers: 1500,
            has_unread_dms: false,
        }
    }
}

impl SocialState {
    pub fn relationship(&self, npc_id: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.npc_id == npc_id)
    }

    pub fn relationship_mut(&mut self, npc_id: &str) -> Option<&mut Relationship> {
        self.relationships.iter_mut().find(|r| r.npc_id == npc_id)
    }

    /// Get-or-create: first contact with an NPC seeds an acquaintance entry.
    pub fn ensure_relationship(&mut self, npc_id: &str, initial_score: i32) -> &mut Relationship {
        if let Some(index) = self.relationships.iter().position(|r| r.npc_id == npc_id) {
            return &mut self.relationships[index];
        }
        self.relationships.push(Relationship::new(npc_id, initial_score));
        self.relationships.last_mut().expect("just pushed")
    }

    /// The colleague view: everyone past plain acquaintance, strongest
    /// feelings first. Note this is a different cut than the status tiers
    /// themselves; it deliberately keeps rivals however mild.
    pub fn significant_relationships(&self) -> Vec<&Relationship> {
        let mut out: Vec<&Relationship> = self
            .relationships
            .iter()
            .filter(|r| r.status != RelationshipStatus::Acquaintance)
            .collect();
        out.sort_by_key(|r| std::cmp::Reverse(r.score.abs()));
        out
    }

    pub fn thread(&self, npc_id: &str) -> Option<&DmThread> {
        self.dms.iter().find(|t| t.npc_id == npc_id)
    }

    pub fn thread_mut(&mut self, npc_id: &str) -> &mut DmThread {
        if let Some(index) = self.dms.iter().position(|t| t.npc_id == npc_id) {
            return &mut self.dms[index];
        }
        self.dms.push(DmThread {
            npc_id: npc_id.to_string(),
            messages: Vec::new(),
            is_read: true,
        });
        self.dms.last_mut().expect("just pushed")
    }

    /// An incoming NPC message marks its thread (and the inbox) unread.
    pub fn push_npc_message(&mut self, npc_id: &str, week: u32, text: String) {
        let thread = self.thread_mut(npc_id);
        thread.messages.push(DmMessage {
            from_player: false,
            week,
            text,
        });
        thread.is_read = false;
        self.has_unread_dms = true;
    }

    pub fn mark_thread_read(&mut self, npc_id: &str) {
        if let Some(thread) = self.dms.iter_mut().find(|t| t.npc_id == npc_id) {
            thread.is_read = true;
        }
        self.has_unread_dms = self.dms.iter().any(|t| !t.is_read);
    }
}

/// Weekly proactive messaging: every relationship past acquaintance has a
/// small independent chance of the NPC reaching out, skipped while an unread
/// conversation with that NPC is already waiting. Generator failures are
/// swallowed; the thread simply gets nothing this week.
#[allow(clippy::too_many_arguments)]
pub fn run_proactive_dms(
    social: &mut SocialState,
    pool: &NpcPool,
    career: &Career,
    player_name: &str,
    clock: &GameClock,
    narrator: &mut dyn NarrativeGenerator,
    rng: &mut impl Rng,
    chance: f64,
) {
    let candidates: Vec<(String, RelationshipStatus, i32)> = social
        .relationships
        .iter()
        .map(|r| (r.npc_id.clone(), r.status, r.score))
        .collect();

    for (npc_id, status, score) in candidates {
        if status == RelationshipStatus::Acquaintance || rng.gen::<f64>() > chance {
            continue;
        }
        let Some(npc) = pool.get(&npc_id) else { continue };
        if social.thread(&npc_id).map(|t| !t.is_read).unwrap_or(false) {
            continue;
        }

        let context = ProactiveDmContext {
            npc_name: npc.name.clone(),
            personality: npc.personality,
            player_name: player_name.to_string(),
            status,
            score,
            recent_project: career.completed_roles.last().map(|r| r.title.clone()),
        };
        match narrator.proactive_message(&context) {
            Ok(text) => social.push_npc_message(&npc_id, clock.week, text),
            Err(err) => log::warn!("proactive DM generation failed for {}: {}", npc.name, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_a_pure_function_of_score() {
        assert_eq!(derive_status(51), RelationshipStatus::Friend);
        assert_eq!(derive_status(50), RelationshipStatus::Acquaintance);
        assert_eq!(derive_status(-50), RelationshipStatus::Acquaintance);
        assert_eq!(derive_status(-51), RelationshipStatus::Rival);
        assert_eq!(derive_status(0), RelationshipStatus::Acquaintance);
    }

    #[test]
    fn shift_clamps_and_rederives() {
        let mut rel = Relationship::new("npc_1", 45);
        rel.shift(10);
        assert_eq!(rel.score, 55);
        assert_eq!(rel.status, RelationshipStatus::Friend);
        rel.shift(-200);
        assert_eq!(rel.score, -100);
        assert_eq!(rel.status, RelationshipStatus::Rival);
        rel.shift(300);
        assert_eq!(rel.score, 100);
        assert_eq!(rel.status, RelationshipStatus::Friend);
    }

    #[test]
    fn memory_is_newest_first_and_capped() {
        let mut rel = Relationship::new("npc_1", 0);
        for i in 0..8 {
            rel.remember(format!("entry {}", i), 5);
        }
        assert_eq!(rel.memory.len(), 5);
        assert_eq!(rel.memory[0], "entry 7");
        assert_eq!(rel.memory[4], "entry 3");
    }

    #[test]
    fn colleague_view_excludes_only_acquaintances() {
        let mut social = SocialState::default();
        social.relationships.push(Relationship::new("friend", 80));
        social.relationships.push(Relationship::new("rival", -60));
        social.relationships.push(Relationship::new("acquaintance", 30));
        let significant = social.significant_relationships();
        assert_eq!(significant.len(), 2);
        assert_eq!(significant[0].npc_id, "friend");
        assert_eq!(significant[1].npc_id, "rival");
    }

    #[test]
    fn ensure_relationship_is_lazy_and_stable() {
        let mut social = SocialState::default();
        social.ensure_relationship("npc_1", 10);
        social.ensure_relationship("npc_1", 99);
        assert_eq!(social.relationships.len(), 1);
        assert_eq!(social.relationships[0].score, 10);
    }

    #[test]
    fn incoming_message_flags_unread() {
        let mut social = SocialState::default();
        social.push_npc_message("npc_1", 3, "hey".to_string());
        assert!(social.has_unread_dms);
        social.mark_thread_read("npc_1");
        assert!(!social.has_unread_dms);
    }
}
