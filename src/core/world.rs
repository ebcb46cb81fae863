use bevy_ecs::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use thiserror::Error;

use crate::content::names;
use crate::core::ecs::{create_schedule, create_world, GameRng};
use crate::core::serialization::{
    apply_state_to_world, backfill_state, extract_state_from_world, SaveState,
};
use crate::data::tuning::Tuning;
use crate::data::{activities, agents, backgrounds, shop};
use crate::narrative::{
    ChoiceOutcome, DatingPoolContext, DmReplyContext, InteractionScene, NarrativeGenerator,
    Narrator, PartnerTalkContext, PostContext, SceneContext,
};
use crate::persistence::SaveRepository;
use crate::simulation::career::{
    apply_role_action, generate_auditions, quit_role, AgentContract, Career, CurrentRole,
    RoleAction,
};
use crate::simulation::dating::DatingProfile;
use crate::simulation::events::{EventPayload, ScheduledEvents};
use crate::simulation::journal::Journal;
use crate::simulation::npcs::NpcPool;
use crate::simulation::profile::PlayerProfile;
use crate::simulation::session::{GameOverReason, GameStatus, WeeklyLedger};
use crate::simulation::social::{DmMessage, PostCategory, PostKind, SocialState};
use crate::simulation::stardb::StarDb;
use crate::simulation::stats::PlayerStats;
use crate::simulation::time::GameClock;
use crate::simulation::wealth::{Asset, Wealth};

/// Synchronous rejection of a player action. Nothing is mutated when one of
/// these comes back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("not enough cash")]
    InsufficientFunds,
    #[error("you already own this item")]
    AlreadyOwned,
    #[error("you already applied to this audition")]
    AlreadyApplied,
    #[error("weekly action limit reached")]
    ActionLimitReached,
    #[error("unknown id: {0}")]
    UnknownId(String),
    #[error("name must be between 1 and 20 characters")]
    InvalidName,
    #[error("no agent is currently hired")]
    NoAgent,
    #[error("{0} won't represent you yet; build your fame first")]
    AgentUnavailable(String),
    #[error("you are not seeing anyone")]
    NoPartner,
    #[error("your partner has no time for more this week")]
    PartnerBusy,
    #[error("the narrative service is unavailable right now")]
    NarrativeUnavailable,
    #[error("the run is over; no further actions are accepted")]
    GameOver,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("the run has ended: {}", .0.message())]
    GameOver(GameOverReason),
}

/// What a completed week looks like from the outside.
#[derive(Debug, Clone)]
pub struct WeekSnapshot {
    pub week: u32,
    pub age: u32,
    pub cash: i64,
    pub income: i64,
    pub expenses: i64,
    pub game_over: Option<GameOverReason>,
    /// Journal lines produced by this week, newest first.
    pub events: Vec<String>,
}

/// Wrapper around the ECS world and weekly schedule: the one place allowed to
/// mutate game state. Owns the optional save repository and checkpoints
/// through it; a failing save is logged and never fatal.
pub struct Game {
    world: World,
    schedule: Schedule,
    repo: Option<Box<dyn SaveRepository>>,
    seed: u64,
}

impl Game {
    /// Create a new run with default tuning.
    pub fn new(
        seed: u64,
        narrator: Box<dyn NarrativeGenerator + Send + Sync>,
        repo: Option<Box<dyn SaveRepository>>,
    ) -> Self {
        Self::with_tuning(seed, narrator, repo, Tuning::default())
    }

    /// Create a new run: random identity and background, a populated world,
    /// the first audition board, and the first award ceremony on the books.
    pub fn with_tuning(
        seed: u64,
        narrator: Box<dyn NarrativeGenerator + Send + Sync>,
        repo: Option<Box<dyn SaveRepository>>,
        tuning: Tuning,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let clock = GameClock::default();
        let mut profile = PlayerProfile::default();
        let mut stats = PlayerStats::default();
        let mut wealth = Wealth::default();
        let mut career = Career::default();
        let mut journal = Journal::default();
        let mut events = ScheduledEvents::default();

        let name = names::random_stage_name(&mut rng);
        profile.handle = names::handle_for(&name);
        profile.name = name;
        profile.gender =
            names::PLAYER_GENDERS[rng.gen_range(0..names::PLAYER_GENDERS.len())].to_string();
        profile.birthplace =
            names::BIRTHPLACES[rng.gen_range(0..names::BIRTHPLACES.len())].to_string();

        let background =
            backgrounds::BACKGROUNDS[rng.gen_range(0..backgrounds::BACKGROUNDS.len())];
        profile.background = background.id.to_string();
        stats.apply(&background.effects);
        // Whatever the background did to the wallet, every career starts with
        // the same bankroll.
        wealth.cash = tuning.starting_cash;

        let pool = NpcPool::populate(&mut rng);
        let mut stardb = StarDb::default();
        stardb.populate_from_pool(&pool, &mut rng);
        stardb.seed_projects(&pool, clock.age);
        stardb.upsert_player(&profile, &stats, &clock, &career, Vec::new());

        generate_auditions(&mut career, &stats, &clock, &pool, None, &mut rng);
        events.schedule(
            tuning.award_period_weeks,
            EventPayload::AwardCeremony { year: clock.age },
        );
        journal.record(
            clock.week,
            format!(
                "Welcome to Hollywood, {}! You start your career with a dream and ${}.",
                profile.name, wealth.cash
            ),
        );

        let mut world = create_world(seed, narrator, tuning);
        world.insert_resource(clock);
        world.insert_resource(profile);
        world.insert_resource(stats);
        world.insert_resource(wealth);
        world.insert_resource(career);
        world.insert_resource(pool);
        world.insert_resource(stardb);
        world.insert_resource(events);
        world.insert_resource(journal);
        world.insert_resource(GameRng(rng));

        let mut game = Self {
            world,
            schedule: create_schedule(),
            repo,
            seed,
        };
        game.autosave();
        game
    }

    /// Rebuild a run from a saved snapshot, backfilling anything an older
    /// save shape left out.
    pub fn from_save(
        mut state: SaveState,
        narrator: Box<dyn NarrativeGenerator + Send + Sync>,
        repo: Option<Box<dyn SaveRepository>>,
    ) -> Self {
        let seed = state.seed;
        let mut rng = StdRng::seed_from_u64(seed ^ u64::from(state.clock.week));
        backfill_state(&mut state, &mut rng);

        let mut world = create_world(seed, narrator, Tuning::default());
        apply_state_to_world(&mut world, state);
        world.insert_resource(GameRng(rng));

        Self {
            world,
            schedule: create_schedule(),
            repo,
            seed,
        }
    }

    /// Resume from the repository if it holds a usable save, otherwise start
    /// fresh. A corrupt or unreadable save is discarded, not fatal.
    pub fn load_or_new(
        seed: u64,
        narrator: Box<dyn NarrativeGenerator + Send + Sync>,
        mut repo: Box<dyn SaveRepository>,
    ) -> Self {
        match repo.load() {
            Ok(Some(state)) => Self::from_save(state, narrator, Some(repo)),
            Ok(None) => Self::new(seed, narrator, Some(repo)),
            Err(err) => {
                log::warn!("failed to load save, starting fresh: {}", err);
                Self::new(seed, narrator, Some(repo))
            }
        }
    }

    // --- Accessors ---

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn clock(&self) -> &GameClock {
        self.world.resource::<GameClock>()
    }

    pub fn profile(&self) -> &PlayerProfile {
        self.world.resource::<PlayerProfile>()
    }

    pub fn stats(&self) -> &PlayerStats {
        self.world.resource::<PlayerStats>()
    }

    pub fn wealth(&self) -> &Wealth {
        self.world.resource::<Wealth>()
    }

    pub fn career(&self) -> &Career {
        self.world.resource::<Career>()
    }

    pub fn social(&self) -> &SocialState {
        self.world.resource::<SocialState>()
    }

    pub fn npcs(&self) -> &NpcPool {
        self.world.resource::<NpcPool>()
    }

    pub fn stardb(&self) -> &StarDb {
        self.world.resource::<StarDb>()
    }

    pub fn journal(&self) -> &Journal {
        self.world.resource::<Journal>()
    }

    pub fn tuning(&self) -> &Tuning {
        self.world.resource::<Tuning>()
    }

    pub fn status(&self) -> GameStatus {
        *self.world.resource::<GameStatus>()
    }

    /// Extract a serializable save state from the current world.
    pub fn save_state(&self) -> SaveState {
        extract_state_from_world(&self.world, self.seed)
    }

    // --- The weekly turn ---

    /// Advance the simulation by one week. Not idempotent: every call consumes
    /// scheduled and random state, so drive it exactly once per player turn.
    /// Once the run is over, further calls are rejected.
    pub fn advance_week(&mut self) -> Result<WeekSnapshot, GameError> {
        if let Some(reason) = self.status().reason() {
            return Err(GameError::GameOver(reason));
        }
        self.autosave();

        let journal_len_before = self.journal().len();
        self.schedule.run(&mut self.world);

        if self.world.resource::<WeeklyLedger>().completions > 0 {
            self.autosave();
        }

        let journal = self.world.resource::<Journal>();
        let new_entries = journal.len().saturating_sub(journal_len_before);
        let events = journal.0[..new_entries].to_vec();
        let clock = self.world.resource::<GameClock>();
        let wealth = self.world.resource::<Wealth>();
        Ok(WeekSnapshot {
            week: clock.week,
            age: clock.age,
            cash: wealth.cash,
            income: wealth.income,
            expenses: wealth.expenses,
            game_over: self.world.resource::<GameStatus>().reason(),
            events,
        })
    }

    // --- Player actions (synchronous; rejected with no mutation) ---

    /// Spend money and time on a catalog activity.
    pub fn perform_activity(&mut self, activity_id: &str) -> Result<(), ActionError> {
        self.ensure_running()?;
        let activity = activities::by_id(activity_id)
            .ok_or_else(|| ActionError::UnknownId(activity_id.to_string()))?;
        if self.wealth().cash < activity.cost {
            return Err(ActionError::InsufficientFunds);
        }

        self.world.resource_mut::<Wealth>().cash -= activity.cost;
        self.world
            .resource_mut::<PlayerStats>()
            .apply(&activity.effects);
        let week = self.clock().week;
        self.world
            .resource_mut::<Journal>()
            .record(week, activity.log_message);
        self.autosave();
        Ok(())
    }

    /// Buy a shop item, freezing its terms into an owned asset.
    pub fn buy_item(&mut self, item_id: &str) -> Result<(), ActionError> {
        self.ensure_running()?;
        let item = shop::by_id(item_id)
            .ok_or_else(|| ActionError::UnknownId(item_id.to_string()))?;
        if self.wealth().owns(item.id) {
            return Err(ActionError::AlreadyOwned);
        }
        if self.wealth().cash < item.price {
            return Err(ActionError::InsufficientFunds);
        }

        {
            let mut wealth = self.world.resource_mut::<Wealth>();
            wealth.cash -= item.price;
            wealth.assets.push(Asset {
                id: item.id.to_string(),
                name: item.name.to_string(),
                category: item.category.to_string(),
                purchase_price: item.price,
                weekly_upkeep: item.weekly_upkeep,
            });
            wealth.expenses += item.weekly_upkeep;
        }
        {
            let mut stats = self.world.resource_mut::<PlayerStats>();
            stats.adjust_happiness(item.happiness_boost);
            stats.adjust_reputation(item.reputation_boost);
        }
        let week = self.clock().week;
        self.world.resource_mut::<Journal>().record(
            week,
            format!("You purchased a {} for ${}.", item.name, item.price),
        );
        self.autosave();
        Ok(())
    }

    /// Put in for one of this week's auditions. Resolution happens at the
    /// next week boundary.
    pub fn apply_for_audition(&mut self, audition_id: &str) -> Result<(), ActionError> {
        self.ensure_running()?;
        let career = self.career();
        if career.has_applied(audition_id) {
            return Err(ActionError::AlreadyApplied);
        }
        let title = career
            .audition(audition_id)
            .map(|a| a.title.clone())
            .ok_or_else(|| ActionError::UnknownId(audition_id.to_string()))?;

        self.world
            .resource_mut::<Career>()
            .applied_auditions
            .push(audition_id.to_string());
        let week = self.clock().week;
        self.world
            .resource_mut::<Journal>()
            .record(week, format!("You applied for the role in \"{}\".", title));
        Ok(())
    }

    pub fn hire_agent(&mut self, agent_name: &str) -> Result<(), ActionError> {
        self.ensure_running()?;
        let profile = agents::by_name(agent_name)
            .ok_or_else(|| ActionError::UnknownId(agent_name.to_string()))?;
        if self.stats().fame < profile.hire_threshold {
            return Err(ActionError::AgentUnavailable(profile.name.to_string()));
        }

        self.world.resource_mut::<Career>().agent = Some(AgentContract {
            name: profile.name.to_string(),
            commission: profile.commission,
            relationship_score: 50,
        });
        let week = self.clock().week;
        self.world
            .resource_mut::<Journal>()
            .record(week, format!("You hired {} as your new agent.", profile.name));
        self.autosave();
        Ok(())
    }

    pub fn fire_agent(&mut self) -> Result<(), ActionError> {
        self.ensure_running()?;
        let agent = self
            .world
            .resource_mut::<Career>()
            .agent
            .take()
            .ok_or(ActionError::NoAgent)?;
        let week = self.clock().week;
        self.world
            .resource_mut::<Journal>()
            .record(week, format!("You fired your agent, {}.", agent.name));
        self.autosave();
        Ok(())
    }

    /// Spend one of the weekly on-set action slots.
    pub fn role_action(&mut self, role_index: usize, action: RoleAction) -> Result<(), ActionError> {
        self.ensure_running()?;
        let cap = self.tuning().weekly_role_action_cap;
        let tuning = self.tuning().clone();
        {
            let career = self.career();
            let role = career
                .current_roles
                .get(role_index)
                .ok_or_else(|| ActionError::UnknownId(format!("role #{}", role_index)))?;
            if role.weekly_actions_taken >= cap {
                return Err(ActionError::ActionLimitReached);
            }
        }

        let week = self.clock().week;
        let line = self.world.resource_scope(|world, mut career: Mut<Career>| {
            world.resource_scope(|world, mut stats: Mut<PlayerStats>| {
                let mut rng = world.resource_mut::<GameRng>();
                apply_role_action(
                    &mut career.current_roles[role_index],
                    action,
                    &mut stats,
                    &tuning,
                    &mut rng.0,
                )
            })
        });
        self.world.resource_mut::<Journal>().record(week, line);
        Ok(())
    }

    /// Walk off a project. Costs reputation, happiness, and every cast
    /// relationship; leaves no completed record behind.
    pub fn quit_role(&mut self, role_index: usize) -> Result<(), ActionError> {
        self.ensure_running()?;
        if self.career().current_roles.get(role_index).is_none() {
            return Err(ActionError::UnknownId(format!("role #{}", role_index)));
        }
        let tuning = self.tuning().clone();

        let quit: CurrentRole = self.world.resource_scope(|world, mut career: Mut<Career>| {
            world.resource_scope(|world, mut stats: Mut<PlayerStats>| {
                let mut social = world.resource_mut::<SocialState>();
                quit_role(&mut career, role_index, &mut stats, &mut social, &tuning)
            })
        });
        let week = self.clock().week;
        self.world.resource_mut::<Journal>().record(
            week,
            format!(
                "You quit your role in \"{}\", damaging your reputation and relationships on set.",
                quit.title
            ),
        );
        self.autosave();
        Ok(())
    }

    /// Open an interaction with a cast member. Costs no action slot; the
    /// scene comes from the narrative generator and a dead backend surfaces
    /// as a rejected action rather than a broken week.
    pub fn crew_interaction(
        &mut self,
        role_index: usize,
        npc_id: &str,
    ) -> Result<InteractionScene, ActionError> {
        self.ensure_running()?;
        let context = {
            let career = self.career();
            let role = career
                .current_roles
                .get(role_index)
                .ok_or_else(|| ActionError::UnknownId(format!("role #{}", role_index)))?;
            if !role.cast.iter().any(|id| id == npc_id) {
                return Err(ActionError::UnknownId(npc_id.to_string()));
            }
            let npc = self
                .npcs()
                .get(npc_id)
                .ok_or_else(|| ActionError::UnknownId(npc_id.to_string()))?;
            let relationship = self
                .social()
                .relationship(npc_id)
                .ok_or_else(|| ActionError::UnknownId(npc_id.to_string()))?;
            SceneContext {
                player_name: self.profile().name.clone(),
                npc_name: npc.name.clone(),
                profession: npc.profession.to_string(),
                personality: npc.personality,
                title: role.title.clone(),
                genre: role.genre,
                project_type: role.project_type,
                tier: role.tier,
                status: relationship.status,
                score: relationship.score,
                memory: relationship.memory.clone(),
            }
        };

        let mut narrator = self.world.resource_mut::<Narrator>();
        narrator.0.interaction_scene(&context).map_err(|err| {
            log::warn!("interaction scene generation failed: {}", err);
            ActionError::NarrativeUnavailable
        })
    }

    /// Apply the outcome of a chosen interaction branch: relationship shift,
    /// clamped stat deltas, and a third-person memory entry.
    pub fn resolve_crew_choice(
        &mut self,
        role_index: usize,
        npc_id: &str,
        outcome: &ChoiceOutcome,
    ) -> Result<(), ActionError> {
        self.ensure_running()?;
        if self.social().relationship(npc_id).is_none() {
            return Err(ActionError::UnknownId(npc_id.to_string()));
        }
        let memory_cap = self.tuning().memory_cap;
        let player_name = self.profile().name.clone();

        {
            let mut social = self.world.resource_mut::<SocialState>();
            let relationship = social
                .relationship_mut(npc_id)
                .expect("relationship checked above");
            relationship.shift(outcome.relationship_change);
            let memory_text = outcome.log_message.replacen("You", &player_name, 1);
            relationship.remember(memory_text, memory_cap);
        }
        {
            let mut stats = self.world.resource_mut::<PlayerStats>();
            stats.adjust_happiness(outcome.happiness);
            stats.adjust_reputation(outcome.reputation);
        }
        if outcome.performance != 0 {
            let mut career = self.world.resource_mut::<Career>();
            if let Some(role) = career.current_roles.get_mut(role_index) {
                role.performance_score =
                    (role.performance_score + outcome.performance).clamp(0, 100);
            }
        }
        let week = self.clock().week;
        self.world
            .resource_mut::<Journal>()
            .record(week, outcome.log_message.clone());
        Ok(())
    }

    /// Refill the dating pool from the generator. The refresh variant costs
    /// money up front; a generator failure leaves the pool empty.
    pub fn request_dating_profiles(&mut self, refresh: bool) -> Result<usize, ActionError> {
        self.ensure_running()?;
        let cost = if refresh {
            self.tuning().dating_refresh_cost
        } else {
            0
        };
        if self.wealth().cash < cost {
            return Err(ActionError::InsufficientFunds);
        }
        self.world.resource_mut::<Wealth>().cash -= cost;

        let context = DatingPoolContext {
            player_name: self.profile().name.clone(),
            player_age: self.clock().age,
            preference: self.profile().dating_preference,
        };
        let week = self.clock().week;
        let result = {
            let mut narrator = self.world.resource_mut::<Narrator>();
            narrator.0.dating_profiles(&context)
        };
        match result {
            Ok(seeds) => {
                let profiles: Vec<DatingProfile> = seeds
                    .into_iter()
                    .enumerate()
                    .map(|(i, seed)| DatingProfile {
                        id: format!("profile_{}_{}", week, i),
                        name: seed.name,
                        age: seed.age,
                        gender: seed.gender,
                        profession: seed.profession,
                        bio: seed.bio,
                    })
                    .collect();
                let count = profiles.len();
                self.world.resource_mut::<SocialState>().dating_pool = profiles;
                Ok(count)
            }
            Err(err) => {
                log::warn!("dating profile generation failed: {}", err);
                self.world.resource_mut::<SocialState>().dating_pool.clear();
                Err(ActionError::NarrativeUnavailable)
            }
        }
    }

    /// Commit to a date with someone from the pool; the evening itself
    /// resolves at the next week boundary.
    pub fn go_on_date(&mut self, profile_id: &str) -> Result<(), ActionError> {
        self.ensure_running()?;
        let cost = self.tuning().date_cost;
        if self.wealth().cash < cost {
            return Err(ActionError::InsufficientFunds);
        }
        let profile = {
            let social = self.social();
            social
                .dating_pool
                .iter()
                .find(|p| p.id == profile_id)
                .cloned()
                .ok_or_else(|| ActionError::UnknownId(profile_id.to_string()))?
        };

        self.world.resource_mut::<Wealth>().cash -= cost;
        self.world
            .resource_mut::<SocialState>()
            .dating_pool
            .retain(|p| p.id != profile_id);
        self.world.resource_mut::<ScheduledEvents>().schedule(
            1,
            EventPayload::FirstDate {
                profile: profile.clone(),
            },
        );
        let week = self.clock().week;
        self.world
            .resource_mut::<Journal>()
            .record(week, format!("You're going on a date with {}.", profile.name));
        Ok(())
    }

    pub fn break_up(&mut self) -> Result<(), ActionError> {
        self.ensure_running()?;
        let partner = self
            .world
            .resource_mut::<SocialState>()
            .partner
            .take()
            .ok_or(ActionError::NoPartner)?;
        let penalty = self.tuning().breakup_happiness_penalty;
        self.world
            .resource_mut::<PlayerStats>()
            .adjust_happiness(-penalty);
        let week = self.clock().week;
        self.world.resource_mut::<Journal>().record(
            week,
            format!(
                "You broke up with {}. It was a painful decision.",
                partner.profile.name
            ),
        );
        Ok(())
    }

    /// Spend the week's one partner action.
    pub fn partner_action(&mut self, action: PartnerAction) -> Result<(), ActionError> {
        self.ensure_running()?;
        let cap = self.tuning().partner_action_cap;
        {
            let social = self.social();
            let partner = social.partner.as_ref().ok_or(ActionError::NoPartner)?;
            if partner.weekly_actions_taken >= cap {
                return Err(ActionError::PartnerBusy);
            }
        }

        match action {
            PartnerAction::FancyDate => {
                let cost = self.tuning().fancy_date_cost;
                if self.wealth().cash < cost {
                    return Err(ActionError::InsufficientFunds);
                }
                self.world.resource_mut::<Wealth>().cash -= cost;
                let name = {
                    let mut social = self.world.resource_mut::<SocialState>();
                    let partner = social.partner.as_mut().expect("checked above");
                    partner.score = (partner.score + 10).min(100);
                    partner.weekly_actions_taken += 1;
                    partner.profile.name.clone()
                };
                self.world
                    .resource_mut::<PlayerStats>()
                    .adjust_happiness(8);
                let week = self.clock().week;
                self.world.resource_mut::<Journal>().record(
                    week,
                    format!("You and {} went on a luxurious date. It was wonderful.", name),
                );
            }
            PartnerAction::NightIn => {
                let name = {
                    let mut social = self.world.resource_mut::<SocialState>();
                    let partner = social.partner.as_mut().expect("checked above");
                    partner.score = (partner.score + 5).min(100);
                    partner.weekly_actions_taken += 1;
                    partner.profile.name.clone()
                };
                self.world
                    .resource_mut::<PlayerStats>()
                    .adjust_happiness(5);
                let week = self.clock().week;
                self.world.resource_mut::<Journal>().record(
                    week,
                    format!(
                        "You and {} spent a cozy night in, enjoying each other's company.",
                        name
                    ),
                );
            }
            PartnerAction::DeepTalk => {
                // The slot is spent whether or not the generator delivers.
                let context = {
                    let mut social = self.world.resource_mut::<SocialState>();
                    let partner = social.partner.as_mut().expect("checked above");
                    partner.weekly_actions_taken += 1;
                    PartnerTalkContext {
                        player_name: String::new(),
                        partner_name: partner.profile.name.clone(),
                        partner_age: partner.profile.age,
                        profession: partner.profile.profession.clone(),
                        weeks_together: partner.weeks_together,
                        score: partner.score,
                    }
                };
                let context = PartnerTalkContext {
                    player_name: self.profile().name.clone(),
                    ..context
                };
                let week = self.clock().week;
                let result = {
                    let mut narrator = self.world.resource_mut::<Narrator>();
                    narrator.0.partner_talk(&context)
                };
                match result {
                    Ok(talk) => {
                        let mut social = self.world.resource_mut::<SocialState>();
                        if let Some(partner) = social.partner.as_mut() {
                            partner.score =
                                (partner.score + talk.relationship_change).clamp(0, 100);
                        }
                        self.world
                            .resource_mut::<Journal>()
                            .record(week, talk.scenario);
                    }
                    Err(err) => {
                        log::warn!("partner talk generation failed: {}", err);
                        self.world.resource_mut::<Journal>().record(
                            week,
                            "You and your partner had a talk, but it was hard to read the room.",
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Publish a post to the feed. The caption comes from the generator; on
    /// failure nothing is published and nothing else changes.
    pub fn create_post(&mut self, category: PostCategory) -> Result<(), ActionError> {
        self.ensure_running()?;
        let context = PostContext {
            player_name: self.profile().name.clone(),
            handle: self.profile().handle.clone(),
            age: self.clock().age,
            fame: self.stats().fame,
            category,
            current_project: self.career().current_roles.first().map(|r| r.title.clone()),
            last_project: self.career().completed_roles.last().map(|r| r.title.clone()),
        };
        let content = {
            let mut narrator = self.world.resource_mut::<Narrator>();
            narrator.0.feed_post(&context).map_err(|err| {
                log::warn!("feed post generation failed: {}", err);
                ActionError::NarrativeUnavailable
            })?
        };

        let (week, age, fame) = {
            let clock = self.clock();
            (clock.week, clock.age, self.stats().fame)
        };
        let new_followers = {
            let mut rng = self.world.resource_mut::<GameRng>();
            let spread = (fame.max(0) as u64) * 10;
            let bonus = if spread > 0 {
                rng.0.gen_range(0..spread)
            } else {
                0
            };
            50 + bonus
        };
        let (likes, comments, shares) = {
            let mut rng = self.world.resource_mut::<GameRng>();
            let nf = new_followers as f64;
            (
                (nf * (10.0 + rng.0.gen::<f64>() * 20.0)) as u64,
                (nf * (0.5 + rng.0.gen::<f64>() * 2.0)) as u64,
                (nf * (0.2 + rng.0.gen::<f64>())) as u64,
            )
        };
        {
            let mut social = self.world.resource_mut::<SocialState>();
            let post_id = format!("post_{}_{}", week, social.feed.len());
            social.feed.insert(
                0,
                crate::simulation::social::Post {
                    id: post_id,
                    week,
                    age,
                    author: context.player_name.clone(),
                    author_handle: context.handle.clone(),
                    kind: PostKind::Player,
                    category,
                    image_description: content.image_description,
                    caption: content.caption,
                    likes,
                    comments,
                    shares,
                },
            );
            social.followers += new_followers;
        }
        {
            let mut stats = self.world.resource_mut::<PlayerStats>();
            stats.adjust_fame(2);
            stats.adjust_happiness(5);
        }
        self.world.resource_mut::<Journal>().record(
            week,
            format!("You posted on HGram, gaining {} followers.", new_followers),
        );
        Ok(())
    }

    /// Send a direct message to a colleague; the reply (or a shrug, if the
    /// generator is down) lands in the same thread immediately.
    pub fn send_dm(&mut self, npc_id: &str, text: &str) -> Result<(), ActionError> {
        self.ensure_running()?;
        let npc = self
            .npcs()
            .get(npc_id)
            .cloned()
            .ok_or_else(|| ActionError::UnknownId(npc_id.to_string()))?;
        let relationship = self
            .social()
            .relationship(npc_id)
            .cloned()
            .ok_or_else(|| ActionError::UnknownId(npc_id.to_string()))?;
        let player_name = self.profile().name.clone();
        let week = self.clock().week;

        let history = {
            let mut social = self.world.resource_mut::<SocialState>();
            let thread = social.thread_mut(npc_id);
            thread.messages.push(DmMessage {
                from_player: true,
                week,
                text: text.to_string(),
            });
            thread
                .messages
                .iter()
                .rev()
                .take(6)
                .rev()
                .map(|m| {
                    let speaker = if m.from_player { &player_name } else { &npc.name };
                    format!("{}: {}", speaker, m.text)
                })
                .collect::<Vec<_>>()
        };

        let context = DmReplyContext {
            npc_name: npc.name.clone(),
            personality: npc.personality,
            player_name,
            status: relationship.status,
            score: relationship.score,
            history,
        };
        let reply = {
            let mut narrator = self.world.resource_mut::<Narrator>();
            narrator.0.dm_reply(&context).unwrap_or_else(|err| {
                log::warn!("DM reply generation failed: {}", err);
                "...".to_string()
            })
        };
        {
            let mut social = self.world.resource_mut::<SocialState>();
            let thread = social.thread_mut(npc_id);
            thread.messages.push(DmMessage {
                from_player: false,
                week,
                text: reply,
            });
        }
        self.autosave();
        Ok(())
    }

    /// Opening a conversation clears its unread flag.
    pub fn open_thread(&mut self, npc_id: &str) {
        self.world
            .resource_mut::<SocialState>()
            .mark_thread_read(npc_id);
    }

    pub fn set_dating_preference(
        &mut self,
        preference: crate::simulation::dating::DatingPreference,
    ) {
        self.world.resource_mut::<PlayerProfile>().dating_preference = preference;
    }

    /// Rename the player (and refresh the derived handle).
    pub fn rename_player(&mut self, name: &str) -> Result<(), ActionError> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.len() > 20 {
            return Err(ActionError::InvalidName);
        }
        {
            let mut profile = self.world.resource_mut::<PlayerProfile>();
            profile.name = trimmed.to_string();
            profile.handle = names::handle_for(trimmed);
        }
        let week = self.clock().week;
        self.world
            .resource_mut::<Journal>()
            .record(week, format!("You are now known as {}.", trimmed));
        self.autosave();
        Ok(())
    }

    /// Persist the current state through the repository, reporting success.
    pub fn save(&mut self) -> bool {
        let Some(repo) = self.repo.as_mut() else {
            return false;
        };
        let state = extract_state_from_world(&self.world, self.seed);
        match repo.save(&state) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("save failed: {}", err);
                false
            }
        }
    }

    fn autosave(&mut self) {
        self.save();
    }

    fn ensure_running(&self) -> Result<(), ActionError> {
        if self.status().is_over() {
            return Err(ActionError::GameOver);
        }
        Ok(())
    }
}

/// Partner-facing weekly actions, capped at one per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerAction {
    FancyDate,
    NightIn,
    DeepTalk,
}
