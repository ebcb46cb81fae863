//! End-to-end scenarios driven through the public `Game` facade.

use hollywood_ascent::core::world::Game;
use hollywood_ascent::narrative::{CannedNarrator, NullNarrator};
use hollywood_ascent::simulation::career::{
    Audition, BudgetCategory, CurrentRole, FamePotential, Genre, ProjectType, RoleTier,
};
use hollywood_ascent::simulation::events::{EventPayload, ScheduledEvent};
use hollywood_ascent::simulation::npcs::Profession;
use hollywood_ascent::simulation::session::GameOverReason;
use hollywood_ascent::simulation::social::Relationship;
use hollywood_ascent::SaveState;

fn fresh_state(seed: u64) -> SaveState {
    Game::new(seed, Box::new(CannedNarrator::new()), None).save_state()
}

fn director_id(state: &SaveState) -> String {
    state
        .npcs
        .npcs
        .iter()
        .find(|n| n.profession == Profession::Director)
        .expect("roster always has directors")
        .id
        .clone()
}

fn actor_id(state: &SaveState) -> String {
    state
        .npcs
        .npcs
        .iter()
        .find(|n| n.profession == Profession::Actor)
        .expect("roster always has actors")
        .id
        .clone()
}

fn film_role(state: &SaveState, weeks_left: i32) -> CurrentRole {
    CurrentRole {
        title: "Midnight Reckoning".to_string(),
        character_name: "Sam Cole".to_string(),
        tier: RoleTier::Lead,
        project_type: ProjectType::Film,
        genre: Genre::Action,
        weekly_pay: 1_000,
        weeks_left,
        initial_weeks: 8,
        project_popularity: 70,
        performance_score: 80,
        cast: vec![director_id(state), actor_id(state)],
        weekly_actions_taken: 3,
        backend_points: 0.05,
        budget_category: BudgetCategory::MidBudget,
    }
}

#[test]
fn first_week_of_a_fresh_game() {
    let mut game = Game::new(42, Box::new(CannedNarrator::new()), None);
    assert_eq!(game.clock().week, 1);
    assert_eq!(game.clock().age, 18);
    assert_eq!(game.wealth().cash, 100_000);
    assert!(game.career().available_auditions.len() >= 2);

    let snapshot = game.advance_week().expect("week 1 should advance");

    assert_eq!(snapshot.week, 2);
    assert_eq!(game.clock().week, 2);
    // No roles, no agent: income 0, expenses are the base cost of living.
    assert_eq!(snapshot.income, 0);
    assert_eq!(snapshot.expenses, 50);
    assert_eq!(snapshot.cash, 100_000 - 50);
    // A fresh audition board exists for next week.
    assert!(game.career().available_auditions.len() >= 2);
    // One history sample per ledger, all parallel.
    let history = &game.stats().history;
    assert_eq!(history.len(), 1);
    assert_eq!(history.fame.len(), 1);
    assert_eq!(history.reputation.len(), 1);
    assert_eq!(game.wealth().history.week.len(), 1);
}

#[test]
fn overqualified_applicant_always_lands_the_role() {
    let mut state = fresh_state(7);
    state.stats.acting_skill = 50;
    state.stats.fame = 50;
    let director = director_id(&state);
    state.career.available_auditions = vec![Audition {
        id: "aud_test".to_string(),
        title: "Eternal Gambit".to_string(),
        project_type: ProjectType::Film,
        tier: RoleTier::Lead,
        director: "Director".to_string(),
        director_id: director,
        genre: Genre::Drama,
        weekly_pay: 900,
        fame_potential: FamePotential::High,
        difficulty: 10,
        weeks: 6,
        description: "A promising Mid-Budget Drama Film.".to_string(),
        budget_category: BudgetCategory::MidBudget,
        backend_points: 0.02,
    }];
    state.career.applied_auditions = vec!["aud_test".to_string()];

    let mut game = Game::from_save(state, Box::new(CannedNarrator::new()), None);
    game.advance_week().expect("week should advance");

    // Success score 115 beats any roll; the offer can't be missed.
    assert_eq!(game.career().current_roles.len(), 1);
    let role = &game.career().current_roles[0];
    assert_eq!(role.title, "Eternal Gambit");
    assert_eq!(role.performance_score, 50);
    assert!((30..50).contains(&role.project_popularity));
    // Director first, then three co-stars for a lead role.
    assert_eq!(role.cast.len(), 4);
    assert!(game.career().applied_auditions.is_empty());
    // Everyone on the cast has a lazily created relationship.
    for npc_id in &role.cast {
        assert!(game.social().relationship(npc_id).is_some());
    }
}

#[test]
fn finishing_film_role_completes_and_publishes() {
    let mut state = fresh_state(11);
    let role = film_role(&state, 1);
    state.career.current_roles = vec![role];

    let mut game = Game::from_save(state, Box::new(CannedNarrator::new()), None);
    let cash_before = game.wealth().cash;
    game.advance_week().expect("week should advance");

    assert!(game.career().current_roles.is_empty());
    assert_eq!(game.career().completed_roles.len(), 1);
    let completed = &game.career().completed_roles[0];
    assert_eq!(completed.title, "Midnight Reckoning");
    assert!(completed.box_office.is_some());
    assert!(completed.box_office_gross > 0);
    // The backend payout is exactly the contracted share of the gross.
    assert_eq!(
        completed.player_cut,
        (completed.box_office_gross as f64 * 0.05).round() as i64
    );
    // Pay and payout both landed: one week's salary plus the cut, minus
    // living costs.
    assert_eq!(
        game.wealth().cash,
        cash_before + completed.player_cut + 1_000 - 50
    );
    // A public database entry exists, with generated fan reviews attached.
    let project = game
        .stardb()
        .projects
        .iter()
        .find(|p| p.title == "Midnight Reckoning")
        .expect("completion publishes a database entry");
    assert_eq!(project.reviews.len(), 3);
    assert!(project.rating >= 5.0 && project.rating <= 9.5);
}

#[test]
fn completion_survives_a_dead_narrative_backend() {
    let mut state = fresh_state(11);
    state.career.current_roles = vec![film_role(&state, 1)];

    let mut game = Game::from_save(state, Box::new(NullNarrator), None);
    game.advance_week().expect("generator failure must not block the week");

    assert_eq!(game.career().completed_roles.len(), 1);
    let project = game
        .stardb()
        .projects
        .iter()
        .find(|p| p.title == "Midnight Reckoning")
        .expect("entry is published even without reviews");
    assert!(project.reviews.is_empty());
}

#[test]
fn two_roles_can_finish_in_the_same_week() {
    let mut state = fresh_state(13);
    let mut second = film_role(&state, 1);
    second.title = "Silent Voyage".to_string();
    second.project_type = ProjectType::TvShow;
    state.career.current_roles = vec![film_role(&state, 1), second];

    let mut game = Game::from_save(state, Box::new(CannedNarrator::new()), None);
    game.advance_week().expect("week should advance");

    assert!(game.career().current_roles.is_empty());
    assert_eq!(game.career().completed_roles.len(), 2);
}

#[test]
fn quitting_leaves_no_completed_record() {
    let mut state = fresh_state(17);
    let role = film_role(&state, 5);
    for npc_id in &role.cast {
        state.social.relationships.push(Relationship::new(npc_id, 10));
    }
    state.career.current_roles = vec![role];

    let mut game = Game::from_save(state, Box::new(CannedNarrator::new()), None);
    game.quit_role(0).expect("role exists");

    assert!(game.career().current_roles.is_empty());
    assert!(game.career().completed_roles.is_empty());
    assert_eq!(game.stats().reputation, 25);
    assert_eq!(game.stats().happiness, 55);
    for relationship in &game.social().relationships {
        assert_eq!(relationship.score, -15);
        assert!(relationship.memory[0].contains("Quit the project"));
    }
}

#[test]
fn role_actions_respect_the_weekly_cap() {
    use hollywood_ascent::simulation::career::RoleAction;

    let mut state = fresh_state(19);
    let mut role = film_role(&state, 5);
    role.weekly_actions_taken = 0;
    role.performance_score = 50;
    state.career.current_roles = vec![role];

    let mut game = Game::from_save(state, Box::new(CannedNarrator::new()), None);
    for _ in 0..6 {
        game.role_action(0, RoleAction::Practice).expect("under the cap");
    }
    assert_eq!(
        game.role_action(0, RoleAction::Practice),
        Err(hollywood_ascent::ActionError::ActionLimitReached)
    );
    assert_eq!(game.career().current_roles[0].performance_score, 80);
    assert_eq!(game.career().current_roles[0].weekly_actions_taken, 6);
}

#[test]
fn first_date_with_good_chemistry_starts_a_relationship() {
    let mut state = fresh_state(23);
    state.scheduled_events.0.push(ScheduledEvent {
        weeks_left: 1,
        payload: EventPayload::FirstDate {
            profile: hollywood_ascent::simulation::dating::DatingProfile {
                id: "profile_1".to_string(),
                name: "Dana Cruz".to_string(),
                age: 23,
                gender: "Female".to_string(),
                profession: "Chef".to_string(),
                bio: "I cook, you talk.".to_string(),
            },
        },
    });

    let mut narrator = CannedNarrator::new();
    narrator.chemistry = 85;
    let mut game = Game::from_save(state, Box::new(narrator), None);
    game.advance_week().expect("week should advance");

    let partner = game.social().partner.as_ref().expect("chemistry 85 matches");
    assert_eq!(partner.profile.name, "Dana Cruz");
    // Seeded at 50 + (85-65)/2 = 60, then the same week's drift walks it one
    // step either way.
    assert!((59..=61).contains(&partner.score));
    assert_eq!(partner.weeks_together, 2);
}

#[test]
fn health_exhaustion_ends_the_run_permanently() {
    let mut state = fresh_state(29);
    state.stats.health = 1;

    let mut game = Game::from_save(state, Box::new(CannedNarrator::new()), None);
    let snapshot = game.advance_week().expect("the final week still resolves");
    assert_eq!(snapshot.game_over, Some(GameOverReason::HealthExhausted));
    assert!(game.status().is_over());

    // Further turns are rejected and actions are disabled.
    assert!(game.advance_week().is_err());
    assert_eq!(
        game.perform_activity("meditate"),
        Err(hollywood_ascent::ActionError::GameOver)
    );
}

#[test]
fn bankruptcy_ends_the_run_with_no_new_auditions() {
    let mut state = fresh_state(31);
    state.wealth.cash = -6_000;
    state.career.available_auditions.clear();

    let mut game = Game::from_save(state, Box::new(CannedNarrator::new()), None);
    let snapshot = game.advance_week().expect("the final week still resolves");
    assert_eq!(snapshot.game_over, Some(GameOverReason::Bankrupt));
    // A finished run gets no fresh opportunities.
    assert!(game.career().available_auditions.is_empty());
}

#[test]
fn save_state_round_trips_through_the_facade() {
    let mut game = Game::new(37, Box::new(CannedNarrator::new()), None);
    game.advance_week().expect("week should advance");
    let state = game.save_state();

    let resumed = Game::from_save(state.clone(), Box::new(CannedNarrator::new()), None);
    assert_eq!(resumed.save_state(), state);
}

#[test]
fn resumed_games_continue_counting_weeks() {
    let mut game = Game::new(41, Box::new(CannedNarrator::new()), None);
    game.advance_week().unwrap();
    game.advance_week().unwrap();
    let state = game.save_state();

    let mut resumed = Game::from_save(state, Box::new(CannedNarrator::new()), None);
    let snapshot = resumed.advance_week().unwrap();
    assert_eq!(snapshot.week, 4);
    assert_eq!(resumed.stats().history.len(), 3);
}

#[test]
fn proactive_messages_respect_the_unread_guard() {
    use hollywood_ascent::simulation::career::Career;
    use hollywood_ascent::simulation::npcs::NpcPool;
    use hollywood_ascent::simulation::social::{run_proactive_dms, SocialState};
    use hollywood_ascent::simulation::time::GameClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(3);
    let pool = NpcPool::populate(&mut rng);
    let career = Career::default();
    let clock = GameClock::default();
    let mut social = SocialState::default();
    social
        .relationships
        .push(Relationship::new(pool.npcs[0].id.clone(), 60));

    let mut narrator = CannedNarrator::new();
    // Chance 1.0 means the friend always reaches out...
    run_proactive_dms(
        &mut social, &pool, &career, "Starry 1", &clock, &mut narrator, &mut rng, 1.0,
    );
    let thread = social.thread(&pool.npcs[0].id).expect("message arrived");
    assert_eq!(thread.messages.len(), 1);
    assert!(social.has_unread_dms);

    // ...but never piles onto an unread conversation.
    run_proactive_dms(
        &mut social, &pool, &career, "Starry 1", &clock, &mut narrator, &mut rng, 1.0,
    );
    assert_eq!(social.thread(&pool.npcs[0].id).unwrap().messages.len(), 1);
}
