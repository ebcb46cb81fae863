use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use hollywood_ascent::core::world::PartnerAction;
use hollywood_ascent::narrative::CannedNarrator;
use hollywood_ascent::persistence::{SaveDb, SaveRepository};
use hollywood_ascent::simulation::career::RoleAction;
use hollywood_ascent::simulation::social::PostCategory;
use hollywood_ascent::{ActionError, Game};

const COMMANDS: &str = "Commands: status | week [n] | log | auditions | apply <n> | roles | act <role> <practice|develop|publicity> | crew <role> | quit-role <role> | activities | do <id> | shop | buy <id> | agents | hire <name> | fire | colleagues | dates | date <n> | partner <fancy|night|talk> | post | dms | save | quit";

fn main() {
    env_logger::init();

    let (save_path, seed) = parse_args(env::args().collect());
    println!("Hollywood Ascent (debug console)");

    let repo: Box<dyn SaveRepository> = match SaveDb::open(&save_path) {
        Ok(db) => Box::new(db),
        Err(err) => {
            eprintln!("Failed to open save DB at {}: {}", save_path.display(), err);
            std::process::exit(1);
        }
    };
    let mut game = Game::load_or_new(seed, Box::new(CannedNarrator::new()), repo);
    println!(
        "Playing as {} (week {}, age {}).",
        game.profile().name,
        game.clock().week,
        game.clock().age
    );
    println!("{}", COMMANDS);

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            break;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or("").to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" => break,
            "help" => println!("{}", COMMANDS),
            "status" => print_status(&game),
            "week" => {
                let count = parts
                    .next()
                    .and_then(|raw| raw.parse::<u32>().ok())
                    .unwrap_or(1);
                for _ in 0..count {
                    match game.advance_week() {
                        Ok(snapshot) => {
                            println!(
                                "Week {} | age {} | cash ${} (income {}, expenses {})",
                                snapshot.week,
                                snapshot.age,
                                snapshot.cash,
                                snapshot.income,
                                snapshot.expenses
                            );
                            for line in snapshot.events.iter().rev() {
                                println!("  {}", line);
                            }
                            if let Some(reason) = snapshot.game_over {
                                println!(
                                    "Career over: {} You survived {} weeks.",
                                    reason.message(),
                                    snapshot.week
                                );
                                break;
                            }
                        }
                        Err(err) => {
                            println!("{}", err);
                            break;
                        }
                    }
                }
            }
            "log" => {
                for line in game.journal().latest(15) {
                    println!("{}", line);
                }
            }
            "auditions" => {
                for (i, audition) in game.career().available_auditions.iter().enumerate() {
                    println!(
                        "[{}] \"{}\" - {} {} {} role, dir. {}, ${}/wk for {} wks, difficulty {}{}",
                        i,
                        audition.title,
                        audition.genre,
                        audition.project_type,
                        audition.tier,
                        audition.director,
                        audition.weekly_pay,
                        audition.weeks,
                        audition.difficulty,
                        if audition.backend_points > 0.0 {
                            format!(", backend {:.1}%", audition.backend_points * 100.0)
                        } else {
                            String::new()
                        }
                    );
                }
            }
            "apply" => match parts.next().and_then(|raw| raw.parse::<usize>().ok()) {
                Some(index) => {
                    let id = game
                        .career()
                        .available_auditions
                        .get(index)
                        .map(|a| a.id.clone());
                    match id {
                        Some(id) => report(game.apply_for_audition(&id)),
                        None => println!("No audition #{}", index),
                    }
                }
                None => println!("Usage: apply <n>"),
            },
            "roles" => {
                for (i, role) in game.career().current_roles.iter().enumerate() {
                    println!(
                        "[{}] \"{}\" ({} {}) - {} wks left, perf {}, pop {}, actions {}/{}",
                        i,
                        role.title,
                        role.genre,
                        role.tier,
                        role.weeks_left,
                        role.performance_score,
                        role.project_popularity,
                        role.weekly_actions_taken,
                        game.tuning().weekly_role_action_cap
                    );
                }
            }
            "act" => {
                let index = parts.next().and_then(|raw| raw.parse::<usize>().ok());
                let action = match parts.next() {
                    Some("practice") => Some(RoleAction::Practice),
                    Some("develop") => Some(RoleAction::Develop),
                    Some("publicity") => Some(RoleAction::Publicity),
                    _ => None,
                };
                match (index, action) {
                    (Some(index), Some(action)) => report(game.role_action(index, action)),
                    _ => println!("Usage: act <role> <practice|develop|publicity>"),
                }
            }
            "crew" => match parts.next().and_then(|raw| raw.parse::<usize>().ok()) {
                Some(index) => run_crew_interaction(&mut game, index),
                None => println!("Usage: crew <role>"),
            },
            "quit-role" => match parts.next().and_then(|raw| raw.parse::<usize>().ok()) {
                Some(index) => report(game.quit_role(index)),
                None => println!("Usage: quit-role <role>"),
            },
            "activities" => {
                for activity in hollywood_ascent::data::activities::ACTIVITIES {
                    println!(
                        "{:<14} {} (${}) - {}",
                        activity.id, activity.name, activity.cost, activity.description
                    );
                }
            }
            "do" => match parts.next() {
                Some(id) => report(game.perform_activity(id)),
                None => println!("Usage: do <activity id>"),
            },
            "shop" => {
                for item in hollywood_ascent::data::shop::SHOP_ITEMS {
                    let owned = if game.wealth().owns(item.id) { " [owned]" } else { "" };
                    println!(
                        "{:<18} {} - ${} (+{} upkeep/wk){}",
                        item.id, item.name, item.price, item.weekly_upkeep, owned
                    );
                }
            }
            "buy" => match parts.next() {
                Some(id) => report(game.buy_item(id)),
                None => println!("Usage: buy <item id>"),
            },
            "agents" => {
                for agent in hollywood_ascent::data::agents::AGENTS_FOR_HIRE {
                    println!(
                        "{} - {:.0}% commission, skill {}. {}",
                        agent.name,
                        agent.commission * 100.0,
                        agent.skill,
                        agent.description
                    );
                }
            }
            "hire" => {
                let name: Vec<&str> = parts.collect();
                if name.is_empty() {
                    println!("Usage: hire <agent name>");
                } else {
                    report(game.hire_agent(&name.join(" ")));
                }
            }
            "fire" => report(game.fire_agent()),
            "colleagues" => {
                for relationship in game.social().significant_relationships() {
                    let name = game
                        .npcs()
                        .get(&relationship.npc_id)
                        .map(|n| n.name.clone())
                        .unwrap_or_else(|| relationship.npc_id.clone());
                    println!(
                        "{} - {} (score {})",
                        name, relationship.status, relationship.score
                    );
                }
            }
            "dates" => {
                if game.social().dating_pool.is_empty() {
                    match game.request_dating_profiles(false) {
                        Ok(count) => println!("Found {} potential matches.", count),
                        Err(err) => println!("{}", err),
                    }
                }
                for (i, profile) in game.social().dating_pool.iter().enumerate() {
                    println!(
                        "[{}] {}, {} - {}. {}",
                        i, profile.name, profile.age, profile.profession, profile.bio
                    );
                }
            }
            "date" => match parts.next().and_then(|raw| raw.parse::<usize>().ok()) {
                Some(index) => {
                    let id = game.social().dating_pool.get(index).map(|p| p.id.clone());
                    match id {
                        Some(id) => report(game.go_on_date(&id)),
                        None => println!("No profile #{}", index),
                    }
                }
                None => println!("Usage: date <n>"),
            },
            "partner" => {
                let action = match parts.next() {
                    Some("fancy") => Some(PartnerAction::FancyDate),
                    Some("night") => Some(PartnerAction::NightIn),
                    Some("talk") => Some(PartnerAction::DeepTalk),
                    _ => None,
                };
                match action {
                    Some(action) => report(game.partner_action(action)),
                    None => println!("Usage: partner <fancy|night|talk>"),
                }
            }
            "post" => report(game.create_post(PostCategory::Promo)),
            "dms" => {
                for thread in &game.social().dms {
                    let name = game
                        .npcs()
                        .get(&thread.npc_id)
                        .map(|n| n.name.clone())
                        .unwrap_or_else(|| thread.npc_id.clone());
                    let unread = if thread.is_read { "" } else { " (new)" };
                    println!("{}{}:", name, unread);
                    for message in thread.messages.iter().rev().take(3).rev() {
                        let speaker = if message.from_player { "you" } else { "them" };
                        println!("  [{}] {}", speaker, message.text);
                    }
                }
            }
            "save" => {
                if game.save() {
                    println!("Saved.");
                } else {
                    println!("Save failed (see log).");
                }
            }
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }
}

fn print_status(game: &Game) {
    let stats = game.stats();
    let wealth = game.wealth();
    println!(
        "{}, age {} (week {}) - health {}, happiness {}, skill {}, fame {}, reputation {}",
        game.profile().name,
        game.clock().age,
        game.clock().week,
        stats.health,
        stats.happiness,
        stats.acting_skill,
        stats.fame,
        stats.reputation
    );
    println!(
        "Cash ${} | income {} | expenses {} | {} roles | {} followers",
        wealth.cash,
        wealth.income,
        wealth.expenses,
        game.career().current_roles.len(),
        game.social().followers
    );
    if let Some(reason) = game.status().reason() {
        println!("Career over: {}", reason.message());
    }
}

/// Run one generator-backed crew interaction: pick the first cast member and
/// apply the first offered choice.
fn run_crew_interaction(game: &mut Game, role_index: usize) {
    let npc_id = match game
        .career()
        .current_roles
        .get(role_index)
        .and_then(|role| role.cast.get(1).or_else(|| role.cast.first()))
    {
        Some(id) => id.clone(),
        None => {
            println!("No role #{}", role_index);
            return;
        }
    };
    match game.crew_interaction(role_index, &npc_id) {
        Ok(scene) => {
            println!("{}", scene.scenario);
            for (i, choice) in scene.choices.iter().enumerate() {
                println!("  [{}] {}", i, choice.text);
            }
            if let Some(choice) = scene.choices.first() {
                let outcome = choice.outcome.clone();
                report(game.resolve_crew_choice(role_index, &npc_id, &outcome));
            }
        }
        Err(err) => println!("{}", err),
    }
}

fn report(result: Result<(), ActionError>) {
    match result {
        Ok(()) => println!("Done."),
        Err(err) => println!("{}", err),
    }
}

fn parse_args(args: Vec<String>) -> (PathBuf, u64) {
    let mut save_path = PathBuf::from("./ascent_save.db");
    let mut seed = 0x5eed_cafe;

    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--save" => {
                if let Some(path) = iter.next() {
                    save_path = PathBuf::from(path);
                }
            }
            "--seed" => {
                if let Some(raw) = iter.next() {
                    match raw.parse::<u64>() {
                        Ok(parsed) => seed = parsed,
                        Err(_) => eprintln!("Invalid seed: {}", raw),
                    }
                }
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
    }
    (save_path, seed)
}
