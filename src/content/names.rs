use rand::seq::SliceRandom;
use rand::Rng;

/// Word lists used to synthesize project titles for auditions, NPC castings,
/// and award-show filler nominations.
pub const PROJECT_ADJECTIVES: &[&str] = &[
    "Rising", "Last", "Eternal", "Silent", "Forgotten", "Cosmic", "Midnight",
];
pub const PROJECT_NOUNS: &[&str] = &[
    "Echoes", "Shadows", "Legacy", "Gambit", "Sunrise", "Voyage", "Reckoning",
];

/// The pool of names the world's actors and directors are drawn from. The NPC
/// roster is capped by the length of this list; every name is used at most once.
pub const NPC_NAMES: &[&str] = &[
    "Alex Ray", "Jordan Smith", "Casey Bell", "Taylor Kim", "Morgan Lee", "Sam Rivera",
    "Liam Garcia", "Olivia Chen", "Noah Patel", "Emma Schmidt", "Mason Williams", "Ava Nguyen",
    "Elijah Martinez", "Sophia Rodriguez", "James Johnson", "Isabella Brown", "William Davis",
    "Mia Miller", "Ava Chen", "Leo Rodriguez", "Sofia Rossi", "Kenji Tanaka", "Isabelle Dubois",
    "Marcus Thorne", "Elena Petrova",
];

pub const PLAYER_GENDERS: &[&str] = &["Male", "Female", "Non-binary"];

pub const BIRTHPLACES: &[&str] = &[
    "Los Angeles, USA",
    "New York City, USA",
    "Chicago, USA",
    "London, UK",
    "Manchester, UK",
    "Edinburgh, UK",
];

/// Synthesize a two-word project title from the adjective/noun lists.
pub fn random_title(rng: &mut impl Rng) -> String {
    let adjective = PROJECT_ADJECTIVES
        .choose(rng)
        .copied()
        .unwrap_or("Rising");
    let noun = PROJECT_NOUNS.choose(rng).copied().unwrap_or("Echoes");
    format!("{} {}", adjective, noun)
}

/// Starting stage name for a freshly created player, e.g. "Starry 421".
pub fn random_stage_name(rng: &mut impl Rng) -> String {
    format!("Starry {}", rng.gen_range(100..1000))
}

/// Derive a social media handle from a display name.
pub fn handle_for(name: &str) -> String {
    let mut handle: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    handle.truncate(15);
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn titles_combine_both_word_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        let title = random_title(&mut rng);
        let mut parts = title.split(' ');
        assert!(PROJECT_ADJECTIVES.contains(&parts.next().unwrap()));
        assert!(PROJECT_NOUNS.contains(&parts.next().unwrap()));
    }

    #[test]
    fn handles_are_lowercase_and_bounded() {
        let handle = handle_for("Starry 421 The Magnificent");
        assert!(handle.len() <= 15);
        assert_eq!(handle, handle.to_lowercase());
        assert!(!handle.contains(' '));
    }
}
