use std::fmt;

use crate::simulation::stats::StatEffects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    Personal,
    Career,
    Social,
    Mischief,
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityCategory::Personal => "Personal",
            ActivityCategory::Career => "Career",
            ActivityCategory::Social => "Social",
            ActivityCategory::Mischief => "Mischief",
        };
        write!(f, "{}", label)
    }
}

/// A weekly pastime. Cost is deducted up front; the effect record flows
/// through the single clamped apply routine.
#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ActivityCategory,
    pub description: &'static str,
    pub cost: i64,
    pub effects: StatEffects,
    pub log_message: &'static str,
}

const fn effects(health: i32, happiness: i32, fame: i32, reputation: i32, acting_skill: i32) -> StatEffects {
    StatEffects {
        health,
        happiness,
        fame,
        reputation,
        acting_skill,
    }
}

pub static ACTIVITIES: &[Activity] = &[
    Activity {
        id: "fitness",
        name: "Go to the Gym",
        category: ActivityCategory::Personal,
        description: "Stay in shape for demanding roles.",
        cost: 50,
        effects: effects(5, 2, 0, 0, 0),
        log_message: "You hit the gym and feel great.",
    },
    Activity {
        id: "meditate",
        name: "Meditate",
        category: ActivityCategory::Personal,
        description: "Clear your mind and reduce stress.",
        cost: 0,
        effects: effects(2, 5, 0, 0, 0),
        log_message: "A moment of peace brings you clarity.",
    },
    Activity {
        id: "shopping",
        name: "Go Shopping",
        category: ActivityCategory::Personal,
        description: "Retail therapy can be a good pick-me-up.",
        cost: 500,
        effects: effects(0, 7, 0, 0, 0),
        log_message: "You bought some nice things.",
    },
    Activity {
        id: "acting_class",
        name: "Take Acting Class",
        category: ActivityCategory::Career,
        description: "Hone your craft with a professional coach.",
        cost: 250,
        effects: effects(0, 0, 0, 0, 3),
        log_message: "The acting class was insightful. Your skill improves.",
    },
    Activity {
        id: "networking",
        name: "Network",
        category: ActivityCategory::Career,
        description: "Mingle with industry insiders. Might lead to opportunities.",
        cost: 100,
        effects: effects(0, 0, 0, 2, 0),
        log_message: "You made a few connections at an industry event.",
    },
    Activity {
        id: "call_family",
        name: "Call Family",
        category: ActivityCategory::Social,
        description: "Stay grounded and remember where you came from.",
        cost: 0,
        effects: effects(0, 5, 0, 0, 0),
        log_message: "You had a nice chat with your family.",
    },
    Activity {
        id: "charity",
        name: "Attend Charity Gala",
        category: ActivityCategory::Social,
        description: "Be seen supporting a good cause.",
        cost: 1000,
        effects: effects(0, 0, 1, 5, 0),
        log_message: "Your appearance at the charity gala was well-received.",
    },
    Activity {
        id: "twitter_beef",
        name: "Start Twitter Beef",
        category: ActivityCategory::Mischief,
        description: "Stir up drama online for a quick fame boost. Risky!",
        cost: 0,
        effects: effects(0, 0, 5, -10, 0),
        log_message: "Your controversial tweets are trending... for better or worse.",
    },
    Activity {
        id: "leak_rumor",
        name: "Leak a Rumor",
        category: ActivityCategory::Mischief,
        description: "Anonymously leak a rumor about a rival.",
        cost: 0,
        effects: effects(0, 0, 2, -5, 0),
        log_message: "A juicy rumor is spreading, and no one knows it came from you.",
    },
];

pub fn by_id(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_activity_id_is_unique() {
        let mut ids: Vec<&str> = ACTIVITIES.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ACTIVITIES.len());
    }

    #[test]
    fn lookup_finds_known_entries() {
        assert_eq!(by_id("fitness").unwrap().cost, 50);
        assert!(by_id("unknown").is_none());
    }
}
