/// An agent for hire. Skill feeds the audition-pool bonus; the hire threshold
/// gates who will even take the player's call.
#[derive(Debug, Clone, Copy)]
pub struct AgentProfile {
    pub name: &'static str,
    pub commission: f64,
    pub skill: i32,
    pub description: &'static str,
    pub hire_threshold: i32,
}

pub static AGENTS_FOR_HIRE: &[AgentProfile] = &[
    AgentProfile {
        name: "Sloppy Steve",
        commission: 0.20,
        skill: 20,
        description: "Takes anyone. Gets you commercials.",
        hire_threshold: 0,
    },
    AgentProfile {
        name: "Brenda Miles",
        commission: 0.15,
        skill: 50,
        description: "Decent connections. Can land you TV roles.",
        hire_threshold: 20,
    },
    AgentProfile {
        name: "Ari Goldwyn",
        commission: 0.10,
        skill: 85,
        description: "The best in the business. Works only with stars.",
        hire_threshold: 50,
    },
];

pub fn by_name(name: &str) -> Option<&'static AgentProfile> {
    AGENTS_FOR_HIRE.iter().find(|a| a.name == name)
}

/// Agents willing to represent a player at the given fame level.
pub fn available_for(fame: i32) -> impl Iterator<Item = &'static AgentProfile> {
    AGENTS_FOR_HIRE
        .iter()
        .filter(move |a| fame >= a.hire_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn better_agents_take_smaller_cuts() {
        let commissions: Vec<f64> = AGENTS_FOR_HIRE.iter().map(|a| a.commission).collect();
        assert!(commissions.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn thresholds_gate_the_roster() {
        assert_eq!(available_for(0).count(), 1);
        assert_eq!(available_for(20).count(), 2);
        assert_eq!(available_for(80).count(), 3);
    }
}
