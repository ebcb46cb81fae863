use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Global resource tracking the simulation timeline. One tick = one week.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    pub week: u32,
    pub age: u32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self { week: 1, age: 18 }
    }
}

impl GameClock {
    /// Advance one week. Returns true when the week boundary is a birthday.
    pub fn advance(&mut self) -> bool {
        self.week += 1;
        if self.week > 1 && (self.week - 1) % 52 == 0 {
            self.age += 1;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birthday_every_52_weeks() {
        let mut clock = GameClock::default();
        let mut birthdays = 0;
        for _ in 0..104 {
            if clock.advance() {
                birthdays += 1;
            }
        }
        assert_eq!(clock.week, 105);
        assert_eq!(birthdays, 2);
        assert_eq!(clock.age, 20);
    }

    #[test]
    fn first_advance_is_not_a_birthday() {
        let mut clock = GameClock::default();
        assert!(!clock.advance());
        assert_eq!(clock.week, 2);
        assert_eq!(clock.age, 18);
    }
}
