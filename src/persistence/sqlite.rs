use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::core::serialization::{load_state_from_json, save_state_to_json, SaveState};
use crate::persistence::repository::{PersistenceError, SaveRepository};

const SAVE_SCHEMA_VERSION: i64 = 1;

const SAVE_DB_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS save_meta (
  id INTEGER PRIMARY KEY CHECK (id = 1),
  schema_version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS save_slot (
  id INTEGER PRIMARY KEY CHECK (id = 1),
  week INTEGER NOT NULL,
  payload TEXT NOT NULL
);
"#;

/// Single-slot save store on SQLite. The snapshot itself is stored as one
/// JSON payload; the surrounding table carries just enough metadata to
/// version the schema and list the save without decoding it.
pub struct SaveDb {
    conn: Connection,
}

impl SaveDb {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// In-memory store, used by tests and throwaway runs.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, PersistenceError> {
        conn.execute_batch(SAVE_DB_SCHEMA)?;
        conn.execute(
            "INSERT OR IGNORE INTO save_meta (id, schema_version) VALUES (1, ?1)",
            params![SAVE_SCHEMA_VERSION],
        )?;
        Ok(Self { conn })
    }

    /// Week number of the stored save, without decoding the payload.
    pub fn saved_week(&self) -> Result<Option<u32>, PersistenceError> {
        let week: Option<i64> = self
            .conn
            .query_row("SELECT week FROM save_slot WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(week.map(|w| w as u32))
    }

    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.conn.execute("DELETE FROM save_slot", [])?;
        Ok(())
    }
}

impl SaveRepository for SaveDb {
    fn load(&mut self) -> Result<Option<SaveState>, PersistenceError> {
        let payload: Option<String> = self
            .conn
            .query_row("SELECT payload FROM save_slot WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;
        let Some(payload) = payload else {
            return Ok(None);
        };
        match load_state_from_json(&payload) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                // Corrupt payloads are dropped so the next run starts clean.
                log::warn!("discarding corrupt save: {}", err);
                self.clear()?;
                Ok(None)
            }
        }
    }

    fn save(&mut self, state: &SaveState) -> Result<(), PersistenceError> {
        let payload = save_state_to_json(state)?;
        self.conn.execute(
            "INSERT INTO save_slot (id, week, payload) VALUES (1, ?1, ?2)
             ON CONFLICT(id) DO UPDATE SET week = excluded.week, payload = excluded.payload",
            params![i64::from(state.clock.week), payload],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::serialization::SaveState;
    use crate::simulation::career::Career;
    use crate::simulation::events::ScheduledEvents;
    use crate::simulation::journal::Journal;
    use crate::simulation::npcs::NpcPool;
    use crate::simulation::profile::PlayerProfile;
    use crate::simulation::session::GameStatus;
    use crate::simulation::social::SocialState;
    use crate::simulation::stardb::StarDb;
    use crate::simulation::stats::PlayerStats;
    use crate::simulation::time::GameClock;
    use crate::simulation::wealth::Wealth;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_state(week: u32) -> SaveState {
        let mut rng = StdRng::seed_from_u64(33);
        SaveState {
            version: 1,
            seed: 33,
            clock: GameClock { week, age: 18 },
            profile: PlayerProfile::default(),
            stats: PlayerStats::default(),
            wealth: Wealth::default(),
            career: Career::default(),
            social: SocialState::default(),
            npcs: NpcPool::populate(&mut rng),
            scheduled_events: ScheduledEvents::default(),
            stardb: StarDb::default(),
            journal: Journal::default(),
            status: GameStatus::default(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut db = SaveDb::open_in_memory().unwrap();
        assert!(db.load().unwrap().is_none());

        let state = sample_state(12);
        db.save(&state).unwrap();
        assert_eq!(db.saved_week().unwrap(), Some(12));

        let loaded = db.load().unwrap().expect("slot should be filled");
        assert_eq!(loaded, state);
    }

    #[test]
    fn later_saves_overwrite_the_slot() {
        let mut db = SaveDb::open_in_memory().unwrap();
        db.save(&sample_state(3)).unwrap();
        db.save(&sample_state(4)).unwrap();
        assert_eq!(db.saved_week().unwrap(), Some(4));
    }

    #[test]
    fn corrupt_payload_is_discarded_not_fatal() {
        let mut db = SaveDb::open_in_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO save_slot (id, week, payload) VALUES (1, 9, 'not json')",
                [],
            )
            .unwrap();
        assert!(db.load().unwrap().is_none());
        // The slot was cleared along the way.
        assert_eq!(db.saved_week().unwrap(), None);
    }

    #[test]
    fn survives_reopening_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascent.db");
        {
            let mut db = SaveDb::open(&path).unwrap();
            db.save(&sample_state(7)).unwrap();
        }
        let mut db = SaveDb::open(&path).unwrap();
        let loaded = db.load().unwrap().expect("save should persist");
        assert_eq!(loaded.clock.week, 7);
    }
}
