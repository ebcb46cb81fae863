use thiserror::Error;

use crate::core::serialization::SaveState;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("save encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The opaque save/load collaborator. The engine calls `save` at its
/// checkpoints and treats failure as log-and-continue; `load` returning
/// `None` means "start fresh" (no save, or a corrupt one that was discarded).
pub trait SaveRepository: Send {
    fn load(&mut self) -> Result<Option<SaveState>, PersistenceError>;
    fn save(&mut self, state: &SaveState) -> Result<(), PersistenceError>;
}
