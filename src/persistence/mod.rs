pub mod repository;
pub mod sqlite;

pub use repository::{PersistenceError, SaveRepository};
pub use sqlite::SaveDb;
