//! Session persistence.
//!
//! The [`StateRepository`] trait is the seam between the game facade and
//! storage. The facade saves the whole [`Session`] after every successful
//! operation and loads at most one session per slot on startup.

mod file;
mod memory;

pub use file::FileStateRepository;
pub use memory::InMemoryStateRepository;

use stockpile_core::Session;

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("state repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("no user data directory available on this platform")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Storage backend for one save slot.
///
/// `load` returning `Ok(None)` means no save exists yet; the caller starts
/// a fresh session. A save must be readable by a later `load` even if the
/// process dies immediately after `save` returns.
pub trait StateRepository: Send + Sync {
    fn save(&self, session: &Session) -> Result<()>;

    fn load(&self) -> Result<Option<Session>>;

    fn delete(&self) -> Result<()>;
}
