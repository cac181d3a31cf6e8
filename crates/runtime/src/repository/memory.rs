//! In-memory StateRepository implementation for tests and local runs.

use std::sync::RwLock;

use stockpile_core::Session;

use crate::repository::{RepositoryError, Result, StateRepository};

/// In-memory implementation of StateRepository.
#[derive(Default)]
pub struct InMemoryStateRepository {
    session: RwLock<Option<Session>>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an existing save already present.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl StateRepository for InMemoryStateRepository {
    fn save(&self, session: &Session) -> Result<()> {
        let mut slot = self
            .session
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        let slot = self
            .session
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn delete(&self) -> Result<()> {
        let mut slot = self
            .session
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }
}
