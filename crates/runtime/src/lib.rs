//! Host-facing runtime for the stockpile trading game.
//!
//! Wires the pure rules engine to the outside world: the [`Game`] facade
//! owns the live session, executes operations through the engine, saves
//! after every attempt, and notifies registered observers. Persistence
//! backends implement [`StateRepository`]; [`FileStateRepository`] is the
//! production one.

mod error;
mod game;
mod observer;
mod repository;

pub use error::GameError;
pub use game::{Game, Receipt};
pub use observer::{GameObserver, ObserverRegistry};
pub use repository::{
    FileStateRepository, InMemoryStateRepository, RepositoryError, StateRepository,
};
