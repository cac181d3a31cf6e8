//! Error types surfaced by the game facade.

use stockpile_core::{ExecuteError, OrderDrawError};

use crate::repository::RepositoryError;

/// Anything that can go wrong while driving a game through the facade.
///
/// `Execute` variants are ordinary gameplay rejections (not enough money,
/// blocked cell) that the host surfaces to the player. `Repository` and
/// `OrderDraw` indicate an environment problem.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("persistence error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("failed to draw a radio order: {0}")]
    OrderDraw(#[from] OrderDrawError),
}
