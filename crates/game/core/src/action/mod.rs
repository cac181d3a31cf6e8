//! Gameplay operations and their validate/apply pipeline.
//!
//! Every mutation of a [`Session`] is one of the seven operations here. Each
//! operation is a small struct implementing [`ActionTransition`]; the engine
//! routes the [`Action`] enum through the three-phase pipeline
//! (`pre_validate` → `apply` → `post_validate`) and wraps per-operation
//! errors with phase information.
//!
//! Failures are expected gameplay outcomes (not enough money, grid full,
//! blocked cell, wrong barter item), so every operation reports them through
//! its typed `Error` instead of panicking, and a failed operation leaves the
//! session untouched.
mod buy;
mod combine;
mod movement;
mod radio;
mod reset;
mod rotate;
mod sell;
#[cfg(test)]
pub(crate) mod testkit;

pub use buy::{BuyAction, BuyError};
pub use combine::{CombineAction, CombineError};
pub use movement::{MoveAction, MoveError};
pub use radio::{FulfillOrderAction, FulfillOrderError, OrderDrawError, draw_order};
pub use reset::{ResetAction, ResetError};
pub use rotate::{RotateAction, RotateError};
pub use sell::{SellAction, SellError};

use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::Session;

/// Seed-derivation context for the blind purchase draw.
pub(crate) const DRAW_BUY: u32 = 0;
/// Seed-derivation context for the radio-order target draw.
pub(crate) const DRAW_ORDER: u32 = 1;

/// Defines how a concrete operation mutates the session.
///
/// `pre_validate` must not mutate; `apply` performs the mutation and pushes
/// advisory events; `post_validate` re-checks operation-local expectations
/// against the mutated state. The engine additionally verifies the global
/// grid invariants after every apply.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions against the state **before** mutation.
    fn pre_validate(&self, _state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the operation, mutating the session in place.
    fn apply(
        &self,
        state: &mut Session,
        env: &GameEnv<'_>,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), Self::Error>;

    /// Validates post-conditions against the state **after** mutation.
    fn post_validate(&self, _state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level enum of every operation the facade can request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Blind purchase of a random catalog item.
    Buy(BuyAction),
    /// Manual sale of one placed item.
    Sell(SellAction),
    /// Reposition an item to a new top-left cell.
    Move(MoveAction),
    /// Swap an item's width and height in place.
    Rotate(RotateAction),
    /// Merge the dragged item into a same-type target.
    Combine(CombineAction),
    /// Hand an item over for the active radio order.
    Fulfill(FulfillOrderAction),
    /// Replace the whole session with defaults.
    Reset(ResetAction),
}
