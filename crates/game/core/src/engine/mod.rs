//! Operation routing and execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`Session`]. Every
//! mutation, from a blind buy to a full reset, flows through the same
//! `execute()` path: pre_validate → apply → post_validate, followed by a
//! whole-grid invariant check. A failed operation leaves the session's
//! gameplay state untouched.

mod errors;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionTransition};
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::Session;

/// Complete outcome of a successful operation: the advisory events the
/// presentation layer may react to.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExecutionOutcome {
    pub events: Vec<GameEvent>,
}

/// Engine that owns mutation of a session for the duration of one call.
pub struct GameEngine<'a> {
    state: &'a mut Session,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut Session) -> Self {
        Self { state }
    }

    /// Executes an operation by routing it through the transition pipeline.
    ///
    /// The nonce advances on every attempt, success or failure, so a draw
    /// blocked by a full grid does not pin every later draw to the same
    /// definition. Gameplay state (items, balance, collection, radio) only
    /// changes on success.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.state.nonce += 1;

        let mut events = Vec::new();
        match action {
            Action::Buy(op) => {
                run(op, self.state, &env, &mut events).map_err(ExecuteError::Buy)?
            }
            Action::Sell(op) => {
                run(op, self.state, &env, &mut events).map_err(ExecuteError::Sell)?
            }
            Action::Move(op) => {
                run(op, self.state, &env, &mut events).map_err(ExecuteError::Move)?
            }
            Action::Rotate(op) => {
                run(op, self.state, &env, &mut events).map_err(ExecuteError::Rotate)?
            }
            Action::Combine(op) => {
                run(op, self.state, &env, &mut events).map_err(ExecuteError::Combine)?
            }
            Action::Fulfill(op) => {
                run(op, self.state, &env, &mut events).map_err(ExecuteError::Fulfill)?
            }
            Action::Reset(op) => {
                run(op, self.state, &env, &mut events).map_err(ExecuteError::Reset)?
            }
        }

        let config = env.config()?.game_config();
        self.state.check_invariants(&config)?;

        Ok(ExecutionOutcome { events })
    }
}

/// Runs one operation through the three-phase pipeline, tagging errors with
/// the phase that produced them.
fn run<T: ActionTransition>(
    op: &T,
    state: &mut Session,
    env: &GameEnv<'_>,
    events: &mut Vec<GameEvent>,
) -> Result<(), TransitionPhaseError<T::Error>> {
    op.pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;
    op.apply(state, env, events)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;
    op.post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;
    Ok(())
}
