//! Error types for the operation execution pipeline.

use crate::action::{
    BuyError, CombineError, FulfillOrderError, MoveError, ResetError, RotateError, SellError,
};
use crate::env::OracleError;
use crate::state::InvariantError;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying operation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an operation through the game engine.
///
/// Every variant is an expected, recoverable gameplay outcome except
/// `Invariant`, which means a rule implementation corrupted the grid and is
/// a bug worth surfacing loudly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("buy failed: {0}")]
    Buy(TransitionPhaseError<BuyError>),

    #[error("sell failed: {0}")]
    Sell(TransitionPhaseError<SellError>),

    #[error("move failed: {0}")]
    Move(TransitionPhaseError<MoveError>),

    #[error("rotate failed: {0}")]
    Rotate(TransitionPhaseError<RotateError>),

    #[error("combine failed: {0}")]
    Combine(TransitionPhaseError<CombineError>),

    #[error("order fulfillment failed: {0}")]
    Fulfill(TransitionPhaseError<FulfillOrderError>),

    #[error("reset failed: {0}")]
    Reset(TransitionPhaseError<ResetError>),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("grid invariant violated after apply: {0}")]
    Invariant(#[from] InvariantError),
}
