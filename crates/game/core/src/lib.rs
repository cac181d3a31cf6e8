//! Deterministic rules engine for the stockpile trading game.
//!
//! `stockpile-core` owns every gameplay rule: grid placement under the
//! non-overlap constraint, the buy/sell/move/rotate/combine operations, the
//! collection-unlock tracker, and the radio-order barter loop. All state
//! mutation flows through [`engine::GameEngine`]; everything the rules need
//! from the outside world (the item catalog, random draws, tunable config)
//! arrives through the oracle traits in [`env`], so the crate stays pure and
//! replayable.
pub mod action;
pub mod config;
pub mod economy;
pub mod engine;
pub mod env;
pub mod event;
pub mod grid;
pub mod state;

pub use action::{
    Action, ActionTransition, BuyAction, BuyError, CombineAction, CombineError, FulfillOrderAction,
    FulfillOrderError, MoveAction, MoveError, OrderDrawError, ResetAction, ResetError, RotateAction,
    RotateError, SellAction, SellError, draw_order,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    CatalogOracle, ConfigOracle, Env, GameEnv, ItemCategory, ItemDefinition, OracleError, PcgRng,
    RngOracle, compute_seed,
};
pub use event::GameEvent;
pub use grid::GridBox;
pub use state::{
    CollectionState, DefinitionId, Inventory, InvariantError, ItemId, PlacedItem, Position,
    RadioOrder, RadioState, Session,
};
