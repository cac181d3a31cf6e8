use crate::action::{ActionTransition, DRAW_ORDER};
use crate::economy;
use crate::env::{GameEnv, OracleError, compute_seed};
use crate::event::GameEvent;
use crate::state::{DefinitionId, ItemId, RadioOrder, Session};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OrderDrawError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("catalog is empty")]
    EmptyCatalog,
}

/// Draws the next radio order: a uniform catalog pick at the configured
/// payout multiplier.
///
/// Consecutive orders may repeat a target; there is no distinctness rule.
/// Exposed so the facade can restore a missing order when loading an
/// unlocked session saved before its order was posted.
pub fn draw_order(state: &Session, env: &GameEnv<'_>) -> Result<RadioOrder, OrderDrawError> {
    let config = env.config()?.game_config();
    let catalog = env.catalog()?;
    let rng = env.rng()?;

    let count = catalog.definition_count();
    if count == 0 {
        return Err(OrderDrawError::EmptyCatalog);
    }
    let seed = compute_seed(state.game_seed, state.nonce, DRAW_ORDER);
    let target = catalog
        .definition_at(rng.pick_index(seed, count))
        .ok_or(OrderDrawError::EmptyCatalog)?;

    Ok(RadioOrder {
        target: target.id.clone(),
        target_sprite: target.sprite.clone(),
        target_name: target.name.clone(),
        price_multiplier: config.radio_price_multiplier,
    })
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FulfillOrderError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("radio is not unlocked yet")]
    RadioLocked,

    #[error("no order is currently active")]
    NoActiveOrder,

    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error("item {item} does not match the order target {expected}")]
    WrongItem {
        item: ItemId,
        expected: DefinitionId,
    },

    #[error("failed to post the follow-up order: {0}")]
    OrderDraw(#[from] OrderDrawError),
}

/// Hands one item over for the active order.
///
/// The payout stacks the order multiplier on top of the regular sell
/// valuation, so a premium item fulfilling an order earns
/// `base x premium_multiplier x order multiplier`. Fulfillment always posts
/// a replacement order; the queue depth is 0 or 1, never more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FulfillOrderAction {
    pub item: ItemId,
}

impl FulfillOrderAction {
    fn check(&self, state: &Session) -> Result<(), FulfillOrderError> {
        if !state.radio.unlocked {
            return Err(FulfillOrderError::RadioLocked);
        }
        let order = state
            .radio
            .order
            .as_ref()
            .ok_or(FulfillOrderError::NoActiveOrder)?;
        let item = state
            .inventory
            .get(self.item)
            .ok_or(FulfillOrderError::ItemNotFound(self.item))?;
        if item.sprite != order.target_sprite {
            return Err(FulfillOrderError::WrongItem {
                item: self.item,
                expected: order.target.clone(),
            });
        }
        Ok(())
    }
}

impl ActionTransition for FulfillOrderAction {
    type Error = FulfillOrderError;

    fn pre_validate(&self, state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.check(state)
    }

    fn apply(
        &self,
        state: &mut Session,
        env: &GameEnv<'_>,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), Self::Error> {
        self.check(state)?;
        let config = env.config()?.game_config();

        let multiplier = state
            .radio
            .order
            .as_ref()
            .map(|order| order.price_multiplier)
            .ok_or(FulfillOrderError::NoActiveOrder)?;
        let item = state
            .inventory
            .remove(self.item)
            .ok_or(FulfillOrderError::ItemNotFound(self.item))?;

        let payout = economy::sell_price(&item, &config).saturating_mul(multiplier);
        state.balance = state.balance.saturating_add(payout);
        events.push(GameEvent::OrderFulfilled {
            item: self.item,
            payout,
        });

        // Replace unconditionally; the old order is gone either way.
        let next = draw_order(state, env)?;
        state.radio.order = Some(next.clone());
        events.push(GameEvent::OrderPosted(next));

        Ok(())
    }

    fn post_validate(&self, state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.radio.order.is_none() {
            return Err(FulfillOrderError::NoActiveOrder);
        }
        Ok(())
    }
}
