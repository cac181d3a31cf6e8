use crate::action::{ActionTransition, DRAW_BUY};
use crate::env::{GameEnv, OracleError, compute_seed};
use crate::event::GameEvent;
use crate::grid;
use crate::state::{DefinitionId, PlacedItem, Session};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuyError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("insufficient funds: balance {balance} is below the buy cost {cost}")]
    InsufficientFunds { balance: u32, cost: u32 },

    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("no free {width}x{height} slot for {definition}")]
    GridFull {
        definition: DefinitionId,
        width: u8,
        height: u8,
    },
}

/// Blind purchase: pay the flat cost for a uniformly random catalog item.
///
/// The grid-full case blocks the purchase entirely, funds or not: the draw
/// happens first, and if the drawn footprint has no free slot the operation
/// fails with no deduction and no item. The definition drawn is a pure
/// function of the session seed and nonce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuyAction;

impl ActionTransition for BuyAction {
    type Error = BuyError;

    fn pre_validate(&self, state: &Session, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let config = env.config()?.game_config();
        if state.balance < config.buy_cost {
            return Err(BuyError::InsufficientFunds {
                balance: state.balance,
                cost: config.buy_cost,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut Session,
        env: &GameEnv<'_>,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), Self::Error> {
        let config = env.config()?.game_config();
        let catalog = env.catalog()?;
        let rng = env.rng()?;

        if state.balance < config.buy_cost {
            return Err(BuyError::InsufficientFunds {
                balance: state.balance,
                cost: config.buy_cost,
            });
        }

        let count = catalog.definition_count();
        if count == 0 {
            return Err(BuyError::EmptyCatalog);
        }
        let seed = compute_seed(state.game_seed, state.nonce, DRAW_BUY);
        let definition = catalog
            .definition_at(rng.pick_index(seed, count))
            .ok_or(BuyError::EmptyCatalog)?;

        let slot = grid::find_empty_slot(
            &state.inventory,
            definition.width,
            definition.height,
            &config,
        )
        .ok_or_else(|| BuyError::GridFull {
            definition: definition.id.clone(),
            width: definition.width,
            height: definition.height,
        })?;

        state.balance -= config.buy_cost;
        let id = state.allocate_item_id();
        state.inventory.push(PlacedItem {
            id,
            position: slot,
            width: definition.width,
            height: definition.height,
            name: definition.name.clone(),
            sprite: definition.sprite.clone(),
            price: definition.base_price,
            definition: definition.id.clone(),
            premium: false,
        });
        events.push(GameEvent::ItemBought { item: id, at: slot });

        if state.collection.unlock(definition.id.clone()) {
            events.push(GameEvent::NewDiscovery(definition.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testkit::{TestWorld, def};
    use crate::env::ItemCategory;
    use crate::state::Position;

    #[test]
    fn buy_places_one_item_and_deducts_the_cost() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();
        let mut events = Vec::new();

        let action = BuyAction;
        action.pre_validate(&session, &world.env()).unwrap();
        action
            .apply(&mut session, &world.env(), &mut events)
            .unwrap();

        assert_eq!(session.balance, 450);
        assert_eq!(session.inventory.len(), 1);
        let item = session.inventory.items().first().unwrap();
        assert_eq!(item.position, Position::ORIGIN);
        assert_eq!(item.price, 35);
        assert!(!item.premium);
        assert!(matches!(events[0], GameEvent::ItemBought { .. }));
        assert!(matches!(events[1], GameEvent::NewDiscovery(_)));
    }

    #[test]
    fn discovery_fires_only_on_first_acquisition() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();

        for _ in 0..2 {
            let mut events = Vec::new();
            BuyAction
                .apply(&mut session, &world.env(), &mut events)
                .unwrap();
            session.nonce += 1;
        }

        assert_eq!(session.collection.len(), 1);
        assert_eq!(session.inventory.len(), 2);
    }

    #[test]
    fn insufficient_funds_fails_with_no_state_change() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();
        session.balance = 40;

        let err = BuyAction.pre_validate(&session, &world.env()).unwrap_err();
        assert!(matches!(err, BuyError::InsufficientFunds { balance: 40, cost: 50 }));
        assert!(session.inventory.is_empty());
        assert_eq!(session.balance, 40);
    }

    #[test]
    fn grid_full_fails_without_deduction() {
        // A 8x8-filling footprint leaves no second slot.
        let world = TestWorld::new(vec![def("vault", 8, 8, 400, ItemCategory::Utility)]);
        let mut session = world.session();
        let mut events = Vec::new();
        BuyAction
            .apply(&mut session, &world.env(), &mut events)
            .unwrap();
        session.nonce += 1;

        let mut events = Vec::new();
        let err = BuyAction
            .apply(&mut session, &world.env(), &mut events)
            .unwrap_err();
        assert!(matches!(err, BuyError::GridFull { .. }));
        assert_eq!(session.balance, 450);
        assert_eq!(session.inventory.len(), 1);
        assert!(events.is_empty());
    }
}
