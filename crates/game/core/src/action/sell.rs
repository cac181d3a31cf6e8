use crate::action::radio::{OrderDrawError, draw_order};
use crate::action::ActionTransition;
use crate::economy;
use crate::env::{GameEnv, OracleError};
use crate::event::GameEvent;
use crate::state::{ItemId, Session};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SellError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error("failed to post the unlock order: {0}")]
    OrderDraw(#[from] OrderDrawError),
}

/// Manual sale: credit the sell price and destroy the instance.
///
/// Every successful sell re-evaluates the radio unlock; the first time the
/// balance reaches the wealth threshold the radio comes online and the first
/// order is posted in the same operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellAction {
    pub item: ItemId,
}

impl ActionTransition for SellAction {
    type Error = SellError;

    fn pre_validate(&self, state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !state.inventory.contains(self.item) {
            return Err(SellError::ItemNotFound(self.item));
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
        let item = state
            .inventory
            .remove(self.item)
            .ok_or(SellError::ItemNotFound(self.item))?;

        let payout = economy::sell_price(&item, &config);
        state.balance = state.balance.saturating_add(payout);
        events.push(GameEvent::ItemSold {
            item: self.item,
            payout,
        });

        if !state.radio.unlocked && state.balance >= config.radio_unlock_threshold {
            state.radio.unlocked = true;
            events.push(GameEvent::RadioUnlocked);
            let order = draw_order(state, env)?;
            state.radio.order = Some(order.clone());
            events.push(GameEvent::OrderPosted(order));
        }

        Ok(())
    }

    fn post_validate(&self, state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.inventory.contains(self.item) {
            return Err(SellError::ItemNotFound(self.item));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testkit::{TestWorld, def, place};
    use crate::env::ItemCategory;

    #[test]
    fn sell_credits_the_base_price() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();
        let id = place(&mut session, &world.catalog.0[0], 0, 0);

        let mut events = Vec::new();
        SellAction { item: id }
            .apply(&mut session, &world.env(), &mut events)
            .unwrap();

        assert_eq!(session.balance, 535);
        assert!(session.inventory.is_empty());
        assert_eq!(
            events,
            vec![GameEvent::ItemSold {
                item: id,
                payout: 35
            }]
        );
    }

    #[test]
    fn premium_sell_credits_triple() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();
        let id = place(&mut session, &world.catalog.0[0], 0, 0);
        session.inventory.get_mut(id).unwrap().premium = true;

        let mut events = Vec::new();
        SellAction { item: id }
            .apply(&mut session, &world.env(), &mut events)
            .unwrap();

        assert_eq!(session.balance, 500 + 105);
    }

    #[test]
    fn unknown_item_fails_cleanly() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let session = world.session();
        let err = SellAction { item: ItemId(99) }
            .pre_validate(&session, &world.env())
            .unwrap_err();
        assert!(matches!(err, SellError::ItemNotFound(ItemId(99))));
    }

    #[test]
    fn crossing_the_threshold_unlocks_the_radio_and_posts_an_order() {
        let world = TestWorld::new(vec![def("medkit", 2, 2, 600, ItemCategory::Medical)]);
        let mut session = world.session();
        let id = place(&mut session, &world.catalog.0[0], 0, 0);

        let mut events = Vec::new();
        SellAction { item: id }
            .apply(&mut session, &world.env(), &mut events)
            .unwrap();

        assert_eq!(session.balance, 1100);
        assert!(session.radio.unlocked);
        let order = session.radio.order.as_ref().unwrap();
        assert_eq!(order.target.as_str(), "medkit");
        assert_eq!(order.price_multiplier, 5);
        assert!(events.contains(&GameEvent::RadioUnlocked));
        assert!(matches!(events.last(), Some(GameEvent::OrderPosted(_))));
    }

    #[test]
    fn unlock_happens_only_once() {
        let world = TestWorld::new(vec![def("medkit", 2, 2, 600, ItemCategory::Medical)]);
        let mut session = world.session();
        session.radio.unlocked = true;
        let id = place(&mut session, &world.catalog.0[0], 0, 0);

        let mut events = Vec::new();
        SellAction { item: id }
            .apply(&mut session, &world.env(), &mut events)
            .unwrap();

        // Already unlocked: no second RadioUnlocked, no order replacement.
        assert!(!events.contains(&GameEvent::RadioUnlocked));
        assert!(session.radio.order.is_none());
    }
}
