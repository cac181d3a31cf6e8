use crate::action::ActionTransition;
use crate::env::{GameEnv, OracleError};
use crate::event::GameEvent;
use crate::state::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResetError {
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Replaces the whole session with defaults.
///
/// There is no partial reset: inventory, balance, collection, and radio
/// state all go back to their starting values. The base seed survives so a
/// replayed save file stays reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetAction;

impl ActionTransition for ResetAction {
    type Error = ResetError;

    fn apply(
        &self,
        state: &mut Session,
        env: &GameEnv<'_>,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), Self::Error> {
        let config = env.config()?.game_config();
        *state = Session::new(state.game_seed, &config);
        events.push(GameEvent::SessionReset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::testkit::{TestWorld, def, place};
    use crate::env::ItemCategory;

    #[test]
    fn reset_restores_every_default() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();
        place(&mut session, &world.catalog.0[0], 0, 0);
        session.balance = 2000;
        session.radio.unlocked = true;
        session.collection.unlock(world.catalog.0[0].id.clone());

        let mut events = Vec::new();
        ResetAction
            .apply(&mut session, &world.env(), &mut events)
            .unwrap();

        assert!(session.inventory.is_empty());
        assert_eq!(session.balance, world.config.starting_balance);
        assert!(!session.radio.unlocked);
        assert!(session.radio.order.is_none());
        assert!(session.collection.is_empty());
        assert_eq!(session.game_seed, 7);
        assert_eq!(events, vec![GameEvent::SessionReset]);
    }
}
