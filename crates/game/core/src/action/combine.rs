use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::event::GameEvent;
use crate::state::{ItemId, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombineError {
    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error("an item cannot be combined with itself")]
    SameItem,

    #[error("items {dragged} and {target} are different types")]
    TypeMismatch { dragged: ItemId, target: ItemId },

    #[error("target {0} is already premium")]
    TargetAlreadyPremium(ItemId),

    #[error("combine left the inventory in an inconsistent state")]
    Desynced,
}

/// Merges the dragged item into a same-type target.
///
/// The dragged instance is destroyed; the target becomes premium. Price and
/// footprint stay untouched because premium only matters at sell time. The
/// guard is asymmetric on purpose: a premium item may be consumed as the
/// dragged operand, but a premium target cannot be upgraded again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombineAction {
    pub dragged: ItemId,
    pub target: ItemId,
}

impl CombineAction {
    fn check(&self, state: &Session) -> Result<(), CombineError> {
        if self.dragged == self.target {
            return Err(CombineError::SameItem);
        }
        let dragged = state
            .inventory
            .get(self.dragged)
            .ok_or(CombineError::ItemNotFound(self.dragged))?;
        let target = state
            .inventory
            .get(self.target)
            .ok_or(CombineError::ItemNotFound(self.target))?;
        if dragged.sprite != target.sprite {
            return Err(CombineError::TypeMismatch {
                dragged: self.dragged,
                target: self.target,
            });
        }
        if target.premium {
            return Err(CombineError::TargetAlreadyPremium(self.target));
        }
        Ok(())
    }
}

impl ActionTransition for CombineAction {
    type Error = CombineError;

    fn pre_validate(&self, state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        self.check(state)
    }

    fn apply(
        &self,
        state: &mut Session,
        _env: &GameEnv<'_>,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), Self::Error> {
        self.check(state)?;

        state
            .inventory
            .remove(self.dragged)
            .ok_or(CombineError::ItemNotFound(self.dragged))?;
        let target = state
            .inventory
            .get_mut(self.target)
            .ok_or(CombineError::ItemNotFound(self.target))?;
        target.premium = true;

        events.push(GameEvent::ItemsCombined {
            consumed: self.dragged,
            upgraded: self.target,
        });
        Ok(())
    }

    fn post_validate(&self, state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.inventory.contains(self.dragged) {
            return Err(CombineError::Desynced);
        }
        let target = state
            .inventory
            .get(self.target)
            .ok_or(CombineError::ItemNotFound(self.target))?;
        if !target.premium {
            return Err(CombineError::Desynced);
        }
        Ok(())
    }
}
