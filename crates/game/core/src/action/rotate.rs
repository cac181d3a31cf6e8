use crate::action::ActionTransition;
use crate::env::{GameEnv, OracleError};
use crate::event::GameEvent;
use crate::grid::{self, GridBox};
use crate::state::{ItemId, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RotateError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error("rotated footprint leaves the grid")]
    OutOfBounds,

    #[error("rotated footprint is blocked by item {blocking}")]
    Blocked { blocking: ItemId },
}

/// Swaps an item's width and height in place.
///
/// Evaluated at the item's current position: the swapped box must stay in
/// bounds and clear of every other item. Square items rotate trivially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotateAction {
    pub item: ItemId,
}

impl RotateAction {
    fn rotated_box(&self, state: &Session) -> Result<GridBox, RotateError> {
        let item = state
            .inventory
            .get(self.item)
            .ok_or(RotateError::ItemNotFound(self.item))?;
        Ok(GridBox::new(
            item.position.x,
            item.position.y,
            item.height,
            item.width,
        ))
    }
}

impl ActionTransition for RotateAction {
    type Error = RotateError;

    fn pre_validate(&self, state: &Session, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let config = env.config()?.game_config();
        let candidate = self.rotated_box(state)?;
        if !candidate.in_bounds(&config) {
            return Err(RotateError::OutOfBounds);
        }
        if let Some(blocking) = grid::collision(&state.inventory, Some(self.item), &candidate) {
            return Err(RotateError::Blocked { blocking });
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
        let candidate = self.rotated_box(state)?;
        if !candidate.in_bounds(&config) {
            return Err(RotateError::OutOfBounds);
        }
        if let Some(blocking) = grid::collision(&state.inventory, Some(self.item), &candidate) {
            return Err(RotateError::Blocked { blocking });
        }

        let item = state
            .inventory
            .get_mut(self.item)
            .ok_or(RotateError::ItemNotFound(self.item))?;
        std::mem::swap(&mut item.width, &mut item.height);
        events.push(GameEvent::ItemRotated { item: self.item });
        Ok(())
    }
}
