use crate::action::ActionTransition;
use crate::env::{GameEnv, OracleError};
use crate::event::GameEvent;
use crate::grid::{self, GridBox};
use crate::state::{ItemId, Position, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error("target box at ({to:?}) leaves the grid")]
    OutOfBounds { to: Position },

    #[error("target box is blocked by item {blocking}")]
    Blocked { blocking: ItemId },

    #[error("item {item} is not at its destination after the move")]
    Displaced { item: ItemId },
}

/// Repositions an item to a new top-left cell, keeping its footprint.
///
/// The input layer hands us grid coordinates, never pixels; translating
/// pointer positions is its job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub item: ItemId,
    pub to: Position,
}

impl MoveAction {
    fn target_box(&self, state: &Session) -> Result<GridBox, MoveError> {
        let item = state
            .inventory
            .get(self.item)
            .ok_or(MoveError::ItemNotFound(self.item))?;
        Ok(GridBox::new(self.to.x, self.to.y, item.width, item.height))
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn pre_validate(&self, state: &Session, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let config = env.config()?.game_config();
        let candidate = self.target_box(state)?;
        if !candidate.in_bounds(&config) {
            return Err(MoveError::OutOfBounds { to: self.to });
        }
        if let Some(blocking) = grid::collision(&state.inventory, Some(self.item), &candidate) {
            return Err(MoveError::Blocked { blocking });
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
        let candidate = self.target_box(state)?;
        if !candidate.in_bounds(&config) {
            return Err(MoveError::OutOfBounds { to: self.to });
        }
        if let Some(blocking) = grid::collision(&state.inventory, Some(self.item), &candidate) {
            return Err(MoveError::Blocked { blocking });
        }

        let item = state
            .inventory
            .get_mut(self.item)
            .ok_or(MoveError::ItemNotFound(self.item))?;
        item.position = self.to;
        events.push(GameEvent::ItemMoved {
            item: self.item,
            to: self.to,
        });
        Ok(())
    }

    fn post_validate(&self, state: &Session, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let item = state
            .inventory
            .get(self.item)
            .ok_or(MoveError::ItemNotFound(self.item))?;
        if item.position != self.to {
            return Err(MoveError::Displaced { item: self.item });
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
    fn move_onto_another_item_fails() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();
        let first = place(&mut session, &world.catalog.0[0], 0, 0);
        let second = place(&mut session, &world.catalog.0[0], 1, 0);

        let err = MoveAction {
            item: second,
            to: Position::new(0, 0),
        }
        .pre_validate(&session, &world.env())
        .unwrap_err();
        assert_eq!(err, MoveError::Blocked { blocking: first });
    }

    #[test]
    fn move_to_a_free_cell_succeeds() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();
        place(&mut session, &world.catalog.0[0], 0, 0);
        let second = place(&mut session, &world.catalog.0[0], 1, 0);

        let action = MoveAction {
            item: second,
            to: Position::new(2, 2),
        };
        let mut events = Vec::new();
        action.pre_validate(&session, &world.env()).unwrap();
        action
            .apply(&mut session, &world.env(), &mut events)
            .unwrap();
        action.post_validate(&session, &world.env()).unwrap();

        assert_eq!(
            session.inventory.get(second).unwrap().position,
            Position::new(2, 2)
        );
        assert_eq!(
            events,
            vec![GameEvent::ItemMoved {
                item: second,
                to: Position::new(2, 2)
            }]
        );
    }

    #[test]
    fn move_past_the_edge_fails() {
        let world = TestWorld::new(vec![def("pistol", 2, 1, 200, ItemCategory::Weapon)]);
        let mut session = world.session();
        let id = place(&mut session, &world.catalog.0[0], 0, 0);

        let err = MoveAction {
            item: id,
            to: Position::new(7, 0),
        }
        .pre_validate(&session, &world.env())
        .unwrap_err();
        assert!(matches!(err, MoveError::OutOfBounds { .. }));
    }

    #[test]
    fn edge_adjacent_placement_is_allowed() {
        let world = TestWorld::new(vec![def("cola", 1, 1, 35, ItemCategory::Food)]);
        let mut session = world.session();
        place(&mut session, &world.catalog.0[0], 0, 0);
        let second = place(&mut session, &world.catalog.0[0], 3, 3);

        // (1,0) touches the first item's edge; touching is not overlapping.
        let mut events = Vec::new();
        MoveAction {
            item: second,
            to: Position::new(1, 0),
        }
        .apply(&mut session, &world.env(), &mut events)
        .unwrap();
    }
}
