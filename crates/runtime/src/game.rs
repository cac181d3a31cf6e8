//! The game facade: one live session plus its environment.

use stockpile_core::{
    Action, BuyAction, CatalogOracle, CombineAction, ConfigOracle, Env, FulfillOrderAction,
    GameConfig, GameEngine, GameEnv, GameEvent, Inventory, ItemDefinition, ItemId, MoveAction,
    PcgRng, Position, RadioOrder, ResetAction, RngOracle, RotateAction, SellAction, Session,
    draw_order,
};

use crate::error::GameError;
use crate::observer::{GameObserver, ObserverRegistry};
use crate::repository::StateRepository;

/// What one successful operation produced.
///
/// `persisted` is false when the post-operation save failed; the session in
/// memory is still correct and play can continue, but a crash before the
/// next successful save loses this operation.
#[derive(Debug)]
pub struct Receipt {
    pub events: Vec<GameEvent>,
    pub persisted: bool,
}

/// Owns the live session and everything needed to run it: catalog, RNG,
/// config, persistence, and observers.
///
/// All mutation goes through the rules engine; the facade's job is
/// sequencing (execute, then save, then notify) and the host-facing read
/// API. Not thread-safe by itself; hosts that share a game wrap it in their
/// own lock.
pub struct Game {
    session: Session,
    config: GameConfig,
    catalog: Box<dyn CatalogOracle>,
    rng: PcgRng,
    repository: Box<dyn StateRepository>,
    observers: ObserverRegistry,
    pending_discovery: Option<ItemDefinition>,
}

impl Game {
    /// Resumes the saved session if one exists, otherwise starts fresh with
    /// `game_seed`.
    ///
    /// A loaded session that has the radio unlocked but no active order
    /// (possible if an older save predates an order being posted) gets a
    /// fresh order drawn immediately so the radio is never silently idle.
    pub fn load_or_new(
        repository: Box<dyn StateRepository>,
        catalog: Box<dyn CatalogOracle>,
        config: GameConfig,
        game_seed: u64,
    ) -> Result<Self, GameError> {
        let session = match repository.load()? {
            Some(session) => {
                tracing::info!(nonce = session.nonce, "resuming saved session");
                session
            }
            None => {
                tracing::info!(game_seed, "starting fresh session");
                Session::new(game_seed, &config)
            }
        };

        let mut game = Self {
            session,
            config,
            catalog,
            rng: PcgRng,
            repository,
            observers: ObserverRegistry::new(),
            pending_discovery: None,
        };

        if game.session.radio.unlocked && game.session.radio.order.is_none() {
            let env: GameEnv<'_> = Env::new(
                Some(game.catalog.as_ref()),
                Some(&game.rng as &dyn RngOracle),
                Some(&game.config as &dyn ConfigOracle),
            );
            let order = draw_order(&game.session, &env)?;
            tracing::warn!(order_target = %order.target, "save had no active order, drew a new one");
            game.session.radio.order = Some(order);
            game.repository.save(&game.session)?;
        }

        Ok(game)
    }

    pub fn register_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.register(observer);
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Buys one random item from the catalog.
    pub fn buy(&mut self) -> Result<Receipt, GameError> {
        self.execute(Action::Buy(BuyAction))
    }

    /// Sells the given item at its current value.
    pub fn sell(&mut self, item: ItemId) -> Result<Receipt, GameError> {
        self.execute(Action::Sell(SellAction { item }))
    }

    /// Moves an item to a new grid position.
    pub fn move_item(&mut self, item: ItemId, to: Position) -> Result<Receipt, GameError> {
        self.execute(Action::Move(MoveAction { item, to }))
    }

    /// Rotates an item 90 degrees in place.
    pub fn rotate(&mut self, item: ItemId) -> Result<Receipt, GameError> {
        self.execute(Action::Rotate(RotateAction { item }))
    }

    /// Combines `dragged` into `target`, upgrading `target` to premium.
    pub fn combine(&mut self, dragged: ItemId, target: ItemId) -> Result<Receipt, GameError> {
        self.execute(Action::Combine(CombineAction { dragged, target }))
    }

    /// Hands `item` over against the active radio order.
    pub fn fulfill(&mut self, item: ItemId) -> Result<Receipt, GameError> {
        self.execute(Action::Fulfill(FulfillOrderAction { item }))
    }

    /// Discards the session and starts over with the same seed.
    pub fn reset(&mut self) -> Result<Receipt, GameError> {
        self.execute(Action::Reset(ResetAction))
    }

    fn execute(&mut self, action: Action) -> Result<Receipt, GameError> {
        let env: GameEnv<'_> = Env::new(
            Some(self.catalog.as_ref()),
            Some(&self.rng as &dyn RngOracle),
            Some(&self.config as &dyn ConfigOracle),
        );

        let outcome = match GameEngine::new(&mut self.session).execute(env, &action) {
            Ok(outcome) => outcome,
            Err(error) => {
                // The draw nonce advanced even though gameplay state did
                // not; persist it so a reload does not replay the same
                // draw.
                if let Err(save_error) = self.repository.save(&self.session) {
                    tracing::error!(error = %save_error, "failed to persist session");
                }
                return Err(error.into());
            }
        };

        let persisted = match self.repository.save(&self.session) {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(%error, "failed to persist session, continuing in memory");
                false
            }
        };

        for event in &outcome.events {
            if let GameEvent::NewDiscovery(definition) = event {
                self.pending_discovery = Some(definition.clone());
            }
        }
        self.observers.notify(&outcome.events, &self.session);

        Ok(Receipt {
            events: outcome.events,
            persisted,
        })
    }

    // ------------------------------------------------------------------
    // Read API
    // ------------------------------------------------------------------

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        &self.session.inventory
    }

    pub fn balance(&self) -> u32 {
        self.session.balance
    }

    pub fn radio_unlocked(&self) -> bool {
        self.session.radio.unlocked
    }

    pub fn current_order(&self) -> Option<&RadioOrder> {
        self.session.radio.order.as_ref()
    }

    /// Definitions discovered so far, resolved through the catalog in its
    /// index order. Entries the catalog no longer knows are skipped.
    pub fn unlocked_definitions(&self) -> Vec<&ItemDefinition> {
        (0..self.catalog.definition_count())
            .filter_map(|index| self.catalog.definition_at(index))
            .filter(|definition| self.session.collection.is_unlocked(&definition.id))
            .collect()
    }

    /// Takes the most recent first-time discovery, if one is waiting.
    ///
    /// One-shot: the host shows the reveal dialog once and the slot clears.
    /// A newer discovery replaces an unconsumed older one.
    pub fn take_discovery(&mut self) -> Option<ItemDefinition> {
        self.pending_discovery.take()
    }
}
