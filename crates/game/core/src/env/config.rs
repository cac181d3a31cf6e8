//! Config oracle: access to the tunable rule parameters.

use crate::config::GameConfig;

/// Provides the game configuration to the rules engine.
///
/// Config is static for the lifetime of a session; the engine re-reads it on
/// every operation rather than caching, so hosts can share one instance.
pub trait ConfigOracle: Send + Sync {
    fn game_config(&self) -> GameConfig;
}

impl ConfigOracle for GameConfig {
    fn game_config(&self) -> GameConfig {
        *self
    }
}
