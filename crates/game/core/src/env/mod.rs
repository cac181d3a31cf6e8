//! Traits describing the world outside the rules engine.
//!
//! Oracles expose the static item catalog, the deterministic random source,
//! and the tunable config. The [`Env`] aggregate bundles them so the engine
//! can reach everything it needs without hard coupling to concrete
//! implementations.
mod catalog;
mod config;
mod error;
mod rng;

pub use catalog::{CatalogOracle, ItemCategory, ItemDefinition};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};

/// Aggregates the read-only oracles required by the action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, C, R, G>
where
    C: CatalogOracle + ?Sized,
    R: RngOracle + ?Sized,
    G: ConfigOracle + ?Sized,
{
    catalog: Option<&'a C>,
    rng: Option<&'a R>,
    config: Option<&'a G>,
}

pub type GameEnv<'a> = Env<'a, dyn CatalogOracle + 'a, dyn RngOracle + 'a, dyn ConfigOracle + 'a>;

impl<'a, C, R, G> Env<'a, C, R, G>
where
    C: CatalogOracle + ?Sized,
    R: RngOracle + ?Sized,
    G: ConfigOracle + ?Sized,
{
    pub fn new(catalog: Option<&'a C>, rng: Option<&'a R>, config: Option<&'a G>) -> Self {
        Self {
            catalog,
            rng,
            config,
        }
    }

    pub fn with_all(catalog: &'a C, rng: &'a R, config: &'a G) -> Self {
        Self::new(Some(catalog), Some(rng), Some(config))
    }

    pub fn empty() -> Self {
        Self {
            catalog: None,
            rng: None,
            config: None,
        }
    }

    /// Returns the catalog oracle, or an error if not available.
    pub fn catalog(&self) -> Result<&'a C, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the RNG oracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the config oracle, or an error if not available.
    pub fn config(&self) -> Result<&'a G, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

impl<'a, C, R, G> Env<'a, C, R, G>
where
    C: CatalogOracle + 'a,
    R: RngOracle + 'a,
    G: ConfigOracle + 'a,
{
    /// Converts this environment into a trait-object based [`GameEnv`].
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        Env::new(catalog, rng, config)
    }
}
