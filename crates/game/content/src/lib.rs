//! Static item content and catalog loaders.
//!
//! This crate houses the built-in item table and the validated [`Catalog`]
//! the runtime serves to the rules engine. Content is consumed through the
//! core's `CatalogOracle` trait and never appears in session state; placed
//! items only carry their definition key.
//!
//! With the `loaders` feature, catalogs can also be loaded from RON files.

mod catalog;
mod items;

#[cfg(feature = "loaders")]
mod loaders;

pub use catalog::{Catalog, CatalogError};
pub use items::default_catalog;

#[cfg(feature = "loaders")]
pub use loaders::CatalogLoader;
