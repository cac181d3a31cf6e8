/// Errors produced when a required oracle is missing from the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("catalog oracle not available")]
    CatalogNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,

    #[error("config oracle not available")]
    ConfigNotAvailable,
}
