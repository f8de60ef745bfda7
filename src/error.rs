use thiserror::Error;

use crate::config::ConfigError;
use crate::core::CoreError;

/// Crate-level convenience error.
///
/// A thin wrapper over the bounded capability errors - permission refusals
/// and missing references are not errors anywhere in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
