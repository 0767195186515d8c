//! Build errors for the active object builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building an active object.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Port not specified. Call .port(port) before .build()")]
    MissingPort,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
