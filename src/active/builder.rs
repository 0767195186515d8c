//! Builder for constructing active objects.

use super::error::BuildError;
use super::port::Port;
use super::Active;
use crate::config::SnakeConfig;
use std::path::Path;

/// Fluent builder for [`Active`].
pub struct ActiveBuilder<P: Port> {
    config: SnakeConfig,
    port: Option<P>,
}

impl<P: Port> ActiveBuilder<P> {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SnakeConfig::default(),
            port: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SnakeConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a JSON file.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Result<Self, BuildError> {
        self.config = SnakeConfig::load(path)?;
        Ok(self)
    }

    /// Fix the apple RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    /// Set the collaborators that receive start/stop sub-requests.
    pub fn dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.dependencies = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the host port (required).
    pub fn port(mut self, port: P) -> Self {
        self.port = Some(port);
        self
    }

    /// Validate the configuration and build the active object.
    pub fn build(self) -> Result<Active<P>, BuildError> {
        let port = self.port.ok_or(BuildError::MissingPort)?;
        Ok(Active::new(self.config, port)?)
    }
}

impl<P: Port> Default for ActiveBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
