use std::env;
use std::time::Duration;

use tracing::warn;

use crate::enumerate::{EnumerationStrategy, SearchLimits};

/// Environment variable holding the enumeration deadline in milliseconds.
pub const TIMEOUT_ENV: &str = "PATHRANK_TIMEOUT_MS";
/// Environment variable holding the hard vertex-count ceiling.
pub const MAX_VERTICES_ENV: &str = "PATHRANK_MAX_VERTICES";
/// Environment variable naming the default enumeration strategy.
pub const STRATEGY_ENV: &str = "PATHRANK_STRATEGY";

/// Search settings shared by every query of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: EnumerationStrategy,
    /// Wall-clock budget for one query.
    pub timeout: Option<Duration>,
    /// Graphs with more vertices are rejected before enumeration starts.
    pub max_vertices: Option<usize>,
}

impl SearchConfig {
    /// Read overrides from `PATHRANK_*` environment variables.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(STRATEGY_ENV) {
            match raw.parse() {
                Ok(strategy) => config.strategy = strategy,
                Err(err) => warn!("ignoring {}: {}", STRATEGY_ENV, err),
            }
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.timeout = Some(Duration::from_millis(ms)),
                Err(err) => warn!("ignoring {}={:?}: {}", TIMEOUT_ENV, raw, err),
            }
        }

        if let Some(raw) = lookup(MAX_VERTICES_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.max_vertices = Some(limit),
                Err(err) => warn!("ignoring {}={:?}: {}", MAX_VERTICES_ENV, raw, err),
            }
        }

        config
    }

    /// Limits for a query starting now.
    pub fn limits(&self) -> SearchLimits {
        match self.timeout {
            Some(timeout) => SearchLimits::unbounded().with_timeout(timeout),
            None => SearchLimits::unbounded(),
        }
    }
}
