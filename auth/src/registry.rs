//! Strategy registry.
//!
//! An explicit, owned replacement for a process-wide authenticator
//! singleton. Strategies are registered by name while the process boots and
//! only read afterwards.

use std::collections::BTreeMap;

use crate::error::{AuthError, Result};
use crate::providers::Strategy;

/// Named collection of provider strategies.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: BTreeMap<&'static str, Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a strategy under its [`Strategy::name`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StrategyAlreadyRegistered` if the name is taken;
    /// the existing entry is kept.
    pub fn register(&mut self, strategy: impl Strategy + 'static) -> Result<()> {
        let name = strategy.name();
        if self.strategies.contains_key(name) {
            return Err(AuthError::StrategyAlreadyRegistered(name.to_string()));
        }

        tracing::info!(
            strategy = name,
            callback_path = strategy.callback_path(),
            scopes = ?strategy.scopes(),
            "registered authentication strategy"
        );
        self.strategies.insert(name, Box::new(strategy));
        Ok(())
    }

    /// Look up a strategy by name.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StrategyNotRegistered` if no strategy has this name.
    pub fn get(&self, name: &str) -> Result<&dyn Strategy> {
        self.strategies
            .get(name)
            .map(|strategy| &**strategy)
            .ok_or_else(|| AuthError::StrategyNotRegistered(name.to_string()))
    }

    /// Whether a strategy is registered under this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Registered strategy names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.keys().copied()
    }

    /// Iterate over registered strategies, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Strategy> + '_ {
        self.strategies.values().map(|strategy| &**strategy)
    }

    /// Number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether no strategies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.strategies.keys().collect::<Vec<_>>())
            .finish()
    }
}
