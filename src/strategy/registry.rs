//! Registry of strategy constructors.
//!
//! Strategies are registered explicitly at startup under a string id and
//! built on demand with a seed. There is no runtime code loading.
//!
//! ```
//! use rps_referee::strategy::StrategyRegistry;
//!
//! let registry = StrategyRegistry::with_builtin();
//! assert!(registry.contains("auto"));
//!
//! let strategy = registry.create("auto", 7);
//! assert!(strategy.is_ok());
//! assert!(registry.create("telepath", 7).is_err());
//! ```

use rustc_hash::FxHashMap;

use super::auto::AutoStrategy;
use super::contract::Strategy;
use crate::core::{RefereeError, Result};

/// Builds a strategy from a seed.
pub type StrategyFactory = fn(u64) -> Box<dyn Strategy>;

/// Registry of strategy constructors keyed by id.
#[derive(Clone, Debug, Default)]
pub struct StrategyRegistry {
    factories: FxHashMap<String, StrategyFactory>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the strategies shipped with the crate.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("auto", |seed| Box::new(AutoStrategy::new(seed)));
        registry
    }

    /// Register a constructor.
    ///
    /// Panics if the id is already taken.
    pub fn register(&mut self, id: impl Into<String>, factory: StrategyFactory) {
        let id = id.into();
        if self.factories.contains_key(&id) {
            panic!("Strategy {id:?} already registered");
        }
        self.factories.insert(id, factory);
    }

    /// Build the strategy registered under `id`.
    pub fn create(&self, id: &str, seed: u64) -> Result<Box<dyn Strategy>> {
        self.factories
            .get(id)
            .map(|factory| factory(seed))
            .ok_or_else(|| RefereeError::UnknownStrategy(id.to_string()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
