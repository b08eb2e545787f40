//! Named-factory module registry.
//!
//! Replaces host-framework registration macros with an explicit map from
//! module names to factory functions.

use crate::error::{Error, Result};
use crate::module::{EfficiencyModule, Module};
use std::collections::BTreeMap;

/// Registered name of the efficiency module.
pub const EFFICIENCY_MODULE_NAME: &str = EfficiencyModule::NAME;

/// Factory producing a fresh, uninitialized module.
pub type ModuleFactory = fn() -> Box<dyn Module>;

/// Registry of module factories keyed by name.
#[derive(Default)]
pub struct ModuleRegistry {
    factories: BTreeMap<&'static str, ModuleFactory>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with all built-in modules registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(EFFICIENCY_MODULE_NAME, || Box::new(EfficiencyModule::new()));
        registry
    }

    /// Registers `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, factory: ModuleFactory) {
        self.factories.insert(name, factory);
    }

    /// Instantiates the module registered under `name`.
    ///
    /// # Errors
    /// [`Error::UnknownModule`] if no factory is registered.
    pub fn create(&self, name: &str) -> Result<Box<dyn Module>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| Error::UnknownModule(name.to_owned()))
    }

    /// Iterates registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_module_is_registered() {
        let registry = ModuleRegistry::with_builtins();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![EFFICIENCY_MODULE_NAME]
        );

        let module = registry.create(EFFICIENCY_MODULE_NAME).unwrap();
        assert_eq!(module.name(), EFFICIENCY_MODULE_NAME);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let registry = ModuleRegistry::with_builtins();
        assert!(matches!(
            registry.create("track_counter"),
            Err(Error::UnknownModule(name)) if name == "track_counter"
        ));
    }

    #[test]
    fn test_replacing_a_registration() {
        let mut registry = ModuleRegistry::new();
        registry.register("counter", || Box::new(EfficiencyModule::new()));
        registry.register("counter", || Box::new(EfficiencyModule::new()));
        assert_eq!(registry.names().count(), 1);
        assert!(registry.create("counter").is_ok());
    }
}
