use std::collections::HashMap;
use std::sync::Arc;
use log::{debug, warn};
use parking_lot::RwLock;
use crate::cache::traits::cache_service_locator::CacheServiceLocator;
use crate::connector::enums::builtin_driver::BuiltinDriver;
use crate::connector::errors::RegistryError;
use crate::connector::structs::adapter_connector::AdapterConnector;
use crate::connector::structs::connector_registry::ConnectorRegistry;
use crate::connector::structs::illuminate_connector::IlluminateConnector;
use crate::connector::structs::memory_connector::MemoryConnector;
use crate::connector::structs::null_connector::NullConnector;
use crate::connector::traits::adapter_locator::AdapterLocator;
use crate::connector::traits::connector::Connector;
use crate::connector::types::ConnectorConstructor;

impl Default for ConnectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectorRegistry {
    pub fn new() -> ConnectorRegistry {
        ConnectorRegistry {
            constructors: RwLock::new(HashMap::new()),
        }
    }

    /// Registry holding every [`BuiltinDriver`]. The adapter and illuminate
    /// connectors resolve their targets through the given locators.
    pub fn with_defaults(adapters: Arc<dyn AdapterLocator>, caches: Arc<dyn CacheServiceLocator>) -> ConnectorRegistry {
        let registry = ConnectorRegistry::new();
        for driver in BuiltinDriver::ALL {
            match driver {
                BuiltinDriver::null => {
                    registry.register(driver.as_str(), || Box::new(NullConnector::new()));
                }
                BuiltinDriver::memory => {
                    registry.register(driver.as_str(), || Box::new(MemoryConnector::new()));
                }
                BuiltinDriver::adapter => {
                    let adapters = adapters.clone();
                    registry.register(driver.as_str(), move || Box::new(AdapterConnector::new(adapters.clone())));
                }
                BuiltinDriver::illuminate => {
                    let caches = caches.clone();
                    registry.register(driver.as_str(), move || Box::new(IlluminateConnector::new(caches.clone())));
                }
            }
        }
        registry
    }

    /// Registers `constructor` under `name`, replacing any previous entry.
    /// Returns true when an entry was replaced.
    pub fn register<F>(&self, name: &str, constructor: F) -> bool
    where
        F: Fn() -> Box<dyn Connector> + Send + Sync + 'static,
    {
        self.register_constructor(name, Arc::new(constructor))
    }

    pub fn register_constructor(&self, name: &str, constructor: ConnectorConstructor) -> bool {
        let replaced = self.constructors.write().insert(name.to_string(), constructor).is_some();
        if replaced {
            warn!("[Registry] Connector for driver {} replaced", name);
        } else {
            debug!("[Registry] Connector for driver {} registered", name);
        }
        replaced
    }

    pub fn resolve(&self, name: &str) -> Result<ConnectorConstructor, RegistryError> {
        self.constructors.read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.read().contains_key(name)
    }

    /// Registered driver names, sorted.
    pub fn drivers(&self) -> Vec<String> {
        let mut drivers: Vec<String> = self.constructors.read().keys().cloned().collect();
        drivers.sort();
        drivers
    }

    pub fn len(&self) -> usize {
        self.constructors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.read().is_empty()
    }
}
