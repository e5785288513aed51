use std::sync::Arc;
use log::{debug, info};
use crate::cache::structs::cache_options::CacheOptions;
use crate::cache::structs::cached_filesystem::CachedFilesystem;
use crate::cache::structs::log_cache_observer::LogCacheObserver;
use crate::cache::traits::cache_observer::CacheObserver;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::connector::structs::connector_registry::ConnectorRegistry;
use crate::connector::traits::connector::Connector;
use crate::factory::errors::FactoryError;
use crate::factory::structs::connection_factory::ConnectionFactory;
use crate::filesystem::traits::filesystem::Filesystem;

pub const DRIVER_KEY: &str = "driver";
pub const CACHE_KEY: &str = "cache";

impl ConnectionFactory {
    pub fn new(registry: Arc<ConnectorRegistry>) -> ConnectionFactory {
        ConnectionFactory {
            registry,
            observer: Arc::new(LogCacheObserver),
        }
    }

    /// Replaces the observer handed to every cache decorator built by this factory.
    pub fn with_observer(mut self, observer: Arc<dyn CacheObserver>) -> ConnectionFactory {
        self.observer = observer;
        self
    }

    pub fn registry(&self) -> &Arc<ConnectorRegistry> {
        &self.registry
    }

    /// Validates the `driver` key of `config` and constructs its connector.
    pub fn create_connector(&self, config: &ConnectionConfig) -> Result<Box<dyn Connector>, FactoryError> {
        let driver = Self::driver(config)?;
        let constructor = self.registry.resolve(driver)
            .map_err(|_| FactoryError::UnsupportedDriver(driver.to_string()))?;
        Ok(constructor())
    }

    pub async fn make(&self, config: &ConnectionConfig) -> Result<Arc<dyn Filesystem>, FactoryError> {
        let transaction = crate::utils::sentry_tracing::start_trace_transaction("storage_make", "factory");
        let result = self.assemble(config).await;
        if let Some(txn) = transaction {
            match &result {
                Ok(_) => txn.set_tag("result", "success"),
                Err(e) => txn.set_tag("result", format!("error: {:?}", e)),
            }
            txn.set_tag("driver", config.get_str(DRIVER_KEY).unwrap_or_default());
            txn.finish();
        }
        result
    }

    async fn assemble(&self, config: &ConnectionConfig) -> Result<Arc<dyn Filesystem>, FactoryError> {
        let connector = self.create_connector(config)?;
        let cache = match Self::cache_config(config)? {
            Some(cache_config) => Some((cache_config, self.create_connector(cache_config)?)),
            None => None,
        };

        let filesystem = connector.connect(config).await?;
        let driver = Self::driver(config)?;

        match cache {
            None => {
                info!("[Factory] Connected {} driver ({})", driver, filesystem.name());
                Ok(filesystem)
            }
            Some((cache_config, cache_connector)) => {
                let backend = cache_connector.connect(cache_config).await?;
                let options = CacheOptions::from_config(cache_config);
                debug!("[Factory] Cache prefix {} ttl {:?}", options.prefix, options.ttl);
                info!("[Factory] Connected {} driver with {} cache", driver, backend.name());
                Ok(Arc::new(CachedFilesystem::new(filesystem, backend, options, self.observer.clone())))
            }
        }
    }

    fn driver(config: &ConnectionConfig) -> Result<&str, FactoryError> {
        match config.get_str(DRIVER_KEY) {
            Some(driver) if !driver.is_empty() => Ok(driver),
            _ => Err(FactoryError::EmptyDriver),
        }
    }

    fn cache_config(config: &ConnectionConfig) -> Result<Option<&ConnectionConfig>, FactoryError> {
        match config.get(CACHE_KEY) {
            None => Ok(None),
            Some(value) => value.as_map()
                .map(Some)
                .ok_or_else(|| FactoryError::InvalidCacheConfig(value.type_name().to_string())),
        }
    }
}
