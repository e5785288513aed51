use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use crate::cache::structs::cache_repository_filesystem::CacheRepositoryFilesystem;
use crate::cache::traits::cache_service_locator::CacheServiceLocator;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::connector::errors::ConnectorError;
use crate::connector::structs::illuminate_connector::IlluminateConnector;
use crate::connector::traits::connector::Connector;
use crate::filesystem::traits::filesystem::Filesystem;

impl IlluminateConnector {
    pub fn new(caches: Arc<dyn CacheServiceLocator>) -> IlluminateConnector {
        IlluminateConnector { caches }
    }
}

fn invalid(key: &str) -> ConnectorError {
    ConnectorError::InvalidConfigValue {
        driver: "illuminate".to_string(),
        key: key.to_string(),
    }
}

#[async_trait]
impl Connector for IlluminateConnector {
    /// Uses the store named by `connector`, or the service default when the
    /// key is absent or empty.
    async fn connect(&self, config: &ConnectionConfig) -> Result<Arc<dyn Filesystem>, ConnectorError> {
        let store = match config.get("connector") {
            None => None,
            Some(value) => Some(value.as_str().ok_or_else(|| invalid("connector"))?),
        }.filter(|name| !name.is_empty());
        let ttl = match config.get("ttl") {
            None => None,
            Some(value) => Some(value.as_integer().ok_or_else(|| invalid("ttl"))?),
        };
        let repository = self.caches.store(store)
            .ok_or_else(|| ConnectorError::MissingCacheDriver(store.unwrap_or("default").to_string()))?;
        let ttl = ttl
            .filter(|ttl| *ttl > 0)
            .map(|ttl| ttl as u64);
        let store = store.unwrap_or("default");
        debug!("[Illuminate] Using cache store {}", store);
        Ok(Arc::new(CacheRepositoryFilesystem::new(repository, store, ttl)))
    }
}
