use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::connector::errors::ConnectorError;
use crate::connector::structs::adapter_connector::AdapterConnector;
use crate::connector::traits::adapter_locator::AdapterLocator;
use crate::connector::traits::connector::Connector;
use crate::filesystem::traits::filesystem::Filesystem;

impl AdapterConnector {
    pub fn new(adapters: Arc<dyn AdapterLocator>) -> AdapterConnector {
        AdapterConnector { adapters }
    }
}

#[async_trait]
impl Connector for AdapterConnector {
    async fn connect(&self, config: &ConnectionConfig) -> Result<Arc<dyn Filesystem>, ConnectorError> {
        let name = match config.get("adapter").map(|value| value.as_str()) {
            Some(Some(name)) if !name.is_empty() => name,
            Some(None) => {
                return Err(ConnectorError::InvalidConfigValue {
                    driver: "adapter".to_string(),
                    key: "adapter".to_string(),
                });
            }
            _ => {
                return Err(ConnectorError::MissingConfigKey {
                    driver: "adapter".to_string(),
                    key: "adapter".to_string(),
                });
            }
        };
        let adapter = self.adapters.adapter(name)
            .ok_or_else(|| ConnectorError::MissingAdapter(name.to_string()))?;
        debug!("[Adapter] Using adapter {} ({})", name, adapter.name());
        Ok(adapter)
    }
}
