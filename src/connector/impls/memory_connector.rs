use std::sync::Arc;
use async_trait::async_trait;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::connector::errors::ConnectorError;
use crate::connector::structs::memory_connector::MemoryConnector;
use crate::connector::traits::connector::Connector;
use crate::filesystem::structs::memory_filesystem::MemoryFilesystem;
use crate::filesystem::traits::filesystem::Filesystem;

impl MemoryConnector {
    pub fn new() -> MemoryConnector {
        MemoryConnector
    }
}

#[async_trait]
impl Connector for MemoryConnector {
    async fn connect(&self, _config: &ConnectionConfig) -> Result<Arc<dyn Filesystem>, ConnectorError> {
        Ok(Arc::new(MemoryFilesystem::new()))
    }
}
