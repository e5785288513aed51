use std::sync::Arc;
use async_trait::async_trait;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::connector::errors::ConnectorError;
use crate::connector::structs::null_connector::NullConnector;
use crate::connector::traits::connector::Connector;
use crate::filesystem::structs::null_filesystem::NullFilesystem;
use crate::filesystem::traits::filesystem::Filesystem;

impl NullConnector {
    pub fn new() -> NullConnector {
        NullConnector
    }
}

#[async_trait]
impl Connector for NullConnector {
    async fn connect(&self, _config: &ConnectionConfig) -> Result<Arc<dyn Filesystem>, ConnectorError> {
        Ok(Arc::new(NullFilesystem::new()))
    }
}
