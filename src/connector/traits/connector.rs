use std::sync::Arc;
use async_trait::async_trait;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::connector::errors::ConnectorError;
use crate::filesystem::traits::filesystem::Filesystem;

#[async_trait]
pub trait Connector: Send + Sync {
    /// Builds a filesystem from `config`. Validation of driver-specific keys
    /// happens here; the `driver` key itself has already been checked.
    async fn connect(&self, config: &ConnectionConfig) -> Result<Arc<dyn Filesystem>, ConnectorError>;
}
