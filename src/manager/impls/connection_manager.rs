use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use log::info;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::factory::structs::connection_factory::ConnectionFactory;
use crate::filesystem::traits::filesystem::Filesystem;
use crate::manager::errors::ManagerError;
use crate::manager::structs::connection_manager::ConnectionManager;

impl ConnectionManager {
    pub fn new(factory: ConnectionFactory, default: &str, configurations: BTreeMap<String, ConnectionConfig>) -> ConnectionManager {
        ConnectionManager {
            factory,
            configurations,
            default: RwLock::new(default.to_string()),
            connections: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_configuration(factory: ConnectionFactory, config: &Configuration) -> ConnectionManager {
        Self::new(factory, &config.default, config.connections.clone())
    }

    /// Returns the named connection, or the default one for `None`, opening it
    /// through the factory on first use.
    pub async fn connection(&self, name: Option<&str>) -> Result<Arc<dyn Filesystem>, ManagerError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.default_connection(),
        };
        if let Some(connection) = self.connections.read().get(&name) {
            return Ok(connection.clone());
        }

        let config = self.configuration(&name)?;
        let connection = self.factory.make(config).await?;
        info!("[Manager] Opened connection {}", name);

        // Another task may have opened the same connection meanwhile; keep the first.
        let mut connections = self.connections.write();
        Ok(connections.entry(name).or_insert(connection).clone())
    }

    pub async fn reconnect(&self, name: Option<&str>) -> Result<Arc<dyn Filesystem>, ManagerError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.default_connection(),
        };
        self.disconnect(Some(&name));
        self.connection(Some(&name)).await
    }

    /// Drops the cached handle. Returns whether the connection was open.
    pub fn disconnect(&self, name: Option<&str>) -> bool {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.default_connection(),
        };
        self.connections.write().remove(&name).is_some()
    }

    pub fn configuration(&self, name: &str) -> Result<&ConnectionConfig, ManagerError> {
        self.configurations.get(name)
            .ok_or_else(|| ManagerError::UnknownConnection(name.to_string()))
    }

    pub fn default_connection(&self) -> String {
        self.default.read().clone()
    }

    pub fn set_default_connection(&self, name: &str) {
        *self.default.write() = name.to_string();
    }

    /// Names of the currently open connections, sorted.
    pub fn opened(&self) -> Vec<String> {
        let mut names: Vec<String> = self.connections.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn factory(&self) -> &ConnectionFactory {
        &self.factory
    }
}
