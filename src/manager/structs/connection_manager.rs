use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::factory::structs::connection_factory::ConnectionFactory;
use crate::filesystem::traits::filesystem::Filesystem;

pub struct ConnectionManager {
    pub(crate) factory: ConnectionFactory,
    pub(crate) configurations: BTreeMap<String, ConnectionConfig>,
    pub(crate) default: RwLock<String>,
    pub(crate) connections: RwLock<HashMap<String, Arc<dyn Filesystem>>>,
}
