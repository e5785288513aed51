use std::sync::Arc;
use crate::cache::traits::cache_observer::CacheObserver;
use crate::connector::structs::connector_registry::ConnectorRegistry;

#[derive(Clone)]
pub struct ConnectionFactory {
    pub(crate) registry: Arc<ConnectorRegistry>,
    pub(crate) observer: Arc<dyn CacheObserver>,
}
