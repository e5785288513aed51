use std::sync::Arc;
use crate::cache::traits::cache_service_locator::CacheServiceLocator;

#[derive(Clone)]
pub struct IlluminateConnector {
    pub(crate) caches: Arc<dyn CacheServiceLocator>,
}
