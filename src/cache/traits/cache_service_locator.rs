use std::sync::Arc;
use crate::cache::traits::cache_repository::CacheRepository;

pub trait CacheServiceLocator: Send + Sync {
    /// Returns the named store, or the default store when `name` is `None`.
    fn store(&self, name: Option<&str>) -> Option<Arc<dyn CacheRepository>>;
}
