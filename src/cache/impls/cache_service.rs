use std::collections::HashMap;
use std::sync::Arc;
use log::debug;
use parking_lot::RwLock;
use crate::cache::structs::cache_service::CacheService;
use crate::cache::structs::memory_cache_repository::MemoryCacheRepository;
use crate::cache::traits::cache_repository::CacheRepository;
use crate::cache::traits::cache_service_locator::CacheServiceLocator;

impl CacheService {
    pub fn new(default: &str) -> CacheService {
        CacheService {
            default: default.to_string(),
            stores: RwLock::new(HashMap::new()),
        }
    }

    /// A service with a single in-memory `array` store set as default.
    pub fn with_array_store() -> CacheService {
        let service = CacheService::new("array");
        service.register("array", Arc::new(MemoryCacheRepository::new()));
        service
    }

    pub fn register(&self, name: &str, repository: Arc<dyn CacheRepository>) {
        debug!("[CacheService] Registered store {}", name);
        self.stores.write().insert(name.to_string(), repository);
    }

    pub fn default_store(&self) -> &str {
        &self.default
    }
}

impl CacheServiceLocator for CacheService {
    fn store(&self, name: Option<&str>) -> Option<Arc<dyn CacheRepository>> {
        let name = name.unwrap_or(self.default.as_str());
        self.stores.read().get(name).cloned()
    }
}
