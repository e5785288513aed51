use log::{debug, warn};
use crate::cache::enums::cache_operation::CacheOperation;
use crate::cache::structs::log_cache_observer::LogCacheObserver;
use crate::cache::traits::cache_observer::CacheObserver;
use crate::filesystem::errors::StorageError;

impl CacheObserver for LogCacheObserver {
    fn cache_failed(&self, operation: CacheOperation, key: &str, error: &StorageError) {
        warn!("[Cache] {} failed for {}, using primary storage: {}", operation, key, error);
    }

    fn cache_hit(&self, key: &str) {
        debug!("[Cache] Hit {}", key);
    }

    fn cache_miss(&self, key: &str) {
        debug!("[Cache] Miss {}", key);
    }
}
