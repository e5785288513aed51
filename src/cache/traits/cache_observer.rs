use crate::cache::enums::cache_operation::CacheOperation;
use crate::filesystem::errors::StorageError;

pub trait CacheObserver: Send + Sync {
    /// Called for every cache backend error the decorator swallows.
    fn cache_failed(&self, operation: CacheOperation, key: &str, error: &StorageError);

    fn cache_hit(&self, _key: &str) {}

    fn cache_miss(&self, _key: &str) {}
}
