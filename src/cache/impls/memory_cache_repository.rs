use async_trait::async_trait;
use chrono::Utc;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::memory_cache_repository::MemoryCacheRepository;
use crate::cache::traits::cache_repository::CacheRepository;

impl MemoryCacheRepository {
    pub fn new() -> MemoryCacheRepository {
        MemoryCacheRepository::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

#[async_trait]
impl CacheRepository for MemoryCacheRepository {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let now = Utc::now();
        let mut items = self.items.write();
        let expired = match items.get(key) {
            None => return Ok(None),
            Some((_, Some(expires_at))) => *expires_at <= now,
            Some((_, None)) => false,
        };
        if expired {
            items.remove(key);
            return Ok(None);
        }
        Ok(items.get(key).map(|(value, _)| value.clone()))
    }

    async fn put(&self, key: &str, value: &[u8], ttl: Option<u64>) -> Result<(), CacheError> {
        let expires_at = CacheEntry::expiry(ttl, Utc::now());
        self.items.write().insert(key.to_string(), (value.to_vec(), expires_at));
        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.items.write().remove(key).is_some())
    }

    async fn flush(&self) -> Result<(), CacheError> {
        self.items.write().clear();
        Ok(())
    }
}
