use async_trait::async_trait;
use crate::cache::errors::CacheError;

#[async_trait]
pub trait CacheRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Stores `value` under `key`. A `ttl` of `None` keeps the value until forgotten.
    async fn put(&self, key: &str, value: &[u8], ttl: Option<u64>) -> Result<(), CacheError>;

    /// Removes `key`, returning whether it existed.
    async fn forget(&self, key: &str) -> Result<bool, CacheError>;

    async fn flush(&self) -> Result<(), CacheError>;
}
