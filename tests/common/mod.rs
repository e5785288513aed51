#![allow(dead_code)]
use std::sync::Arc;
use async_trait::async_trait;
use storage_connect::cache::errors::CacheError;
use storage_connect::cache::structs::cache_service::CacheService;
use storage_connect::cache::structs::memory_cache_repository::MemoryCacheRepository;
use storage_connect::cache::traits::cache_repository::CacheRepository;
use storage_connect::connector::structs::adapter_pool::AdapterPool;
use storage_connect::connector::structs::connector_registry::ConnectorRegistry;
use storage_connect::factory::structs::connection_factory::ConnectionFactory;
use storage_connect::filesystem::structs::memory_filesystem::MemoryFilesystem;

/// Cache store whose every operation fails, standing in for an unreachable server.
pub struct BrokenCacheRepository;

#[async_trait]
impl CacheRepository for BrokenCacheRepository {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn put(&self, _key: &str, _value: &[u8], _ttl: Option<u64>) -> Result<(), CacheError> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn forget(&self, _key: &str) -> Result<bool, CacheError> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn flush(&self) -> Result<(), CacheError> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }
}

pub struct TestEnvironment {
    pub local: MemoryFilesystem,
    pub adapters: Arc<AdapterPool>,
    pub redis: MemoryCacheRepository,
    pub caches: Arc<CacheService>,
    pub registry: Arc<ConnectorRegistry>,
}

impl TestEnvironment {
    pub fn factory(&self) -> ConnectionFactory {
        ConnectionFactory::new(self.registry.clone())
    }
}

/// Built-in registry with a `local` adapter, a working `redis` store and a
/// `broken` store whose operations always fail.
pub fn create_test_environment() -> TestEnvironment {
    let local = MemoryFilesystem::new();
    let adapters = Arc::new(AdapterPool::new());
    adapters.insert("local", Arc::new(local.clone()));

    let redis = MemoryCacheRepository::new();
    let caches = Arc::new(CacheService::new("redis"));
    caches.register("redis", Arc::new(redis.clone()));
    caches.register("broken", Arc::new(BrokenCacheRepository));

    let registry = Arc::new(ConnectorRegistry::with_defaults(adapters.clone(), caches.clone()));
    TestEnvironment {
        local,
        adapters,
        redis,
        caches,
        registry,
    }
}
