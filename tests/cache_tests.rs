mod common;

use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use storage_connect::cache::enums::cache_operation::CacheOperation;
use storage_connect::cache::traits::cache_observer::CacheObserver;
use storage_connect::cache::traits::cache_repository::CacheRepository;
use storage_connect::config::structs::connection_config::ConnectionConfig;
use storage_connect::filesystem::errors::StorageError;
use storage_connect::filesystem::traits::filesystem::Filesystem;

#[derive(Default)]
struct CollectingObserver {
    failures: Mutex<Vec<(CacheOperation, String)>>,
}

impl CacheObserver for CollectingObserver {
    fn cache_failed(&self, operation: CacheOperation, key: &str, _error: &StorageError) {
        self.failures.lock().push((operation, key.to_string()));
    }
}

fn cached_config(store: &str, ttl: i64) -> ConnectionConfig {
    ConnectionConfig::new()
        .with("driver", "adapter")
        .with("adapter", "local")
        .with("cache", ConnectionConfig::new()
            .with("driver", "illuminate")
            .with("connector", store)
            .with("key", "media")
            .with("ttl", ttl))
}

#[tokio::test]
async fn test_entries_use_configured_prefix() {
    let env = common::create_test_environment();
    env.local.write("cat.png", b"meow").await.unwrap();
    let filesystem = env.factory().make(&cached_config("redis", 0)).await.unwrap();

    filesystem.read("cat.png").await.unwrap();

    assert!(env.redis.get("media:contents:cat.png").await.unwrap().is_some());
}

#[tokio::test]
async fn test_cached_read_survives_primary_change_until_written() {
    let env = common::create_test_environment();
    env.local.write("cat.png", b"meow").await.unwrap();
    let filesystem = env.factory().make(&cached_config("redis", 0)).await.unwrap();
    assert_eq!(filesystem.read("cat.png").await.unwrap(), b"meow".to_vec());

    env.local.write("cat.png", b"purr").await.unwrap();
    assert_eq!(filesystem.read("cat.png").await.unwrap(), b"meow".to_vec());

    filesystem.write("cat.png", b"hiss").await.unwrap();
    assert_eq!(filesystem.read("cat.png").await.unwrap(), b"hiss".to_vec());
}

#[tokio::test]
async fn test_entries_expire_after_ttl() {
    let env = common::create_test_environment();
    env.local.write("cat.png", b"meow").await.unwrap();
    let filesystem = env.factory().make(&cached_config("redis", 1)).await.unwrap();
    filesystem.read("cat.png").await.unwrap();
    env.local.write("cat.png", b"purr").await.unwrap();

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(filesystem.read("cat.png").await.unwrap(), b"purr".to_vec());
}

#[tokio::test]
async fn test_delete_invalidates_and_propagates() {
    let env = common::create_test_environment();
    env.local.write("cat.png", b"meow").await.unwrap();
    let filesystem = env.factory().make(&cached_config("redis", 0)).await.unwrap();
    assert!(filesystem.has("cat.png").await.unwrap());
    filesystem.metadata("cat.png").await.unwrap();

    filesystem.delete("cat.png").await.unwrap();

    assert!(!filesystem.has("cat.png").await.unwrap());
    assert!(matches!(filesystem.read("cat.png").await, Err(StorageError::NotFound(_))));
    assert!(matches!(filesystem.delete("cat.png").await, Err(StorageError::NotFound(_))));
}

#[tokio::test]
async fn test_broken_store_is_reported_to_observer() {
    let env = common::create_test_environment();
    env.local.write("cat.png", b"meow").await.unwrap();
    let observer = Arc::new(CollectingObserver::default());
    let factory = env.factory().with_observer(observer.clone());
    let filesystem = factory.make(&cached_config("broken", 60)).await.unwrap();

    assert_eq!(filesystem.read("cat.png").await.unwrap(), b"meow".to_vec());
    filesystem.write("dog.png", b"woof").await.unwrap();

    let failures = observer.failures.lock();
    assert!(failures.contains(&(CacheOperation::Read, "media:contents:cat.png".to_string())));
    assert!(failures.contains(&(CacheOperation::Write, "media:contents:cat.png".to_string())));
    assert!(failures.contains(&(CacheOperation::Invalidate, "media:contents:dog.png".to_string())));
    assert_eq!(env.local.read("dog.png").await.unwrap(), b"woof".to_vec());
}

#[tokio::test]
async fn test_listing_bypasses_cache() {
    let env = common::create_test_environment();
    let filesystem = env.factory().make(&cached_config("redis", 0)).await.unwrap();
    filesystem.write("albums/one.png", b"1").await.unwrap();
    filesystem.write("albums/two.png", b"2").await.unwrap();

    let listing = filesystem.list_contents("albums", false).await.unwrap();

    assert_eq!(listing.len(), 2);
    assert!(env.redis.is_empty());
}

#[tokio::test]
async fn test_adapter_as_cache_backend() {
    let env = common::create_test_environment();
    let cache_store = storage_connect::filesystem::structs::memory_filesystem::MemoryFilesystem::new();
    env.adapters.insert("cache-disk", Arc::new(cache_store.clone()));
    let filesystem = env.factory()
        .make(&ConnectionConfig::new()
            .with("driver", "memory")
            .with("cache", ConnectionConfig::new()
                .with("driver", "adapter")
                .with("adapter", "cache-disk")))
        .await
        .unwrap();

    filesystem.write("cat.png", b"meow").await.unwrap();
    assert_eq!(filesystem.read("cat.png").await.unwrap(), b"meow".to_vec());

    assert!(cache_store.has("flysystem:contents:cat.png").await.unwrap());
}
