use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use async_trait::async_trait;
use chrono::Utc;
use crate::cache::enums::cache_operation::CacheOperation;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::cache_options::CacheOptions;
use crate::cache::structs::cached_filesystem::CachedFilesystem;
use crate::cache::traits::cache_observer::CacheObserver;
use crate::filesystem::errors::StorageError;
use crate::filesystem::filesystem::normalize_path;
use crate::filesystem::structs::file_metadata::FileMetadata;
use crate::filesystem::traits::filesystem::Filesystem;

const CONTENTS: &str = "contents";
const METADATA: &str = "metadata";

impl CachedFilesystem {
    pub fn new(
        primary: Arc<dyn Filesystem>,
        cache: Arc<dyn Filesystem>,
        options: CacheOptions,
        observer: Arc<dyn CacheObserver>,
    ) -> CachedFilesystem {
        CachedFilesystem {
            primary,
            cache,
            options,
            observer,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn primary(&self) -> &Arc<dyn Filesystem> {
        &self.primary
    }

    pub fn cache(&self) -> &Arc<dyn Filesystem> {
        &self.cache
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    pub fn cache_key(&self, kind: &str, path: &str) -> String {
        format!("{}:{}:{}", self.options.prefix, kind, normalize_path(path))
    }

    /// Looks `key` up in the cache backend. Every failure degrades to a miss.
    async fn cached(&self, key: &str) -> Option<Vec<u8>> {
        let raw = match self.cache.read(key).await {
            Ok(raw) => raw,
            Err(StorageError::NotFound(_)) => {
                self.observer.cache_miss(key);
                return None;
            }
            Err(error) => {
                self.observer.cache_failed(CacheOperation::Read, key, &error);
                return None;
            }
        };
        match CacheEntry::decode(&raw) {
            Ok(entry) if !entry.is_expired(Utc::now()) => {
                self.observer.cache_hit(key);
                Some(entry.payload)
            }
            Ok(_) => {
                self.observer.cache_miss(key);
                self.forget(key).await;
                None
            }
            Err(error) => {
                self.observer.cache_failed(CacheOperation::Decode, key, &StorageError::from(error));
                self.forget(key).await;
                None
            }
        }
    }

    /// Stores `payload` unless a mutation completed since `epoch` was read,
    /// in which case the payload may predate it.
    async fn remember(&self, key: &str, payload: Vec<u8>, epoch: u64) {
        if self.epoch.load(Ordering::Acquire) != epoch {
            return;
        }
        let entry = CacheEntry::new(payload, self.options.ttl, Utc::now());
        let result = match entry.encode() {
            Ok(encoded) => self.cache.write(key, &encoded).await,
            Err(error) => Err(StorageError::from(error)),
        };
        if let Err(error) = result {
            self.observer.cache_failed(CacheOperation::Write, key, &error);
        }
    }

    async fn cached_metadata(&self, key: &str) -> Option<FileMetadata> {
        let payload = self.cached(key).await?;
        match serde_json::from_slice::<FileMetadata>(&payload) {
            Ok(metadata) => Some(metadata),
            Err(error) => {
                self.observer.cache_failed(CacheOperation::Decode, key, &StorageError::from(error));
                self.forget(key).await;
                None
            }
        }
    }

    async fn forget(&self, key: &str) {
        match self.cache.delete(key).await {
            Ok(()) | Err(StorageError::NotFound(_)) => {}
            Err(error) => self.observer.cache_failed(CacheOperation::Invalidate, key, &error),
        }
    }

    async fn invalidate(&self, path: &str) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        self.forget(&self.cache_key(CONTENTS, path)).await;
        self.forget(&self.cache_key(METADATA, path)).await;
    }
}

#[async_trait]
impl Filesystem for CachedFilesystem {
    fn name(&self) -> &str {
        "cached"
    }

    async fn has(&self, path: &str) -> Result<bool, StorageError> {
        if self.cached_metadata(&self.cache_key(METADATA, path)).await.is_some() {
            return Ok(true);
        }
        self.primary.has(path).await
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let key = self.cache_key(CONTENTS, path);
        if let Some(contents) = self.cached(&key).await {
            return Ok(contents);
        }
        let epoch = self.epoch.load(Ordering::Acquire);
        let contents = self.primary.read(path).await?;
        self.remember(&key, contents.clone(), epoch).await;
        Ok(contents)
    }

    async fn metadata(&self, path: &str) -> Result<FileMetadata, StorageError> {
        let key = self.cache_key(METADATA, path);
        if let Some(metadata) = self.cached_metadata(&key).await {
            return Ok(metadata);
        }
        let epoch = self.epoch.load(Ordering::Acquire);
        let metadata = self.primary.metadata(path).await?;
        match serde_json::to_vec(&metadata) {
            Ok(payload) => self.remember(&key, payload, epoch).await,
            Err(error) => self.observer.cache_failed(CacheOperation::Write, &key, &StorageError::from(error)),
        }
        Ok(metadata)
    }

    async fn list_contents(&self, directory: &str, recursive: bool) -> Result<Vec<FileMetadata>, StorageError> {
        self.primary.list_contents(directory, recursive).await
    }

    async fn write(&self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        self.primary.write(path, contents).await?;
        self.invalidate(path).await;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        self.primary.delete(path).await?;
        self.invalidate(path).await;
        Ok(())
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), StorageError> {
        self.primary.rename(from, to).await?;
        self.invalidate(from).await;
        self.invalidate(to).await;
        Ok(())
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), StorageError> {
        self.primary.copy(from, to).await?;
        self.invalidate(to).await;
        Ok(())
    }
}
