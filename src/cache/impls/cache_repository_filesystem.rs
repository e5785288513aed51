use std::sync::Arc;
use async_trait::async_trait;
use crate::cache::structs::cache_repository_filesystem::CacheRepositoryFilesystem;
use crate::cache::traits::cache_repository::CacheRepository;
use crate::filesystem::errors::StorageError;
use crate::filesystem::structs::file_metadata::FileMetadata;
use crate::filesystem::traits::filesystem::Filesystem;

impl CacheRepositoryFilesystem {
    pub fn new(repository: Arc<dyn CacheRepository>, store: &str, ttl: Option<u64>) -> CacheRepositoryFilesystem {
        CacheRepositoryFilesystem {
            repository,
            store: store.to_string(),
            ttl,
        }
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.repository.get(path).await?
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }
}

/// Key/value stores have no directories, so listings are always empty and
/// metadata carries no modification time.
#[async_trait]
impl Filesystem for CacheRepositoryFilesystem {
    fn name(&self) -> &str {
        "illuminate"
    }

    async fn has(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.repository.get(path).await?.is_some())
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.fetch(path).await
    }

    async fn metadata(&self, path: &str) -> Result<FileMetadata, StorageError> {
        let value = self.fetch(path).await?;
        Ok(FileMetadata {
            path: path.to_string(),
            size: value.len() as u64,
            last_modified: None,
        })
    }

    async fn list_contents(&self, _directory: &str, _recursive: bool) -> Result<Vec<FileMetadata>, StorageError> {
        Ok(Vec::new())
    }

    async fn write(&self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        self.repository.put(path, contents, self.ttl).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        match self.repository.forget(path).await? {
            true => Ok(()),
            false => Err(StorageError::NotFound(path.to_string())),
        }
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), StorageError> {
        let value = self.fetch(from).await?;
        self.repository.put(to, &value, self.ttl).await?;
        self.repository.forget(from).await?;
        Ok(())
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), StorageError> {
        let value = self.fetch(from).await?;
        self.repository.put(to, &value, self.ttl).await?;
        Ok(())
    }
}
