use async_trait::async_trait;
use log::trace;
use crate::filesystem::errors::StorageError;
use crate::filesystem::structs::file_metadata::FileMetadata;
use crate::filesystem::structs::null_filesystem::NullFilesystem;
use crate::filesystem::traits::filesystem::Filesystem;

impl NullFilesystem {
    pub fn new() -> NullFilesystem {
        NullFilesystem
    }
}

#[async_trait]
impl Filesystem for NullFilesystem {
    fn name(&self) -> &str {
        "null"
    }

    async fn has(&self, _path: &str) -> Result<bool, StorageError> {
        Ok(false)
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        Err(StorageError::NotFound(path.to_string()))
    }

    async fn metadata(&self, path: &str) -> Result<FileMetadata, StorageError> {
        Err(StorageError::NotFound(path.to_string()))
    }

    async fn list_contents(&self, _directory: &str, _recursive: bool) -> Result<Vec<FileMetadata>, StorageError> {
        Ok(Vec::new())
    }

    async fn write(&self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        trace!("[Null] Discarded {} bytes for {}", contents.len(), path);
        Ok(())
    }

    async fn delete(&self, _path: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn rename(&self, from: &str, _to: &str) -> Result<(), StorageError> {
        Err(StorageError::NotFound(from.to_string()))
    }

    async fn copy(&self, from: &str, _to: &str) -> Result<(), StorageError> {
        Err(StorageError::NotFound(from.to_string()))
    }
}
