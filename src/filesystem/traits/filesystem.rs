use async_trait::async_trait;
use crate::filesystem::errors::StorageError;
use crate::filesystem::structs::file_metadata::FileMetadata;

/// Filesystem-like storage handle.
///
/// Paths are plain strings using `/` as separator. Implementations decide how
/// (and whether) they persist anything; the factory treats them as opaque.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Short name of the implementation, used in logs.
    fn name(&self) -> &str;

    async fn has(&self, path: &str) -> Result<bool, StorageError>;

    /// Reads the full contents of `path`, failing with `NotFound` if absent.
    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    async fn metadata(&self, path: &str) -> Result<FileMetadata, StorageError>;

    /// Lists the files under `directory`. An empty directory lists everything.
    async fn list_contents(&self, directory: &str, recursive: bool) -> Result<Vec<FileMetadata>, StorageError>;

    /// Creates or overwrites `path`.
    async fn write(&self, path: &str, contents: &[u8]) -> Result<(), StorageError>;

    async fn delete(&self, path: &str) -> Result<(), StorageError>;

    async fn rename(&self, from: &str, to: &str) -> Result<(), StorageError>;

    async fn copy(&self, from: &str, to: &str) -> Result<(), StorageError>;
}
