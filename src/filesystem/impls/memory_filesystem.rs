use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use crate::filesystem::errors::StorageError;
use crate::filesystem::filesystem::{is_listed, normalize_path};
use crate::filesystem::structs::file_metadata::FileMetadata;
use crate::filesystem::structs::memory_filesystem::{MemoryFile, MemoryFilesystem};
use crate::filesystem::traits::filesystem::Filesystem;

impl MemoryFilesystem {
    pub fn new() -> MemoryFilesystem {
        MemoryFilesystem::default()
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }

    fn describe(path: &str, file: &MemoryFile) -> FileMetadata {
        FileMetadata {
            path: path.to_string(),
            size: file.contents.len() as u64,
            last_modified: Some(file.last_modified),
        }
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    fn name(&self) -> &str {
        "memory"
    }

    async fn has(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.files.read().contains_key(&normalize_path(path)))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let key = normalize_path(path);
        self.files.read()
            .get(&key)
            .map(|file| file.contents.clone())
            .ok_or(StorageError::NotFound(key))
    }

    async fn metadata(&self, path: &str) -> Result<FileMetadata, StorageError> {
        let key = normalize_path(path);
        self.files.read()
            .get(&key)
            .map(|file| Self::describe(&key, file))
            .ok_or_else(|| StorageError::NotFound(key.clone()))
    }

    async fn list_contents(&self, directory: &str, recursive: bool) -> Result<Vec<FileMetadata>, StorageError> {
        let files = self.files.read();
        Ok(files.iter()
            .filter(|(path, _)| is_listed(directory, path, recursive))
            .map(|(path, file)| Self::describe(path, file))
            .collect())
    }

    async fn write(&self, path: &str, contents: &[u8]) -> Result<(), StorageError> {
        let key = normalize_path(path);
        debug!("[Memory] Write {} ({} bytes)", key, contents.len());
        self.files.write().insert(key, MemoryFile {
            contents: contents.to_vec(),
            last_modified: Utc::now(),
        });
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let key = normalize_path(path);
        match self.files.write().remove(&key) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(key)),
        }
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), StorageError> {
        let from = normalize_path(from);
        let mut files = self.files.write();
        let mut file = files.remove(&from).ok_or_else(|| StorageError::NotFound(from.clone()))?;
        file.last_modified = Utc::now();
        files.insert(normalize_path(to), file);
        Ok(())
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), StorageError> {
        let from = normalize_path(from);
        let mut files = self.files.write();
        let contents = files.get(&from)
            .map(|file| file.contents.clone())
            .ok_or_else(|| StorageError::NotFound(from.clone()))?;
        files.insert(normalize_path(to), MemoryFile {
            contents,
            last_modified: Utc::now(),
        });
        Ok(())
    }
}
