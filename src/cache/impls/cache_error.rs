use crate::cache::errors::CacheError;
use crate::filesystem::errors::StorageError;

impl From<CacheError> for StorageError {
    fn from(error: CacheError) -> Self {
        match error {
            CacheError::KeyNotFound(key) => StorageError::NotFound(key),
            other => StorageError::Backend(other.to_string()),
        }
    }
}
