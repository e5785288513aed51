use std::sync::Arc;
use crate::cache::traits::cache_repository::CacheRepository;

#[derive(Clone)]
pub struct CacheRepositoryFilesystem {
    pub(crate) repository: Arc<dyn CacheRepository>,
    pub(crate) store: String,
    pub(crate) ttl: Option<u64>,
}
