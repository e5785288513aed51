use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use crate::cache::structs::cache_options::CacheOptions;
use crate::cache::traits::cache_observer::CacheObserver;
use crate::filesystem::traits::filesystem::Filesystem;

#[derive(Clone)]
pub struct CachedFilesystem {
    pub(crate) primary: Arc<dyn Filesystem>,
    pub(crate) cache: Arc<dyn Filesystem>,
    pub(crate) options: CacheOptions,
    pub(crate) observer: Arc<dyn CacheObserver>,
    /// Bumped by every successful mutation.
    pub(crate) epoch: Arc<AtomicU64>,
}
