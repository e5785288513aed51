use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::cache::traits::cache_repository::CacheRepository;

pub struct CacheService {
    pub(crate) default: String,
    pub(crate) stores: RwLock<HashMap<String, Arc<dyn CacheRepository>>>,
}
