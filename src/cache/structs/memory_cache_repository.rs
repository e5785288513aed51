use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

#[derive(Debug, Clone, Default)]
pub struct MemoryCacheRepository {
    pub(crate) items: Arc<RwLock<HashMap<String, (Vec<u8>, Option<DateTime<Utc>>)>>>,
}
