use std::collections::BTreeMap;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

#[derive(Debug, Clone)]
pub struct MemoryFile {
    pub(crate) contents: Vec<u8>,
    pub(crate) last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    pub(crate) files: Arc<RwLock<BTreeMap<String, MemoryFile>>>,
}
