use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::filesystem::traits::filesystem::Filesystem;

#[derive(Default)]
pub struct AdapterPool {
    pub(crate) adapters: RwLock<HashMap<String, Arc<dyn Filesystem>>>,
}
