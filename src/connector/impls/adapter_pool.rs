use std::sync::Arc;
use crate::connector::structs::adapter_pool::AdapterPool;
use crate::connector::traits::adapter_locator::AdapterLocator;
use crate::filesystem::traits::filesystem::Filesystem;

impl AdapterPool {
    pub fn new() -> AdapterPool {
        AdapterPool::default()
    }

    pub fn insert(&self, name: &str, adapter: Arc<dyn Filesystem>) -> Option<Arc<dyn Filesystem>> {
        self.adapters.write().insert(name.to_string(), adapter)
    }

    pub fn remove(&self, name: &str) -> Option<Arc<dyn Filesystem>> {
        self.adapters.write().remove(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.adapters.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl AdapterLocator for AdapterPool {
    fn adapter(&self, name: &str) -> Option<Arc<dyn Filesystem>> {
        self.adapters.read().get(name).cloned()
    }
}
