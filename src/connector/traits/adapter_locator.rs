use std::sync::Arc;
use crate::filesystem::traits::filesystem::Filesystem;

pub trait AdapterLocator: Send + Sync {
    fn adapter(&self, name: &str) -> Option<Arc<dyn Filesystem>>;
}
