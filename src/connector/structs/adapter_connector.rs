use std::sync::Arc;
use crate::connector::traits::adapter_locator::AdapterLocator;

#[derive(Clone)]
pub struct AdapterConnector {
    pub(crate) adapters: Arc<dyn AdapterLocator>,
}
