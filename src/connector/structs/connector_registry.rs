use std::collections::HashMap;
use parking_lot::RwLock;
use crate::connector::types::ConnectorConstructor;

pub struct ConnectorRegistry {
    pub(crate) constructors: RwLock<HashMap<String, ConnectorConstructor>>,
}
