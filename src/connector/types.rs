use std::sync::Arc;
use crate::connector::traits::connector::Connector;

pub type ConnectorConstructor = Arc<dyn Fn() -> Box<dyn Connector> + Send + Sync>;
