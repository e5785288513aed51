use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::structs::connection_config::ConnectionConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub default: String,
    #[serde(default)]
    pub connections: BTreeMap<String, ConnectionConfig>,
    #[serde(default)]
    pub sentry_config: SentryConfig,
}
