use std::collections::BTreeMap;
use serde::{
    Deserialize,
    Serialize
};
use crate::config::enums::config_value::ConfigValue;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct ConnectionConfig {
    pub(crate) values: BTreeMap<String, ConfigValue>,
}
