use serde::{
    Deserialize,
    Serialize
};
use crate::config::structs::connection_config::ConnectionConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ConfigValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(ConnectionConfig),
}
