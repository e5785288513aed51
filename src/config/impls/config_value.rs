use crate::config::enums::config_value::ConfigValue;
use crate::config::structs::connection_config::ConnectionConfig;

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ConnectionConfig> {
        match self {
            ConfigValue::Map(value) => Some(value),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::List(_) => "list",
            ConfigValue::Map(_) => "map",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<ConnectionConfig> for ConfigValue {
    fn from(value: ConnectionConfig) -> Self {
        ConfigValue::Map(value)
    }
}
