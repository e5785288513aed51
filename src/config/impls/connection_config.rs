use std::collections::BTreeMap;
use crate::config::enums::config_value::ConfigValue;
use crate::config::structs::connection_config::ConnectionConfig;

impl ConnectionConfig {
    pub fn new() -> ConnectionConfig {
        ConnectionConfig::default()
    }

    /// Builder-style insert, handy for assembling configurations in code.
    pub fn with(mut self, key: &str, value: impl Into<ConfigValue>) -> ConnectionConfig {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) -> Option<ConfigValue> {
        self.values.insert(key.to_string(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_integer)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    pub fn get_map(&self, key: &str) -> Option<&ConnectionConfig> {
        self.get(key).and_then(ConfigValue::as_map)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, ConfigValue)> for ConnectionConfig {
    fn from_iter<T: IntoIterator<Item = (String, ConfigValue)>>(iter: T) -> Self {
        ConnectionConfig {
            values: iter.into_iter().collect::<BTreeMap<_, _>>(),
        }
    }
}
