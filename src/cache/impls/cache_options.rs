use crate::cache::structs::cache_options::CacheOptions;
use crate::config::structs::connection_config::ConnectionConfig;

pub const DEFAULT_CACHE_PREFIX: &str = "flysystem";

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CACHE_PREFIX.to_string(),
            ttl: None,
        }
    }
}

impl CacheOptions {
    /// Reads `key` (prefix) and `ttl` (seconds) from a cache sub-configuration.
    /// A missing or non-positive `ttl` disables expiry.
    pub fn from_config(config: &ConnectionConfig) -> CacheOptions {
        let prefix = match config.get_str("key") {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => DEFAULT_CACHE_PREFIX.to_string(),
        };
        let ttl = config.get_integer("ttl")
            .filter(|ttl| *ttl > 0)
            .map(|ttl| ttl as u64);
        CacheOptions { prefix, ttl }
    }
}
