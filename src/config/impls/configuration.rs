use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use crate::common::common::parse_log_level;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::connection_config::ConnectionConfig;
use crate::config::structs::sentry_config::SentryConfig;

impl Configuration {
    pub fn init() -> Configuration {
        let mut connections = BTreeMap::new();
        connections.insert(
            String::from("main"),
            ConnectionConfig::new()
                .with("driver", "memory")
                .with("cache", ConnectionConfig::new()
                    .with("driver", "illuminate")
                    .with("connector", "array")
                    .with("key", "flysystem")
                    .with("ttl", 600i64)),
        );
        connections.insert(
            String::from("null"),
            ConnectionConfig::new().with("driver", "null"),
        );
        Configuration {
            log_level: String::from("info"),
            default: String::from("main"),
            connections,
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`. When the file is missing or unreadable and
    /// `create` is set, a default configuration is written there instead and
    /// `Created` is returned so the caller can stop and let the user edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(ConfigurationError::MissingFile(path.to_string()));
                }
                eprintln!("Creating config file..");

                Configuration::save_from_config(&Configuration::init(), path)?;
                eprintln!("Please edit {} and start again, exiting now...", path);
                return Err(ConfigurationError::Created(path.to_string()));
            }
        };

        Self::validate(&config)?;
        Ok(config)
    }

    pub fn validate(config: &Configuration) -> Result<(), ConfigurationError> {
        if parse_log_level(&config.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(
                format!("unknown log level '{}'", config.log_level)
            ));
        }
        if !config.connections.is_empty() && !config.connections.contains_key(&config.default) {
            return Err(ConfigurationError::ValidationError(
                format!("default connection '{}' is not configured", config.default)
            ));
        }
        for (name, connection) in config.connections.iter() {
            match connection.get_str("driver") {
                Some(driver) if !driver.is_empty() => {}
                _ => {
                    return Err(ConfigurationError::ValidationError(
                        format!("connection '{}' has no driver", name)
                    ));
                }
            }
        }
        Ok(())
    }
}
