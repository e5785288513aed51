use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::ValidationError(message) => write!(f, "invalid configuration: {}", message),
            ConfigurationError::MissingFile(path) => write!(f, "configuration file {} not found", path),
            ConfigurationError::Created(path) => write!(f, "default configuration written to {}", path),
        }
    }
}

impl std::error::Error for ConfigurationError {}
