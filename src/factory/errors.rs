use thiserror::Error;
use crate::connector::errors::ConnectorError;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("A driver must be specified")]
    EmptyDriver,

    #[error("Unsupported driver [{0}]")]
    UnsupportedDriver(String),

    #[error("The cache configuration must be a table, found {0}")]
    InvalidCacheConfig(String),

    #[error(transparent)]
    Connector(#[from] ConnectorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_driver_display() {
        assert_eq!(format!("{}", FactoryError::EmptyDriver), "A driver must be specified");
    }

    #[test]
    fn test_unsupported_driver_display() {
        let error = FactoryError::UnsupportedDriver("unsupported".to_string());
        assert_eq!(format!("{}", error), "Unsupported driver [unsupported]");
    }

    #[test]
    fn test_connector_error_is_transparent() {
        let error: FactoryError = ConnectorError::MissingAdapter("local".to_string()).into();
        assert_eq!(format!("{}", error), "Adapter [local] could not be found");
    }
}
