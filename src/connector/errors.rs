use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("The {driver} driver requires the '{key}' configuration key")]
    MissingConfigKey {
        driver: String,
        key: String,
    },

    #[error("Adapter [{0}] could not be found")]
    MissingAdapter(String),

    #[error("Cache driver [{0}] is not available")]
    MissingCacheDriver(String),

    #[error("The '{key}' configuration key of the {driver} driver has an invalid value")]
    InvalidConfigValue {
        driver: String,
        key: String,
    },

    /// The backend behind a connector could not be opened.
    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No connector registered for driver [{0}]")]
    NotFound(String),
}
