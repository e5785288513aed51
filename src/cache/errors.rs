use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),
}
